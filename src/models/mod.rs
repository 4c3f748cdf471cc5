pub mod operation;
pub mod request;
pub mod response;

pub use operation::{OperationKind, OperationOutcome};
pub use request::{parse_paper_limit, AskRequest, DownloadRequest, FileListRequest, ProcessRequest};
pub use response::{AskResponse, DownloadResponse, ProcessResponse, STATUS_SUCCESS};
