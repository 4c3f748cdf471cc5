pub mod busy_indicator;
pub mod catalog_loader;
pub mod diagnostics;
pub mod sequencer;
pub mod session_store;

pub use busy_indicator::{BusyGuard, BusyIndicators};
pub use catalog_loader::CatalogLoader;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, MemorySink, TracingSink};
pub use sequencer::{RequestSequencer, Ticket};
pub use session_store::{SessionSnapshot, SessionStore};
