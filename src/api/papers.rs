//! 论文后端 API 模块
//!
//! 负责五个端点的请求体编码与响应体解码，网络交互委托给 `Transport`

use crate::clients::Transport;
use crate::error::{AppError, AppResult};
use crate::models::{
    AskRequest, AskResponse, DownloadRequest, DownloadResponse, FileListRequest, ProcessRequest,
    ProcessResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub const DOWNLOAD_PAPERS: &str = "/download_papers";
pub const GET_PDF_DIRS: &str = "/get_pdf_dirs";
pub const GET_PDF_FILES: &str = "/get_pdf_files";
pub const PROCESS_PDF: &str = "/process_pdf";
pub const ASK_QUESTION: &str = "/ask_question";

/// 触发后端下载论文
pub async fn download_papers(
    transport: &dyn Transport,
    request: &DownloadRequest,
) -> AppResult<DownloadResponse> {
    post(transport, DOWNLOAD_PAPERS, request).await
}

/// 获取已下载的目录列表（按后端返回顺序）
pub async fn get_pdf_dirs(transport: &dyn Transport) -> AppResult<Vec<String>> {
    let value = transport.get_json(GET_PDF_DIRS).await?;
    decode(GET_PDF_DIRS, value)
}

/// 获取目录下的 PDF 文件列表（按后端返回顺序）
pub async fn get_pdf_files(
    transport: &dyn Transport,
    request: &FileListRequest,
) -> AppResult<Vec<String>> {
    post(transport, GET_PDF_FILES, request).await
}

/// 让后端提取并摘要 PDF
pub async fn process_pdf(
    transport: &dyn Transport,
    request: &ProcessRequest,
) -> AppResult<ProcessResponse> {
    post(transport, PROCESS_PDF, request).await
}

/// 基于摘要和正文提问
pub async fn ask_question(
    transport: &dyn Transport,
    request: &AskRequest,
) -> AppResult<AskResponse> {
    post(transport, ASK_QUESTION, request).await
}

async fn post<B: Serialize, T: DeserializeOwned>(
    transport: &dyn Transport,
    endpoint: &str,
    body: &B,
) -> AppResult<T> {
    let body = serde_json::to_value(body).map_err(|e| AppError::json_parse_failed(endpoint, e))?;
    let value = transport.post_json(endpoint, body).await?;
    decode(endpoint, value)
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| {
        debug!("{} 响应结构不符: {}", endpoint, e);
        AppError::json_parse_failed(endpoint, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    /// 固定返回同一个值，并记录收到的请求
    struct FixedTransport {
        reply: Value,
        seen: Mutex<Vec<(String, Option<Value>)>>,
    }

    impl FixedTransport {
        fn new(reply: Value) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn get_json(&self, endpoint: &str) -> AppResult<Value> {
            self.seen.lock().push((endpoint.to_string(), None));
            Ok(self.reply.clone())
        }

        async fn post_json(&self, endpoint: &str, body: Value) -> AppResult<Value> {
            self.seen.lock().push((endpoint.to_string(), Some(body)));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_get_pdf_dirs_uses_get_without_body() {
        let transport = FixedTransport::new(json!(["2024-01-02", "2024-01-01"]));

        let dirs = get_pdf_dirs(&transport).await.unwrap();

        assert_eq!(dirs, vec!["2024-01-02", "2024-01-01"]);
        assert_eq!(*transport.seen.lock(), vec![(GET_PDF_DIRS.to_string(), None)]);
    }

    #[tokio::test]
    async fn test_get_pdf_files_posts_selected_dir() {
        let transport = FixedTransport::new(json!(["paper1.pdf"]));

        let files = get_pdf_files(&transport, &FileListRequest::new("2024-01-01"))
            .await
            .unwrap();

        assert_eq!(files, vec!["paper1.pdf"]);
        let seen = transport.seen.lock();
        assert_eq!(seen[0].0, GET_PDF_FILES);
        assert_eq!(seen[0].1, Some(json!({"selectedDir": "2024-01-01"})));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let transport = FixedTransport::new(json!({"unexpected": true}));

        let err = get_pdf_dirs(&transport).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Api(crate::error::ApiError::JsonParseFailed { .. })
        ));
        assert_eq!(err.endpoint(), Some(GET_PDF_DIRS));
    }

    #[tokio::test]
    async fn test_download_papers_round_trip() {
        let transport = FixedTransport::new(json!({"status": "success", "downloadDir": "d/2024-01-01"}));

        let resp = download_papers(&transport, &DownloadRequest::new(None, 2))
            .await
            .unwrap();

        assert_eq!(resp.download_dir, "d/2024-01-01");
        let seen = transport.seen.lock();
        assert_eq!(seen[0].1, Some(json!({"date": null, "paperLimit": 2})));
    }
}
