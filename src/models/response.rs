//! 响应体
//!
//! 只做字段存在性检查，缺字段按解析失败处理

use serde::Deserialize;

/// `/process_pdf` 成功时的状态值
pub const STATUS_SUCCESS: &str = "success";

/// `/download_papers` 响应
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub download_dir: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// `/ask_question` 响应
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// `/process_pdf` 响应
///
/// 后端用 `status` 字段区分两种形状：
/// - `{"status": "success", "summary": ..., "content": ...}`
/// - `{"status": <其他>, "message": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawProcessResponse")]
pub enum ProcessResponse {
    Success { summary: String, content: String },
    Rejected { status: Option<String>, message: String },
}

#[derive(Deserialize)]
struct RawProcessResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<RawProcessResponse> for ProcessResponse {
    type Error = String;

    fn try_from(raw: RawProcessResponse) -> Result<Self, Self::Error> {
        if raw.status.as_deref() == Some(STATUS_SUCCESS) {
            let summary = raw.summary.ok_or("成功响应缺少 summary 字段")?;
            let content = raw.content.ok_or("成功响应缺少 content 字段")?;
            Ok(ProcessResponse::Success { summary, content })
        } else {
            let message = raw.message.ok_or("失败响应缺少 message 字段")?;
            Ok(ProcessResponse::Rejected {
                status: raw.status,
                message,
            })
        }
    }
}
