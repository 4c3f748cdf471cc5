//! 请求体
//!
//! 每次调用时根据当前界面/会话的值新建，构造后不可修改

use serde::Serialize;

/// `/download_papers` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    date: Option<String>,
    paper_limit: u32,
}

impl DownloadRequest {
    pub fn new(date: Option<String>, paper_limit: u32) -> Self {
        Self { date, paper_limit }
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn paper_limit(&self) -> u32 {
        self.paper_limit
    }
}

/// `/get_pdf_files` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListRequest {
    selected_dir: String,
}

impl FileListRequest {
    pub fn new(selected_dir: impl Into<String>) -> Self {
        Self {
            selected_dir: selected_dir.into(),
        }
    }

    pub fn selected_dir(&self) -> &str {
        &self.selected_dir
    }
}

/// `/process_pdf` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    selected_dir: String,
    selected_file: String,
}

impl ProcessRequest {
    pub fn new(selected_dir: impl Into<String>, selected_file: impl Into<String>) -> Self {
        Self {
            selected_dir: selected_dir.into(),
            selected_file: selected_file.into(),
        }
    }

    pub fn selected_dir(&self) -> &str {
        &self.selected_dir
    }

    pub fn selected_file(&self) -> &str {
        &self.selected_file
    }
}

/// `/ask_question` 请求体
///
/// `summary` / `content` 是发起提问那一刻的会话快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    question: String,
    summary: String,
    content: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, summary: String, content: String) -> Self {
        Self {
            question: question.into(),
            summary,
            content,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

/// 解析下载数量输入
///
/// 取开头的数字部分（`"12篇"` → 12）；为空、无法解析或为负数时返回 0
pub fn parse_paper_limit(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
