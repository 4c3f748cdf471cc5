//! 操作类型与操作结果

use std::fmt;

/// 向后端发起请求的操作种类
///
/// 每种操作各自维护一个请求序号，互不影响
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// 下载论文
    Download,
    /// 获取目录列表
    Directories,
    /// 获取目录下的文件列表
    Files,
    /// 处理（提取 + 摘要）PDF
    Process,
    /// 基于摘要和正文提问
    Ask,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Download => "download",
            OperationKind::Directories => "directories",
            OperationKind::Files => "files",
            OperationKind::Process => "process",
            OperationKind::Ask => "ask",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次操作的最终状态
///
/// `idle → validating → (aborted | busy) → (succeeded | rejected | failed | stale) → idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    /// 缺少必要输入，未发出请求
    Aborted,
    /// 响应已应用到界面/会话
    Succeeded,
    /// 后端明确返回失败状态，已显示其消息
    Rejected,
    /// 网络或解析失败，界面保持不变
    Failed,
    /// 更新的请求已先完成，本次响应被丢弃
    Stale,
}

impl OperationOutcome {
    /// 是否发出过请求
    pub fn was_issued(&self) -> bool {
        !matches!(self, OperationOutcome::Aborted)
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OperationOutcome::Aborted => "已跳过",
            OperationOutcome::Succeeded => "成功",
            OperationOutcome::Rejected => "后端拒绝",
            OperationOutcome::Failed => "失败",
            OperationOutcome::Stale => "已过期",
        };
        f.write_str(text)
    }
}
