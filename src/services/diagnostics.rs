//! 诊断信息服务 - 业务能力层
//!
//! 所有"尽力而为、不打断操作"的失败都写到这里，由注入的实现决定去向

use crate::error::AppError;
use crate::models::OperationKind;
use parking_lot::Mutex;
use tracing::{error, warn};

/// 诊断类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// 页面上找不到指示器
    MissingIndicator,
    /// 请求失败或响应无法解析
    RequestFailed,
    /// 响应晚于更新的请求到达，已丢弃
    StaleResponse,
}

/// 一条诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub operation: Option<OperationKind>,
    pub message: String,
}

impl Diagnostic {
    pub fn missing_indicator(id: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingIndicator,
            operation: None,
            message: format!("找不到 id 为 '{}' 的加载指示器", id),
        }
    }

    pub fn request_failed(operation: OperationKind, err: &AppError) -> Self {
        Self {
            kind: DiagnosticKind::RequestFailed,
            operation: Some(operation),
            message: err.to_string(),
        }
    }

    pub fn stale_response(operation: OperationKind, sequence: u64, latest: u64) -> Self {
        Self {
            kind: DiagnosticKind::StaleResponse,
            operation: Some(operation),
            message: format!("请求 #{} 的响应已过期（已应用 #{}），丢弃", sequence, latest),
        }
    }
}

/// 诊断信息去向
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// 写入 tracing 日志
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        let operation = diagnostic.operation.map(|op| op.as_str()).unwrap_or("-");
        match diagnostic.kind {
            DiagnosticKind::RequestFailed => {
                error!("[{}] ❌ {}", operation, diagnostic.message)
            }
            DiagnosticKind::MissingIndicator | DiagnosticKind::StaleResponse => {
                warn!("[{}] ⚠️ {}", operation, diagnostic.message)
            }
        }
    }
}

/// 保存在内存中，供测试和界面读取
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.lock().iter().filter(|d| d.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }
}
