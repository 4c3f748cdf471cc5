//! 会话状态
//!
//! 保存最近一次成功处理得到的摘要和正文，只能通过 `get` / `set` 访问

use parking_lot::RwLock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub summary: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<SessionSnapshot>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> SessionSnapshot {
        self.state.read().clone()
    }

    pub fn set(&self, summary: impl Into<String>, content: impl Into<String>) {
        *self.state.write() = SessionSnapshot {
            summary: summary.into(),
            content: content.into(),
        };
    }

    pub fn has_content(&self) -> bool {
        !self.state.read().content.is_empty()
    }
}
