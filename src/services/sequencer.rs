//! 请求序号
//!
//! 同一种操作的请求按发出顺序编号；响应到达时，如果已经应用过更大的序号，
//! 这个响应就是过期的，应当丢弃。

use std::sync::atomic::{AtomicU64, Ordering};

/// 一次请求的序号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为新请求分配序号（从 1 开始递增）
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 尝试应用某个请求的响应
    ///
    /// 返回 false 表示已有更新的响应被应用，本次应丢弃
    pub fn try_apply(&self, ticket: Ticket) -> bool {
        let previous = self.applied.fetch_max(ticket.0, Ordering::SeqCst);
        ticket.0 >= previous
    }

    /// 已应用的最大序号（0 表示尚未应用）
    pub fn latest_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}
