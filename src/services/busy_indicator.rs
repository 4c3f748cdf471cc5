//! 忙碌指示器服务 - 业务能力层
//!
//! 只负责"显示/隐藏某个指示器"，不做互斥：同一指示器以最后一次调用为准

use crate::services::diagnostics::{Diagnostic, DiagnosticSink};
use crate::ui::Page;
use std::sync::Arc;

pub struct BusyIndicators {
    page: Arc<Page>,
    sink: Arc<dyn DiagnosticSink>,
}

impl BusyIndicators {
    pub fn new(page: Arc<Page>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { page, sink }
    }

    pub fn show(&self, id: &str) {
        self.toggle(id, true);
    }

    pub fn hide(&self, id: &str) {
        self.toggle(id, false);
    }

    /// 显示指示器，并返回一个在离开作用域时隐藏它的守卫
    ///
    /// 成功、失败、提前返回或 future 被丢弃，都会执行隐藏
    pub fn acquire<'a>(&'a self, id: &'a str) -> BusyGuard<'a> {
        self.show(id);
        BusyGuard {
            indicators: self,
            id,
        }
    }

    fn toggle(&self, id: &str, visible: bool) {
        if !self.page.set_indicator(id, visible) {
            self.sink.record(Diagnostic::missing_indicator(id));
        }
    }
}

pub struct BusyGuard<'a> {
    indicators: &'a BusyIndicators,
    id: &'a str,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.indicators.hide(self.id);
    }
}
