//! 传输层抽象
//!
//! 编排层只通过该 trait 访问后端，测试中可替换为脚本化的实现

use crate::error::AppResult;
use async_trait::async_trait;
use serde_json::Value;

/// 与后端交换 JSON 的能力
///
/// 实现者只负责"发出请求、拿回 JSON"，不认识具体业务字段
#[async_trait]
pub trait Transport: Send + Sync {
    /// 无参数的 GET 请求
    async fn get_json(&self, endpoint: &str) -> AppResult<Value>;

    /// 带 JSON 请求体的 POST 请求
    async fn post_json(&self, endpoint: &str, body: Value) -> AppResult<Value>;
}
