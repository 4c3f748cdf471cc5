/// 后端 HTTP 客户端
///
/// 基于 reqwest 实现 `Transport`
use crate::clients::transport::Transport;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// 后端 HTTP 客户端
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// 创建新的后端客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| AppError::api_request_failed(config.backend_base_url.as_str(), e))?;

        Ok(Self {
            http,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 读取响应体并解析为 JSON
    ///
    /// 不检查 HTTP 状态码：只要响应体是合法 JSON 就交给上层处理
    async fn read_json(endpoint: &str, response: reqwest::Response) -> AppResult<Value> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        debug!("{} 响应: HTTP {}, {} 字节", endpoint, status, bytes.len());

        serde_json::from_slice(&bytes).map_err(|e| AppError::json_parse_failed(endpoint, e))
    }
}

#[async_trait]
impl Transport for BackendClient {
    async fn get_json(&self, endpoint: &str) -> AppResult<Value> {
        debug!("GET {}", endpoint);

        let response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        Self::read_json(endpoint, response).await
    }

    async fn post_json(&self, endpoint: &str, body: Value) -> AppResult<Value> {
        debug!("POST {} Payload: {}", endpoint, body);

        let response = self
            .http
            .post(self.url(endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        Self::read_json(endpoint, response).await
    }
}
