//! 集成测试公共工具：脚本化的后端

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use research_reader::error::{AppError, AppResult};
use research_reader::services::MemorySink;
use research_reader::{Orchestrator, Page, Transport};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::oneshot;

/// 某次调用要返回的内容
pub enum Scripted {
    /// 立即返回该 JSON
    Reply(Value),
    /// 网络失败
    Fail(&'static str),
    /// 响应体不是 JSON
    NotJson,
    /// 等待测试手动放行
    Gated(oneshot::Receiver<Value>),
}

/// 记录下来的一次调用
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub endpoint: String,
    pub body: Option<Value>,
    /// 发出请求那一刻各指示器的可见性
    pub indicators: BTreeMap<String, bool>,
}

/// 按端点排队返回脚本化响应的后端
#[derive(Default)]
pub struct MockTransport {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<RecordedCall>>,
    probe: Mutex<Option<Arc<Page>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, endpoint: &str, scripted: Scripted) {
        self.scripts
            .lock()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(scripted);
    }

    pub fn reply(&self, endpoint: &str, value: Value) {
        self.push(endpoint, Scripted::Reply(value));
    }

    /// 放入一个需要手动放行的响应，返回放行用的发送端
    pub fn gate(&self, endpoint: &str) -> oneshot::Sender<Value> {
        let (tx, rx) = oneshot::channel();
        self.push(endpoint, Scripted::Gated(rx));
        tx
    }

    /// 在每次调用时记录该页面上指示器的状态
    pub fn observe(&self, page: Arc<Page>) {
        *self.probe.lock() = Some(page);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.endpoint == endpoint)
            .cloned()
            .collect()
    }

    fn record(&self, method: &'static str, endpoint: &str, body: Option<Value>) -> Option<Scripted> {
        let indicators = self
            .probe
            .lock()
            .as_ref()
            .map(|page| page.snapshot().indicators)
            .unwrap_or_default();
        self.calls.lock().push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            body,
            indicators,
        });
        self.scripts
            .lock()
            .get_mut(endpoint)
            .and_then(|queue| queue.pop_front())
    }

    async fn resolve(endpoint: &str, scripted: Option<Scripted>) -> AppResult<Value> {
        match scripted {
            Some(Scripted::Reply(value)) => Ok(value),
            Some(Scripted::Fail(message)) => Err(AppError::api_request_failed(
                endpoint,
                std::io::Error::new(std::io::ErrorKind::ConnectionReset, message),
            )),
            Some(Scripted::NotJson) => {
                let source = serde_json::from_str::<Value>("<html>Internal Server Error</html>")
                    .expect_err("html is not json");
                Err(AppError::json_parse_failed(endpoint, source))
            }
            Some(Scripted::Gated(rx)) => rx.await.map_err(|_| {
                AppError::api_request_failed(
                    endpoint,
                    std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gate dropped"),
                )
            }),
            None => Err(AppError::Other(format!("no scripted response for {}", endpoint))),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, endpoint: &str) -> AppResult<Value> {
        let scripted = self.record("GET", endpoint, None);
        Self::resolve(endpoint, scripted).await
    }

    async fn post_json(&self, endpoint: &str, body: Value) -> AppResult<Value> {
        let scripted = self.record("POST", endpoint, Some(body));
        Self::resolve(endpoint, scripted).await
    }
}

/// 测试夹具
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub page: Arc<Page>,
    pub sink: Arc<MemorySink>,
    pub orchestrator: Orchestrator,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_page(Page::standard())
    }

    pub fn with_page(page: Page) -> Self {
        let _ = tracing_subscriber::fmt::try_init();

        let transport = MockTransport::new();
        let page = Arc::new(page);
        let sink = Arc::new(MemorySink::new());
        transport.observe(page.clone());

        let orchestrator = Orchestrator::new(transport.clone(), page.clone(), sink.clone());
        Self {
            transport,
            page,
            sink,
            orchestrator,
        }
    }

    /// 直接把目录和文件选项放到页面上（不经过后端）
    pub fn seed_catalog(&self, directories: &[&str], files: &[&str]) {
        self.page
            .replace_directories(directories.iter().map(|d| d.to_string()).collect());
        self.page
            .replace_files(files.iter().map(|f| f.to_string()).collect());
    }
}
