//! # Research Reader
//!
//! 论文阅读助手的客户端控制器：触发后端下载论文、选择已下载的 PDF、
//! 让后端提取并摘要，然后基于摘要和正文继续提问。
//!
//! ## 架构设计
//!
//! ### ① 传输层（Clients）
//! - `clients/` - `Transport` trait 与基于 reqwest 的 `BackendClient`
//!
//! ### ② 接口层（API）
//! - `api/` - 五个端点的请求编码与响应解码
//!
//! ### ③ 业务能力层（Services）
//! - `CatalogLoader` - 目录/文件列表加载
//! - `SessionStore` - 摘要与正文的会话状态
//! - `BusyIndicators` - 忙碌指示器
//! - `DiagnosticSink` - 诊断信息去向
//! - `RequestSequencer` - 丢弃过期响应
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 下载、刷新目录、处理、提问四个操作
//!
//! ### ⑤ 界面层（UI）
//! - `ui/page` - 页面视图模型
//! - `ui/console` - 控制台命令与渲染
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::{BackendClient, Transport};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{OperationKind, OperationOutcome};
pub use orchestrator::Orchestrator;
pub use services::{DiagnosticSink, MemorySink, SessionStore, TracingSink};
pub use ui::Page;
