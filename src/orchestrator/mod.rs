//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层把用户操作翻译成对后端的请求，并把响应落到页面和会话上，
//! 是整个客户端的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! ui::console (读取命令，派发操作)
//!     ↓
//! orchestrator::Orchestrator (校验 → 指示器 → 请求 → 应用 → 指示器)
//!     ↓
//! services (能力层：catalog / session / busy / diagnostics / sequencer)
//!     ↓
//! api (端点编解码) → clients::Transport (HTTP)
//! ```
//!
//! ## 设计原则
//!
//! 1. **会话独占**：只有编排器持有 `SessionStore`，只有处理成功时写入
//! 2. **失败不外抛**：所有失败转成诊断信息，操作只返回 `OperationOutcome`
//! 3. **过期丢弃**：同类操作按序号丢弃晚到的旧响应

pub mod request_orchestrator;

// 重新导出主要类型
pub use request_orchestrator::Orchestrator;
