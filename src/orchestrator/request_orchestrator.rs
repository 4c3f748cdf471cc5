//! 请求编排器 - 编排层
//!
//! ## 职责
//!
//! 对外提供四个用户可触发的操作：下载、刷新目录、处理 PDF、提问。
//! 每个操作都遵循同一流程：
//!
//! 1. **校验输入**：缺少必要输入时静默返回，不发请求、不动指示器
//! 2. **显示指示器**
//! 3. **发出请求**：每个操作恰好一个请求
//! 4. **应用响应**：只在成功（且未过期）时修改界面/会话
//! 5. **隐藏指示器**：由守卫保证，任何退出路径都会执行
//!
//! 失败只记录诊断，从不向调用方返回错误。

use crate::api;
use crate::clients::Transport;
use crate::error::AppError;
use crate::models::{
    parse_paper_limit, AskRequest, DownloadRequest, OperationKind, OperationOutcome,
    ProcessRequest, ProcessResponse,
};
use crate::services::{
    BusyIndicators, CatalogLoader, Diagnostic, DiagnosticSink, RequestSequencer, SessionStore,
    Ticket,
};
use crate::ui::page::{ASK_LOADING, DOWNLOAD_LOADING, PROCESS_LOADING};
use crate::ui::Page;
use crate::utils::logging::truncate_text;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 请求编排器
///
/// 独占会话状态；页面和诊断去向由外部注入
pub struct Orchestrator {
    transport: Arc<dyn Transport>,
    page: Arc<Page>,
    sink: Arc<dyn DiagnosticSink>,
    indicators: BusyIndicators,
    catalog: CatalogLoader,
    session: SessionStore,
    download_seq: RequestSequencer,
    process_seq: RequestSequencer,
    ask_seq: RequestSequencer,
}

impl Orchestrator {
    pub fn new(
        transport: Arc<dyn Transport>,
        page: Arc<Page>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            indicators: BusyIndicators::new(page.clone(), sink.clone()),
            catalog: CatalogLoader::new(transport.clone(), page.clone(), sink.clone()),
            session: SessionStore::new(),
            transport,
            page,
            sink,
            download_seq: RequestSequencer::new(),
            process_seq: RequestSequencer::new(),
            ask_seq: RequestSequencer::new(),
        }
    }

    pub fn page(&self) -> &Arc<Page> {
        &self.page
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// 初始加载：拉取目录列表，再拉取第一个目录的文件列表
    pub async fn start(&self) -> OperationOutcome {
        info!("📁 正在加载论文目录...");
        self.catalog.load_directories().await
    }

    /// 下载论文
    ///
    /// 日期可以为空；数量无法解析时按 0 处理。成功后刷新整个目录列表。
    pub async fn download(&self) -> OperationOutcome {
        let request = DownloadRequest::new(
            self.page.target_date(),
            parse_paper_limit(self.page.paper_limit().as_deref()),
        );
        info!(
            "📥 正在下载论文 (日期: {}, 数量: {})",
            request.date().unwrap_or("-"),
            request.paper_limit()
        );

        let ticket = self.download_seq.issue();
        let outcome = {
            let _busy = self.indicators.acquire(DOWNLOAD_LOADING);
            match api::download_papers(self.transport.as_ref(), &request).await {
                Ok(response) if !self.download_seq.try_apply(ticket) => {
                    info!("✓ 论文已下载到 {}（响应已过期）", response.download_dir);
                    self.discard(OperationKind::Download, &self.download_seq, ticket)
                }
                Ok(response) => {
                    info!(
                        "✓ 论文已下载到 {} (status: {})",
                        response.download_dir,
                        response.status.as_deref().unwrap_or("-")
                    );
                    self.page
                        .set_download_status(format!("Papers downloaded to {}", response.download_dir));
                    OperationOutcome::Succeeded
                }
                Err(e) => self.fail(OperationKind::Download, &e),
            }
        };

        // 过期的下载同样在后端落盘，目录列表照常刷新
        if matches!(outcome, OperationOutcome::Succeeded | OperationOutcome::Stale) {
            self.catalog.load_directories().await;
        }
        outcome
    }

    /// 目录选择变化后刷新文件列表（无指示器）
    pub async fn refresh_catalog(&self) -> OperationOutcome {
        self.catalog.load_files().await
    }

    /// 切换选中目录并刷新文件列表
    ///
    /// 目录不在选项中时不做任何事
    pub async fn change_directory(&self, directory: &str) -> OperationOutcome {
        if !self.page.select_directory(directory) {
            debug!("目录 {} 不在选项中，忽略", directory);
            return OperationOutcome::Aborted;
        }
        self.refresh_catalog().await
    }

    /// 处理选中的 PDF
    ///
    /// 只有 `status == "success"` 的响应会写入会话；其他状态只显示消息
    pub async fn process(&self) -> OperationOutcome {
        let (Some(directory), Some(file)) = (
            non_empty(self.page.selected_directory()),
            non_empty(self.page.selected_file()),
        ) else {
            debug!("未选择目录或文件，跳过处理");
            return OperationOutcome::Aborted;
        };

        info!("🔍 正在处理 {}/{}", directory, file);
        let request = ProcessRequest::new(directory, file);

        let ticket = self.process_seq.issue();
        let _busy = self.indicators.acquire(PROCESS_LOADING);

        let response = match api::process_pdf(self.transport.as_ref(), &request).await {
            Ok(response) => response,
            Err(e) => return self.fail(OperationKind::Process, &e),
        };

        if !self.process_seq.try_apply(ticket) {
            return self.discard(OperationKind::Process, &self.process_seq, ticket);
        }

        match response {
            ProcessResponse::Success { summary, content } => {
                info!(
                    "✓ 摘要生成成功 ({} 字): {}",
                    summary.chars().count(),
                    truncate_text(&summary, 60)
                );
                self.page.set_summary(summary.clone());
                self.session.set(summary, content);
                OperationOutcome::Succeeded
            }
            ProcessResponse::Rejected { status, message } => {
                warn!(
                    "⚠️ 后端未能处理 {} (status: {}): {}",
                    request.selected_file(),
                    status.as_deref().unwrap_or("-"),
                    message
                );
                self.page.set_summary(message);
                OperationOutcome::Rejected
            }
        }
    }

    /// 提问
    ///
    /// 使用调用时刻的会话快照；不修改会话
    pub async fn ask(&self) -> OperationOutcome {
        let question = self.page.question();
        if question.is_empty() {
            debug!("问题为空，跳过提问");
            return OperationOutcome::Aborted;
        }

        let snapshot = self.session.get();
        if snapshot.content.is_empty() {
            debug!("尚未成功处理任何 PDF，提问将不带正文");
        }
        info!("💬 正在提问: {}", truncate_text(&question, 60));
        let request = AskRequest::new(question, snapshot.summary, snapshot.content);

        let ticket = self.ask_seq.issue();
        let _busy = self.indicators.acquire(ASK_LOADING);

        let response = match api::ask_question(self.transport.as_ref(), &request).await {
            Ok(response) => response,
            Err(e) => return self.fail(OperationKind::Ask, &e),
        };

        if !self.ask_seq.try_apply(ticket) {
            return self.discard(OperationKind::Ask, &self.ask_seq, ticket);
        }

        info!("✓ 已收到回答 ({} 字)", response.answer.chars().count());
        self.page.set_answer(response.answer);
        OperationOutcome::Succeeded
    }

    // ========== 失败处理 ==========

    fn fail(&self, operation: OperationKind, err: &AppError) -> OperationOutcome {
        self.sink.record(Diagnostic::request_failed(operation, err));
        OperationOutcome::Failed
    }

    fn discard(
        &self,
        operation: OperationKind,
        sequencer: &RequestSequencer,
        ticket: Ticket,
    ) -> OperationOutcome {
        self.sink.record(Diagnostic::stale_response(
            operation,
            ticket.sequence(),
            sequencer.latest_applied(),
        ));
        OperationOutcome::Stale
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
