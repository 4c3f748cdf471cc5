//! 目录/文件目录加载服务 - 业务能力层
//!
//! 负责从后端拉取目录列表和文件列表，并整体替换页面上的选项

use crate::api;
use crate::clients::Transport;
use crate::models::{FileListRequest, OperationKind, OperationOutcome};
use crate::services::diagnostics::{Diagnostic, DiagnosticSink};
use crate::services::sequencer::{RequestSequencer, Ticket};
use crate::ui::Page;
use std::sync::Arc;
use tracing::{debug, info};

pub struct CatalogLoader {
    transport: Arc<dyn Transport>,
    page: Arc<Page>,
    sink: Arc<dyn DiagnosticSink>,
    directories_seq: RequestSequencer,
    files_seq: RequestSequencer,
}

impl CatalogLoader {
    pub fn new(
        transport: Arc<dyn Transport>,
        page: Arc<Page>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            transport,
            page,
            sink,
            directories_seq: RequestSequencer::new(),
            files_seq: RequestSequencer::new(),
        }
    }

    /// 加载目录列表
    ///
    /// 成功时替换全部目录选项（默认选中第一个），然后为选中的目录加载文件列表；
    /// 失败时保留原选项，只记录诊断，不重试。
    pub async fn load_directories(&self) -> OperationOutcome {
        let ticket = self.directories_seq.issue();

        let directories = match api::get_pdf_dirs(self.transport.as_ref()).await {
            Ok(directories) => directories,
            Err(e) => {
                self.sink
                    .record(Diagnostic::request_failed(OperationKind::Directories, &e));
                return OperationOutcome::Failed;
            }
        };

        if !self.directories_seq.try_apply(ticket) {
            return self.discard(OperationKind::Directories, &self.directories_seq, ticket);
        }

        info!("📁 找到 {} 个论文目录", directories.len());
        self.page.replace_directories(directories);

        let files_outcome = self.load_files().await;
        debug!("目录加载后的文件列表刷新: {}", files_outcome);

        OperationOutcome::Succeeded
    }

    /// 为当前选中的目录加载文件列表
    ///
    /// 没有选中目录时什么也不做
    pub async fn load_files(&self) -> OperationOutcome {
        let Some(directory) = self.page.selected_directory().filter(|d| !d.is_empty()) else {
            debug!("尚未选择目录，跳过文件列表加载");
            return OperationOutcome::Aborted;
        };

        let request = FileListRequest::new(directory);
        let ticket = self.files_seq.issue();

        let files = match api::get_pdf_files(self.transport.as_ref(), &request).await {
            Ok(files) => files,
            Err(e) => {
                self.sink
                    .record(Diagnostic::request_failed(OperationKind::Files, &e));
                return OperationOutcome::Failed;
            }
        };

        if !self.files_seq.try_apply(ticket) {
            return self.discard(OperationKind::Files, &self.files_seq, ticket);
        }

        info!(
            "📄 目录 {} 下有 {} 个 PDF 文件",
            request.selected_dir(),
            files.len()
        );
        self.page.replace_files(files);

        OperationOutcome::Succeeded
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
