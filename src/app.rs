//! 控制台应用 - 应用入口
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建 HTTP 客户端、页面和编排器，完成初始目录加载
//! 2. **命令循环**：从 stdin 读取命令，派发给编排器
//! 3. **并发派发**：每个操作作为独立任务运行，可与其他操作重叠
//! 4. **退出清理**：中止仍在进行的请求

use crate::clients::BackendClient;
use crate::config::Config;
use crate::models::OperationOutcome;
use crate::orchestrator::Orchestrator;
use crate::services::TracingSink;
use crate::ui::console::{render, Command, HELP_TEXT};
use crate::ui::Page;
use crate::utils::logging::log_startup;
use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    orchestrator: Arc<Orchestrator>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let transport = BackendClient::new(&config).context("无法创建后端客户端")?;

        let page = Arc::new(Page::standard());
        page.set_paper_limit(Some(config.default_paper_limit.to_string()));

        let orchestrator = Arc::new(Orchestrator::new(
            Arc::new(transport),
            page,
            Arc::new(TracingSink),
        ));

        let outcome = orchestrator.start().await;
        if outcome != OperationOutcome::Succeeded {
            warn!("⚠️ 初始目录加载未成功: {}", outcome);
        }

        Ok(Self {
            config,
            orchestrator,
        })
    }

    /// 运行命令循环，直到 quit 或输入结束
    pub async fn run(&self) -> Result<()> {
        println!("{}", HELP_TEXT);
        println!("{}", render(&self.orchestrator.page().snapshot()));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

        while let Some(line) = lines.next_line().await.context("读取输入失败")? {
            in_flight.retain(|handle| !handle.is_finished());

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }
            if let Some(handle) = self.dispatch(command) {
                in_flight.push(handle);
            }
        }

        self.shutdown(in_flight).await;
        Ok(())
    }

    /// 执行命令；需要访问后端的命令作为独立任务派发
    fn dispatch(&self, command: Command) -> Option<JoinHandle<()>> {
        let page = self.orchestrator.page();
        match command {
            Command::Date(date) => {
                page.set_target_date(date);
                None
            }
            Command::Limit(limit) => {
                page.set_paper_limit(Some(limit));
                None
            }
            Command::File(file) => {
                if !page.select_file(&file) {
                    println!("文件不在列表中: {}", file);
                }
                None
            }
            Command::Show => {
                println!("{}", render(&page.snapshot()));
                None
            }
            Command::Help => {
                println!("{}", HELP_TEXT);
                None
            }
            Command::Quit => None,
            Command::Download => Some(self.spawn("download", |o| async move { o.download().await })),
            Command::Dirs => Some(self.spawn("dirs", |o| async move { o.start().await })),
            Command::Dir(directory) => Some(self.spawn("dir", move |o| async move {
                o.change_directory(&directory).await
            })),
            Command::Process => Some(self.spawn("process", |o| async move { o.process().await })),
            Command::Ask(question) => {
                if !self.orchestrator.session().has_content() {
                    println!("提示: 尚未处理任何 PDF，问题将不带摘要和正文发送");
                }
                page.set_question(question);
                Some(self.spawn("ask", |o| async move { o.ask().await }))
            }
        }
    }

    fn spawn<F, Fut>(&self, name: &'static str, operation: F) -> JoinHandle<()>
    where
        F: FnOnce(Arc<Orchestrator>) -> Fut + Send + 'static,
        Fut: Future<Output = OperationOutcome> + Send + 'static,
    {
        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            let outcome = operation(orchestrator.clone()).await;
            info!("[{}] 操作结束: {}", name, outcome);
            if outcome.was_issued() {
                println!("{}", render(&orchestrator.page().snapshot()));
            }
        })
    }

    /// 中止仍在进行的请求（相当于关闭页面）
    async fn shutdown(&self, in_flight: Vec<JoinHandle<()>>) {
        let pending = in_flight.iter().filter(|h| !h.is_finished()).count();
        if pending > 0 {
            info!("🛑 中止 {} 个进行中的请求", pending);
        }
        for handle in &in_flight {
            handle.abort();
        }
        futures::future::join_all(in_flight).await;
        info!("👋 程序结束，日志已保存至: {}", self.config.output_log_file);
    }
}
