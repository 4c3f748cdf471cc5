//! 控制台界面
//!
//! 把一行输入解析为命令，并把页面快照渲染为文本

use crate::ui::page::PageSnapshot;
use crate::utils::logging::truncate_text;
use chrono::NaiveDate;
use std::fmt::Write;

pub const HELP_TEXT: &str = "\
可用命令:
  date <YYYY-MM-DD|->   设置下载日期（- 表示不指定）
  limit <n>             设置下载数量（0 表示全部）
  download              下载论文
  dirs                  重新加载目录列表
  dir <name>            切换目录（自动刷新文件列表）
  file <name>           选择文件
  process               处理选中的 PDF
  ask <question>        基于摘要和正文提问
  show                  显示当前页面
  help                  显示本帮助
  quit                  退出";

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Date(Option<String>),
    Limit(String),
    Download,
    Dirs,
    Dir(String),
    File(String),
    Process,
    Ask(String),
    Show,
    Help,
    Quit,
}

impl Command {
    /// 解析一行输入；空行返回 `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name {
            "date" => Command::Date(parse_date_arg(arg)?),
            "limit" => Command::Limit(arg.to_string()),
            "download" => Command::Download,
            "dirs" => Command::Dirs,
            "dir" => Command::Dir(required(name, arg)?),
            "file" => Command::File(required(name, arg)?),
            "process" => Command::Process,
            "ask" => Command::Ask(arg.to_string()),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("未知命令: {}（输入 help 查看帮助）", other)),
        };
        Ok(Some(command))
    }
}

fn required(name: &str, arg: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!("{} 命令需要一个参数", name))
    } else {
        Ok(arg.to_string())
    }
}

fn parse_date_arg(arg: &str) -> Result<Option<String>, String> {
    if arg.is_empty() || arg == "-" {
        return Ok(None);
    }
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map(|date| Some(date.format("%Y-%m-%d").to_string()))
        .map_err(|_| format!("日期格式应为 YYYY-MM-DD: {}", arg))
}

/// 渲染页面快照
pub fn render(snapshot: &PageSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "─".repeat(60));
    let _ = writeln!(
        out,
        "下载日期: {}    下载数量: {}",
        snapshot.target_date.as_deref().unwrap_or("-"),
        snapshot.paper_limit.as_deref().unwrap_or("-")
    );
    if !snapshot.download_status.is_empty() {
        let _ = writeln!(out, "下载状态: {}", snapshot.download_status);
    }
    let _ = writeln!(
        out,
        "目录: {}",
        render_options(snapshot.directories.options(), snapshot.directories.selected())
    );
    let _ = writeln!(
        out,
        "文件: {}",
        render_options(snapshot.files.options(), snapshot.files.selected())
    );

    let busy: Vec<&str> = snapshot
        .indicators
        .iter()
        .filter(|(_, visible)| **visible)
        .map(|(id, _)| id.as_str())
        .collect();
    if !busy.is_empty() {
        let _ = writeln!(out, "⏳ 进行中: {}", busy.join(", "));
    }

    if !snapshot.summary.is_empty() {
        let _ = writeln!(out, "\n摘要:\n{}", truncate_text(&snapshot.summary, 2000));
    }
    if !snapshot.answer.is_empty() {
        let _ = writeln!(out, "\n回答:\n{}", snapshot.answer);
    }
    let _ = write!(out, "{}", "─".repeat(60));
    out
}

fn render_options(options: &[String], selected: Option<&str>) -> String {
    if options.is_empty() {
        return "(空)".to_string();
    }
    options
        .iter()
        .map(|option| {
            if Some(option.as_str()) == selected {
                format!("[{}]", option)
            } else {
                option.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
