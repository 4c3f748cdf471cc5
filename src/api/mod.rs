//! API 模块
//!
//! 负责所有与论文后端的交互

pub mod papers;

// 重新导出常用函数
pub use papers::{ask_question, download_papers, get_pdf_dirs, get_pdf_files, process_pdf};
