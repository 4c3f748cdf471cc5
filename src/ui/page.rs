//! 页面视图模型
//!
//! 保存界面上所有可见状态：输入框、下拉选项、输出文本和忙碌指示器。
//! 编排层只写入这里，前端（控制台等）从这里读取并渲染。

use parking_lot::Mutex;
use std::collections::BTreeMap;

pub const DOWNLOAD_LOADING: &str = "downloadLoading";
pub const PROCESS_LOADING: &str = "processLoading";
pub const ASK_LOADING: &str = "askLoading";

/// 下拉选择控件
///
/// 替换选项后默认选中第一项，与浏览器 `<select>` 的行为一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<String>,
    selected: Option<String>,
}

impl SelectControl {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// 整体替换选项，不保留任何旧选项
    pub fn replace_options(&mut self, options: Vec<String>) {
        self.selected = options.first().cloned();
        self.options = options;
    }

    /// 选中某个已有选项；不存在时保持原选择并返回 false
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o == value) {
            self.selected = Some(value.to_string());
            true
        } else {
            false
        }
    }
}

/// 页面状态快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub target_date: Option<String>,
    pub paper_limit: Option<String>,
    pub question: String,
    pub directories: SelectControl,
    pub files: SelectControl,
    pub download_status: String,
    pub summary: String,
    pub answer: String,
    pub indicators: BTreeMap<String, bool>,
}

/// 页面
pub struct Page {
    state: Mutex<PageSnapshot>,
}

impl Page {
    /// 空页面，没有任何指示器
    pub fn new() -> Self {
        Self::with_indicators(&[])
    }

    /// 带指定指示器（初始隐藏）的页面
    pub fn with_indicators(ids: &[&str]) -> Self {
        let indicators = ids.iter().map(|id| (id.to_string(), false)).collect();
        Self {
            state: Mutex::new(PageSnapshot {
                indicators,
                ..PageSnapshot::default()
            }),
        }
    }

    /// 带下载/处理/提问三个指示器的标准页面
    pub fn standard() -> Self {
        Self::with_indicators(&[DOWNLOAD_LOADING, PROCESS_LOADING, ASK_LOADING])
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.lock().clone()
    }

    // ========== 输入 ==========

    pub fn set_target_date(&self, date: Option<String>) {
        self.state.lock().target_date = date;
    }

    pub fn target_date(&self) -> Option<String> {
        self.state.lock().target_date.clone()
    }

    pub fn set_paper_limit(&self, limit: Option<String>) {
        self.state.lock().paper_limit = limit;
    }

    pub fn paper_limit(&self) -> Option<String> {
        self.state.lock().paper_limit.clone()
    }

    pub fn set_question(&self, question: impl Into<String>) {
        self.state.lock().question = question.into();
    }

    pub fn question(&self) -> String {
        self.state.lock().question.clone()
    }

    // ========== 目录 / 文件选择 ==========

    pub fn replace_directories(&self, directories: Vec<String>) {
        self.state.lock().directories.replace_options(directories);
    }

    pub fn replace_files(&self, files: Vec<String>) {
        self.state.lock().files.replace_options(files);
    }

    pub fn directory_options(&self) -> Vec<String> {
        self.state.lock().directories.options().to_vec()
    }

    pub fn file_options(&self) -> Vec<String> {
        self.state.lock().files.options().to_vec()
    }

    pub fn selected_directory(&self) -> Option<String> {
        self.state.lock().directories.selected().map(str::to_string)
    }

    pub fn selected_file(&self) -> Option<String> {
        self.state.lock().files.selected().map(str::to_string)
    }

    pub fn select_directory(&self, directory: &str) -> bool {
        self.state.lock().directories.select(directory)
    }

    pub fn select_file(&self, file: &str) -> bool {
        self.state.lock().files.select(file)
    }

    // ========== 输出 ==========

    pub fn set_download_status(&self, text: impl Into<String>) {
        self.state.lock().download_status = text.into();
    }

    pub fn download_status(&self) -> String {
        self.state.lock().download_status.clone()
    }

    pub fn set_summary(&self, text: impl Into<String>) {
        self.state.lock().summary = text.into();
    }

    pub fn summary(&self) -> String {
        self.state.lock().summary.clone()
    }

    pub fn set_answer(&self, text: impl Into<String>) {
        self.state.lock().answer = text.into();
    }

    pub fn answer(&self) -> String {
        self.state.lock().answer.clone()
    }

    // ========== 指示器 ==========

    /// 设置指示器可见性；页面上没有该指示器时返回 false
    pub fn set_indicator(&self, id: &str, visible: bool) -> bool {
        match self.state.lock().indicators.get_mut(id) {
            Some(slot) => {
                *slot = visible;
                true
            }
            None => false,
        }
    }

    pub fn is_indicator_visible(&self, id: &str) -> Option<bool> {
        self.state.lock().indicators.get(id).copied()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_replace_options_selects_first() {
        let mut control = SelectControl::default();
        control.replace_options(names(&["a", "b"]));

        assert_eq!(control.selected(), Some("a"));
        assert_eq!(control.options(), names(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_replace_options_drops_stale_entries() {
        let mut control = SelectControl::default();
        control.replace_options(names(&["old1.pdf", "old2.pdf"]));
        control.select("old2.pdf");

        control.replace_options(names(&["new.pdf"]));

        assert_eq!(control.options(), names(&["new.pdf"]).as_slice());
        assert_eq!(control.selected(), Some("new.pdf"));
    }

    #[test]
    fn test_replace_with_empty_clears_selection() {
        let mut control = SelectControl::default();
        control.replace_options(names(&["a"]));
        control.replace_options(Vec::new());

        assert_eq!(control.selected(), None);
    }

    #[test]
    fn test_select_unknown_option_keeps_selection() {
        let mut control = SelectControl::default();
        control.replace_options(names(&["a", "b"]));

        assert!(!control.select("c"));
        assert_eq!(control.selected(), Some("a"));
        assert!(control.select("b"));
        assert_eq!(control.selected(), Some("b"));
    }

    #[test]
    fn test_unknown_indicator_is_reported() {
        let page = Page::standard();

        assert!(page.set_indicator(PROCESS_LOADING, true));
        assert_eq!(page.is_indicator_visible(PROCESS_LOADING), Some(true));
        assert!(!page.set_indicator("nope", true));
        assert_eq!(page.is_indicator_visible("nope"), None);
    }
}
