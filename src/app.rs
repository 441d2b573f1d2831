use std::time::Duration;

use ratatui::widgets::ListState;

use crate::config;
use crate::dialogs::{ConfirmType, DialogState};
use crate::store::{Todo, TodoStore};
use crate::theme::{detect_system_theme, get_theme_colors, Theme};
use crate::ui_state::UiState;

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表存储（唯一的数据源）
    pub store: TodoStore,
    /// 列表选择状态
    pub list_state: ListState,
    /// 对话框状态
    pub dialogs: DialogState,
    /// UI 状态（主题、Toast、点击区域）
    pub ui: UiState,
    /// 打开主题选择器前的主题（Esc 取消时恢复）
    theme_before_selector: Theme,
}

impl App {
    pub fn new() -> Self {
        // 从配置恢复主题偏好（任务列表不持久化）
        let config = config::load_config().unwrap_or_default();
        let theme = Theme::from_name(&config.theme.name);
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        let store = TodoStore::new();
        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            should_quit: false,
            store,
            list_state,
            dialogs: DialogState::new(),
            ui: UiState::new(theme, colors, last_system_dark),
            theme_before_selector: theme,
        }
    }

    // ========== 列表导航 ==========

    /// 当前选中的任务
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.list_state
            .selected()
            .and_then(|i| self.store.todos().get(i))
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 删除后保证选中项仍然有效
    fn ensure_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    // ========== Add Task ==========

    /// 打开 Add Task 弹窗
    pub fn open_add_dialog(&mut self) {
        self.dialogs.add_input.clear();
        self.dialogs.show_add_dialog = true;
    }

    /// 关闭 Add Task 弹窗
    pub fn close_add_dialog(&mut self) {
        self.dialogs.show_add_dialog = false;
        self.dialogs.add_input.clear();
    }

    /// Add Task 输入字符
    pub fn add_input_char(&mut self, c: char) {
        self.dialogs.add_input.push(c);
    }

    /// Add Task 删除字符
    pub fn add_delete_char(&mut self) {
        self.dialogs.add_input.pop();
    }

    /// 提交新任务
    ///
    /// 不校验文本：空输入也会创建一个（无文字的）任务。
    /// 提交后清空输入、关闭弹窗，并选中新任务。
    pub fn submit_add(&mut self) {
        let text = self.dialogs.add_input.clone();
        self.store.add(text);
        self.close_add_dialog();
        self.list_state.select(Some(self.store.len() - 1));
    }

    // ========== Toggle ==========

    /// 翻转当前选中任务的完成标记
    pub fn toggle_selected(&mut self) {
        if let Some(todo) = self.selected_todo() {
            let id = todo.id;
            self.store.toggle(id);
        }
    }

    /// 翻转指定行的任务（鼠标双击）
    pub fn toggle_at(&mut self, index: usize) {
        if let Some(todo) = self.store.todos().get(index) {
            let id = todo.id;
            self.store.toggle(id);
        }
    }

    // ========== Delete ==========

    /// 请求删除当前选中任务（进入确认流程）
    pub fn request_delete_selected(&mut self) {
        let Some(todo) = self.selected_todo() else {
            return;
        };
        let (id, text) = (todo.id, todo.text.clone());
        self.dialogs.confirm_dialog = Some(ConfirmType::DeleteTodo { id, text });
    }

    /// 请求删除指定行的任务（鼠标点击 ✗）
    pub fn request_delete_at(&mut self, index: usize) {
        let Some(todo) = self.store.todos().get(index) else {
            return;
        };
        let (id, text) = (todo.id, todo.text.clone());
        self.list_state.select(Some(index));
        self.dialogs.confirm_dialog = Some(ConfirmType::DeleteTodo { id, text });
    }

    /// 确认弹窗 - 用户同意
    ///
    /// 只有走到这里才真正调用 remove；store 本身永远不发起确认。
    pub fn confirm_dialog_yes(&mut self) {
        if let Some(ConfirmType::DeleteTodo { id, text }) = self.dialogs.confirm_dialog.take() {
            self.store.remove(id);
            self.ensure_selection();
            let label = if text.is_empty() { "(untitled)" } else { &text };
            self.show_toast(format!("Deleted: {}", label));
        }
    }

    /// 确认弹窗 - 用户拒绝（有意的无操作）
    pub fn confirm_dialog_cancel(&mut self) {
        self.dialogs.confirm_dialog = None;
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        let themes = Theme::all();
        self.ui.theme_selector_index = themes
            .iter()
            .position(|t| *t == self.ui.theme)
            .unwrap_or(0);
        self.theme_before_selector = self.ui.theme;
        self.ui.show_theme_selector = true;
    }

    /// 关闭主题选择器（恢复打开前的主题）
    pub fn close_theme_selector(&mut self) {
        let theme = self.theme_before_selector;
        self.ui.set_theme(theme, get_theme_colors(theme));
        self.ui.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.ui.theme_selector_index = if self.ui.theme_selector_index == 0 {
            len - 1
        } else {
            self.ui.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.ui.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.ui.theme_selector_index = (self.ui.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.ui.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并持久化
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.ui.theme_selector_index);
        self.ui.show_theme_selector = false;

        // 保存主题偏好（失败只提示，不中断）
        let mut config = config::load_config().unwrap_or_default();
        config.theme.name = self.ui.theme.label().to_string();
        match config::save_config(&config) {
            Ok(()) => self.show_toast(format!("Theme: {}", self.ui.theme.label())),
            Err(e) => self.show_toast(format!("Failed to save theme: {}", e)),
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index).copied() {
            self.ui.set_theme(theme, get_theme_colors(theme));
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.ui.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.ui.last_system_dark {
            self.ui.last_system_dark = current_dark;
            self.ui.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== 杂项 ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message, TOAST_DURATION);
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_first_task() {
        let app = App::new();
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.selected_todo().unwrap().id, 1);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = App::new();

        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(2));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_add_flow() {
        let mut app = App::new();

        app.open_add_dialog();
        assert!(app.dialogs.show_add_dialog);

        for c in "Buy milk".chars() {
            app.add_input_char(c);
        }
        app.submit_add();

        assert!(!app.dialogs.show_add_dialog);
        assert!(app.dialogs.add_input.is_empty());
        assert_eq!(app.store.len(), 4);
        // 新任务被选中
        assert_eq!(app.selected_todo().unwrap().text, "Buy milk");
    }

    #[test]
    fn test_add_flow_accepts_empty_input() {
        let mut app = App::new();

        app.open_add_dialog();
        app.submit_add();

        assert_eq!(app.store.len(), 4);
        assert_eq!(app.selected_todo().unwrap().text, "");
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = App::new();
        app.select_next(); // -> id 2

        app.toggle_selected();
        assert!(app.store.get(2).unwrap().done);

        app.toggle_selected();
        assert!(!app.store.get(2).unwrap().done);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = App::new();

        app.request_delete_selected();
        // 确认之前列表不变
        assert_eq!(app.store.len(), 3);
        assert!(matches!(
            app.dialogs.confirm_dialog,
            Some(ConfirmType::DeleteTodo { id: 1, .. })
        ));

        app.confirm_dialog_yes();
        assert_eq!(app.store.len(), 2);
        assert!(app.store.get(1).is_none());
        assert!(app.dialogs.confirm_dialog.is_none());
    }

    #[test]
    fn test_delete_cancel_is_noop() {
        let mut app = App::new();

        app.request_delete_selected();
        app.confirm_dialog_cancel();

        assert_eq!(app.store.len(), 3);
        assert!(app.dialogs.confirm_dialog.is_none());
    }

    #[test]
    fn test_selection_clamped_after_removing_last() {
        let mut app = App::new();
        app.select_previous(); // -> index 2 (最后一项)

        app.request_delete_selected();
        app.confirm_dialog_yes();

        assert_eq!(app.store.len(), 2);
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_selection_cleared_when_list_empty() {
        let mut app = App::new();

        for _ in 0..3 {
            app.request_delete_selected();
            app.confirm_dialog_yes();
        }

        assert!(app.store.is_empty());
        assert_eq!(app.list_state.selected(), None);
        assert!(app.selected_todo().is_none());

        // 空列表上的操作不 panic
        app.select_next();
        app.toggle_selected();
        app.request_delete_selected();
        assert!(app.dialogs.confirm_dialog.is_none());
    }

    #[test]
    fn test_toggle_at_out_of_range_is_noop() {
        let mut app = App::new();
        let before = app.store.todos().to_vec();
        app.toggle_at(99);
        assert_eq!(app.store.todos(), &before[..]);
    }
}
