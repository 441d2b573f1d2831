//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。

// 从 ui/components 导入对话框数据类型
pub use crate::ui::components::confirm_dialog::ConfirmType;

/// 对话框状态
#[derive(Debug)]
pub struct DialogState {
    // === Add Task ===
    /// 是否显示 Add Task 弹窗
    pub show_add_dialog: bool,
    /// Add Task 输入内容
    pub add_input: String,

    // === Help ===
    /// 是否显示帮助面板
    pub show_help: bool,

    // === Confirm ===
    /// 删除确认弹窗
    pub confirm_dialog: Option<ConfirmType>,
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self {
            show_add_dialog: false,
            add_input: String::new(),
            show_help: false,
            confirm_dialog: None,
        }
    }

    /// 关闭所有对话框
    #[allow(dead_code)]
    pub fn close_all(&mut self) {
        self.show_add_dialog = false;
        self.add_input.clear();
        self.show_help = false;
        self.confirm_dialog = None;
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.show_add_dialog || self.show_help || self.confirm_dialog.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_state() {
        let state = DialogState::new();
        assert!(!state.show_add_dialog);
        assert!(!state.show_help);
        assert!(state.confirm_dialog.is_none());
        assert!(state.add_input.is_empty());
    }

    #[test]
    fn test_close_all_clears_all_dialogs() {
        let mut state = DialogState::new();

        // 打开各种对话框
        state.show_add_dialog = true;
        state.add_input = "Buy milk".to_string();
        state.show_help = true;
        state.confirm_dialog = Some(ConfirmType::DeleteTodo {
            id: 2,
            text: "Do Laundry".to_string(),
        });

        // 关闭所有
        state.close_all();

        // 验证所有对话框都关闭了
        assert!(!state.show_add_dialog);
        assert!(state.add_input.is_empty());
        assert!(!state.show_help);
        assert!(state.confirm_dialog.is_none());
    }

    #[test]
    fn test_has_active_dialog_with_add() {
        let mut state = DialogState::new();
        assert!(!state.has_active_dialog());

        state.show_add_dialog = true;
        assert!(state.has_active_dialog());
    }

    #[test]
    fn test_has_active_dialog_with_confirm() {
        let mut state = DialogState::new();
        assert!(!state.has_active_dialog());

        state.confirm_dialog = Some(ConfirmType::DeleteTodo {
            id: 1,
            text: "Wash dishes".to_string(),
        });
        assert!(state.has_active_dialog());
    }

    #[test]
    fn test_has_active_dialog_after_close_all() {
        let mut state = DialogState::new();
        state.show_add_dialog = true;
        state.show_help = true;

        assert!(state.has_active_dialog());

        state.close_all();
        assert!(!state.has_active_dialog());
    }
}
