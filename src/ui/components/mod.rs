pub mod add_dialog;
pub mod confirm_dialog;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod logo;
pub mod theme_selector;
pub mod toast;
pub mod todo_list;
