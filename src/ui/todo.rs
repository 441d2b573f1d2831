use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    add_dialog, confirm_dialog, empty_state, footer, header, help_panel, theme_selector, toast,
    todo_list,
};

/// 渲染 ToDo 页面
///
/// 纯渲染：从当前状态到一帧画面，不做任何变更。
/// 同时把可点击区域注册进 `app.ui.click_areas` 供鼠标事件使用。
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 渲染 Header（Logo + 统计）
    let total = app.store.len();
    let done = app.store.todos().iter().filter(|t| t.done).count();
    header::render(frame, header_area, total, done, &colors);

    // 渲染列表或空状态
    if app.store.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        let selected = app.list_state.selected();
        todo_list::render(
            frame,
            list_area,
            app.store.todos(),
            selected,
            &colors,
            &mut app.ui.click_areas,
        );
    }

    // 渲染 Footer
    footer::render(frame, footer_area, !app.store.is_empty(), &colors);

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, &colors);
    }

    // 渲染 Add Task 弹窗（如果打开）
    if app.dialogs.show_add_dialog {
        add_dialog::render(frame, &app.dialogs.add_input, &colors);
    }

    // 渲染删除确认弹窗
    if let Some(ref confirm_type) = app.dialogs.confirm_dialog {
        confirm_dialog::render(frame, confirm_type, &colors);
    }

    // 渲染帮助面板
    if app.dialogs.show_help {
        help_panel::render(frame, &colors);
    }
}
