use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::ui::click_areas::contains;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) => {
                // 只处理按下事件
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 帮助面板
    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    // 删除确认弹窗
    if app.dialogs.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    // Add Task 弹窗
    if app.dialogs.show_add_dialog {
        handle_add_dialog_key(app, key);
        return;
    }

    // 主题选择器
    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // Enter - 翻转完成标记
        KeyCode::Enter => {
            app.toggle_selected();
        }

        // 功能按键 - 添加任务
        KeyCode::Char('a') => {
            app.open_add_dialog();
        }

        // 功能按键 - 删除任务（先确认）
        KeyCode::Char('x') => {
            app.request_delete_selected();
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.dialogs.show_help = true;
        }

        _ => {}
    }
}

/// 处理删除确认弹窗的键盘事件
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_dialog_yes();
        }

        // 取消
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_dialog_cancel();
        }

        _ => {}
    }
}

/// 处理 Add Task 弹窗的键盘事件
fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认创建（空文本也接受）
        KeyCode::Enter => {
            app.submit_add();
        }

        // 取消
        KeyCode::Esc => {
            app.close_add_dialog();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.add_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.add_input_char(c);
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消（恢复原主题）
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_theme_selector();
        }

        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.dialogs.show_help = false;
        }
        _ => {}
    }
}

/// 处理鼠标事件
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // 弹窗打开时忽略列表区域的鼠标操作
    if app.dialogs.has_active_dialog() || app.ui.show_theme_selector {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(app, mouse.column, mouse.row);
        }

        // 滚轮 - 移动选择
        MouseEventKind::ScrollDown => {
            app.select_next();
        }
        MouseEventKind::ScrollUp => {
            app.select_previous();
        }

        _ => {}
    }
}

/// 处理左键点击
///
/// 点击行选中；300ms 内同一位置再次点击视为双击，翻转完成标记；
/// 点击行尾的 ✗ 直接进入删除确认流程。
fn handle_left_click(app: &mut App, col: u16, row: u16) {
    let pos = (col, row);

    // 删除按钮优先于行点击
    let delete_hit = app
        .ui
        .click_areas
        .delete_cells
        .iter()
        .find(|(rect, _)| contains(rect, col, row))
        .map(|(_, index)| *index);

    if let Some(index) = delete_hit {
        app.request_delete_at(index);
        return;
    }

    let row_hit = app
        .ui
        .click_areas
        .todo_rows
        .iter()
        .find(|(rect, _)| contains(rect, col, row))
        .map(|(_, index)| *index);

    if let Some(index) = row_hit {
        if app.ui.is_double_click(pos) {
            app.toggle_at(index);
        } else {
            app.list_state.select(Some(index));
        }
        app.ui.record_click(pos);
    }
}
