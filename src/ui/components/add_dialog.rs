//! Add Task 弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染 Add Task 弹窗
pub fn render(frame: &mut Frame, input: &str, colors: &ThemeColors) {
    let area = frame.area();

    // 计算弹窗尺寸
    let popup_width = 50u16.min(area.width.saturating_sub(4));
    let popup_height = 7u16.min(area.height);

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(" Add Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // 内部布局: 空行 + 输入行 + 空行 + 提示行
    let [_, input_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1), // 顶部空行
        Constraint::Length(1), // 输入行
        Constraint::Length(1), // 空行
        Constraint::Length(1), // 提示行
    ])
    .areas(inner_area);

    // 渲染输入行: "Task: {input}█"
    let input_line = Line::from(vec![
        Span::styled("  Task: ", Style::default().fg(colors.muted)),
        Span::styled(input, Style::default().fg(colors.text)),
        Span::styled("█", Style::default().fg(colors.highlight)), // 光标
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" add  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::theme::{get_theme_colors, Theme};

    #[test]
    fn test_render_on_tiny_terminal_does_not_panic() {
        let colors = get_theme_colors(Theme::Dark);

        // 高度低于弹窗默认高度 (7)
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        terminal
            .draw(|frame| render(frame, "Buy milk", &colors))
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(3, 3)).unwrap();
        terminal.draw(|frame| render(frame, "", &colors)).unwrap();
    }
}
