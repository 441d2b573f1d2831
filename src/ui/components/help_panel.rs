//! 快捷键帮助面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 36;
/// 帮助面板高度
const PANEL_HEIGHT: u16 = 17;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();

    // 居中计算
    let x = area.width.saturating_sub(PANEL_WIDTH) / 2;
    let y = area.height.saturating_sub(PANEL_HEIGHT) / 2;
    let panel_area = Rect::new(
        x,
        y,
        PANEL_WIDTH.min(area.width),
        PANEL_HEIGHT.min(area.height),
    );

    // 清除背景
    frame.render_widget(Clear, panel_area);

    // 构建帮助内容
    let lines = build_help_lines(colors);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        // Navigation 分组
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        Line::from(""),
        // Tasks 分组
        section_header("Tasks", colors),
        key_line("a", "Add task", colors),
        key_line("Enter", "Toggle done", colors),
        key_line("double-click", "Toggle done", colors),
        key_line("x / click ✗", "Delete (confirm)", colors),
        Line::from(""),
        // Other 分组
        section_header("Other", colors),
        key_line("t", "Theme selector", colors),
        key_line("?", "Toggle this panel", colors),
        key_line("q", "Quit", colors),
    ]
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {:<14}", key), Style::default().fg(colors.text)),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
