//! 删除确认弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 确认弹窗类型
#[derive(Debug, Clone)]
pub enum ConfirmType {
    /// 删除任务（删除是唯一需要确认的操作）
    DeleteTodo { id: u64, text: String },
}

impl ConfirmType {
    pub fn title(&self) -> &str {
        match self {
            ConfirmType::DeleteTodo { .. } => " Delete ",
        }
    }

    pub fn message(&self) -> Vec<Line<'static>> {
        match self {
            ConfirmType::DeleteTodo { text, .. } => {
                let label = if text.is_empty() {
                    "(untitled)".to_string()
                } else {
                    format!("\"{}\"", text)
                };
                vec![
                    Line::from(label),
                    Line::from(""),
                    Line::from("Delete this task?"),
                    Line::from("This cannot be undone."),
                ]
            }
        }
    }
}

/// 渲染确认弹窗
pub fn render(frame: &mut Frame, confirm_type: &ConfirmType, colors: &ThemeColors) {
    let area = frame.area();

    // 计算弹窗尺寸（收缩到终端可用空间，不越过缓冲区边界）
    let popup_width = 40u16.min(area.width.saturating_sub(4));
    let message_lines = confirm_type.message();
    let popup_height = ((message_lines.len() as u16) + 5).min(area.height); // 标题 + 边框 + 内容 + 提示

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(confirm_type.title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.danger))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // 内部布局
    let [content_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner_area);

    // 渲染消息内容
    let styled_lines: Vec<Line> = message_lines
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(colors.text),
            ))
        })
        .collect();

    let content = Paragraph::new(styled_lines).alignment(Alignment::Center);
    frame.render_widget(content, content_area);

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled(
            "Y",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" confirm  ", Style::default().fg(colors.muted)),
        Span::styled(
            "N",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}
