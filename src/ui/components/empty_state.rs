use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染空列表状态
///
/// 列表为空时显示提示文字，而不是一个空的列表容器。
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let text_height = 3u16;
    if inner_area.height < text_height {
        return;
    }

    // 垂直居中
    let vertical_padding = (inner_area.height - text_height) / 2;

    let [_, text_area, _] = Layout::vertical([
        Constraint::Length(vertical_padding),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    let lines = vec![
        Line::from(Span::styled(
            "No tasks left",
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " a ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ]),
    ];

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);

    frame.render_widget(hint_widget, text_area);
}
