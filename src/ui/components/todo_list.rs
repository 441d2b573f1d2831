use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::store::Todo;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 删除按钮列宽（" ✗ "）
const DELETE_COL_WIDTH: u16 = 3;

/// 渲染任务列表
///
/// 每行：选择指示器 + 状态图标 + 文本 + 删除按钮。
/// 已完成的任务显示删除线并变暗。同时注册行和删除按钮的点击区域。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    todos: &[Todo],
    selected_index: Option<usize>,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);

    // 数据行
    let rows: Vec<Row> = todos
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            // 状态图标
            let (icon, icon_style) = if todo.done {
                ("✓", Style::default().fg(colors.highlight))
            } else {
                ("·", Style::default().fg(colors.muted))
            };

            // 已完成：删除线 + 变暗
            let text_style = if todo.done {
                Style::default()
                    .fg(colors.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            let row_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(icon).style(icon_style),
                Cell::from(todo.text.clone()).style(text_style),
                Cell::from("✗").style(Style::default().fg(colors.danger)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2), // 选择器
        Constraint::Length(2), // 状态图标
        Constraint::Fill(1),   // 文本
        Constraint::Length(DELETE_COL_WIDTH),
    ];

    let table = Table::new(rows, widths).block(block).row_highlight_style(
        Style::default()
            .bg(colors.bg_secondary)
            .add_modifier(Modifier::BOLD),
    );

    // 渲染表格（使用 TableState）
    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);

    // 注册点击区域（只注册可见行）
    let visible = (inner_area.height as usize).min(todos.len());
    for i in 0..visible {
        let y = inner_area.y + i as u16;
        let row_rect = Rect::new(inner_area.x, y, inner_area.width, 1);
        click_areas.todo_rows.push((row_rect, i));

        let delete_x = inner_area.x + inner_area.width.saturating_sub(DELETE_COL_WIDTH);
        let delete_rect = Rect::new(delete_x, y, DELETE_COL_WIDTH, 1);
        click_areas.delete_cells.push((delete_rect, i));
    }
}
