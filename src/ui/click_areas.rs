use ratatui::layout::Rect;

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 任务行 (区域, 行索引)
    pub todo_rows: Vec<(Rect, usize)>,
    /// 每行的删除按钮 ✗ (区域, 行索引)
    pub delete_cells: Vec<(Rect, usize)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.todo_rows.clear();
        self.delete_cells.clear();
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let rect = Rect::new(2, 3, 10, 2);
        assert!(contains(&rect, 2, 3));
        assert!(contains(&rect, 11, 4));
        assert!(!contains(&rect, 12, 3)); // 右边界外
        assert!(!contains(&rect, 2, 5)); // 下边界外
        assert!(!contains(&rect, 1, 3));
    }

    #[test]
    fn test_reset_clears_areas() {
        let mut areas = ClickAreas::default();
        areas.todo_rows.push((Rect::new(0, 0, 5, 1), 0));
        areas.delete_cells.push((Rect::new(5, 0, 1, 1), 0));

        areas.reset();
        assert!(areas.todo_rows.is_empty());
        assert!(areas.delete_cells.is_empty());
    }
}
