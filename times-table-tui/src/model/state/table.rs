//! 表格状态

use times_table_core::{CellPosition, HoverState, TableDimensions, TableModel};

/// 表格面板状态
///
/// 滚动偏移以表体行、数据列为单位；表头行与行头列始终固定显示。
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// 当前挂载的表格，`None` 表示表格区域为空
    pub model: Option<TableModel>,
    /// 悬停高亮状态
    pub hover: HoverState,
    /// 第一行可见表体行的偏移
    pub scroll_row: usize,
    /// 第一列可见数据列的偏移
    pub scroll_col: usize,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 挂载新表格，替换旧表格并清除悬停与滚动
    pub fn mount(&mut self, model: TableModel) {
        log::debug!(
            "Mounting table with {} body rows",
            model.dimensions().rows
        );
        self.model = Some(model);
        self.reset_view();
    }

    /// 移除表格
    pub fn unmount(&mut self) {
        self.model = None;
        self.reset_view();
    }

    pub fn is_mounted(&self) -> bool {
        self.model.is_some()
    }

    pub fn dimensions(&self) -> Option<TableDimensions> {
        self.model.as_ref().map(TableModel::dimensions)
    }

    /// 指针移动到 `position`（`None` 表示离开表格）
    ///
    /// 指针换到另一个单元格时，先离开旧单元格再进入新单元格。
    pub fn pointer_moved(&mut self, position: Option<CellPosition>) {
        if self.hover.hovered() == position {
            return;
        }
        if self.hover.hovered().is_some() {
            self.hover.pointer_leave();
        }
        if let (Some(position), Some(dimensions)) = (position, self.dimensions()) {
            self.hover.pointer_enter(position, dimensions);
        }
    }

    /// 指针离开表格
    pub fn pointer_left(&mut self) {
        self.pointer_moved(None);
    }

    /// 按行列滚动，结果限制在 `[0, max]` 之内
    pub fn scroll_by(&mut self, rows: isize, columns: isize, max_row: usize, max_col: usize) {
        self.scroll_row = self.scroll_row.saturating_add_signed(rows).min(max_row);
        self.scroll_col = self.scroll_col.saturating_add_signed(columns).min(max_col);
    }

    /// 把偏移限制在 `[0, max]` 之内（终端尺寸变化后使用）
    pub fn clamp_scroll(&mut self, max_row: usize, max_col: usize) {
        self.scroll_row = self.scroll_row.min(max_row);
        self.scroll_col = self.scroll_col.min(max_col);
    }

    /// 回到左上角
    pub fn scroll_home(&mut self) {
        self.scroll_row = 0;
        self.scroll_col = 0;
    }

    fn reset_view(&mut self) {
        self.hover = HoverState::new();
        self.scroll_home();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use times_table_core::{build_table, validate, RawInput};

    fn table(hs: &str, he: &str, vs: &str, ve: &str) -> TableModel {
        let bounds = validate(&RawInput::new(hs, he, vs, ve)).unwrap();
        build_table(&bounds)
    }

    #[test]
    fn test_mount_resets_view() {
        let mut state = TableState::new();
        state.mount(table("1", "5", "1", "5"));
        state.scroll_by(2, 2, 10, 10);
        state.pointer_moved(Some(CellPosition::new(2, 3)));
        assert!(state.hover.is_column_hovering());

        state.mount(table("1", "3", "1", "3"));
        assert_eq!((state.scroll_row, state.scroll_col), (0, 0));
        assert!(!state.hover.is_column_hovering());
        assert_eq!(state.dimensions().unwrap().rows, 3);
    }

    #[test]
    fn test_unmount() {
        let mut state = TableState::new();
        state.mount(table("1", "2", "1", "2"));
        state.unmount();
        assert!(!state.is_mounted());
        assert!(state.dimensions().is_none());
    }

    #[test]
    fn test_pointer_moves_between_cells() {
        let mut state = TableState::new();
        state.mount(table("1", "4", "1", "4"));

        state.pointer_moved(Some(CellPosition::new(1, 2)));
        assert_eq!(
            state.hover.active().map(|h| (h.row, h.column)),
            Some((1, 2))
        );

        state.pointer_moved(Some(CellPosition::new(3, 4)));
        assert_eq!(
            state.hover.active().map(|h| (h.row, h.column)),
            Some((3, 4))
        );

        // 移到表头：旧高亮被清除，表头本身不产生高亮
        state.pointer_moved(Some(CellPosition::new(0, 3)));
        assert!(state.hover.active().is_none());
        assert_eq!(state.hover.hovered(), Some(CellPosition::new(0, 3)));

        state.pointer_left();
        assert!(state.hover.hovered().is_none());
    }

    #[test]
    fn test_pointer_without_table_is_ignored() {
        let mut state = TableState::new();
        state.pointer_moved(Some(CellPosition::new(1, 2)));
        assert!(state.hover.active().is_none());
    }

    #[test]
    fn test_scroll_clamps() {
        let mut state = TableState::new();
        state.scroll_by(-3, -1, 5, 5);
        assert_eq!((state.scroll_row, state.scroll_col), (0, 0));

        state.scroll_by(9, 2, 5, 5);
        assert_eq!((state.scroll_row, state.scroll_col), (5, 2));

        state.clamp_scroll(3, 1);
        assert_eq!((state.scroll_row, state.scroll_col), (3, 1));

        state.scroll_home();
        assert_eq!((state.scroll_row, state.scroll_col), (0, 0));
    }
}
