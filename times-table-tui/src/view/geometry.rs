//! 表格几何
//!
//! 渲染与鼠标命中测试共用同一套计算，保证鼠标所指即所见。
//!
//!     ┌──────┬──────┬──────┬──────┐
//!     │  x   │  c0  │  c1  │ ...  │   ← 表头行，固定
//!     ├──────┼──────┼──────┼──────┤
//!     │  r0  │      │      │      │
//!     │  r1  │      │      │      │   ← 表体，按 scroll_row / scroll_col 滚动
//!     └──────┴──────┴──────┴──────┘
//!        ↑ 行头列，固定

use ratatui::layout::{Position, Rect};
use times_table_core::{CellPosition, TableDimensions, TableModel};
use unicode_width::UnicodeWidthStr;

use crate::model::App;

use super::layout::screen_areas;

/// 单元格左右留白
const CELL_PADDING: u16 = 2;

/// 当前终端尺寸下的表格几何
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableGeometry {
    /// 表格绘制区域（边框内）
    pub area: Rect,
    pub dimensions: TableDimensions,
    /// 每个单元格的宽度
    pub cell_width: u16,
    /// 可见表体行数
    pub visible_rows: usize,
    /// 可见数据列数
    pub visible_cols: usize,
    /// 生效的行偏移（已限制在可滚动范围内）
    pub scroll_row: usize,
    /// 生效的列偏移
    pub scroll_col: usize,
}

impl TableGeometry {
    pub fn new(
        dimensions: TableDimensions,
        label_width: usize,
        area: Rect,
        scroll: (usize, usize),
    ) -> Self {
        let label = u16::try_from(label_width).unwrap_or(u16::MAX);
        let cell_width = label.saturating_add(CELL_PADDING).max(1);

        let visible_rows = usize::from(area.height.saturating_sub(1)).min(dimensions.rows);
        let visible_cols =
            usize::from((area.width / cell_width).saturating_sub(1)).min(dimensions.columns);

        let mut geometry = Self {
            area,
            dimensions,
            cell_width,
            visible_rows,
            visible_cols,
            scroll_row: 0,
            scroll_col: 0,
        };
        let (max_row, max_col) = geometry.max_scroll();
        geometry.scroll_row = scroll.0.min(max_row);
        geometry.scroll_col = scroll.1.min(max_col);
        geometry
    }

    /// 按表格内容与滚动偏移计算几何
    pub fn for_model(model: &TableModel, area: Rect, scroll: (usize, usize)) -> Self {
        Self::new(model.dimensions(), label_width(model), area, scroll)
    }

    /// 最大行偏移与最大列偏移
    pub fn max_scroll(&self) -> (usize, usize) {
        (
            self.dimensions.rows.saturating_sub(self.visible_rows),
            self.dimensions.columns.saturating_sub(self.visible_cols),
        )
    }

    /// 可见行（含表头行 0），自上而下
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(0).chain((1..=self.visible_rows).map(|i| i + self.scroll_row))
    }

    /// 可见列（含行头列 1），自左向右
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(1).chain((1..=self.visible_cols).map(|i| i + 1 + self.scroll_col))
    }

    /// 单元格在屏幕上的区域，不可见时返回 `None`
    pub fn cell_rect(&self, position: CellPosition) -> Option<Rect> {
        let slot_y = match position.row {
            0 => 0,
            row => {
                let index = row.checked_sub(1 + self.scroll_row)?;
                if index >= self.visible_rows {
                    return None;
                }
                index + 1
            }
        };
        let slot_x = match position.column {
            0 => return None,
            1 => 0,
            column => {
                let index = column.checked_sub(2 + self.scroll_col)?;
                if index >= self.visible_cols {
                    return None;
                }
                index + 1
            }
        };

        let y = self.area.y + u16::try_from(slot_y).ok()?;
        let x = self
            .area
            .x
            .checked_add(u16::try_from(slot_x).ok()?.checked_mul(self.cell_width)?)?;
        let rect = Rect::new(x, y, self.cell_width, 1).intersection(self.area);
        (!rect.is_empty()).then_some(rect)
    }

    /// 屏幕坐标对应的单元格
    pub fn hit_test(&self, x: u16, y: u16) -> Option<CellPosition> {
        if !self.area.contains(Position::new(x, y)) {
            return None;
        }

        let slot_y = usize::from(y - self.area.y);
        let row = match slot_y {
            0 => 0,
            slot if slot <= self.visible_rows => slot + self.scroll_row,
            _ => return None,
        };

        let slot_x = usize::from((x - self.area.x) / self.cell_width);
        let column = match slot_x {
            0 => 1,
            slot if slot <= self.visible_cols => slot + 1 + self.scroll_col,
            _ => return None,
        };

        Some(CellPosition::new(row, column))
    }
}

/// 按应用当前状态计算表格几何；没有挂载表格时返回 `None`
pub fn table_geometry(app: &App) -> Option<TableGeometry> {
    let model = app.table.model.as_ref()?;
    let areas = screen_areas(app.viewport);
    Some(TableGeometry::for_model(
        model,
        areas.table_inner,
        (app.table.scroll_row, app.table.scroll_col),
    ))
}

/// 最宽标签的显示宽度
fn label_width(model: &TableModel) -> usize {
    model
        .rows()
        .flat_map(|row| row.cells.iter())
        .map(|cell| cell.label.width())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DIMS: TableDimensions = TableDimensions {
        rows: 10,
        columns: 10,
    };

    fn geometry(scroll: (usize, usize)) -> TableGeometry {
        // 单元格宽 5，区域 32x6 → 5 行 5 列可见
        TableGeometry::new(DIMS, 3, Rect::new(10, 5, 32, 6), scroll)
    }

    #[test]
    fn test_visible_counts() {
        let g = geometry((0, 0));
        assert_eq!(g.cell_width, 5);
        assert_eq!(g.visible_rows, 5);
        assert_eq!(g.visible_cols, 5);
        assert_eq!(g.max_scroll(), (5, 5));
    }

    #[test]
    fn test_small_table_fits() {
        let dims = TableDimensions {
            rows: 2,
            columns: 3,
        };
        let g = TableGeometry::new(dims, 1, Rect::new(0, 0, 80, 20), (4, 4));
        assert_eq!((g.visible_rows, g.visible_cols), (2, 3));
        assert_eq!((g.scroll_row, g.scroll_col), (0, 0));
        assert_eq!(g.rows().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(g.columns().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let g = geometry((9, 7));
        assert_eq!((g.scroll_row, g.scroll_col), (5, 5));
    }

    #[test]
    fn test_hit_test_frozen_headers() {
        let g = geometry((2, 3));
        // 左上角
        assert_eq!(g.hit_test(10, 5), Some(CellPosition::new(0, 1)));
        // 表头行第一列数据
        assert_eq!(g.hit_test(15, 5), Some(CellPosition::new(0, 5)));
        // 行头列第一行表体
        assert_eq!(g.hit_test(14, 6), Some(CellPosition::new(3, 1)));
        // 表体
        assert_eq!(g.hit_test(21, 8), Some(CellPosition::new(5, 6)));
    }

    #[test]
    fn test_hit_test_outside() {
        let g = geometry((0, 0));
        assert_eq!(g.hit_test(9, 6), None);
        assert_eq!(g.hit_test(10, 11), None);
        // 最后一列之后的空白
        assert_eq!(g.hit_test(41, 6), None);
    }

    #[test]
    fn test_cell_rect_matches_hit_test() {
        let g = geometry((1, 1));
        for row in g.rows().collect::<Vec<_>>() {
            for column in g.columns().collect::<Vec<_>>() {
                let position = CellPosition::new(row, column);
                let rect = g.cell_rect(position).unwrap();
                assert_eq!(g.hit_test(rect.x, rect.y), Some(position));
            }
        }
        // 滚动出去的行
        assert_eq!(g.cell_rect(CellPosition::new(1, 1)), None);
    }
}
