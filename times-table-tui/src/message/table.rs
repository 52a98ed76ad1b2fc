//! 表格消息

use times_table_core::CellPosition;

/// 表格消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    /// 鼠标移动到某个单元格上，`None` 表示移出了表格
    PointerMoved(Option<CellPosition>),
    /// 按行列滚动
    Scroll { rows: isize, columns: isize },
    /// 向上翻一页
    PageUp,
    /// 向下翻一页
    PageDown,
    /// 回到左上角
    ScrollHome,
}
