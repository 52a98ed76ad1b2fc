//! 表格消息处理

use crate::message::TableMessage;
use crate::model::App;
use crate::view::geometry::table_geometry;

/// 处理表格消息
pub fn update(app: &mut App, msg: TableMessage) {
    match msg {
        TableMessage::PointerMoved(position) => {
            app.table.pointer_moved(position);
        }
        TableMessage::Scroll { rows, columns } => scroll(app, rows, columns),
        TableMessage::PageUp => {
            let page = page_size(app);
            scroll(app, -page, 0);
        }
        TableMessage::PageDown => {
            let page = page_size(app);
            scroll(app, page, 0);
        }
        TableMessage::ScrollHome => {
            app.table.scroll_home();
            app.table.pointer_left();
        }
    }
}

/// 按当前可见范围滚动
///
/// 滚动后指针下的单元格已经变化，悬停状态等下一次鼠标移动重新建立。
fn scroll(app: &mut App, rows: isize, columns: isize) {
    let Some(geometry) = table_geometry(app) else {
        return;
    };
    let (max_row, max_col) = geometry.max_scroll();
    app.table.clamp_scroll(max_row, max_col);
    app.table.scroll_by(rows, columns, max_row, max_col);
    app.table.pointer_left();
}

/// 一页的行数
fn page_size(app: &App) -> isize {
    table_geometry(app)
        .map(|g| isize::try_from(g.visible_rows).unwrap_or(isize::MAX))
        .unwrap_or(0)
        .max(1)
}
