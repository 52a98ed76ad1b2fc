//! 乘法表页面

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use times_table_core::{CellMarks, CellPosition, TableCell};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::geometry::TableGeometry;
use crate::view::theme::{colors, Styles};

/// 渲染表格区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(ref model) = app.table.model else {
        render_empty(frame, area);
        return;
    };

    let geometry =
        TableGeometry::for_model(model, area, (app.table.scroll_row, app.table.scroll_col));

    let columns: Vec<usize> = geometry.columns().collect();
    for row in geometry.rows() {
        for &column in &columns {
            let position = CellPosition::new(row, column);
            let (Some(cell), Some(rect)) = (model.cell(position), geometry.cell_rect(position))
            else {
                continue;
            };
            let style = cell_style(cell, app.table.hover.marks(position));
            draw_cell(frame, rect, &cell.label, style);
        }
    }
}

/// 没有表格时的提示
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled("No table yet", Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled(
            "Enter two ranges between -50 and 50, then press Enter.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn cell_style(cell: &TableCell, marks: CellMarks) -> Style {
    let c = colors();
    let base = if cell.kind.is_header() {
        Styles::table_header()
    } else {
        Style::default().fg(c.fg)
    };

    match (marks.row_hover, marks.column_hover) {
        (true, true) => base.bg(c.cross_hover).add_modifier(Modifier::BOLD),
        (false, true) => base.bg(c.column_hover),
        (true, false) => base.bg(c.row_hover),
        (false, false) => base,
    }
}

/// 右对齐绘制单元格文本，右侧留一列空白
fn draw_cell(frame: &mut Frame, rect: Rect, label: &str, style: Style) {
    let buf = frame.buffer_mut();
    buf.set_style(rect, style);

    let width = usize::from(rect.width.saturating_sub(1));
    let padding = width.saturating_sub(label.width());
    let text = format!("{}{label}", " ".repeat(padding));
    buf.set_stringn(rect.x, rect.y, text, width, style);
}
