//! 主布局渲染
//!
//!     ┌ 标题栏 ─────────────────────────────────────────┐
//!     ├──────────────┬──────────────────────────────────┤
//!     │ 表单 (32 列) │ 表格                             │
//!     ├──────────────┴──────────────────────────────────┤
//!     └ 状态栏 ─────────────────────────────────────────┘
//!
//! 区域划分是纯函数，Event 层据此把鼠标坐标还原为表单字段或单元格。

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::state::FormField;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 左侧表单面板宽度
const FORM_WIDTH: u16 = 32;

/// 每个输入框占用的高度（标签 + 输入 + 空行）
const FIELD_SPACING: u16 = 3;

/// 屏幕区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    /// 表单面板（含边框）
    pub form: Rect,
    /// 表格面板（含边框）
    pub table: Rect,
    /// 表格面板边框内区域
    pub table_inner: Rect,
    pub status: Rect,
}

/// 按终端区域计算各部分位置
pub fn screen_areas(size: Rect) -> ScreenAreas {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(FORM_WIDTH), // 左侧表单
            Constraint::Min(1),             // 右侧表格
        ])
        .split(main_layout[1]);

    ScreenAreas {
        title: main_layout[0],
        form: columns[0],
        table: columns[1],
        table_inner: panel_block("", false).inner(columns[1]),
        status: main_layout[2],
    }
}

/// 表单面板内部区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    /// 四个输入框（标签行 + 输入行）
    pub fields: [Rect; 4],
    pub generate: Rect,
    pub clear: Rect,
    /// 错误区域
    pub errors: Rect,
}

impl FormAreas {
    /// 按表单面板（含边框）计算内部区域
    pub fn new(form: Rect) -> Self {
        let inner = panel_block("", false).inner(form);
        let at = |dx: u16, dy: u16, width: u16, height: u16| {
            Rect::new(
                inner.x.saturating_add(dx),
                inner.y.saturating_add(dy),
                width,
                height,
            )
            .intersection(inner)
        };

        let buttons_y = FIELD_SPACING * 4;
        let generate_width = width_of(FormField::Generate);
        let clear_width = width_of(FormField::Clear);

        Self {
            fields: [0u16, 1, 2, 3].map(|i| at(0, i * FIELD_SPACING, inner.width, 2)),
            generate: at(0, buttons_y, generate_width, 1),
            clear: at(generate_width + 2, buttons_y, clear_width, 1),
            errors: at(
                0,
                buttons_y + 2,
                inner.width,
                inner.height.saturating_sub(buttons_y + 2),
            ),
        }
    }

    /// 字段所在区域
    pub fn rect(&self, field: FormField) -> Rect {
        match field.input_index() {
            Some(index) => self.fields[index],
            None if field == FormField::Generate => self.generate,
            None => self.clear,
        }
    }

    /// 屏幕坐标对应的表单字段
    pub fn field_at(&self, x: u16, y: u16) -> Option<FormField> {
        let position = Position::new(x, y);
        FormField::ALL
            .into_iter()
            .find(|field| self.rect(*field).contains(position))
    }
}

fn width_of(field: FormField) -> u16 {
    u16::try_from(field.label().len()).unwrap_or(u16::MAX)
}

/// 面板边框
pub(super) fn panel_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let areas = screen_areas(frame.area());

    // 渲染标题栏
    render_title_bar(frame, areas.title);

    // 渲染左侧表单
    components::form::render(app, frame, areas.form);

    // 渲染右侧表格
    let block = panel_block(" Table ", app.focus.is_table());
    frame.render_widget(block, areas.table);
    pages::table::render(app, frame, areas.table_inner);

    // 渲染状态栏
    components::statusbar::render(app, frame, areas.status);

    // 渲染帮助（在最上层）
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" Times Table v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
