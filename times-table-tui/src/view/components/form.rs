//! 左侧表单组件

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::state::FormField;
use crate::model::App;
use crate::view::layout::{panel_block, FormAreas};
use crate::view::theme::{colors, Styles};

/// 输入行前缀
const PROMPT: &str = "> ";

/// 渲染表单面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let panel_focused = app.focus.is_form() && !app.show_help;
    frame.render_widget(panel_block(" Range ", panel_focused), area);

    let areas = FormAreas::new(area);
    let c = colors();

    // === 四个输入框 ===
    for field in FormField::INPUTS {
        let rect = areas.rect(field);
        let focused = panel_focused && app.form.focus == field;
        let value = app.form.value(field).unwrap_or_default();

        let label_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        let value_style = if focused {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };

        let lines = vec![
            Line::styled(field.label(), label_style),
            Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(c.muted)),
                Span::styled(value, value_style),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), rect);

        if focused {
            let offset = u16::try_from(PROMPT.width() + value.width()).unwrap_or(u16::MAX);
            let x = rect.x.saturating_add(offset).min(rect.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, rect.y + 1));
        }
    }

    // === 按钮 ===
    for field in [FormField::Generate, FormField::Clear] {
        let style = if panel_focused && app.form.focus == field {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        frame.render_widget(
            Paragraph::new(field.label()).style(style),
            areas.rect(field),
        );
    }

    // === 错误区域 ===
    if let Some(ref text) = app.error_text {
        let errors = Paragraph::new(text.as_str())
            .style(Style::default().fg(c.error))
            .wrap(Wrap { trim: true });
        frame.render_widget(errors, areas.errors);
    }
}
