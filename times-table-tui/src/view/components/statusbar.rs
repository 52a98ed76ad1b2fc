//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.show_help {
        hints.push(("Esc", "Close Help"));
        return hints;
    }

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::Form => {
            hints.push(("Tab", "Next Field"));
            hints.push(("Enter", "Generate"));
            hints.push(("Alt+c", "Clear"));
            hints.push(("Ctrl+t", "Table"));
        }
        FocusPanel::Table => {
            if app.table.is_mounted() {
                hints.push(("↑↓←→", "Scroll"));
                hints.push(("PgUp/PgDn", "Page"));
            }
            hints.push(("Esc", "Back"));
            hints.push(("?", "Help"));
        }
    }

    // Quit
    hints.push(("Alt+q", "Quit"));

    hints
}
