//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// 快捷键列表：（按键，说明）
const GLOBAL_KEYS: [(&str, &str); 5] = [
    ("Ctrl+t/F6", "Switch panel"),
    ("Alt+c", "Clear inputs and table"),
    ("F1", "Help"),
    ("Esc", "Back/Close"),
    ("Alt+q", "Quit"),
];

const FORM_KEYS: [(&str, &str); 3] = [
    ("Tab/S-Tab", "Next/Previous field"),
    ("Enter", "Generate (Clear on its button)"),
    ("Backspace", "Delete character"),
];

const TABLE_KEYS: [(&str, &str); 3] = [
    ("↑↓←→/hjkl", "Scroll"),
    ("PgUp/PgDn", "Scroll a page"),
    ("Home", "Back to the top-left"),
];

/// 计算居中矩形
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let area = centered_rect(50, 21, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (title, keys) in [
        ("Global shortcuts", &GLOBAL_KEYS[..]),
        ("Form", &FORM_KEYS[..]),
        ("Table", &TABLE_KEYS[..]),
    ] {
        lines.push(Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), Style::default().fg(Color::Yellow)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        "Move the mouse over the table to highlight",
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::styled(
        "Press Esc to close the help",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
