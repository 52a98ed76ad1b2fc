//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub error: Color,
    pub muted: Color,
    /// 表头行与行头列
    pub header_bg: Color,
    pub header_fg: Color,
    /// 悬停所在行
    pub row_hover: Color,
    /// 悬停所在列
    pub column_hover: Color,
    /// 行列交叉处（悬停单元格本身）
    pub cross_hover: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            header_bg: Color::Rgb(45, 45, 48),
            header_fg: Color::Rgb(156, 220, 254),
            row_hover: Color::Rgb(52, 58, 70),
            column_hover: Color::Rgb(40, 66, 92),
            cross_hover: Color::Rgb(0, 92, 160),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
            header_bg: Color::Rgb(230, 230, 235),
            header_fg: Color::Rgb(0, 70, 140),
            row_hover: Color::Rgb(238, 242, 250),
            column_hover: Color::Rgb(220, 234, 250),
            cross_hover: Color::Rgb(170, 208, 245),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(230, 230, 230))
    }

    /// 表头单元格样式
    pub fn table_header() -> Style {
        let c = colors();
        Style::default()
            .bg(c.header_bg)
            .fg(c.header_fg)
            .add_modifier(Modifier::BOLD)
    }
}
