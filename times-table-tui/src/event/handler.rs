//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, TableMessage};
use crate::model::state::FormField;
use crate::model::{App, FocusPanel};
use crate::view::geometry::table_geometry;
use crate::view::layout::{screen_areas, FormAreas};

/// 滚轮每格滚动的行数
const WHEEL_STEP: isize = 3;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助打开时只能关闭
    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => AppMessage::GoBack,
            _ => AppMessage::Noop,
        };
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::RESET.matches(&key) {
        return AppMessage::Form(FormMessage::Reset);
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) || DefaultKeymap::TOGGLE_FOCUS_ALT.matches(&key)
    {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // 根据焦点位置处理按键
    match app.focus {
        FocusPanel::Form => handle_form_keys(key),
        FocusPanel::Table => handle_table_keys(key),
    }
}

/// 处理表单面板的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::Form(FormMessage::NextField);
    }
    // 部分终端的 BackTab 不带 SHIFT
    if DefaultKeymap::PREV_FIELD.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::Form(FormMessage::PrevField);
    }
    if DefaultKeymap::ACTIVATE.matches(&key) {
        return AppMessage::Form(FormMessage::Activate);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理表格面板的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    let scroll = |rows, columns| AppMessage::Table(TableMessage::Scroll { rows, columns });

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => scroll(-1, 0),
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => scroll(1, 0),
        // ← 或 h: 左移
        KeyCode::Left | KeyCode::Char('h') => scroll(0, -1),
        // → 或 l: 右移
        KeyCode::Right | KeyCode::Char('l') => scroll(0, 1),

        KeyCode::PageUp => AppMessage::Table(TableMessage::PageUp),
        KeyCode::PageDown => AppMessage::Table(TableMessage::PageDown),
        KeyCode::Home => AppMessage::Table(TableMessage::ScrollHome),

        KeyCode::Char('?') => AppMessage::ShowHelp,

        // Tab: 回到表单
        KeyCode::Tab | KeyCode::BackTab => AppMessage::Focus(FocusPanel::Form),

        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if app.show_help {
        return AppMessage::Noop;
    }

    let position = Position::new(mouse.column, mouse.row);
    let areas = screen_areas(app.viewport);
    let over_table = areas.table.contains(position);

    match mouse.kind {
        MouseEventKind::Moved => handle_pointer_move(mouse, app),

        MouseEventKind::Down(MouseButton::Left) if areas.form.contains(position) => {
            match FormAreas::new(areas.form).field_at(mouse.column, mouse.row) {
                Some(FormField::Generate) => AppMessage::Form(FormMessage::Submit),
                Some(FormField::Clear) => AppMessage::Form(FormMessage::Reset),
                Some(field) => AppMessage::Form(FormMessage::FocusField(field)),
                None => AppMessage::Focus(FocusPanel::Form),
            }
        }
        MouseEventKind::Down(MouseButton::Left) if over_table => {
            AppMessage::Focus(FocusPanel::Table)
        }

        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp if over_table => {
            let step = if mouse.kind == MouseEventKind::ScrollDown {
                WHEEL_STEP
            } else {
                -WHEEL_STEP
            };
            // Shift + 滚轮横向滚动
            let (rows, columns) = if mouse.modifiers.contains(KeyModifiers::SHIFT) {
                (0, step)
            } else {
                (step, 0)
            };
            AppMessage::Table(TableMessage::Scroll { rows, columns })
        }
        MouseEventKind::ScrollRight if over_table => AppMessage::Table(TableMessage::Scroll {
            rows: 0,
            columns: WHEEL_STEP,
        }),
        MouseEventKind::ScrollLeft if over_table => AppMessage::Table(TableMessage::Scroll {
            rows: 0,
            columns: -WHEEL_STEP,
        }),

        _ => AppMessage::Noop,
    }
}

/// 鼠标移动：还原到单元格
fn handle_pointer_move(mouse: MouseEvent, app: &App) -> AppMessage {
    if !app.hover_enabled {
        return AppMessage::Noop;
    }
    let Some(geometry) = table_geometry(app) else {
        return AppMessage::Noop;
    };

    let cell = geometry.hit_test(mouse.column, mouse.row);
    if cell == app.table.hover.hovered() {
        return AppMessage::Noop;
    }
    AppMessage::Table(TableMessage::PointerMoved(cell))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use times_table_core::{page_service, CellPosition};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// 100x30 的屏幕上挂载 1..3 × 2..4 的表格
    fn app_with_table() -> App {
        let mut app = App::new();
        app.viewport = Rect::new(0, 0, 100, 30);
        app.form.values = ["1".into(), "3".into(), "2".into(), "4".into()];
        page_service::submit(&mut app).unwrap();
        app
    }

    #[test]
    fn test_release_is_ignored() {
        let app = App::new();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(release, &app), AppMessage::Noop);
    }

    #[test]
    fn test_global_keys() {
        let app = App::new();
        let cases = [
            (press(KeyCode::Char('c'), KeyModifiers::CONTROL), AppMessage::Quit),
            (press(KeyCode::Char('q'), KeyModifiers::ALT), AppMessage::Quit),
            (press(KeyCode::F(1), KeyModifiers::NONE), AppMessage::ShowHelp),
            (
                press(KeyCode::Char('c'), KeyModifiers::ALT),
                AppMessage::Form(FormMessage::Reset),
            ),
            (press(KeyCode::Char('t'), KeyModifiers::CONTROL), AppMessage::ToggleFocus),
            (press(KeyCode::F(6), KeyModifiers::NONE), AppMessage::ToggleFocus),
            (press(KeyCode::Esc, KeyModifiers::NONE), AppMessage::GoBack),
        ];
        for (event, expected) in cases {
            assert_eq!(handle_event(event, &app), expected);
        }
    }

    #[test]
    fn test_form_keys() {
        let app = App::new();
        assert_eq!(
            handle_event(press(KeyCode::Char('-'), KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Input('-'))
        );
        // 表单焦点下 q 与 ? 都是普通字符
        assert_eq!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Input('q'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Input('?'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Tab, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::NextField)
        );
        assert_eq!(
            handle_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::PrevField)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Activate)
        );
        assert_eq!(
            handle_event(press(KeyCode::Backspace, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Backspace)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn test_table_keys() {
        let mut app = App::new();
        app.focus = FocusPanel::Table;
        assert_eq!(
            handle_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app),
            AppMessage::Table(TableMessage::Scroll { rows: 1, columns: 0 })
        );
        assert_eq!(
            handle_event(press(KeyCode::Left, KeyModifiers::NONE), &app),
            AppMessage::Table(TableMessage::Scroll { rows: 0, columns: -1 })
        );
        assert_eq!(
            handle_event(press(KeyCode::PageDown, KeyModifiers::NONE), &app),
            AppMessage::Table(TableMessage::PageDown)
        );
        assert_eq!(
            handle_event(press(KeyCode::Home, KeyModifiers::NONE), &app),
            AppMessage::Table(TableMessage::ScrollHome)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE), &app),
            AppMessage::ShowHelp
        );
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = App::new();
        app.show_help = true;
        assert_eq!(
            handle_event(press(KeyCode::Char('1'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::GoBack
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
    }

    #[test]
    fn test_mouse_move_hit_tests_table() {
        let app = app_with_table();
        // 表格区域从 (33, 2) 开始，单元格宽 4
        assert_eq!(
            handle_event(mouse(MouseEventKind::Moved, 38, 4), &app),
            AppMessage::Table(TableMessage::PointerMoved(Some(CellPosition::new(2, 2))))
        );
        // 表格之外且当前没有悬停
        assert_eq!(
            handle_event(mouse(MouseEventKind::Moved, 5, 5), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn test_mouse_move_leaves_table() {
        let mut app = app_with_table();
        app.table.pointer_moved(Some(CellPosition::new(1, 2)));
        assert_eq!(
            handle_event(mouse(MouseEventKind::Moved, 5, 5), &app),
            AppMessage::Table(TableMessage::PointerMoved(None))
        );
    }

    #[test]
    fn test_mouse_move_respects_config() {
        let mut app = app_with_table();
        app.hover_enabled = false;
        assert_eq!(
            handle_event(mouse(MouseEventKind::Moved, 38, 4), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn test_mouse_clicks() {
        let mut app = App::new();
        app.viewport = Rect::new(0, 0, 100, 30);
        let down = MouseEventKind::Down(MouseButton::Left);

        assert_eq!(
            handle_event(mouse(down, 5, 9), &app),
            AppMessage::Form(FormMessage::FocusField(FormField::VerticalStart))
        );
        assert_eq!(
            handle_event(mouse(down, 3, 14), &app),
            AppMessage::Form(FormMessage::Submit)
        );
        assert_eq!(
            handle_event(mouse(down, 16, 14), &app),
            AppMessage::Form(FormMessage::Reset)
        );
        assert_eq!(
            handle_event(mouse(down, 60, 10), &app),
            AppMessage::Focus(FocusPanel::Table)
        );
    }

    #[test]
    fn test_mouse_wheel_over_table() {
        let app = app_with_table();
        assert_eq!(
            handle_event(mouse(MouseEventKind::ScrollDown, 60, 10), &app),
            AppMessage::Table(TableMessage::Scroll { rows: 3, columns: 0 })
        );
        assert_eq!(
            handle_event(mouse(MouseEventKind::ScrollUp, 5, 10), &app),
            AppMessage::Noop
        );
    }
}
