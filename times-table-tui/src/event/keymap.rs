//! 快捷键配置
//!
//! 定义全局快捷键映射；表单与表格内的普通按键在 handler 中就地匹配

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const RESET: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));

    // 面板切换
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::ctrl(KeyCode::Char('t'));
    pub const TOGGLE_FOCUS_ALT: KeyBinding = KeyBinding::key(KeyCode::F(6));

    // 表单
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const PREV_FIELD: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
