//! 应用主状态结构

use ratatui::layout::Rect;
use times_table_core::{PageSurface, RawInput, TableModel};

use super::state::{FormState, TableState};
use super::FocusPanel;
use crate::backend::AppConfig;

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 是否启用鼠标悬停高亮
    pub hover_enabled: bool,

    /// 上一次绘制的屏幕区域
    pub viewport: Rect,

    // === 页面状态 ===
    /// 输入表单
    pub form: FormState,
    /// 错误区域文本，`None` 表示为空
    pub error_text: Option<String>,
    /// 表格区域
    pub table: TableState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Form,
            status_message: None,
            show_help: false,
            hover_enabled: true,
            viewport: Rect::default(),
            form: FormState::new(),
            error_text: None,
            table: TableState::new(),
        }
    }

    /// 按配置创建应用实例
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            hover_enabled: config.hover_highlight,
            ..Self::new()
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSurface for App {
    fn read_input(&self) -> RawInput {
        self.form.raw_input()
    }

    fn clear_inputs(&mut self) {
        self.form.clear();
    }

    fn show_errors(&mut self, text: &str) {
        self.error_text = Some(text.to_string());
    }

    fn clear_errors(&mut self) {
        self.error_text = None;
    }

    fn mount_table(&mut self, table: TableModel) {
        self.table.mount(table);
    }

    fn unmount_table(&mut self) {
        self.table.unmount();
    }
}
