//! 应用主消息枚举

use super::{FormMessage, TableMessage};
use crate::model::FocusPanel;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（表单 ↔ 表格）
    ToggleFocus,

    /// 把焦点移到指定面板（鼠标点击）
    Focus(FocusPanel),

    /// 表单相关消息
    Form(FormMessage),

    /// 表格相关消息
    Table(TableMessage),

    /// 返回：关闭帮助，或从表格回到表单
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
