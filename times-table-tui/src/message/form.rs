//! 表单消息

use crate::model::state::FormField;

/// 表单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 焦点移到下一个字段
    NextField,
    /// 焦点移到上一个字段
    PrevField,
    /// 焦点移到指定字段（鼠标点击）
    FocusField(FormField),
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 按下 Enter：在 Clear 按钮上重置，其余位置提交
    Activate,
    /// 生成表格
    Submit,
    /// 清空输入、错误与表格
    Reset,
}
