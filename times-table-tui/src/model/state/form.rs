//! 表单状态

use times_table_core::RawInput;

/// 单个输入框允许的最大字符数
pub const MAX_INPUT_LEN: usize = 12;

/// 表单字段（输入框与按钮），顺序即 Tab 切换顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    HorizontalStart,
    HorizontalEnd,
    VerticalStart,
    VerticalEnd,
    Generate,
    Clear,
}

impl FormField {
    /// 所有字段，按 Tab 顺序
    pub const ALL: [FormField; 6] = [
        FormField::HorizontalStart,
        FormField::HorizontalEnd,
        FormField::VerticalStart,
        FormField::VerticalEnd,
        FormField::Generate,
        FormField::Clear,
    ];

    /// 四个输入框，按表单顺序
    pub const INPUTS: [FormField; 4] = [
        FormField::HorizontalStart,
        FormField::HorizontalEnd,
        FormField::VerticalStart,
        FormField::VerticalEnd,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// 下一个字段（循环）
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// 上一个字段（循环）
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// 输入框的下标，按钮返回 `None`
    pub fn input_index(self) -> Option<usize> {
        Self::INPUTS.iter().position(|f| *f == self)
    }

    /// 显示文本
    pub fn label(self) -> &'static str {
        match self {
            FormField::HorizontalStart => "Horizontal start",
            FormField::HorizontalEnd => "Horizontal end",
            FormField::VerticalStart => "Vertical start",
            FormField::VerticalEnd => "Vertical end",
            FormField::Generate => "[ Generate ]",
            FormField::Clear => "[ Clear ]",
        }
    }
}

/// 表单状态
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// 四个输入框的原始文本
    pub values: [String; 4],
    /// 当前焦点字段
    pub focus: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定输入框的文本
    pub fn value(&self, field: FormField) -> Option<&str> {
        field.input_index().map(|i| self.values[i].as_str())
    }

    /// 在当前输入框末尾追加字符；焦点在按钮上或已达长度上限时忽略
    pub fn input(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(value) = self.focused_value_mut() {
            if value.chars().count() < MAX_INPUT_LEN {
                value.push(ch);
            }
        }
    }

    /// 删除当前输入框的最后一个字符
    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_value_mut() {
            value.pop();
        }
    }

    /// 清空所有输入框
    pub fn clear(&mut self) {
        self.values = Default::default();
    }

    /// 以 core 的输入类型读出
    pub fn raw_input(&self) -> RawInput {
        let [hs, he, vs, ve] = &self.values;
        RawInput::new(hs.as_str(), he.as_str(), vs.as_str(), ve.as_str())
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        self.focus
            .input_index()
            .and_then(|i| self.values.get_mut(i))
    }
}
