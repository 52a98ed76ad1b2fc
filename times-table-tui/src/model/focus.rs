//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧表单面板
    #[default]
    Form,
    /// 右侧表格面板
    Table,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Form,
        }
    }

    /// 是否是表单面板
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    /// 是否是表格面板
    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }
}
