//! 测试辅助模块
//!
//! 提供 `PageSurface` 的 mock 实现。

use crate::traits::PageSurface;
use crate::types::{RawInput, TableModel};

// ===== MockSurface =====

#[derive(Debug, Default)]
pub struct MockSurface {
    pub input: RawInput,
    pub errors: Option<String>,
    pub table: Option<TableModel>,
    /// mount_table 被调用的次数
    pub mount_count: usize,
}

impl MockSurface {
    pub fn with_input(hs: &str, he: &str, vs: &str, ve: &str) -> Self {
        Self {
            input: RawInput::new(hs, he, vs, ve),
            ..Self::default()
        }
    }

    pub fn set_input(&mut self, hs: &str, he: &str, vs: &str, ve: &str) {
        self.input = RawInput::new(hs, he, vs, ve);
    }
}

impl PageSurface for MockSurface {
    fn read_input(&self) -> RawInput {
        self.input.clone()
    }

    fn clear_inputs(&mut self) {
        self.input = RawInput::default();
    }

    fn show_errors(&mut self, text: &str) {
        self.errors = Some(text.to_string());
    }

    fn clear_errors(&mut self) {
        self.errors = None;
    }

    fn mount_table(&mut self, table: TableModel) {
        self.table = Some(table);
        self.mount_count += 1;
    }

    fn unmount_table(&mut self) {
        self.table = None;
    }
}
