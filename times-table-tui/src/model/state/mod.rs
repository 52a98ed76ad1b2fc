//! 页面状态模块
//!
//! 定义表单与表格的状态数据结构

mod form;
mod table;

pub use form::{FormField, FormState};
pub use table::TableState;
