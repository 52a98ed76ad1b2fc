//! 业务逻辑服务层
//!
//! 所有服务均为无状态函数，唯一的例外是 [`HoverState`]，
//! 它只保存当前表格上已应用的高亮。

mod highlight_service;
pub mod page_service;
mod table_builder;
mod validation_service;

pub use highlight_service::{highlight_for, HoverState};
pub use table_builder::build_table;
pub use validation_service::validate;
