//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态，实现 core 的 PageSurface
//!         mod focus;          // 焦点状态（Form / Table）
//!         pub mod state;      // 表单与表格状态
//!
//! App 实现了 `times_table_core::PageSurface`：
//!     - 四个输入框        ← FormState.values
//!     - 错误区域          ← App.error_text
//!     - 表格挂载点        ← TableState.model
//! 因此提交与重置直接交给 `times_table_core::page_service` 处理。

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
