//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。
//!
//!     layout      主布局与区域划分
//!     geometry    表格几何（渲染与鼠标命中测试共用）
//!     theme       主题和样式
//!     components  表单、状态栏、帮助弹窗
//!     pages       表格

mod components;
pub mod geometry;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
