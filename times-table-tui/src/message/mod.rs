//! Message 层：事件消息定义
//!
//! Event 层把终端输入翻译成这里的消息，Update 层消费它们。
//!
//!     AppMessage              // 主消息
//!         ├── Form(FormMessage)   // 左侧表单：输入、切换字段、提交、重置
//!         └── Table(TableMessage) // 右侧表格：悬停、滚动

mod app;
mod form;
mod table;

pub use app::AppMessage;
pub use form::FormMessage;
pub use table::TableMessage;
