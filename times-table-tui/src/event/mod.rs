//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件：悬停、点击、滚轮
//!             Event::Resize(Width , height)       // 终端窗口大小发生变化，重绘终端
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 帮助打开时，只响应 Esc / 退出键
//!                 - 全局快捷键，就地处理；
//!                 - 焦点位于表单，调用 handle_form_keys 处理
//!                 - 焦点位于表格，调用 handle_table_keys 处理
//!
//!             鼠标事件按上一帧的布局（app.viewport）还原到表单字段或表格单元格，
//!             见 view::layout 与 view::geometry。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
