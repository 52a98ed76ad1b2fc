//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;       // 表单子消息：输入、提交、重置
//!         mod table;      // 表格子消息：悬停、滚动
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//! 提交与重置交给 `times_table_core::page_service`，App 作为 PageSurface 被它驱动。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。

mod form;
mod table;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::Focus(panel) => {
            app.focus = panel;
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
        }

        AppMessage::GoBack => {
            // 如果帮助打开，先关闭帮助
            if app.show_help {
                app.show_help = false;
            } else if app.focus.is_table() {
                app.focus = FocusPanel::Form;
            } else {
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::Noop => {}
    }
}
