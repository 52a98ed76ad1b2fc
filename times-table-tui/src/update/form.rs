//! 表单消息处理

use times_table_core::page_service;

use crate::message::FormMessage;
use crate::model::state::FormField;
use crate::model::{App, FocusPanel};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::NextField => {
            app.form.focus = app.form.focus.next();
        }
        FormMessage::PrevField => {
            app.form.focus = app.form.focus.prev();
        }
        FormMessage::FocusField(field) => {
            app.focus = FocusPanel::Form;
            app.form.focus = field;
        }
        FormMessage::Input(c) => {
            app.form.input(c);
        }
        FormMessage::Backspace => {
            app.form.backspace();
        }
        FormMessage::Activate => {
            if app.form.focus == FormField::Clear {
                reset(app);
            } else {
                submit(app);
            }
        }
        FormMessage::Submit => submit(app),
        FormMessage::Reset => reset(app),
    }
}

/// 生成表格
fn submit(app: &mut App) {
    app.focus = FocusPanel::Form;
    match page_service::submit(app) {
        Ok(dimensions) => {
            app.set_status(format!(
                "Generated {} × {} table",
                dimensions.rows, dimensions.columns
            ));
        }
        Err(_) => {
            app.set_status("Validation failed");
        }
    }
}

/// 清空输入、错误与表格
fn reset(app: &mut App) {
    page_service::reset(app);
    app.focus = FocusPanel::Form;
    app.form.focus = FormField::HorizontalStart;
    app.set_status("Cleared");
}
