//! Times Table TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置加载 (`backend/`)
//!
//! 校验、建表与高亮逻辑都在 `times-table-core` 中，
//! 本 crate 只负责把它们接到终端上。
//!
//!
//! fn `main()` {
//!
//!     load_config()           // 读取配置文件（可选）
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     init_terminal()         // raw mode + 备用屏幕 + 鼠标捕获
//!     App::from_config()      // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置（失败时使用默认值，错误在日志初始化后记录）
    let config_service = LocalConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (backend::AppConfig::default(), Some(e)),
    };

    // 2. 初始化日志
    let log_path = init_logging(&config)?;
    log::info!(
        "Starting Times Table TUI v{} (log file: {})",
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );
    if let Some(e) = config_error {
        log::warn!("Falling back to default configuration: {e}");
    }

    // 3. 应用主题
    view::theme::set_theme(config.theme);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::from_config(&config);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Main loop exited with error: {e:#}");
    } else {
        log::info!("Times Table TUI exited");
    }

    // 8. 返回结果
    result
}
