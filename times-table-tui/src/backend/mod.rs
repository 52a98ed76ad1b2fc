//! Backend 层：与外部环境交互
//!
//! 目前只有配置服务。配置文件是只读的，应用不会写回。

mod config_service;

pub use config_service::{AppConfig, ConfigError, ConfigService, LocalConfigService, APP_DIR_NAME};
