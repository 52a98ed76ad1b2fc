//! 日志初始化
//!
//! 终端被 UI 占用，日志一律写入文件。
//! 代码中统一使用 `log` 宏，由 tracing-subscriber 的 `tracing-log` 桥接输出。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::{AppConfig, APP_DIR_NAME};

/// 覆盖日志级别的环境变量
const LOG_ENV: &str = "TIMES_TABLE_LOG";

/// 默认日志文件名
const LOG_FILE_NAME: &str = "times-table.log";

/// 初始化文件日志，返回日志文件路径
pub fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let path = log_file_path(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(build_filter(&config.log_level))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(path)
}

/// 环境变量优先，其次配置中的级别，都无效时回退到 info
fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn log_file_path(config: &AppConfig) -> Result<PathBuf> {
    if let Some(ref path) = config.log_file {
        return Ok(path.clone());
    }
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
        .context("Cannot determine a data directory for the log file")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_log_file_wins() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/var/tmp/custom.log")),
            ..AppConfig::default()
        };
        assert_eq!(
            log_file_path(&config).unwrap(),
            PathBuf::from("/var/tmp/custom.log")
        );
    }
}
