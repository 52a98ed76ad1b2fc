//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::view::theme::Theme;

/// 应用目录名（配置目录与数据目录下）
pub const APP_DIR_NAME: &str = "times-table";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 配色主题
    pub theme: Theme,
    /// 是否启用鼠标悬停高亮
    pub hover_highlight: bool,
    /// 默认日志级别（`TIMES_TABLE_LOG` 环境变量优先）
    pub log_level: String,
    /// 日志文件路径，缺省时写入数据目录
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            hover_highlight: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取文件失败
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 文件内容不是合法配置
    #[error("Invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用平台配置目录下的 `times-table/config.json`
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
        }
    }

    /// 使用指定路径
    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        match self.path {
            // 没有配置文件时使用默认配置
            Some(ref path) if path.exists() => Self::load_from(path),
            _ => Ok(AppConfig::default()),
        }
    }
}
