use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "READER_CONFIG";

/// 程序配置文件
///
/// 加载顺序：默认值 → TOML 配置文件（可选）→ 环境变量
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 后端服务地址
    pub backend_base_url: String,
    /// 请求超时秒数，不设置时请求会一直等待
    pub request_timeout_secs: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 控制台启动时填入的下载数量（0 表示全部）
    pub default_paper_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: None,
            verbose_logging: false,
            output_log_file: "reader.log".to_string(),
            default_paper_limit: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    fn from_toml_str(content: &str, origin: &str) -> AppResult<Self> {
        let config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 加载配置：设置了 `READER_CONFIG` 时先读文件，再用环境变量覆盖
    pub fn load() -> AppResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Ok(Self::from_file(path)?.with_env_overrides()),
            Err(_) => Ok(Self::from_env()),
        }
    }

    fn with_env_overrides(self) -> Self {
        Self {
            backend_base_url: std::env::var("BACKEND_BASE_URL").unwrap_or(self.backend_base_url),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS").or(self.request_timeout_secs),
            verbose_logging: parse_env("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            default_paper_limit: parse_env("DEFAULT_PAPER_LIMIT").unwrap_or(self.default_paper_limit),
        }
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str) -> Option<T> {
    let value = std::env::var(var_name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("环境变量 {} 的值 '{}' 无法解析，使用默认值", var_name, value);
            None
        }
    }
}
