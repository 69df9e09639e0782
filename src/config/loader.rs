//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "SCENEPROMPT";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SCENEPROMPT_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SCENEPROMPT_SERVER__PORT=8080`
/// - `SCENEPROMPT_PARSER__CARD_LIMIT=5000`
/// - `SCENEPROMPT_PARSER__HOOK_ANCHOR=초반 30초 훅`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5070)?
        .set_default("server.max_body_bytes", 16 * 1024 * 1024)?
        .set_default("parser.card_limit", 10_000)?
        .set_default("parser.read_speed_cpm", 360)?
        .set_default("parser.hook_anchor", "초반 45초 훅")?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.parser.card_limit == 0 {
        return Err(ConfigError::ValidationError(
            "Card limit cannot be 0".to_string(),
        ));
    }

    if config.parser.read_speed_cpm == 0 {
        return Err(ConfigError::ValidationError(
            "Read speed cannot be 0".to_string(),
        ));
    }

    if config.parser.hook_anchor.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Hook anchor cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body: {} bytes", config.server.max_body_bytes);
    tracing::info!("Card Limit: {} chars", config.parser.card_limit);
    tracing::info!("Read Speed: {} chars/min", config.parser.read_speed_cpm);
    tracing::info!("Hook Anchor: {}", config.parser.hook_anchor);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_limit_and_speed() {
        let mut config = AppConfig::default();
        config.parser.card_limit = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.parser.read_speed_cpm = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_blank_anchor() {
        let mut config = AppConfig::default();
        config.parser.hook_anchor = "  ".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[parser]\ncard_limit = 1200\nhook_anchor = \"초반 30초 훅\""
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.parser.card_limit, 1200);
        assert_eq!(config.parser.read_speed_cpm, 360);
        assert_eq!(config.parser.hook_anchor, "초반 30초 훅");
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[parser]\nread_speed_cpm = 0").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_config_from_path(Some(Path::new("/nonexistent/sceneprompt.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
