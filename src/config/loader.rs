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

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `QUICKMP3_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `QUICKMP3_SERVER__HOST=127.0.0.1`
/// - `QUICKMP3_SERVER__PORT=8080`
/// - `QUICKMP3_STORAGE__MEDIA_DIR=/data/generated`
/// - `QUICKMP3_AUDIO__OUTPUT_FORMAT=opus`
///
/// # 返回
/// - `Ok(AppConfig)` - 成功加载的配置
/// - `Err(ConfigError)` - 加载失败
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("storage.media_dir", "generated")?
        .set_default("storage.max_upload_bytes", 0)?
        .set_default("audio.sample_rate", 44100)?
        .set_default("audio.channels", 2)?
        .set_default("audio.placeholder_duration_ms", 10000)?
        .set_default("audio.vocals_gain_db", -3.0)?
        .set_default("audio.output_format", "mp3")?
        .set_default("audio.bitrate", 192000)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: QUICKMP3_
    // 层级分隔符: __ (双下划线)
    // 例如: QUICKMP3_AUDIO__BITRATE=128000
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("QUICKMP3")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证媒体目录
    if config.storage.media_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Media directory cannot be empty".to_string(),
        ));
    }

    // 验证音频参数
    if config.audio.sample_rate == 0 {
        return Err(ConfigError::ValidationError(
            "Audio sample rate cannot be 0".to_string(),
        ));
    }

    if config.audio.channels == 0 || config.audio.channels > 2 {
        return Err(ConfigError::ValidationError(
            "Audio channels must be 1 or 2".to_string(),
        ));
    }

    if config.audio.placeholder_duration_ms == 0 {
        return Err(ConfigError::ValidationError(
            "Placeholder duration cannot be 0".to_string(),
        ));
    }

    if config.audio.bitrate == 0 {
        return Err(ConfigError::ValidationError(
            "Audio bitrate cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Media Directory: {:?}", config.storage.media_dir);
    if config.storage.max_upload_bytes > 0 {
        tracing::info!("Max Upload: {} bytes", config.storage.max_upload_bytes);
    }
    tracing::info!("Output Format: {}", config.audio.output_format);
    tracing::info!("Bitrate: {} bps", config.audio.bitrate);
    tracing::info!(
        "Mix: {} Hz, {} ch, vocals gain {} dB",
        config.audio.sample_rate,
        config.audio.channels,
        config.audio.vocals_gain_db
    );
    tracing::info!(
        "Placeholder Duration: {} ms",
        config.audio.placeholder_duration_ms
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
    }

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
    fn test_validation_error_for_empty_media_dir() {
        let mut config = AppConfig::default();
        config.storage.media_dir = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_three_channels() {
        let mut config = AppConfig::default();
        config.audio.channels = 3;
        assert!(validate_config(&config).is_err());
    }
}
