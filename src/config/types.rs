//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::song::MediaFormat;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 音频配置
    #[serde(default)]
    pub audio: AudioConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            audio: AudioConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 生成媒体文件的存储目录
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,

    /// 上传文件最大大小（字节），0 表示不限制
    #[serde(default)]
    pub max_upload_bytes: u64,
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_dir: default_media_dir(),
            max_upload_bytes: 0,
        }
    }
}

/// 音频配置
#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    /// 混音工作采样率（Hz）
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// 声道数
    /// 1 表示单声道，2 表示立体声
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// 占位引擎生成的音轨时长（毫秒）
    #[serde(default = "default_placeholder_duration_ms")]
    pub placeholder_duration_ms: u64,

    /// 混音时人声相对伴奏的增益（dB）
    #[serde(default = "default_vocals_gain_db")]
    pub vocals_gain_db: f32,

    /// 成品输出格式
    /// 可选: wav, mp3, opus
    #[serde(default)]
    pub output_format: MediaFormat,

    /// 目标比特率（bps），用于有损压缩格式
    #[serde(default = "default_bitrate")]
    pub bitrate: u32,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_channels() -> u16 {
    2 // 立体声
}

fn default_placeholder_duration_ms() -> u64 {
    10000 // 10 秒
}

fn default_vocals_gain_db() -> f32 {
    -3.0
}

fn default_bitrate() -> u32 {
    192000 // 192kbps CBR
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            placeholder_duration_ms: default_placeholder_duration_ms(),
            vocals_gain_db: default_vocals_gain_db(),
            output_format: MediaFormat::default(),
            bitrate: default_bitrate(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.media_dir, PathBuf::from("generated"));
        assert_eq!(config.audio.placeholder_duration_ms, 10000);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_default_output_format_is_mp3() {
        let config = AudioConfig::default();
        assert_eq!(config.output_format, MediaFormat::Mp3);
        assert_eq!(config.bitrate, 192000);
    }
}
