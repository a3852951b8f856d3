//! QuickMP3 - 歌词转歌曲演示服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Song Context: 歌曲生成上下文（标识、音轨类型、媒体文件名）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（InstrumentalEngine, VocalEngine, AudioEngine, MediaStorage）
//! - Commands: 歌曲生成命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（生成、媒体下载、健康检查）
//! - Adapters: PCM 音频引擎、占位合成引擎、媒体目录存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
