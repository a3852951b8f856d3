//! Synthesis Ports - 音轨生成引擎抽象
//!
//! 伴奏生成与人声合成的出站端口。真实实现会对接外部生成服务，
//! 当前仓库提供固定时长静音的占位实现。

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Engine error: {0}")]
    EngineError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// 伴奏生成请求
#[derive(Debug, Clone)]
pub struct InstrumentalRequest {
    /// 歌词（占位实现不使用，供真实引擎参考）
    pub lyrics: String,
    /// 流派标签
    pub genre: String,
}

/// 人声合成请求
#[derive(Debug, Clone)]
pub struct VocalRequest {
    pub lyrics: String,
    pub genre: String,
    /// 参考人声样本路径（占位实现忽略）
    pub voice_sample: Option<PathBuf>,
}

/// 渲染完成的音轨
#[derive(Debug, Clone)]
pub struct RenderedTrack {
    /// WAV 字节流
    pub audio_data: Vec<u8>,
    /// 时长（毫秒）
    pub duration_ms: u64,
    /// 采样率（Hz）
    pub sample_rate: u32,
}

/// Instrumental Engine Port
#[async_trait]
pub trait InstrumentalEnginePort: Send + Sync {
    /// 根据歌词与流派生成伴奏音轨
    async fn generate(&self, request: InstrumentalRequest)
        -> Result<RenderedTrack, SynthesisError>;
}

/// Vocal Engine Port
#[async_trait]
pub trait VocalEnginePort: Send + Sync {
    /// 根据歌词合成人声音轨，可携带参考人声
    async fn synthesize(&self, request: VocalRequest) -> Result<RenderedTrack, SynthesisError>;
}
