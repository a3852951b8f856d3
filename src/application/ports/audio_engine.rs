//! Audio Engine Port - 音频引擎抽象
//!
//! 按窄接口封装音频编解码：静音生成、解码、叠加、编码，
//! 全部作用于内存缓冲，文件读写由 MediaStoragePort 负责。

use thiserror::Error;

use crate::domain::song::MediaFormat;

/// 音频引擎错误
#[derive(Debug, Error)]
pub enum AudioEngineError {
    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 交错 PCM 缓冲
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// 交错排列的 f32 采样，取值范围 [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// 采样率（Hz）
    pub sample_rate: u32,
    /// 声道数
    pub channels: u16,
}

impl AudioBuffer {
    /// 每声道帧数
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// 时长（毫秒）
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frames() as u64 * 1000 / self.sample_rate as u64
    }
}

/// 编码配置
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// 输出格式
    pub format: MediaFormat,
    /// 目标比特率（bps），仅对有损格式生效
    pub bitrate: Option<u32>,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            format: MediaFormat::Mp3,
            bitrate: Some(192_000),
        }
    }
}

/// Audio Engine Port
///
/// 纯缓冲运算，无文件 IO
pub trait AudioEnginePort: Send + Sync {
    /// 生成指定时长的静音缓冲（采样率与声道数由引擎配置决定）
    fn silent(&self, duration_ms: u64) -> AudioBuffer;

    /// 解码音频字节流为 PCM 缓冲
    ///
    /// `ext_hint` 为容器探测提示（如 "wav"、"mp3"）
    fn decode(&self, data: &[u8], ext_hint: Option<&str>)
        -> Result<AudioBuffer, AudioEngineError>;

    /// 将 overlay 按 gain_db 增益后从 0 时刻叠加到 base 上
    ///
    /// 输出时长恒等于 base：overlay 超出部分丢弃，不足部分保留 base 原样。
    /// overlay 的采样率与声道布局先对齐到 base。
    fn overlay(&self, base: &AudioBuffer, overlay: &AudioBuffer, gain_db: f32) -> AudioBuffer;

    /// 编码缓冲为目标格式的字节流
    fn encode(&self, buffer: &AudioBuffer, config: &EncodeConfig)
        -> Result<Vec<u8>, AudioEngineError>;
}
