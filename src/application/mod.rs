//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（AudioEngine、InstrumentalEngine、VocalEngine、MediaStorage）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{GenerateSongHandler, GenerateSongResponse, MixSettings},
    GenerateSong, VoiceSampleUpload,
};

pub use error::ApplicationError;

pub use ports::{
    // Audio engine
    AudioBuffer,
    AudioEngineError,
    AudioEnginePort,
    EncodeConfig,
    // Synthesis engines
    InstrumentalEnginePort,
    InstrumentalRequest,
    // Media storage
    MediaStorageError,
    MediaStoragePort,
    RenderedTrack,
    StoredMedia,
    SynthesisError,
    VocalEnginePort,
    VocalRequest,
};
