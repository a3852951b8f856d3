//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_engine;
mod media_storage;
mod synthesis;

pub use audio_engine::{AudioBuffer, AudioEngineError, AudioEnginePort, EncodeConfig};
pub use media_storage::{MediaStorageError, MediaStoragePort, StoredMedia};
pub use synthesis::{
    InstrumentalEnginePort, InstrumentalRequest, RenderedTrack, SynthesisError, VocalEnginePort,
    VocalRequest,
};
