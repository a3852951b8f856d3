//! Application State
//!
//! 包含所有端口与 Command Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    GenerateSongHandler,
    MixSettings,
    // Ports
    AudioEnginePort,
    InstrumentalEnginePort,
    MediaStoragePort,
    VocalEnginePort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub media_storage: Arc<dyn MediaStoragePort>,

    // ========== Command Handlers ==========
    pub generate_song_handler: GenerateSongHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        instrumental_engine: Arc<dyn InstrumentalEnginePort>,
        vocal_engine: Arc<dyn VocalEnginePort>,
        audio_engine: Arc<dyn AudioEnginePort>,
        media_storage: Arc<dyn MediaStoragePort>,
        mix_settings: MixSettings,
    ) -> Self {
        Self {
            media_storage: media_storage.clone(),
            generate_song_handler: GenerateSongHandler::new(
                instrumental_engine,
                vocal_engine,
                audio_engine,
                media_storage,
                mix_settings,
            ),
        }
    }
}
