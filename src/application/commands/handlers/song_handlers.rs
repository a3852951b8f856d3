//! Song Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateSong, VoiceSampleUpload};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioEnginePort, EncodeConfig, InstrumentalEnginePort, InstrumentalRequest, MediaStoragePort,
    StoredMedia, VocalEnginePort, VocalRequest,
};
use crate::domain::song::{MediaFormat, SongId, TrackKind};

/// 混音参数
#[derive(Debug, Clone)]
pub struct MixSettings {
    /// 人声相对伴奏的增益（dB）
    pub vocals_gain_db: f32,
    /// 成品输出格式
    pub output_format: MediaFormat,
    /// 有损格式目标比特率（bps）
    pub bitrate: u32,
}

impl Default for MixSettings {
    fn default() -> Self {
        Self {
            vocals_gain_db: -3.0,
            output_format: MediaFormat::Mp3,
            bitrate: 192_000,
        }
    }
}

/// 生成歌曲结果
#[derive(Debug, Clone)]
pub struct GenerateSongResponse {
    pub song_id: SongId,
    pub file_name: String,
    pub genre: String,
    pub duration_seconds: u64,
}

/// GenerateSong Handler
///
/// 线性编排：参考人声落盘（可选）→ 伴奏 → 人声 → 混音 → 元数据。
/// 任一步失败直接向上传播，已写入的中间音轨不做清理。
pub struct GenerateSongHandler {
    instrumental_engine: Arc<dyn InstrumentalEnginePort>,
    vocal_engine: Arc<dyn VocalEnginePort>,
    audio_engine: Arc<dyn AudioEnginePort>,
    media_storage: Arc<dyn MediaStoragePort>,
    settings: MixSettings,
}

impl GenerateSongHandler {
    pub fn new(
        instrumental_engine: Arc<dyn InstrumentalEnginePort>,
        vocal_engine: Arc<dyn VocalEnginePort>,
        audio_engine: Arc<dyn AudioEnginePort>,
        media_storage: Arc<dyn MediaStoragePort>,
        settings: MixSettings,
    ) -> Self {
        Self {
            instrumental_engine,
            vocal_engine,
            audio_engine,
            media_storage,
            settings,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateSong,
    ) -> Result<GenerateSongResponse, ApplicationError> {
        let voice_sample_path = match &command.voice_sample {
            Some(sample) => Some(self.persist_voice_sample(sample).await?.path),
            None => None,
        };

        let instrumental = self
            .instrumental_engine
            .generate(InstrumentalRequest {
                lyrics: command.lyrics.clone(),
                genre: command.genre.clone(),
            })
            .await?;
        let instrumental_media = self
            .media_storage
            .save(TrackKind::Instrumental, "wav", &instrumental.audio_data)
            .await?;

        tracing::debug!(
            file_name = %instrumental_media.file_name,
            duration_ms = instrumental.duration_ms,
            "Instrumental track rendered"
        );

        let vocals = self
            .vocal_engine
            .synthesize(VocalRequest {
                lyrics: command.lyrics.clone(),
                genre: command.genre.clone(),
                voice_sample: voice_sample_path,
            })
            .await?;
        let vocals_media = self
            .media_storage
            .save(TrackKind::Vocals, "wav", &vocals.audio_data)
            .await?;

        tracing::debug!(
            file_name = %vocals_media.file_name,
            duration_ms = vocals.duration_ms,
            "Vocal track rendered"
        );

        let (song_media, duration_ms) = self
            .mix_tracks(&instrumental_media.file_name, &vocals_media.file_name)
            .await?;

        let song_id = SongId::new();

        tracing::info!(
            song_id = %song_id,
            file_name = %song_media.file_name,
            genre = %command.genre,
            duration_ms = duration_ms,
            "Song generated"
        );

        Ok(GenerateSongResponse {
            song_id,
            file_name: song_media.file_name,
            genre: command.genre,
            duration_seconds: duration_ms / 1000,
        })
    }

    /// 保存上传的参考人声，扩展名取自客户端文件名，缺省为 wav
    async fn persist_voice_sample(
        &self,
        sample: &VoiceSampleUpload,
    ) -> Result<StoredMedia, ApplicationError> {
        let ext = sample
            .file_name
            .as_deref()
            .and_then(|name| {
                std::path::Path::new(name)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase())
            })
            .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| "wav".to_string());

        let media = self
            .media_storage
            .save(TrackKind::VoiceSample, &ext, &sample.data)
            .await?;

        tracing::debug!(
            file_name = %media.file_name,
            size = sample.data.len(),
            "Voice sample persisted"
        );

        Ok(media)
    }

    /// 混音：回读两条音轨，人声按配置增益叠加到伴奏上，编码后落盘
    async fn mix_tracks(
        &self,
        instrumental_name: &str,
        vocals_name: &str,
    ) -> Result<(StoredMedia, u64), ApplicationError> {
        let instrumental_data = self.media_storage.read(instrumental_name).await?;
        let vocals_data = self.media_storage.read(vocals_name).await?;

        let instrumental = self.audio_engine.decode(&instrumental_data, Some("wav"))?;
        let vocals = self.audio_engine.decode(&vocals_data, Some("wav"))?;

        let mixed = self
            .audio_engine
            .overlay(&instrumental, &vocals, self.settings.vocals_gain_db);
        let duration_ms = mixed.duration_ms();

        let encoded = self.audio_engine.encode(
            &mixed,
            &EncodeConfig {
                format: self.settings.output_format,
                bitrate: Some(self.settings.bitrate),
            },
        )?;

        let media = self
            .media_storage
            .save(
                TrackKind::Song,
                self.settings.output_format.extension(),
                &encoded,
            )
            .await?;

        Ok((media, duration_ms))
    }
}
