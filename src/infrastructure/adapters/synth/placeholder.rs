//! Placeholder Synth Engines - 占位音轨生成引擎
//!
//! 不调用任何真实生成服务，始终渲染固定时长的静音 WAV。
//! 接入真实伴奏/人声引擎时替换这两个适配器即可。

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    AudioEnginePort, EncodeConfig, InstrumentalEnginePort, InstrumentalRequest, RenderedTrack,
    SynthesisError, VocalEnginePort, VocalRequest,
};
use crate::domain::song::MediaFormat;

/// 占位引擎配置
#[derive(Debug, Clone)]
pub struct PlaceholderSynthConfig {
    /// 渲染音轨的时长（毫秒）
    pub duration_ms: u64,
}

impl Default for PlaceholderSynthConfig {
    fn default() -> Self {
        Self {
            duration_ms: 10_000,
        }
    }
}

/// 占位伴奏引擎
pub struct PlaceholderInstrumentalEngine {
    config: PlaceholderSynthConfig,
    audio_engine: Arc<dyn AudioEnginePort>,
}

impl PlaceholderInstrumentalEngine {
    pub fn new(config: PlaceholderSynthConfig, audio_engine: Arc<dyn AudioEnginePort>) -> Self {
        Self {
            config,
            audio_engine,
        }
    }
}

#[async_trait]
impl InstrumentalEnginePort for PlaceholderInstrumentalEngine {
    async fn generate(
        &self,
        request: InstrumentalRequest,
    ) -> Result<RenderedTrack, SynthesisError> {
        tracing::debug!(
            lyrics_len = request.lyrics.len(),
            genre = %request.genre,
            "Placeholder instrumental: rendering silence"
        );

        render_silence(self.audio_engine.as_ref(), self.config.duration_ms)
    }
}

/// 占位人声引擎
pub struct PlaceholderVocalEngine {
    config: PlaceholderSynthConfig,
    audio_engine: Arc<dyn AudioEnginePort>,
}

impl PlaceholderVocalEngine {
    pub fn new(config: PlaceholderSynthConfig, audio_engine: Arc<dyn AudioEnginePort>) -> Self {
        Self {
            config,
            audio_engine,
        }
    }
}

#[async_trait]
impl VocalEnginePort for PlaceholderVocalEngine {
    async fn synthesize(&self, request: VocalRequest) -> Result<RenderedTrack, SynthesisError> {
        if let Some(path) = &request.voice_sample {
            // 真实人声引擎会以此为参考音色
            tracing::debug!(
                voice_sample = %path.display(),
                "Voice sample ignored by placeholder engine"
            );
        }

        tracing::debug!(
            lyrics_len = request.lyrics.len(),
            genre = %request.genre,
            "Placeholder vocals: rendering silence"
        );

        render_silence(self.audio_engine.as_ref(), self.config.duration_ms)
    }
}

/// 渲染指定时长的静音 WAV 音轨
fn render_silence(
    audio_engine: &dyn AudioEnginePort,
    duration_ms: u64,
) -> Result<RenderedTrack, SynthesisError> {
    let buffer = audio_engine.silent(duration_ms);
    let sample_rate = buffer.sample_rate;

    let wav = audio_engine
        .encode(
            &buffer,
            &EncodeConfig {
                format: MediaFormat::Wav,
                bitrate: None,
            },
        )
        .map_err(|e| SynthesisError::EngineError(e.to_string()))?;

    Ok(RenderedTrack {
        audio_data: wav,
        duration_ms,
        sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::audio::{PcmAudioEngine, PcmEngineConfig};

    fn audio_engine() -> Arc<dyn AudioEnginePort> {
        Arc::new(PcmAudioEngine::new(PcmEngineConfig::default()))
    }

    #[tokio::test]
    async fn test_instrumental_renders_silent_wav() {
        let engine = audio_engine();
        let instrumental = PlaceholderInstrumentalEngine::new(
            PlaceholderSynthConfig { duration_ms: 1000 },
            engine.clone(),
        );

        let track = instrumental
            .generate(InstrumentalRequest {
                lyrics: "la la la".to_string(),
                genre: "pop".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(track.duration_ms, 1000);
        assert_eq!(&track.audio_data[0..4], b"RIFF");

        let decoded = engine.decode(&track.audio_data, Some("wav")).unwrap();
        assert_eq!(decoded.duration_ms(), 1000);
        assert!(decoded.samples.iter().all(|&s| s == 0.0));
    }

    #[tokio::test]
    async fn test_vocals_ignore_voice_sample() {
        let engine = audio_engine();
        let vocal = PlaceholderVocalEngine::new(
            PlaceholderSynthConfig { duration_ms: 500 },
            engine.clone(),
        );

        let without = vocal
            .synthesize(VocalRequest {
                lyrics: "hello".to_string(),
                genre: "rock".to_string(),
                voice_sample: None,
            })
            .await
            .unwrap();
        let with = vocal
            .synthesize(VocalRequest {
                lyrics: "hello".to_string(),
                genre: "rock".to_string(),
                voice_sample: Some(std::path::PathBuf::from("/tmp/does-not-matter.wav")),
            })
            .await
            .unwrap();

        assert_eq!(without.audio_data, with.audio_data);
        assert_eq!(without.duration_ms, with.duration_ms);
    }
}
