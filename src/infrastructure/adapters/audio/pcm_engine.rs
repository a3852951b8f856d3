//! PCM Audio Engine - 基于 symphonia / LAME / libopus 的音频引擎
//!
//! 支持：
//! - WAV / MP3 解码（symphonia probe）
//! - 静音缓冲生成
//! - 带增益的波形叠加（含采样率与声道对齐）
//! - WAV (16bit PCM) / MP3 (LAME CBR) / Opus (OGG 容器) 编码

use std::io::Cursor;

use mp3lame_encoder::{
    Birtate, Builder as LameBuilder, FlushNoGap, InterleavedPcm, MonoPcm, Quality,
};
use ogg::writing::PacketWriter;
use opus::{Application, Channels, Encoder as OpusEncoder};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioBuffer, AudioEngineError, AudioEnginePort, EncodeConfig};
use crate::domain::song::MediaFormat;

/// 引擎配置
#[derive(Debug, Clone)]
pub struct PcmEngineConfig {
    /// 静音缓冲的采样率
    pub sample_rate: u32,
    /// 静音缓冲的声道数（1 或 2）
    pub channels: u16,
}

impl Default for PcmEngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
        }
    }
}

/// PCM 音频引擎
pub struct PcmAudioEngine {
    config: PcmEngineConfig,
}

impl PcmAudioEngine {
    pub fn new(config: PcmEngineConfig) -> Self {
        Self { config }
    }

    /// 将缓冲对齐到目标采样率与声道布局
    fn conform(&self, buffer: &AudioBuffer, sample_rate: u32, channels: u16) -> AudioBuffer {
        let mut samples = if buffer.channels == channels {
            buffer.samples.clone()
        } else {
            remap_channels(&buffer.samples, buffer.channels, channels)
        };
        if buffer.sample_rate != sample_rate {
            samples = resample(&samples, buffer.sample_rate, sample_rate, channels);
        }
        AudioBuffer {
            samples,
            sample_rate,
            channels,
        }
    }

    /// 使用 symphonia 解码任意受支持容器为交错 f32 PCM
    fn decode_to_pcm(
        &self,
        data: &[u8],
        ext_hint: Option<&str>,
    ) -> Result<AudioBuffer, AudioEngineError> {
        let cursor = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = ext_hint {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioEngineError::DecodingError(format!("Probe failed: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioEngineError::DecodingError("No audio track found".to_string()))?;

        let sample_rate = track
            .codec_params
            .sample_rate
            .ok_or_else(|| AudioEngineError::DecodingError("Unknown sample rate".to_string()))?;

        let channels = track
            .codec_params
            .channels
            .map(|c| c.count() as u16)
            .ok_or_else(|| AudioEngineError::DecodingError("Unknown channel count".to_string()))?;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| {
                AudioEngineError::DecodingError(format!("Decoder creation failed: {}", e))
            })?;

        let track_id = track.id;
        let mut samples: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(symphonia::core::errors::Error::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioEngineError::DecodingError(format!(
                        "Packet read error: {}",
                        e
                    )));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!("Decode error (skipping packet): {}", e);
                    continue;
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            // SampleBuffer 容量可能大于实际解码出的帧数
            let actual_samples = num_frames * spec.channels.count();
            samples.extend(&sample_buf.samples()[..actual_samples]);
        }

        Ok(AudioBuffer {
            samples,
            sample_rate,
            channels,
        })
    }

    /// 编码为 MP3（LAME，CBR）
    fn encode_mp3(&self, buffer: &AudioBuffer, bitrate: u32) -> Result<Vec<u8>, AudioEngineError> {
        // LAME 仅支持单声道或立体声
        let channels = buffer.channels.clamp(1, 2);
        let conformed = self.conform(buffer, buffer.sample_rate, channels);

        let mut builder = LameBuilder::new().ok_or_else(|| {
            AudioEngineError::EncodingError("Failed to allocate LAME encoder".to_string())
        })?;
        builder
            .set_num_channels(channels as u8)
            .map_err(|e| AudioEngineError::EncodingError(format!("Failed to set channels: {}", e)))?;
        builder.set_sample_rate(conformed.sample_rate).map_err(|e| {
            AudioEngineError::EncodingError(format!("Failed to set sample rate: {}", e))
        })?;
        builder
            .set_brate(lame_bitrate(bitrate))
            .map_err(|e| AudioEngineError::EncodingError(format!("Failed to set bitrate: {}", e)))?;
        builder
            .set_quality(Quality::Good)
            .map_err(|e| AudioEngineError::EncodingError(format!("Failed to set quality: {}", e)))?;

        let mut encoder = builder.build().map_err(|e| {
            AudioEngineError::EncodingError(format!("Failed to initialize LAME: {}", e))
        })?;

        let pcm = pcm_to_i16(&conformed.samples);
        let mut mp3 = Vec::new();

        match channels {
            1 => encoder.encode_to_vec(MonoPcm(&pcm), &mut mp3),
            _ => encoder.encode_to_vec(InterleavedPcm(&pcm), &mut mp3),
        }
        .map_err(|e| AudioEngineError::EncodingError(format!("MP3 encode failed: {}", e)))?;

        encoder
            .flush_to_vec::<FlushNoGap>(&mut mp3)
            .map_err(|e| AudioEngineError::EncodingError(format!("MP3 flush failed: {}", e)))?;

        tracing::debug!(
            frames = conformed.frames(),
            mp3_size = mp3.len(),
            bitrate = bitrate,
            "Encoded to MP3"
        );

        Ok(mp3)
    }

    /// 编码为 Opus（OGG 容器，RFC 7845）
    fn encode_opus(&self, buffer: &AudioBuffer, bitrate: u32) -> Result<Vec<u8>, AudioEngineError> {
        // libopus 只接受 8/12/16/24/48 kHz 输入，且最多双声道
        let target_rate = opus_compatible_sample_rate(buffer.sample_rate);
        let channels = buffer.channels.clamp(1, 2);
        let conformed = self.conform(buffer, target_rate, channels);

        let opus_channels = if channels == 1 {
            Channels::Mono
        } else {
            Channels::Stereo
        };

        let mut encoder = OpusEncoder::new(target_rate, opus_channels, Application::Audio)
            .map_err(|e| {
                AudioEngineError::EncodingError(format!("Failed to create Opus encoder: {}", e))
            })?;
        encoder
            .set_bitrate(opus::Bitrate::Bits(bitrate as i32))
            .map_err(|e| AudioEngineError::EncodingError(format!("Failed to set bitrate: {}", e)))?;

        // 编码器延迟作为 pre-skip，典型值 ~312 samples @ 48kHz
        let pre_skip = encoder.get_lookahead().map(|l| l as u16).unwrap_or(312);

        let pcm = pcm_to_i16(&conformed.samples);

        // 20ms 帧
        let frame_size = (target_rate as usize * 20) / 1000;
        let samples_per_frame = frame_size * channels as usize;

        // granule position 以 48kHz 采样数计
        let granule_scale = 48_000.0 / target_rate as f64;
        let frame_granule = (frame_size as f64 * granule_scale) as u64;
        let pre_skip_48k = (pre_skip as f64 * granule_scale) as u64;

        let mut ogg_data = Vec::new();
        {
            let mut packet_writer = PacketWriter::new(&mut ogg_data);

            packet_writer
                .write_packet(
                    opus_head(channels as u8, target_rate, pre_skip),
                    0,
                    ogg::PacketWriteEndInfo::EndPage,
                    0,
                )
                .map_err(|e| {
                    AudioEngineError::EncodingError(format!("Failed to write Opus head: {}", e))
                })?;
            packet_writer
                .write_packet(opus_tags(), 0, ogg::PacketWriteEndInfo::EndPage, 0)
                .map_err(|e| {
                    AudioEngineError::EncodingError(format!("Failed to write Opus tags: {}", e))
                })?;

            // Opus 最大包大小
            let mut output_buf = vec![0u8; 4000];
            let mut granule_pos: u64 = pre_skip_48k;

            for chunk in pcm.chunks(samples_per_frame) {
                let frame = if chunk.len() < samples_per_frame {
                    let mut padded = chunk.to_vec();
                    padded.resize(samples_per_frame, 0);
                    padded
                } else {
                    chunk.to_vec()
                };

                let encoded_len = encoder.encode(&frame, &mut output_buf).map_err(|e| {
                    AudioEngineError::EncodingError(format!("Opus encode failed: {}", e))
                })?;

                granule_pos += frame_granule;

                packet_writer
                    .write_packet(
                        output_buf[..encoded_len].to_vec(),
                        0,
                        ogg::PacketWriteEndInfo::NormalPacket,
                        granule_pos,
                    )
                    .map_err(|e| {
                        AudioEngineError::EncodingError(format!(
                            "Failed to write Opus packet: {}",
                            e
                        ))
                    })?;
            }

            // 编码器缓存了 pre_skip 个采样，结尾补静音帧刷出
            let flush_frames = (pre_skip as usize).div_ceil(samples_per_frame).max(1);
            let silence_frame = vec![0i16; samples_per_frame];

            for flush_idx in 0..flush_frames {
                let encoded_len = encoder.encode(&silence_frame, &mut output_buf).map_err(|e| {
                    AudioEngineError::EncodingError(format!("Opus flush encode failed: {}", e))
                })?;

                granule_pos += frame_granule;

                let end_info = if flush_idx + 1 == flush_frames {
                    ogg::PacketWriteEndInfo::EndStream
                } else {
                    ogg::PacketWriteEndInfo::NormalPacket
                };

                packet_writer
                    .write_packet(
                        output_buf[..encoded_len].to_vec(),
                        0,
                        end_info,
                        granule_pos,
                    )
                    .map_err(|e| {
                        AudioEngineError::EncodingError(format!(
                            "Failed to write Opus flush packet: {}",
                            e
                        ))
                    })?;
            }
        }

        tracing::debug!(
            frames = conformed.frames(),
            opus_size = ogg_data.len(),
            bitrate = bitrate,
            "Encoded to Opus"
        );

        Ok(ogg_data)
    }
}

impl AudioEnginePort for PcmAudioEngine {
    fn silent(&self, duration_ms: u64) -> AudioBuffer {
        let frames = (self.config.sample_rate as u64 * duration_ms / 1000) as usize;
        AudioBuffer {
            samples: vec![0.0; frames * self.config.channels as usize],
            sample_rate: self.config.sample_rate,
            channels: self.config.channels,
        }
    }

    fn decode(
        &self,
        data: &[u8],
        ext_hint: Option<&str>,
    ) -> Result<AudioBuffer, AudioEngineError> {
        self.decode_to_pcm(data, ext_hint)
    }

    fn overlay(&self, base: &AudioBuffer, overlay: &AudioBuffer, gain_db: f32) -> AudioBuffer {
        // overlay 先对齐到 base 的布局，再按增益叠加；长度以 base 为准
        let conformed = self.conform(overlay, base.sample_rate, base.channels);
        let gain = db_to_amplitude(gain_db);

        let mut samples = base.samples.clone();
        for (out, over) in samples.iter_mut().zip(conformed.samples.iter()) {
            *out += over * gain;
        }

        AudioBuffer {
            samples,
            sample_rate: base.sample_rate,
            channels: base.channels,
        }
    }

    fn encode(
        &self,
        buffer: &AudioBuffer,
        config: &EncodeConfig,
    ) -> Result<Vec<u8>, AudioEngineError> {
        if buffer.channels == 0 || buffer.sample_rate == 0 {
            return Err(AudioEngineError::InvalidInput(
                "Empty audio layout".to_string(),
            ));
        }

        match config.format {
            MediaFormat::Wav => Ok(encode_wav(buffer)),
            MediaFormat::Mp3 => self.encode_mp3(buffer, config.bitrate.unwrap_or(192_000)),
            MediaFormat::Opus => self.encode_opus(buffer, config.bitrate.unwrap_or(96_000)),
        }
    }
}

/// dB 增益转振幅系数
fn db_to_amplitude(gain_db: f32) -> f32 {
    10f32.powf(gain_db / 20.0)
}

/// f32 [-1.0, 1.0] 转 i16，越界截断
fn pcm_to_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0) as i16)
        .collect()
}

/// 编码为 16bit PCM WAV
fn encode_wav(buffer: &AudioBuffer) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let block_align = buffer.channels * (bits_per_sample / 8);
    let byte_rate = buffer.sample_rate * block_align as u32;

    let pcm = pcm_to_i16(&buffer.samples);
    let data_size = pcm.len() * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size);

    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(file_size as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&buffer.channels.to_le_bytes());
    wav.extend_from_slice(&buffer.sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_size as u32).to_le_bytes());
    for sample in pcm {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}

/// 声道重排：下混取平均，上混复用已有声道
fn remap_channels(samples: &[f32], from: u16, to: u16) -> Vec<f32> {
    if from == to || from == 0 {
        return samples.to_vec();
    }

    let from_n = from as usize;
    let to_n = to as usize;
    let frames = samples.len() / from_n;
    let mut out = Vec::with_capacity(frames * to_n);

    for frame in samples.chunks_exact(from_n) {
        if to_n == 1 {
            let sum: f32 = frame.iter().sum();
            out.push(sum / from_n as f32);
        } else {
            for ch in 0..to_n {
                out.push(frame[ch.min(from_n - 1)]);
            }
        }
    }

    out
}

/// 简单线性重采样
fn resample(samples: &[f32], from_rate: u32, to_rate: u32, channels: u16) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = to_rate as f64 / from_rate as f64;
    let channel_count = channels.max(1) as usize;
    let frame_count = samples.len() / channel_count;
    if frame_count == 0 {
        return Vec::new();
    }
    let new_frame_count = (frame_count as f64 * ratio) as usize;
    let mut resampled = Vec::with_capacity(new_frame_count * channel_count);

    for i in 0..new_frame_count {
        let src_pos = i as f64 / ratio;
        let src_idx = src_pos as usize;
        let frac = (src_pos - src_idx as f64) as f32;

        for ch in 0..channel_count {
            let idx0 = src_idx * channel_count + ch;
            let idx1 = (src_idx + 1).min(frame_count - 1) * channel_count + ch;

            let s0 = samples.get(idx0).copied().unwrap_or(0.0);
            let s1 = samples.get(idx1).copied().unwrap_or(s0);

            resampled.push(s0 + (s1 - s0) * frac);
        }
    }

    resampled
}

/// 最接近的 libopus 兼容采样率
fn opus_compatible_sample_rate(sample_rate: u32) -> u32 {
    match sample_rate {
        8000 | 12000 | 16000 | 24000 | 48000 => sample_rate,
        r if r <= 8000 => 8000,
        r if r <= 12000 => 12000,
        r if r <= 16000 => 16000,
        r if r <= 24000 => 24000,
        _ => 48000,
    }
}

/// LAME 支持的 CBR 档位（`Birtate` 为上游 crate 的原始拼写）
fn lame_bitrate(bps: u32) -> Birtate {
    match bps / 1000 {
        0..=8 => Birtate::Kbps8,
        9..=16 => Birtate::Kbps16,
        17..=24 => Birtate::Kbps24,
        25..=32 => Birtate::Kbps32,
        33..=40 => Birtate::Kbps40,
        41..=48 => Birtate::Kbps48,
        49..=64 => Birtate::Kbps64,
        65..=80 => Birtate::Kbps80,
        81..=96 => Birtate::Kbps96,
        97..=112 => Birtate::Kbps112,
        113..=128 => Birtate::Kbps128,
        129..=160 => Birtate::Kbps160,
        161..=192 => Birtate::Kbps192,
        193..=224 => Birtate::Kbps224,
        225..=256 => Birtate::Kbps256,
        _ => Birtate::Kbps320,
    }
}

/// Opus ID Header（RFC 7845 §5.1）
fn opus_head(channels: u8, sample_rate: u32, pre_skip: u16) -> Vec<u8> {
    let mut head = Vec::with_capacity(19);
    head.extend_from_slice(b"OpusHead"); // Magic signature
    head.push(1); // Version
    head.push(channels); // Channel count
    head.extend_from_slice(&pre_skip.to_le_bytes()); // Pre-skip (encoder delay)
    head.extend_from_slice(&sample_rate.to_le_bytes()); // Input sample rate
    head.extend_from_slice(&0i16.to_le_bytes()); // Output gain
    head.push(0); // Channel mapping family
    head
}

/// Opus Comment Header
fn opus_tags() -> Vec<u8> {
    let vendor = "quickmp3";
    let mut tags = Vec::new();
    tags.extend_from_slice(b"OpusTags");
    tags.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    tags.extend_from_slice(vendor.as_bytes());
    tags.extend_from_slice(&0u32.to_le_bytes()); // No user comments
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PcmAudioEngine {
        PcmAudioEngine::new(PcmEngineConfig::default())
    }

    fn constant_buffer(value: f32, duration_ms: u64, sample_rate: u32, channels: u16) -> AudioBuffer {
        let frames = (sample_rate as u64 * duration_ms / 1000) as usize;
        AudioBuffer {
            samples: vec![value; frames * channels as usize],
            sample_rate,
            channels,
        }
    }

    #[test]
    fn test_silent_buffer_duration() {
        let buffer = engine().silent(10_000);
        assert_eq!(buffer.sample_rate, 44_100);
        assert_eq!(buffer.channels, 2);
        assert_eq!(buffer.frames(), 441_000);
        assert_eq!(buffer.duration_ms(), 10_000);
        assert!(buffer.samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_overlay_applies_gain() {
        let engine = engine();
        let base = constant_buffer(0.5, 100, 44_100, 2);
        let over = constant_buffer(0.5, 100, 44_100, 2);

        let mixed = engine.overlay(&base, &over, -3.0);

        // -3 dB ≈ 0.7079
        let expected = 0.5 + 0.5 * 0.7079;
        assert_eq!(mixed.frames(), base.frames());
        for &s in &mixed.samples {
            assert!((s - expected).abs() < 1e-3, "sample {} != {}", s, expected);
        }
    }

    #[test]
    fn test_overlay_keeps_base_length() {
        let engine = engine();
        let base = constant_buffer(0.1, 1000, 44_100, 2);
        let longer = constant_buffer(0.4, 2000, 44_100, 2);

        let mixed = engine.overlay(&base, &longer, 0.0);
        assert_eq!(mixed.frames(), base.frames());

        // 较短的 overlay 只影响前半段
        let shorter = constant_buffer(0.4, 500, 44_100, 2);
        let mixed = engine.overlay(&base, &shorter, 0.0);
        assert_eq!(mixed.frames(), base.frames());
        let tail = &mixed.samples[mixed.samples.len() / 2..];
        assert!(tail.iter().all(|&s| (s - 0.1).abs() < 1e-6));
    }

    #[test]
    fn test_overlay_conforms_layout() {
        let engine = engine();
        let base = constant_buffer(0.0, 1000, 44_100, 2);
        // 单声道 + 不同采样率的 overlay
        let over = constant_buffer(0.5, 1000, 22_050, 1);

        let mixed = engine.overlay(&base, &over, 0.0);
        assert_eq!(mixed.sample_rate, 44_100);
        assert_eq!(mixed.channels, 2);
        assert_eq!(mixed.frames(), base.frames());
        // 对齐后大部分采样应落在 0.5 附近
        let mid = mixed.samples[mixed.samples.len() / 4];
        assert!((mid - 0.5).abs() < 1e-2);
    }

    #[test]
    fn test_wav_roundtrip() {
        let engine = engine();
        let frames = 4410;
        let samples: Vec<f32> = (0..frames * 2)
            .map(|i| ((i / 2) as f32 / frames as f32) * 0.8 - 0.4)
            .collect();
        let original = AudioBuffer {
            samples,
            sample_rate: 44_100,
            channels: 2,
        };

        let wav = engine
            .encode(&original, &EncodeConfig {
                format: MediaFormat::Wav,
                bitrate: None,
            })
            .unwrap();
        assert_eq!(&wav[0..4], b"RIFF");

        let decoded = engine.decode(&wav, Some("wav")).unwrap();
        assert_eq!(decoded.sample_rate, 44_100);
        assert_eq!(decoded.channels, 2);
        assert_eq!(decoded.frames(), original.frames());

        // 16bit 量化误差
        for (a, b) in original.samples.iter().zip(decoded.samples.iter()) {
            assert!((a - b).abs() < 2.0 / 32767.0);
        }
    }

    #[test]
    fn test_encode_mp3_is_decodable() {
        let engine = engine();
        let frames = 44_100;
        let samples: Vec<f32> = (0..frames * 2)
            .map(|i| ((i / 2) as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44_100.0).sin() * 0.3)
            .collect();
        let buffer = AudioBuffer {
            samples,
            sample_rate: 44_100,
            channels: 2,
        };

        let mp3 = engine
            .encode(&buffer, &EncodeConfig {
                format: MediaFormat::Mp3,
                bitrate: Some(192_000),
            })
            .unwrap();

        // 1 秒 @ 192kbps CBR ≈ 24KB
        assert!(mp3.len() > 10_000, "mp3 too small: {}", mp3.len());

        let decoded = engine.decode(&mp3, Some("mp3")).unwrap();
        assert_eq!(decoded.channels, 2);
        // LAME 首尾有编码器延迟，时长在 1 秒附近
        assert!(
            decoded.duration_ms() >= 950 && decoded.duration_ms() <= 1250,
            "unexpected duration: {}",
            decoded.duration_ms()
        );
    }

    #[test]
    fn test_encode_opus_produces_ogg() {
        let engine = engine();
        let buffer = engine.silent(500);

        let ogg = engine
            .encode(&buffer, &EncodeConfig {
                format: MediaFormat::Opus,
                bitrate: Some(96_000),
            })
            .unwrap();

        assert_eq!(&ogg[0..4], b"OggS");
        // 静音 Opus 应远小于等价 WAV
        assert!(ogg.len() < buffer.samples.len() * 2);
    }

    #[test]
    fn test_remap_channels() {
        // 立体声下混为单声道取平均
        let stereo = vec![0.2, 0.4, -0.2, -0.4];
        let mono = remap_channels(&stereo, 2, 1);
        assert_eq!(mono.len(), 2);
        assert!((mono[0] - 0.3).abs() < 1e-6);
        assert!((mono[1] + 0.3).abs() < 1e-6);

        // 单声道上混复制到两个声道
        let back = remap_channels(&mono, 1, 2);
        assert_eq!(back.len(), 4);
        assert_eq!(back[0], back[1]);
    }

    #[test]
    fn test_db_to_amplitude() {
        assert!((db_to_amplitude(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_amplitude(-3.0) - 0.7079).abs() < 1e-3);
        assert!((db_to_amplitude(-6.0) - 0.5012).abs() < 1e-3);
    }
}
