//! QuickMP3 - 歌词转歌曲演示服务
//!
//! 架构分层:
//! - Domain: song/ (Bounded Context)
//! - Application: commands, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;

use quickmp3::application::MixSettings;
use quickmp3::config::{load_config, print_config};
use quickmp3::infrastructure::adapters::{
    MediaDirStorage, PcmAudioEngine, PcmEngineConfig, PlaceholderInstrumentalEngine,
    PlaceholderSynthConfig, PlaceholderVocalEngine,
};
use quickmp3::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},quickmp3={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("QuickMP3 - 歌词转歌曲演示服务");
    print_config(&config);

    // 创建 PCM 音频引擎（解码、混音、编码）
    let audio_engine = Arc::new(PcmAudioEngine::new(PcmEngineConfig {
        sample_rate: config.audio.sample_rate,
        channels: config.audio.channels,
    }));

    // 创建占位合成引擎（固定时长静音，可替换为真实模型适配器）
    let synth_config = PlaceholderSynthConfig {
        duration_ms: config.audio.placeholder_duration_ms,
    };
    let instrumental_engine = Arc::new(PlaceholderInstrumentalEngine::new(
        synth_config.clone(),
        audio_engine.clone(),
    ));
    let vocal_engine = Arc::new(PlaceholderVocalEngine::new(
        synth_config,
        audio_engine.clone(),
    ));

    // 创建媒体存储（确保目录存在）
    let media_storage = Arc::new(
        MediaDirStorage::new(&config.storage.media_dir)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to init media storage: {}", e))?,
    );

    // 混音参数
    let mix_settings = MixSettings {
        vocals_gain_db: config.audio.vocals_gain_db,
        output_format: config.audio.output_format,
        bitrate: config.audio.bitrate,
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        config.storage.max_upload_bytes,
    );
    let state = AppState::new(
        instrumental_engine,
        vocal_engine,
        audio_engine,
        media_storage,
        mix_settings,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
