//! HTTP Routes
//!
//! API Endpoints:
//! - /api/generate-song   POST  生成歌曲（multipart: lyrics, genre, voice_sample?）
//! - /media/{file_name}   GET   下载生成的媒体文件
//! - /health              GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/media/:file_name", get(handlers::get_media))
        .route("/health", get(handlers::health))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate-song", post(handlers::generate_song))
}
