//! Data Transfer Objects
//!
//! HTTP 层响应结构

use serde::Serialize;

/// 品牌标识，写入所有对外元数据
pub const BRAND: &str = "FolseTech AI Solutions";

/// 应用名
pub const APP_NAME: &str = "QuickMP3";

// ============================================================================
// Generate Song DTOs
// ============================================================================

/// 歌曲元数据
#[derive(Debug, Serialize)]
pub struct SongMetadata {
    pub genre: String,
    pub duration_seconds: u64,
    pub id: String,
    pub brand: &'static str,
}

/// 生成歌曲响应
#[derive(Debug, Serialize)]
pub struct GenerateSongResponse {
    pub success: bool,
    pub file_name: String,
    pub song_url: String,
    pub metadata: SongMetadata,
}

// ============================================================================
// Health DTOs
// ============================================================================

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub brand: &'static str,
    pub app: &'static str,
}
