//! Song HTTP Handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GenerateSong, VoiceSampleUpload};
use crate::infrastructure::http::dto::{GenerateSongResponse, SongMetadata, BRAND};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 生成歌曲
///
/// multipart 字段：lyrics（必填）、genre（必填）、voice_sample（可选文件）
pub async fn generate_song(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<GenerateSongResponse>, ApiError> {
    let mut lyrics: Option<String> = None;
    let mut genre: Option<String> = None;
    let mut voice_sample: Option<VoiceSampleUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "lyrics" => {
                lyrics = Some(
                    field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read lyrics: {}", e))
                    })?,
                );
            }
            "genre" => {
                genre = Some(
                    field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read genre: {}", e))
                    })?,
                );
            }
            "voice_sample" => {
                let file_name = field.file_name().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read voice sample: {}", e))
                    })?
                    .to_vec();
                voice_sample = Some(VoiceSampleUpload { file_name, data });
            }
            _ => {}
        }
    }

    let lyrics = lyrics.ok_or_else(|| ApiError::BadRequest("Lyrics are required".to_string()))?;
    let genre = genre.ok_or_else(|| ApiError::BadRequest("Genre is required".to_string()))?;

    let command = GenerateSong {
        lyrics,
        genre,
        voice_sample,
    };

    let result = state.generate_song_handler.handle(command).await?;

    let song_url = format!("/media/{}", result.file_name);

    Ok(Json(GenerateSongResponse {
        success: true,
        file_name: result.file_name,
        song_url,
        metadata: SongMetadata {
            genre: result.genre,
            duration_seconds: result.duration_seconds,
            id: result.song_id.to_string(),
            brand: BRAND,
        },
    }))
}
