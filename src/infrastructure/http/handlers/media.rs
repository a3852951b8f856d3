//! Media HTTP Handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::MediaStorageError;
use crate::domain::song::MediaFileName;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 下载生成的媒体文件
///
/// Content-Type 按存储文件的实际格式判定
pub async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    let (file, file_size) = state
        .media_storage
        .open(&file_name)
        .await
        .map_err(|e| match e {
            MediaStorageError::NotFound(_) => ApiError::NotFound("File not found".to_string()),
            other => ApiError::Internal(format!("Failed to open media file: {}", other)),
        })?;

    // open 成功即为合法的单段文件名
    let content_type = MediaFileName::parse(&file_name)
        .map(|n| n.content_type())
        .unwrap_or("application/octet-stream");

    tracing::debug!(
        file_name = %file_name,
        size = file_size,
        content_type = content_type,
        "Streaming media file"
    );

    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, file_size)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        )
        .body(body)
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}
