//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 失败响应体（生成接口的 4xx/5xx 统一形状）
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// 未找到响应体（媒体下载接口的 404 形状）
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub detail: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 404 - `{"detail": ...}`
    NotFound(String),
    /// 400 - `{"success": false, "error": ...}`
    BadRequest(String),
    /// 500 - `{"success": false, "error": ...}`
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, Json(NotFoundResponse { detail: msg })).into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, Json(FailureResponse::new(msg))).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FailureResponse::new(msg)),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound {
                resource_type,
                name,
            } => ApiError::NotFound(format!("{} not found: {}", resource_type, name)),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            // 生成管线内的任何失败统一表现为 500
            other => ApiError::Internal(other.to_string()),
        }
    }
}
