//! Health Handler

use axum::Json;

use crate::infrastructure::http::dto::{HealthResponse, APP_NAME, BRAND};

/// 健康检查，固定成功负载，不探测任何依赖
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        brand: BRAND,
        app: APP_NAME,
    })
}
