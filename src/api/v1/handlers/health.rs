/*
 * Responsibility
 * - GET /health (疎通用)
 * - /health は認証なし、/api/v1/health は access middleware を通る
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
