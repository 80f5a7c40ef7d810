/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /session, /notifications
 * - Bearer 検証は app.rs 側で v1 全体に layer する (ここでは掛けない)
 * - 未定義パスも自前の fallback で受けて gate を通す (認証前に 404 を見せない)
 */
use axum::{Router, http::StatusCode, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    notifications::{
        create_notification, delete_notification, get_notification, list_notifications,
        update_notification,
    },
    session::current_session,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/session", get(current_session))
        .route(
            "/notifications",
            get(list_notifications).post(create_notification),
        )
        .route(
            "/notifications/{id}",
            get(get_notification)
                .patch(update_notification)
                .delete(delete_notification),
        )
        .fallback(|| async { StatusCode::NOT_FOUND })
}
