/*
 * Responsibility
 * - /notifications 系 CRUD handler
 * - Path/Json を extractor で受け、DTO validation → repo 呼び出し
 * - ここに来る時点で access middleware による JWT 検証は済んでいる
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::dto::notifications::{
        CreateNotificationRequest, NotificationResponse, UpdateNotificationRequest,
    },
    error::AppError,
    repos::notification_repo::{self, NotificationChanges},
    state::AppState,
};

const PAGE_SIZE: i64 = 50;

pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let rows = notification_repo::list(&state.db, PAGE_SIZE, 0).await?;

    Ok(Json(rows.into_iter().map(NotificationResponse::from).collect()))
}

pub async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_NOTIFICATION", msg))?;

    let row = notification_repo::create(&state.db, &req.message, req.kind, req.read).await?;
    tracing::debug!(notification_id = row.id, "notification created");

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NotificationResponse>, AppError> {
    let row = notification_repo::get(&state.db, id)
        .await?
        .ok_or(AppError::not_found("notification"))?;

    Ok(Json(row.into()))
}

pub async fn update_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNotificationRequest>,
) -> Result<Json<NotificationResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_NOTIFICATION", msg))?;

    let changes = NotificationChanges {
        message: req.message.as_deref(),
        kind: req.kind,
        read: req.read,
    };

    let row = notification_repo::update(&state.db, id, changes)
        .await?
        .ok_or(AppError::not_found("notification"))?;

    Ok(Json(row.into()))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if notification_repo::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("notification"))
    }
}
