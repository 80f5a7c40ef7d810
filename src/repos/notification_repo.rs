/*
 * Responsibility
 * - notifications テーブル向け SQLx 操作
 * - PgPool を受け取り CRUD を提供
 * - 更新時は updated_at を now() に進める
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct NotificationRow {
    pub id: i64,
    pub message: Option<String>,
    pub kind: Option<i32>,
    pub read: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a PATCH may touch; `None` leaves the column as is.
#[derive(Debug, Default)]
pub struct NotificationChanges<'a> {
    pub message: Option<&'a str>,
    pub kind: Option<i32>,
    pub read: Option<bool>,
}

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<NotificationRow>, RepoError> {
    let rows = sqlx::query_as::<_, NotificationRow>(
        r#"
        SELECT id, message, kind, read, created_at, updated_at
        FROM notifications
        ORDER BY id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    message: &str,
    kind: i32,
    read: bool,
) -> Result<NotificationRow, RepoError> {
    let row = sqlx::query_as::<_, NotificationRow>(
        r#"
        INSERT INTO notifications (message, kind, read)
        VALUES ($1, $2, $3)
        RETURNING id, message, kind, read, created_at, updated_at
        "#,
    )
    .bind(message)
    .bind(kind)
    .bind(read)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, id: i64) -> Result<Option<NotificationRow>, RepoError> {
    let row = sqlx::query_as::<_, NotificationRow>(
        r#"
        SELECT id, message, kind, read, created_at, updated_at
        FROM notifications
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    id: i64,
    changes: NotificationChanges<'_>,
) -> Result<Option<NotificationRow>, RepoError> {
    let row = sqlx::query_as::<_, NotificationRow>(
        r#"
        UPDATE notifications
        SET
            message = COALESCE($2, message),
            kind = COALESCE($3, kind),
            read = COALESCE($4, read),
            updated_at = now()
        WHERE id = $1
        RETURNING id, message, kind, read, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(changes.message)
    .bind(changes.kind)
    .bind(changes.read)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM notifications
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
