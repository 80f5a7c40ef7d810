/*
 * Responsibility
 * - Notifications の request/response DTO
 * - validate() で形式チェック (空 message / 負の kind を弾く)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::notification_repo::NotificationRow;

pub const MESSAGE_MAX_LEN: usize = 2000;

fn validate_message(message: &str) -> Result<(), &'static str> {
    if message.trim().is_empty() {
        return Err("message is required");
    }
    if message.chars().count() > MESSAGE_MAX_LEN {
        return Err("message must be <= 2000 chars");
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub message: String,
    pub kind: i32,
    #[serde(default)]
    pub read: bool,
}

impl CreateNotificationRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_message(&self.message)?;
        if self.kind < 0 {
            return Err("kind must be >= 0");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotificationRequest {
    pub message: Option<String>,
    pub kind: Option<i32>,
    pub read: Option<bool>,
}

impl UpdateNotificationRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(message) = &self.message {
            validate_message(message)?;
        }
        if let Some(kind) = self.kind
            && kind < 0
        {
            return Err("kind must be >= 0");
        }
        if self.message.is_none() && self.kind.is_none() && self.read.is_none() {
            return Err("nothing to update");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub message: Option<String>,
    pub kind: Option<i32>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NotificationRow> for NotificationResponse {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: row.id,
            message: row.message,
            kind: row.kind,
            // NULL read flag means the notification was never opened
            read: row.read.unwrap_or(false),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
