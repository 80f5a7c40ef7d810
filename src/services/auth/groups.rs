/*
 * Responsibility
 * - 生のトークンを decode して `groups` claim に特定のグループが含まれるか判定する
 * - access middleware からは呼ばれない (認可の追加チェック用)
 *
 * Notes
 * - `Bearer ` prefix はここでは剥がさない。prefix 付きの値は decode に失敗する
 */
use std::sync::Arc;

use crate::services::auth::access_jwt::{AuthError, AuthService};

pub const PAPAS_GROUP: &str = "/papas";

#[derive(Debug, Clone)]
pub struct GroupChecker {
    auth: Arc<AuthService>,
    group: String,
}

impl GroupChecker {
    pub fn new(auth: Arc<AuthService>, group: impl Into<String>) -> Self {
        Self {
            auth,
            group: group.into(),
        }
    }

    /// Checker for the `/papas` group.
    pub fn papas(auth: Arc<AuthService>) -> Self {
        Self::new(auth, PAPAS_GROUP)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// `Ok(true)` when the decoded `groups` claim lists this checker's group.
    /// Decode failures are logged and returned as `Err`.
    pub fn is_member(&self, raw_token: &str) -> Result<bool, AuthError> {
        let claims = self.auth.verify(raw_token).inspect_err(|err| {
            tracing::warn!(error = %err, group = %self.group, "jwt decode failed during group check");
        })?;

        Ok(claims.in_group(&self.group))
    }
}
