/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 */
use crate::services::auth::DecodedClaims;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `claims` は RS256 検証済みの claim set (中身の必須項目はない)
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub claims: DecodedClaims,
}

impl AuthCtx {
    pub fn new(claims: DecodedClaims) -> Self {
        Self { claims }
    }
}
