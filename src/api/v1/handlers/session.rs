/*
 * Responsibility
 * - GET /session: 検証済みトークンの claim をそのまま返す (クライアントのデバッグ用)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::AuthCtxExtractor;
use crate::services::auth::DecodedClaims;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub sub: Option<String>,
    pub groups: Vec<String>,
    pub claims: DecodedClaims,
}

pub async fn current_session(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<SessionResponse> {
    let claims = ctx.claims;

    Json(SessionResponse {
        sub: claims.sub().map(str::to_string),
        groups: claims.groups().map(str::to_string).collect(),
        claims,
    })
}
