//! Bearer access-token gate for `/api/v1/*`.
//!
//! - `Authorization` が無ければ 403
//! - 先頭の `Bearer ` を剥がし、RS256 で署名検証する
//! - 失敗は warn を 1 行出して 403 (body なし)。成功時は AuthCtx を extensions に入れる

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{AuthError, AuthService, DecodedClaims};
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// `/api/v1/*` に認証を掛けるための middleware を適用する。
///
/// 例：
/// ```ignore
/// let v1 = middleware::auth::access::apply(api::v1::routes(), state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, require_jwt))
}

/// Raw token from the `Authorization` header, with one leading `Bearer ` removed if present.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader)?;

    Ok(value.strip_prefix(BEARER_PREFIX).unwrap_or(value))
}

pub fn authenticate(auth: &AuthService, headers: &HeaderMap) -> Result<DecodedClaims, AuthError> {
    let token = bearer_token(headers)?;
    auth.verify(token)
}

async fn require_jwt(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match authenticate(&state.auth, req.headers()) {
        Ok(claims) => claims,
        Err(AuthError::MissingToken) => {
            tracing::debug!(path = %req.uri().path(), "request without authorization header");
            return Err(AppError::Forbidden);
        }
        Err(err) => {
            tracing::warn!(error = %err, "Error decoding the JWT");
            return Err(err.into());
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(claims));

    Ok(next.run(req).await)
}
