/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access (JWT gate), cors, http (request id / trace / limit / timeout)
 */
pub mod auth;
pub mod cors;
pub mod http;
