/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{
    AuthService,
    access_jwt::ClaimPolicy,
    key_provider::{KeyError, StaticKeyProvider},
};

pub fn build_auth_service(config: &Config) -> Result<Arc<AuthService>, KeyError> {
    let keys = StaticKeyProvider::from_pem_or_base64(&config.access_jwt_public_key_pem)?;

    let policy = ClaimPolicy {
        issuer: config.auth_issuer.clone(),
        audience: config.auth_audience.clone(),
        leeway_seconds: config.access_token_leeway_seconds,
    };

    Ok(Arc::new(AuthService::new(Arc::new(keys), &policy)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::testing::{SIGNING_PUBLIC_KEY, sign};
    use serde_json::json;

    fn config_with_key(key: &str) -> Config {
        let key = key.to_string();
        Config::from_lookup(move |name| match name {
            "DATABASE_URL" => Some("postgres://localhost/notifications".into()),
            "ACCESS_JWT_PUBLIC_KEY_PEM" => Some(key.clone()),
            "AUTH_AUDIENCE" => Some("notifications".into()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn builds_service_honouring_configured_audience() {
        let auth = build_auth_service(&config_with_key(SIGNING_PUBLIC_KEY)).unwrap();

        assert!(auth.verify(&sign(&json!({ "aud": "notifications" }))).is_ok());
        assert!(auth.verify(&sign(&json!({ "aud": "billing" }))).is_err());
    }

    #[test]
    fn unusable_key_fails_startup() {
        assert!(build_auth_service(&config_with_key("%%%")).is_err());
    }
}
