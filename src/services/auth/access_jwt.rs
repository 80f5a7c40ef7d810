use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

use crate::services::auth::key_provider::KeyProvider;

/// Reasons an access token is refused. Callers turn every variant into the same 403.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("authorization header is not valid text")]
    InvalidHeader,
    #[error("malformed token: {0}")]
    MalformedToken(#[source] jsonwebtoken::errors::Error),
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token claims rejected: {0}")]
    InvalidClaims(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature
            | ErrorKind::ImmatureSignature
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidAudience
            | ErrorKind::InvalidSubject
            | ErrorKind::MissingRequiredClaim(_) => Self::InvalidClaims(e),
            _ => Self::MalformedToken(e),
        }
    }
}

/// Claim set of a verified token, kept as a raw JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedClaims(Map<String, Value>);

impl DecodedClaims {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn sub(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// String entries of the `groups` claim. A missing or non-array claim yields nothing.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.get("groups")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups().any(|g| g == group)
    }
}

/// Optional claim checks applied on top of the signature check.
///
/// `exp`/`nbf` are always validated when present; nothing is required.
#[derive(Debug, Clone, Default)]
pub struct ClaimPolicy {
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub leeway_seconds: u64,
}

/// RS256 access-token verifier.
///
/// - Key material is never printed via Debug.
#[derive(Clone)]
pub struct AuthService {
    keys: Arc<dyn KeyProvider>,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(keys: Arc<dyn KeyProvider>, policy: &ClaimPolicy) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = policy.leeway_seconds;

        if let Some(issuer) = &policy.issuer {
            validation.set_issuer(&[issuer]);
        }

        // jsonwebtoken rejects any token carrying `aud` when no audience is configured
        match &policy.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self { keys, validation }
    }

    /// Verify the signature and standard claims of a bare JWT (no `Bearer ` prefix).
    pub fn verify(&self, token: &str) -> Result<DecodedClaims, AuthError> {
        let data = jsonwebtoken::decode::<DecodedClaims>(
            token,
            self.keys.decoding_key(),
            &self.validation,
        )?;

        Ok(data.claims)
    }
}
