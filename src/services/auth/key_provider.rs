//! Verification key material for access tokens.
//!
//! The RS256 public key is injected from configuration. It may be given either as a
//! full PEM document or as the bare base64 body of a SubjectPublicKeyInfo, which is
//! wrapped into PEM before parsing.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use jsonwebtoken::DecodingKey;
use thiserror::Error;

const PEM_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
const PEM_FOOTER: &str = "-----END PUBLIC KEY-----";

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("public key is empty")]
    Empty,
    #[error("public key body is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("invalid rsa public key: {0}")]
    InvalidRsaKey(#[source] jsonwebtoken::errors::Error),
}

/// Source of the key used to verify access-token signatures.
pub trait KeyProvider: Send + Sync {
    fn decoding_key(&self) -> &DecodingKey;
}

/// A key parsed once at startup and never rotated.
#[derive(Clone)]
pub struct StaticKeyProvider {
    key: DecodingKey,
}

impl std::fmt::Debug for StaticKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticKeyProvider").finish_non_exhaustive()
    }
}

impl StaticKeyProvider {
    pub fn from_rsa_pem(pem: &str) -> Result<Self, KeyError> {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes()).map_err(KeyError::InvalidRsaKey)?;
        Ok(Self { key })
    }

    /// Accepts either a PEM document or a bare base64 SPKI body.
    pub fn from_pem_or_base64(raw: &str) -> Result<Self, KeyError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(KeyError::Empty);
        }

        if raw.starts_with("-----BEGIN") {
            return Self::from_rsa_pem(raw);
        }

        Self::from_rsa_pem(&wrap_spki_body(raw)?)
    }
}

impl KeyProvider for StaticKeyProvider {
    fn decoding_key(&self) -> &DecodingKey {
        &self.key
    }
}

/// Wrap a bare base64 SPKI body into a PEM document (64-column lines).
pub fn wrap_spki_body(body: &str) -> Result<String, KeyError> {
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();

    // Reject garbage early so the error names the real problem.
    STANDARD.decode(&compact)?;

    let mut pem = String::with_capacity(compact.len() + 64);
    pem.push_str(PEM_HEADER);
    pem.push('\n');
    for line in compact.as_bytes().chunks(64) {
        // base64 alphabet is ASCII, so every chunk boundary is a char boundary
        pem.push_str(std::str::from_utf8(line).unwrap_or_default());
        pem.push('\n');
    }
    pem.push_str(PEM_FOOTER);

    Ok(pem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::testing::SIGNING_PUBLIC_KEY;

    fn pem_body(pem: &str) -> String {
        pem.lines()
            .filter(|l| !l.starts_with("-----"))
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn wraps_body_into_pem_lines() {
        let body = pem_body(SIGNING_PUBLIC_KEY);
        let pem = wrap_spki_body(&body).unwrap();

        assert!(pem.starts_with(PEM_HEADER));
        assert!(pem.ends_with(PEM_FOOTER));
        assert!(pem.lines().all(|l| l.len() <= 64));
        assert_eq!(pem_body(&pem), body);
    }

    #[test]
    fn accepts_full_pem() {
        assert!(StaticKeyProvider::from_pem_or_base64(SIGNING_PUBLIC_KEY).is_ok());
    }

    #[test]
    fn accepts_bare_body() {
        let body = pem_body(SIGNING_PUBLIC_KEY);
        assert!(StaticKeyProvider::from_pem_or_base64(&body).is_ok());
    }

    #[test]
    fn rejects_empty_and_non_base64_input() {
        assert!(matches!(
            StaticKeyProvider::from_pem_or_base64("   "),
            Err(KeyError::Empty)
        ));
        assert!(matches!(
            StaticKeyProvider::from_pem_or_base64("not*base64!"),
            Err(KeyError::InvalidBase64(_))
        ));
    }
}
