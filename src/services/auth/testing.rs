//! Test fixtures: RSA key pairs, token signing helpers, captured log output.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use crate::services::auth::{
    AuthService,
    access_jwt::ClaimPolicy,
    key_provider::StaticKeyProvider,
};

pub const SIGNING_PRIVATE_KEY: &str = include_str!("testdata/signing_key.pem");
pub const SIGNING_PUBLIC_KEY: &str = include_str!("testdata/signing_key.pub.pem");
pub const FOREIGN_PRIVATE_KEY: &str = include_str!("testdata/foreign_key.pem");

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn auth_service_with(policy: &ClaimPolicy) -> AuthService {
    let keys = StaticKeyProvider::from_pem_or_base64(SIGNING_PUBLIC_KEY)
        .expect("test public key should parse");
    AuthService::new(Arc::new(keys), policy)
}

pub fn auth_service() -> AuthService {
    auth_service_with(&ClaimPolicy::default())
}

fn sign_rs256(private_pem: &str, claims: &Value) -> String {
    let key = EncodingKey::from_rsa_pem(private_pem.as_bytes()).expect("test private key");
    jsonwebtoken::encode(&Header::new(Algorithm::RS256), claims, &key).expect("sign test token")
}

/// Sign with the key pair the test `AuthService` trusts.
pub fn sign(claims: &Value) -> String {
    sign_rs256(SIGNING_PRIVATE_KEY, claims)
}

/// Sign with an unrelated RSA key.
pub fn sign_with_foreign_key(claims: &Value) -> String {
    sign_rs256(FOREIGN_PRIVATE_KEY, claims)
}

pub fn sign_hs256(claims: &Value) -> String {
    let key = EncodingKey::from_secret(b"not-the-rsa-key");
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key).expect("sign test token")
}

/// In-memory sink for `tracing_subscriber::fmt` output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

pub struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(self.0.clone())
    }
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer poisoned")).into_owned()
    }

    pub fn warn_lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(" WARN "))
            .map(str::to_string)
            .collect()
    }
}

/// Subscriber writing every event down to DEBUG into the returned buffer.
pub fn log_capture() -> (CapturedLogs, impl tracing::Subscriber + Send + Sync) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    (logs, subscriber)
}
