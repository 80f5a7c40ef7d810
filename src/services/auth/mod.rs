pub mod access_jwt;
pub mod factory;
pub mod groups;
pub mod key_provider;

#[cfg(test)]
pub(crate) mod testing;

pub use access_jwt::{AuthError, AuthService, DecodedClaims};
pub use factory::build_auth_service;
pub use groups::GroupChecker;
