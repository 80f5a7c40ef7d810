pub mod error;
pub mod notification_repo;
