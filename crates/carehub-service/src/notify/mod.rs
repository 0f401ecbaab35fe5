//! Best-effort super-admin fan-out for storage-upgrade requests.

pub mod mailer;
pub mod service;

pub use mailer::Mailer;
pub use service::{StorageRequest, StorageRequestNotifier};
