//! # carehub-push
//!
//! Client for the cloud push-messaging provider. Covers the full
//! authorization chain — service-account credentials, RS256 JWT assertion,
//! OAuth token exchange — and the message send call itself.

pub mod client;
pub mod credentials;
pub mod message;
pub mod token;

pub use client::{PushProvider, PushSession};
pub use credentials::ServiceAccountKey;
pub use message::PushMessage;
