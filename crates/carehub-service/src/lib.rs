//! # carehub-service
//!
//! Business logic for the CareHub integration core: partner sync
//! reconciliation, per-partner rate limiting, reminder window math and
//! dispatch, and the best-effort super-admin fan-out.

pub mod notify;
pub mod ratelimit;
pub mod reminder;
pub mod sync;

pub use ratelimit::RateLimiter;
pub use reminder::dispatcher::ReminderDispatcher;
pub use sync::service::SyncService;
