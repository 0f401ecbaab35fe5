//! Push subscription domain entities.

pub mod model;

pub use model::PushSubscription;
