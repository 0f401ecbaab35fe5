//! In-app notification domain entities.

pub mod model;

pub use model::Notification;
