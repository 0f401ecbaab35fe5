//! Custom Axum extractors.

pub mod partner;

pub use partner::PartnerAuth;
