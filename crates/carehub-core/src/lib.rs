//! # carehub-core
//!
//! Core crate for CareHub. Contains configuration schemas, shared value
//! types (CPF, minutes-of-day), and the unified error system.
//!
//! This crate has **no** internal dependencies on other CareHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
