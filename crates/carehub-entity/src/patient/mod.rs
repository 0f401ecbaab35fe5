//! Patient domain entities.

pub mod model;

pub use model::Patient;
