//! Shared value types used across CareHub crates.

pub mod cpf;
pub mod minutes;

pub use cpf::Cpf;
pub use minutes::minutes_of_day;
