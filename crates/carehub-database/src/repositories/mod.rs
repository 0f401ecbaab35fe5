//! Concrete repository implementations, one per entity.

pub mod appointment;
pub mod consent;
pub mod delivery;
pub mod document;
pub mod exam;
pub mod medication;
pub mod notification;
pub mod partner;
pub mod patient;
pub mod rate_limit;
pub mod subscription;
pub mod user;

/// Result of a natural-key upsert: the stored row plus whether the
/// statement inserted a new row (as opposed to updating an existing one).
#[derive(Debug, Clone)]
pub struct Upserted<T> {
    /// The row as stored after the statement.
    pub record: T,
    /// True when the row was newly inserted.
    pub inserted: bool,
}
