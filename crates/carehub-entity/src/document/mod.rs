//! Clinical document domain entities.

pub mod model;

pub use model::ClinicalDocument;
