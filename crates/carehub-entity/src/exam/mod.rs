//! Exam domain entities.

pub mod key;
pub mod model;

pub use key::ExamKey;
pub use model::Exam;
