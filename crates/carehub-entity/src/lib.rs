//! # carehub-entity
//!
//! Domain entity models for CareHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod appointment;
pub mod consent;
pub mod delivery;
pub mod document;
pub mod exam;
pub mod medication;
pub mod notification;
pub mod partner;
pub mod patient;
pub mod subscription;
pub mod user;
