//! Domain models for the admin service.

pub mod admin;

pub use admin::{Admin, AdminChanges, AdminRecord, NewAdmin};
