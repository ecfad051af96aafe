//! Business logic services for admin accounts.
//!
//! # Services
//!
//! - `validation` - Per-field acceptance rules for create and update payloads
//! - `password` - Argon2 hashing step run before every write
//! - `admins` - The create/list/get/update pipeline used by handlers and the CLI

pub mod admins;
pub mod password;
pub mod validation;

pub use admins::{AdminService, AdminServiceError};
pub use password::{HashCost, HashError, PasswordField, PasswordHasher};
pub use validation::{AdminPayload, FieldViolation, Mode, Violations};
