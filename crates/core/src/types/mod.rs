//! Core types for the admin service.
//!
//! This module provides type-safe wrappers for the admin document fields.

pub mod email;
pub mod id;
pub mod name;
pub mod password;

pub use email::{Email, EmailError};
pub use id::*;
pub use name::{AdminName, NameError};
pub use password::{Password, PasswordDigest, PasswordError};
