//! Shop Admin Core - Shared domain types.
//!
//! This crate provides the validated types used by the admin service and its
//! command-line tooling:
//! - `server` - HTTP API for admin accounts
//! - `cli` - Migrations and account management
//!
//! # Architecture
//!
//! The core crate contains only types and parsing rules - no I/O, no database
//! access, no HTTP. Every constraint on an admin field lives here so the HTTP
//! layer and the CLI reject the same inputs with the same messages.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for admin IDs, names, emails, and passwords

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
