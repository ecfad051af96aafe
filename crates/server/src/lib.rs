//! Shop Admin server library.
//!
//! JSON API for creating, listing, reading and partially updating shop
//! admin accounts. The binary in `main.rs` wires configuration, logging
//! and the database around [`app::build_app`]; tests call the same function
//! over an in-memory store.
//!
//! # Security
//!
//! Passwords are hashed with Argon2id before every write and no response
//! type has a password field.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
