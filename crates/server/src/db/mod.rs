//! Persistence for admin accounts.
//!
//! # Table: `admins`
//!
//! One row per admin account. `admin_email` carries a unique index, which
//! backs up the explicit uniqueness check done before every write.
//!
//! # Stores
//!
//! Handlers never see a concrete store. They receive an [`AdminStore`]
//! through [`crate::state::AppState`]:
//!
//! - [`PgAdminStore`] - `PostgreSQL` via sqlx, used by the server binary
//! - [`MemoryAdminStore`] - in-process, used by tests
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p shop-admin-cli -- migrate
//! ```

pub mod admins;
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use shop_admin_core::{AdminId, Email};

use crate::models::{Admin, AdminChanges, AdminRecord, NewAdmin};

pub use admins::PgAdminStore;
pub use memory::MemoryAdminStore;

/// Embedded migrations for the `admins` table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Storage operations for admin accounts.
///
/// Every read that returns [`Admin`] is a projection without the password.
/// Only [`AdminStore::find_record`] and the write methods hand back the
/// full [`AdminRecord`], and those never reach a response body unprojected.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Insert a new admin.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    async fn insert(&self, admin: NewAdmin) -> Result<AdminRecord, RepositoryError>;

    /// List every admin in creation order.
    async fn list(&self) -> Result<Vec<Admin>, RepositoryError>;

    /// Fetch one admin's public projection.
    async fn find(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError>;

    /// Fetch one admin including the stored password digest.
    async fn find_record(&self, id: AdminId) -> Result<Option<AdminRecord>, RepositoryError>;

    /// Return the ID of the admin that owns `email`, if any.
    async fn email_owner(&self, email: &Email) -> Result<Option<AdminId>, RepositoryError>;

    /// Apply changes to an admin. Returns `None` if the admin does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the new email is already taken.
    async fn update(
        &self,
        id: AdminId,
        changes: AdminChanges,
    ) -> Result<Option<AdminRecord>, RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Message used for every duplicate-email conflict.
pub(crate) const EMAIL_TAKEN: &str = "email already exists";
