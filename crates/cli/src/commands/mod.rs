//! CLI command implementations.

pub mod admin;
pub mod migrate;

use shop_admin_server::{config::ConfigError, services::AdminServiceError, services::HashError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Hash parameters were rejected.
    #[error("Password hasher error: {0}")]
    Hasher(#[from] HashError),

    /// The admin operation itself failed.
    #[error("{0}")]
    Admin(#[from] AdminServiceError),
}
