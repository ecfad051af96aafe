//! Admin account management commands.
//!
//! Runs through the same service as the HTTP API, so validation, email
//! uniqueness and password hashing behave identically.
//!
//! # Usage
//!
//! ```bash
//! shop-admin admin create -n "Admin Name" -e admin@example.com -p 'a-password'
//! shop-admin admin list
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `PASSWORD_HASH_M_COST`, `PASSWORD_HASH_T_COST`, `PASSWORD_HASH_P_COST` - Argon2 cost

use shop_admin_server::{
    config::ServerConfig,
    db::{self, PgAdminStore},
    models::Admin,
    services::{AdminPayload, AdminService, PasswordHasher},
};

use super::CommandError;

async fn connect() -> Result<(ServerConfig, PgAdminStore), CommandError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;
    Ok((config, PgAdminStore::new(pool)))
}

/// Create a new admin account.
///
/// # Returns
///
/// The ID of the created admin.
pub async fn create(
    name: String,
    email: String,
    password: String,
) -> Result<shop_admin_core::AdminId, CommandError> {
    let (config, store) = connect().await?;
    let hasher = PasswordHasher::new(config.hash_cost)?;
    let service = AdminService::new(&store, &hasher);

    let payload = AdminPayload {
        admin_name: Some(name),
        admin_email: Some(email),
        admin_password: Some(password),
    };
    let record = service.create(&payload).await?;

    tracing::info!(
        "Admin created successfully! ID: {}, Email: {}",
        record.id,
        record.email
    );
    Ok(record.id)
}

/// List every admin account.
///
/// # Returns
///
/// The number of admins listed.
pub async fn list() -> Result<usize, CommandError> {
    let (config, store) = connect().await?;
    let hasher = PasswordHasher::new(config.hash_cost)?;
    let admins = AdminService::new(&store, &hasher).list().await?;

    if admins.is_empty() {
        tracing::info!("No admin accounts");
        return Ok(0);
    }

    for admin in &admins {
        tracing::info!("  {}", summary(admin));
    }
    tracing::info!("{} admin account(s)", admins.len());
    Ok(admins.len())
}

/// One-line description of an admin, without the password.
fn summary(admin: &Admin) -> String {
    format!(
        "{} {} <{}> created {}",
        admin.id,
        admin.admin_name,
        admin.admin_email,
        admin.created_at.to_rfc3339()
    )
}
