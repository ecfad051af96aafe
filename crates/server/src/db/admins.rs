//! `PostgreSQL` admin store.
//!
//! Queries are built at runtime with `sqlx::query_as` so the crate compiles
//! without a live database or an offline query cache.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use shop_admin_core::{AdminId, AdminName, Email, PasswordDigest};

use super::{AdminStore, EMAIL_TAKEN, RepositoryError};
use crate::models::{Admin, AdminChanges, AdminRecord, NewAdmin};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Row for the public projection (no password column selected).
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: Uuid,
    admin_name: String,
    admin_email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AdminId::from(row.id),
            admin_name: parse_name(&row.admin_name)?,
            admin_email: parse_email(&row.admin_email)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Row for the full record, including the digest.
#[derive(sqlx::FromRow)]
struct AdminRecordRow {
    id: Uuid,
    admin_name: String,
    admin_email: String,
    admin_password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AdminRecordRow> for AdminRecord {
    type Error = RepositoryError;

    fn try_from(row: AdminRecordRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AdminId::from(row.id),
            name: parse_name(&row.admin_name)?,
            email: parse_email(&row.admin_email)?,
            password: PasswordDigest::from_phc(row.admin_password),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn parse_name(raw: &str) -> Result<AdminName, RepositoryError> {
    AdminName::parse(raw)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid name in database: {e}")))
}

fn parse_email(raw: &str) -> Result<Email, RepositoryError> {
    Email::parse(raw)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid email in database: {e}")))
}

/// Map a write error, turning the email unique index into a conflict.
fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(EMAIL_TAKEN.to_owned());
    }
    RepositoryError::Database(e)
}

// =============================================================================
// Store
// =============================================================================

/// Admin store backed by a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    /// Create a new store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn insert(&self, admin: NewAdmin) -> Result<AdminRecord, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRecordRow>(
            r"
            INSERT INTO admins (id, admin_name, admin_email, admin_password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, admin_name, admin_email, admin_password, created_at, updated_at
            ",
        )
        .bind(admin.id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(admin.password.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.try_into()
    }

    async fn list(&self) -> Result<Vec<Admin>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, admin_name, admin_email, created_at, updated_at
            FROM admins
            ORDER BY created_at ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, admin_name, admin_email, created_at, updated_at
            FROM admins
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_record(&self, id: AdminId) -> Result<Option<AdminRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRecordRow>(
            r"
            SELECT id, admin_name, admin_email, admin_password, created_at, updated_at
            FROM admins
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn email_owner(&self, email: &Email) -> Result<Option<AdminId>, RepositoryError> {
        let id = sqlx::query_scalar::<_, Uuid>("SELECT id FROM admins WHERE admin_email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.map(AdminId::from))
    }

    async fn update(
        &self,
        id: AdminId,
        changes: AdminChanges,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRecordRow>(
            r"
            UPDATE admins
            SET admin_name = COALESCE($2, admin_name),
                admin_email = COALESCE($3, admin_email),
                admin_password = COALESCE($4, admin_password),
                updated_at = now()
            WHERE id = $1
            RETURNING id, admin_name, admin_email, admin_password, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(changes.name.as_ref().map(AdminName::as_str))
        .bind(changes.email.as_ref().map(Email::as_str))
        .bind(changes.password.as_ref().map(PasswordDigest::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
