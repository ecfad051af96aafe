//! Admin account service.
//!
//! Each operation is one pass through the same pipeline:
//! validate, check email ownership, hash the password if it changed, persist,
//! project. Handlers and the CLI both call into this so they behave alike.

use thiserror::Error;

use shop_admin_core::AdminId;

use super::password::{HashError, PasswordField, PasswordHasher};
use super::validation::{AdminPayload, Violations, validate_create, validate_update};
use crate::db::{AdminStore, RepositoryError};
use crate::models::{Admin, AdminChanges, AdminRecord, NewAdmin};

/// Errors from admin operations.
#[derive(Debug, Error)]
pub enum AdminServiceError {
    /// The payload broke one or more field rules.
    #[error("validation failed: {0}")]
    Validation(Violations),

    /// Another admin already uses this email.
    #[error("email already exists")]
    EmailTaken,

    /// No admin has this ID (or the ID is malformed).
    #[error("admin not found")]
    NotFound,

    /// Hashing failed; nothing was written.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// The store failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for AdminServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            // The unique index caught a write that raced the explicit check
            RepositoryError::Conflict(_) => Self::EmailTaken,
            other => Self::Repository(other),
        }
    }
}

/// Admin account service over a borrowed store and hasher.
pub struct AdminService<'a> {
    store: &'a dyn AdminStore,
    hasher: &'a PasswordHasher,
}

impl<'a> AdminService<'a> {
    /// Create a new admin service.
    #[must_use]
    pub const fn new(store: &'a dyn AdminStore, hasher: &'a PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Create an admin.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::Validation` for a bad payload and
    /// `AdminServiceError::EmailTaken` if the email is in use; nothing is
    /// written in either case.
    pub async fn create(&self, payload: &AdminPayload) -> Result<AdminRecord, AdminServiceError> {
        let input = validate_create(payload).map_err(AdminServiceError::Validation)?;

        if self.store.email_owner(&input.email).await?.is_some() {
            return Err(AdminServiceError::EmailTaken);
        }

        let password = self.hasher.hash_blocking(input.password).await?;

        let record = self
            .store
            .insert(NewAdmin {
                id: AdminId::generate(),
                name: input.name,
                email: input.email,
                password,
            })
            .await?;

        tracing::info!(admin_id = %record.id, "Admin created");
        Ok(record)
    }

    /// List every admin.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::Repository` if the store fails.
    pub async fn list(&self) -> Result<Vec<Admin>, AdminServiceError> {
        Ok(self.store.list().await?)
    }

    /// Fetch one admin by a raw ID string.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::NotFound` if the ID is malformed or unknown.
    pub async fn get(&self, raw_id: &str) -> Result<Admin, AdminServiceError> {
        let id = AdminId::parse(raw_id).ok_or(AdminServiceError::NotFound)?;
        self.store
            .find(id)
            .await?
            .ok_or(AdminServiceError::NotFound)
    }

    /// Apply a partial update.
    ///
    /// Only fields present in the payload change. The password is re-hashed
    /// only when a new one is supplied.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::Validation` for a bad payload,
    /// `AdminServiceError::NotFound` for an unknown ID, and
    /// `AdminServiceError::EmailTaken` if the new email belongs to another admin.
    pub async fn update(
        &self,
        raw_id: &str,
        payload: &AdminPayload,
    ) -> Result<Admin, AdminServiceError> {
        let validated = validate_update(payload).map_err(AdminServiceError::Validation)?;

        let id = AdminId::parse(raw_id).ok_or(AdminServiceError::NotFound)?;
        let existing = self
            .store
            .find_record(id)
            .await?
            .ok_or(AdminServiceError::NotFound)?;

        if let Some(email) = &validated.email
            && *email != existing.email
            && let Some(owner) = self.store.email_owner(email).await?
            && owner != id
        {
            return Err(AdminServiceError::EmailTaken);
        }

        let password = self
            .hasher
            .prepare(PasswordField::for_update(
                validated.password,
                &existing.password,
            ))
            .await?;
        let password_changed = password.is_some();

        let changes = AdminChanges {
            name: validated.name,
            email: validated.email,
            password,
        };

        let record = self
            .store
            .update(id, changes)
            .await?
            .ok_or(AdminServiceError::NotFound)?;

        tracing::info!(admin_id = %record.id, password_changed, "Admin updated");
        Ok(record.into())
    }
}
