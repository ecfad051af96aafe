//! In-process admin store.
//!
//! Mirrors [`super::PgAdminStore`] closely enough to stand in for it in
//! tests, including the unique email index.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use shop_admin_core::{AdminId, Email};

use super::{AdminStore, EMAIL_TAKEN, RepositoryError};
use crate::models::{Admin, AdminChanges, AdminRecord, NewAdmin};

/// Admin store held in memory. Records are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryAdminStore {
    records: RwLock<Vec<AdminRecord>>,
}

impl MemoryAdminStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored admins.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no admins.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn insert(&self, admin: NewAdmin) -> Result<AdminRecord, RepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.email == admin.email) {
            return Err(RepositoryError::Conflict(EMAIL_TAKEN.to_owned()));
        }

        let now = Utc::now();
        let record = AdminRecord {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            password: admin.password,
            created_at: now,
            updated_at: now,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Admin>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .map(AdminRecord::to_view)
            .collect())
    }

    async fn find(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .map(AdminRecord::to_view))
    }

    async fn find_record(&self, id: AdminId) -> Result<Option<AdminRecord>, RepositoryError> {
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn email_owner(&self, email: &Email) -> Result<Option<AdminId>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| &r.email == email)
            .map(|r| r.id))
    }

    async fn update(
        &self,
        id: AdminId,
        changes: AdminChanges,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        let mut records = self.records.write().await;

        if let Some(email) = &changes.email
            && records.iter().any(|r| r.id != id && &r.email == email)
        {
            return Err(RepositoryError::Conflict(EMAIL_TAKEN.to_owned()));
        }

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        changes.apply_to(record, Utc::now());
        Ok(Some(record.clone()))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
