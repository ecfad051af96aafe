//! Admin account domain types.
//!
//! [`AdminRecord`] is the full stored document including the password digest
//! and never leaves the server. [`Admin`] is the projection that every
//! response serializes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shop_admin_core::{AdminId, AdminName, Email, PasswordDigest};

/// A stored admin account (domain type).
#[derive(Debug, Clone)]
pub struct AdminRecord {
    /// Unique admin ID, assigned at creation.
    pub id: AdminId,
    /// Admin's display name.
    pub name: AdminName,
    /// Admin's email address (lowercase, unique).
    pub email: Email,
    /// Argon2 digest of the admin's password.
    pub password: PasswordDigest,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AdminRecord {
    /// Project the record to its public shape.
    #[must_use]
    pub fn to_view(&self) -> Admin {
        Admin {
            id: self.id,
            admin_name: self.name.clone(),
            admin_email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<AdminRecord> for Admin {
    fn from(record: AdminRecord) -> Self {
        Self {
            id: record.id,
            admin_name: record.name,
            admin_email: record.email,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// An admin account as returned to clients. Has no password field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    pub admin_name: AdminName,
    pub admin_email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A fully validated, already-hashed admin ready to insert.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub id: AdminId,
    pub name: AdminName,
    pub email: Email,
    pub password: PasswordDigest,
}

/// Field changes for a partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct AdminChanges {
    pub name: Option<AdminName>,
    pub email: Option<Email>,
    pub password: Option<PasswordDigest>,
}

impl AdminChanges {
    /// Apply these changes to a record, bumping `updated_at`.
    pub fn apply_to(self, record: &mut AdminRecord, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(password) = self.password {
            record.password = password;
        }
        record.updated_at = now;
    }
}
