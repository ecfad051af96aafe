//! Password hashing step.
//!
//! Writes never persist a plaintext password. The write path calls
//! [`PasswordHasher::prepare`] with a [`PasswordField`] describing whether the
//! password was modified, and persists whatever digest comes back.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use thiserror::Error;

use shop_admin_core::{Password, PasswordDigest};

/// Errors from the hashing step. Any of these aborts the write.
#[derive(Debug, Error)]
pub enum HashError {
    /// The configured cost parameters are out of range.
    #[error("invalid hashing parameters: {0}")]
    Params(String),

    /// Argon2 failed to produce a hash.
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// The blocking hashing task panicked or was cancelled.
    #[error("hashing task failed: {0}")]
    Task(String),
}

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory size in KiB.
    pub m_cost: u32,
    /// Number of iterations.
    pub t_cost: u32,
    /// Degree of parallelism.
    pub p_cost: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            m_cost: Params::DEFAULT_M_COST,
            t_cost: Params::DEFAULT_T_COST,
            p_cost: Params::DEFAULT_P_COST,
        }
    }
}

impl HashCost {
    /// The cheapest parameters Argon2 accepts. For tests only.
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            m_cost: Params::MIN_M_COST,
            t_cost: Params::MIN_T_COST,
            p_cost: Params::MIN_P_COST,
        }
    }
}

/// Whether an in-flight write carries a new password.
#[derive(Debug, Clone)]
pub enum PasswordField {
    /// Keep the stored digest.
    Unchanged,
    /// Hash this plaintext and store the result.
    Modified(Password),
}

impl PasswordField {
    /// Classify an update's password against the stored digest.
    ///
    /// A value identical to the stored digest is the digest itself echoed
    /// back, not a new password, and is left alone.
    #[must_use]
    pub fn for_update(incoming: Option<Password>, stored: &PasswordDigest) -> Self {
        match incoming {
            Some(password) if password.expose() != stored.as_str() => Self::Modified(password),
            _ => Self::Unchanged,
        }
    }
}

/// Argon2id hasher with configurable cost.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a hasher.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Params` if the cost parameters are out of range.
    pub fn new(cost: HashCost) -> Result<Self, HashError> {
        let params = Params::new(cost.m_cost, cost.t_cost, cost.p_cost, None)
            .map_err(|e| HashError::Params(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Hash` if Argon2 fails.
    pub fn hash(&self, password: &Password) -> Result<PasswordDigest, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.expose().as_bytes(), &salt)
            .map(|hash| PasswordDigest::from_phc(hash.to_string()))
            .map_err(|e| HashError::Hash(e.to_string()))
    }

    /// Hash on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns `HashError` if hashing fails or the task does not complete.
    pub async fn hash_blocking(&self, password: Password) -> Result<PasswordDigest, HashError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| HashError::Task(e.to_string()))?
    }

    /// Run the hashing step for a write.
    ///
    /// Returns `None` when the password is unchanged, so the stored digest is
    /// kept as-is and never hashed a second time.
    ///
    /// # Errors
    ///
    /// Returns `HashError` if a modified password cannot be hashed.
    pub async fn prepare(&self, field: PasswordField) -> Result<Option<PasswordDigest>, HashError> {
        match field {
            PasswordField::Unchanged => Ok(None),
            PasswordField::Modified(password) => self.hash_blocking(password).await.map(Some),
        }
    }

    /// Check a plaintext password against a stored digest.
    #[must_use]
    pub fn verify(&self, password: &str, digest: &PasswordDigest) -> bool {
        PasswordHash::new(digest.as_str()).is_ok_and(|parsed| {
            self.argon2()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }
}
