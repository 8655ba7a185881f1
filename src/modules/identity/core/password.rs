use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PasswordError {
    #[error("Password is required")]
    Required,

    #[error("Password must be at least 8 characters")]
    TooShort,

    #[error("Plain password cannot be null or blank")]
    BlankPlain,

    #[error("failed to hash password: {0}")]
    Hashing(String),
}

/// Checks the password policy: present and at least eight characters.
pub fn validate_password(plain: &str) -> Result<(), PasswordError> {
    if plain.trim().is_empty() {
        return Err(PasswordError::Required);
    }
    if plain.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// A bcrypt hash. Never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn from_hashed(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("******")
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("******")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plain: &str) -> Result<PasswordHash, PasswordError> {
        if plain.trim().is_empty() {
            return Err(PasswordError::BlankPlain);
        }
        bcrypt::hash(plain, self.cost)
            .map(PasswordHash)
            .map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    pub fn verify(&self, plain: &str, hash: &PasswordHash) -> bool {
        bcrypt::verify(plain, &hash.0).unwrap_or(false)
    }

    /// Applies the policy, then hashes off the async runtime.
    pub async fn hash_checked(&self, plain: &str) -> Result<PasswordHash, PasswordError> {
        validate_password(plain)?;
        let hasher = *self;
        let plain = plain.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&plain))
            .await
            .map_err(|e| PasswordError::Hashing(e.to_string()))?
    }

    pub async fn verify_async(&self, plain: &str, hash: &PasswordHash) -> bool {
        let hasher = *self;
        let plain = plain.to_string();
        let hash = hash.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&plain, &hash))
            .await
            .unwrap_or(false)
    }
}
