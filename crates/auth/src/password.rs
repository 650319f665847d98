//! Argon2 password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng},
};
use quizhive_common::{AppError, AppResult};
use quizhive_core::entities::UserRawPassword;
use quizhive_core::interfaces::PasswordHasher;

/// Argon2-backed [`PasswordHasher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a new hasher with the default Argon2 parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, raw: &UserRawPassword) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(raw.as_str().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
    }

    fn verify(&self, raw: &UserRawPassword, hashed: &str) -> AppResult<()> {
        let parsed_hash = PasswordHash::new(hashed)
            .map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

        Argon2::default()
            .verify_password(raw.as_str().as_bytes(), &parsed_hash)
            .map_err(|_| AppError::PasswordMismatch)
    }
}
