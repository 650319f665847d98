//! Identity and credential ports.

use async_trait::async_trait;
use quizhive_common::AppResult;

use crate::entities::UserRawPassword;
use crate::interfaces::user::UserDetail;

/// Resolves the authenticated actor from request context.
///
/// The sole source of truth for "who is acting". Use cases never trust
/// actor ids supplied in request bodies or paths.
#[async_trait]
pub trait IdProvider: Send + Sync {
    /// The authenticated user, or `Unauthorized` when there is none.
    async fn current_user(&self) -> AppResult<UserDetail>;
}

/// Hashes and verifies passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password for storage.
    fn hash(&self, raw: &UserRawPassword) -> AppResult<String>;

    /// Verify a raw password against a stored hash; `PasswordMismatch` on
    /// failure.
    fn verify(&self, raw: &UserRawPassword, hashed: &str) -> AppResult<()>;
}
