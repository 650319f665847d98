//! User persistence ports.

use async_trait::async_trait;
use quizhive_common::{AppResult, Pagination};
use serde::Serialize;

use crate::entities::{NewUser, User, UserEmail, UserId};

/// Write-capable persistence port for users.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Insert a user and return the assigned id.
    async fn add(&self, user: NewUser) -> AppResult<UserId>;

    /// Load a user by id.
    async fn by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Load a user by e-mail address.
    async fn by_email(&self, email: &UserEmail) -> AppResult<Option<User>>;

    /// Whether any user holds the given e-mail address.
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Persist a mutated user.
    async fn update(&self, user: &User) -> AppResult<()>;

    /// Delete a user.
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// Read-side projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetail {
    /// User identifier.
    pub user_id: UserId,
    /// E-mail address.
    pub email: String,
    /// Display name, when set.
    pub full_name: Option<String>,
}

/// Filters for user listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFilters {
    /// Restrict to (in)active accounts.
    pub is_active: Option<bool>,
}

/// Read-only, paginated persistence port for users.
#[async_trait]
pub trait UserReader: Send + Sync {
    /// Load one user projection by id.
    async fn by_id(&self, id: UserId) -> AppResult<Option<UserDetail>>;

    /// Load one user projection by e-mail.
    async fn by_email(&self, email: &UserEmail) -> AppResult<Option<UserDetail>>;

    /// List users matching the filters.
    async fn many(&self, filters: UserFilters, pagination: Pagination)
    -> AppResult<Vec<UserDetail>>;

    /// Count users matching the filters.
    async fn total(&self, filters: UserFilters) -> AppResult<u64>;
}
