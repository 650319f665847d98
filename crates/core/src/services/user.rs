//! User service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use quizhive_common::{AppError, AppResult, Pagination};
use serde::Serialize;
use tracing::info;

use crate::access::AccessService;
use crate::entities::{FullName, NewUser, UserEmail, UserId, UserRawPassword};
use crate::interfaces::{
    Committer, IdProvider, PasswordHasher, UserDetail, UserFilters, UserGateway, UserReader,
};

/// Access-token lifetime handed to the token layer on sign-in.
const TOKEN_LIFETIME_MINUTES: i64 = 30;

/// Input for signing up with email and password.
#[derive(Debug, Clone)]
pub struct SignUpInput {
    /// E-mail address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

/// Claims material for the token layer. The core issues no tokens itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenData {
    /// The authenticated address.
    pub email: String,
    /// When the token should expire.
    pub expires_at: DateTime<Utc>,
}

/// Paginated user listing.
#[derive(Debug, Clone, Serialize)]
pub struct GetUsersOutput {
    /// Total matching users, ignoring pagination.
    pub total: u64,
    /// The requested page.
    pub users: Vec<UserDetail>,
}

/// User account use cases.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserGateway>,
    user_reader: Arc<dyn UserReader>,
    password_hasher: Arc<dyn PasswordHasher>,
    id_provider: Arc<dyn IdProvider>,
    access: AccessService,
    committer: Arc<dyn Committer>,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserGateway>,
        user_reader: Arc<dyn UserReader>,
        password_hasher: Arc<dyn PasswordHasher>,
        id_provider: Arc<dyn IdProvider>,
        access: AccessService,
        committer: Arc<dyn Committer>,
    ) -> Self {
        Self {
            users,
            user_reader,
            password_hasher,
            id_provider,
            access,
            committer,
        }
    }

    /// Register a new account.
    pub async fn sign_up(&self, input: SignUpInput) -> AppResult<UserId> {
        let email = UserEmail::new(input.email)?;
        let raw_password = UserRawPassword::new(input.password)?;
        let full_name = FullName::new(input.first_name, input.last_name)?;

        if self.users.email_exists(email.as_str()).await? {
            return Err(AppError::EmailTaken(email.as_str().to_string()));
        }

        let hashed_password = self.password_hasher.hash(&raw_password)?;

        let user_id = self
            .users
            .add(NewUser {
                full_name: Some(full_name),
                email: email.clone(),
                hashed_password: Some(hashed_password),
            })
            .await?;

        self.committer.commit().await?;

        info!(email = %email, "created user");

        Ok(user_id)
    }

    /// Authenticate with email and password.
    ///
    /// Returns the claims for the token layer to encode; no session state
    /// is written.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<AccessTokenData> {
        let email = UserEmail::new(email)?;
        let raw_password = UserRawPassword::new(password)?;

        let user = self
            .users
            .by_email(&email)
            .await?
            .ok_or_else(|| AppError::UserNotFoundByEmail(email.as_str().to_string()))?;

        // OAuth-only accounts have no hash to verify against.
        let hashed = user.hashed_password.ok_or(AppError::PasswordMismatch)?;
        self.password_hasher.verify(&raw_password, &hashed)?;

        Ok(AccessTokenData {
            email: user.email.as_str().to_string(),
            expires_at: Utc::now() + Duration::minutes(TOKEN_LIFETIME_MINUTES),
        })
    }

    /// Sign in through an OAuth provider, creating a passwordless account
    /// on first contact.
    pub async fn sign_in_by_oauth(&self, email: &str) -> AppResult<UserId> {
        let email = UserEmail::new(email)?;

        if let Some(user) = self.users.by_email(&email).await? {
            info!(email = %email, "oauth sign-in for existing user");
            return Ok(user.id);
        }

        let user_id = self
            .users
            .add(NewUser {
                full_name: None,
                email: email.clone(),
                hashed_password: None,
            })
            .await?;

        self.committer.commit().await?;

        info!(email = %email, "created user via oauth");

        Ok(user_id)
    }

    /// Change a user's e-mail address.
    pub async fn edit_email(&self, user_id: i64, new_email: &str) -> AppResult<()> {
        let email = UserEmail::new(new_email)?;

        let mut user = self
            .users
            .by_id(UserId(user_id))
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        self.access.ensure_can_edit_email(&user).await?;

        if self.users.email_exists(email.as_str()).await? {
            return Err(AppError::EmailTaken(email.as_str().to_string()));
        }

        user.email = email;
        self.users.update(&user).await?;

        self.committer.commit().await?;

        info!(user_id, "edited user email");

        Ok(())
    }

    /// Change a user's display name.
    pub async fn edit_full_name(
        &self,
        user_id: i64,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<()> {
        let mut user = self
            .users
            .by_id(UserId(user_id))
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        self.access.ensure_can_edit_full_name(&user).await?;

        user.full_name = Some(match user.full_name {
            Some(ref name) => name.edit(first_name, last_name)?,
            None => FullName::new(first_name, last_name)?,
        });
        self.users.update(&user).await?;

        self.committer.commit().await?;

        info!(user_id, "edited user full name");

        Ok(())
    }

    /// Change a user's password, verifying the old one first.
    pub async fn edit_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let mut user = self
            .users
            .by_id(UserId(user_id))
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        let hashed = user
            .hashed_password
            .as_deref()
            .ok_or(AppError::PasswordMismatch)?;
        self.password_hasher
            .verify(&UserRawPassword::new(old_password)?, hashed)?;

        self.access.ensure_can_edit_password(&user).await?;

        let new_raw = UserRawPassword::new(new_password)?;
        user.hashed_password = Some(self.password_hasher.hash(&new_raw)?);
        self.users.update(&user).await?;

        self.committer.commit().await?;

        info!(user_id, "edited user password");

        Ok(())
    }

    /// Delete an account. Self-service only.
    pub async fn delete_user(&self, user_id: i64) -> AppResult<()> {
        let user = self
            .users
            .by_id(UserId(user_id))
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        self.access.ensure_can_delete_user(&user).await?;

        self.users.delete(user.id).await?;

        self.committer.commit().await?;

        info!(user_id, "deleted user");

        Ok(())
    }

    /// The authenticated actor's own projection.
    pub async fn get_me(&self) -> AppResult<UserDetail> {
        self.id_provider.current_user().await
    }

    /// Load one user projection.
    pub async fn get_user(&self, user_id: i64) -> AppResult<UserDetail> {
        self.user_reader
            .by_id(UserId(user_id))
            .await?
            .ok_or(AppError::UserNotFound(user_id))
    }

    /// List users with a total count.
    pub async fn get_users(
        &self,
        filters: UserFilters,
        pagination: Pagination,
    ) -> AppResult<GetUsersOutput> {
        let total = self.user_reader.total(filters).await?;
        let users = self.user_reader.many(filters, pagination).await?;

        Ok(GetUsersOutput { total, users })
    }
}
