//! User entity.

use super::define_id;
use super::value_objects::{FullName, UserEmail};

define_id! {
    /// Identifier of a [`User`].
    UserId
}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: UserId,
    /// Display name; unset until the user fills it in (OAuth sign-ins start
    /// without one).
    pub full_name: Option<FullName>,
    /// Unique e-mail address.
    pub email: UserEmail,
    /// Password hash; `None` for OAuth-only accounts.
    pub hashed_password: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Insert record for a [`User`]; the gateway assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name, when known at sign-up.
    pub full_name: Option<FullName>,
    /// Unique e-mail address.
    pub email: UserEmail,
    /// Password hash; `None` for OAuth-only accounts.
    pub hashed_password: Option<String>,
}
