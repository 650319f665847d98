//! Validated domain primitives.
//!
//! Each value object validates on construction and is immutable afterwards,
//! so holding one is proof the invariant holds. Validation happens before
//! any I/O.

use quizhive_common::{AppError, AppResult};
use validator::ValidateEmail;

const NAME_MAX: usize = 15;
const COMPANY_NAME_MAX: usize = 15;
const COMPANY_DESCRIPTION_MAX: usize = 128;
const EMAIL_MAX: usize = 100;
const EMAIL_MIN: usize = 6;
const PASSWORD_MIN: usize = 8;

/// A user's first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    /// Validate and construct a full name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> AppResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.is_empty() {
            return Err(AppError::EmptyValue {
                field: "first name",
            });
        }
        if last_name.is_empty() {
            return Err(AppError::EmptyValue { field: "last name" });
        }
        if first_name.chars().count() > NAME_MAX {
            return Err(AppError::ValueTooLong {
                field: "first name",
                max: NAME_MAX,
            });
        }
        if last_name.chars().count() > NAME_MAX {
            return Err(AppError::ValueTooLong {
                field: "last name",
                max: NAME_MAX,
            });
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// The first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns a re-validated copy with new components.
    pub fn edit(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> AppResult<Self> {
        Self::new(first_name, last_name)
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A syntactically valid e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserEmail(String);

impl UserEmail {
    /// Validate and construct an e-mail address.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        let len = email.chars().count();
        if len < EMAIL_MIN || len > EMAIL_MAX || !email.validate_email() {
            return Err(AppError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plaintext password that passed the strength policy.
///
/// Only ever held transiently on sign-up and password-change flows; storage
/// sees nothing but the hash produced by the `PasswordHasher` port.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRawPassword(String);

impl UserRawPassword {
    /// Validate and construct a raw password.
    pub fn new(password: impl Into<String>) -> AppResult<Self> {
        let password = password.into();

        if password.chars().count() < PASSWORD_MIN {
            return Err(AppError::WeakPassword(format!(
                "must be at least {PASSWORD_MIN} characters"
            )));
        }
        if !password.chars().any(char::is_alphabetic) {
            return Err(AppError::WeakPassword(
                "must contain at least one letter".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::WeakPassword(
                "must contain at least one digit".to_string(),
            ));
        }

        Ok(Self(password))
    }

    /// The raw password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for UserRawPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UserRawPassword(***)")
    }
}

/// A company name, unique across the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    /// Validate and construct a company name.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(AppError::EmptyValue {
                field: "company name",
            });
        }
        if name.chars().count() > COMPANY_NAME_MAX {
            return Err(AppError::ValueTooLong {
                field: "company name",
                max: COMPANY_NAME_MAX,
            });
        }

        Ok(Self(name))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompanyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A company description. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CompanyDescription(String);

impl CompanyDescription {
    /// Validate and construct a company description.
    pub fn new(description: impl Into<String>) -> AppResult<Self> {
        let description = description.into();

        if description.chars().count() > COMPANY_DESCRIPTION_MAX {
            return Err(AppError::ValueTooLong {
                field: "company description",
                max: COMPANY_DESCRIPTION_MAX,
            });
        }

        Ok(Self(description))
    }

    /// The description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
