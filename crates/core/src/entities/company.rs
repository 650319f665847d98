//! Company and membership entities.

use serde::{Deserialize, Serialize};

use super::define_id;
use super::user::UserId;
use super::value_objects::{CompanyDescription, CompanyName};

define_id! {
    /// Identifier of a [`Company`].
    CompanyId
}

define_id! {
    /// Identifier of a [`CompanyUser`] membership row.
    CompanyUserId
}

/// Whether a company is discoverable by non-members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Not listed for non-members.
    Hidden,
    /// Listed publicly.
    Visible,
}

/// Role of a member within a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyRole {
    /// Full control, exactly one per company.
    Owner,
    /// Can manage quizzes and view company-wide results.
    Admin,
    /// Regular member.
    Member,
}

impl CompanyRole {
    /// Whether the role can create, edit and delete quizzes.
    #[must_use]
    pub const fn can_manage_quizzes(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}

/// A tenant: the unit quizzes and memberships hang off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Storage-assigned identifier.
    pub id: CompanyId,
    /// The user who created and controls the company.
    pub owner_id: UserId,
    /// Unique display name.
    pub name: CompanyName,
    /// Free-form description.
    pub description: CompanyDescription,
    /// Listing visibility.
    pub visibility: Visibility,
}

/// Membership join row binding a [`User`](super::User) to a [`Company`]
/// with a role. One row per (company, user) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyUser {
    /// Storage-assigned identifier.
    pub id: CompanyUserId,
    /// The company joined.
    pub company_id: CompanyId,
    /// The joining user.
    pub user_id: UserId,
    /// Role within the company.
    pub role: CompanyRole,
}

/// Insert record for a [`Company`].
#[derive(Debug, Clone)]
pub struct NewCompany {
    /// The creating user; becomes owner.
    pub owner_id: UserId,
    /// Unique display name.
    pub name: CompanyName,
    /// Free-form description.
    pub description: CompanyDescription,
    /// Listing visibility.
    pub visibility: Visibility,
}

/// Insert record for a [`CompanyUser`].
#[derive(Debug, Clone)]
pub struct NewCompanyUser {
    /// The company joined.
    pub company_id: CompanyId,
    /// The joining user.
    pub user_id: UserId,
    /// Role within the company.
    pub role: CompanyRole,
}
