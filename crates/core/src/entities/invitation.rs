//! Invitation and join-request entities.

use serde::{Deserialize, Serialize};

use super::company::CompanyId;
use super::define_id;
use super::user::UserId;

define_id! {
    /// Identifier of an [`Invitation`].
    InvitationId
}

define_id! {
    /// Identifier of a [`UserRequest`].
    UserRequestId
}

/// Status of an invitation or join request.
///
/// `New` is the only non-terminal state; once accepted or rejected the
/// record never changes again. A fresh invitation may be sent after a
/// rejection because pending-uniqueness only considers `New` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a response.
    #[default]
    New,
    /// Accepted; membership was created.
    Accepted,
    /// Rejected by either side.
    Rejected,
}

impl RequestStatus {
    /// Whether the record still awaits a response.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::New)
    }
}

/// A company-initiated offer of membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    /// Storage-assigned identifier.
    pub id: InvitationId,
    /// The inviting company.
    pub company_id: CompanyId,
    /// The invited user.
    pub user_id: UserId,
    /// Lifecycle state.
    pub status: RequestStatus,
}

/// A user-initiated application for membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRequest {
    /// Storage-assigned identifier.
    pub id: UserRequestId,
    /// The company applied to.
    pub company_id: CompanyId,
    /// The applying user.
    pub user_id: UserId,
    /// Lifecycle state.
    pub status: RequestStatus,
}

/// Insert record for an [`Invitation`]; starts out `New`.
#[derive(Debug, Clone)]
pub struct NewInvitation {
    /// The inviting company.
    pub company_id: CompanyId,
    /// The invited user.
    pub user_id: UserId,
}

/// Insert record for a [`UserRequest`]; starts out `New`.
#[derive(Debug, Clone)]
pub struct NewUserRequest {
    /// The company applied to.
    pub company_id: CompanyId,
    /// The applying user.
    pub user_id: UserId,
}
