//! Invitation and join-request persistence ports.

use async_trait::async_trait;
use quizhive_common::{AppResult, Pagination};
use serde::Serialize;

use crate::entities::{
    CompanyId, Invitation, InvitationId, NewInvitation, NewUserRequest, RequestStatus, UserId,
    UserRequest, UserRequestId,
};

/// Write-capable persistence port for invitations.
#[async_trait]
pub trait InvitationGateway: Send + Sync {
    /// Insert an invitation and return the assigned id.
    async fn add(&self, invitation: NewInvitation) -> AppResult<InvitationId>;

    /// Load an invitation by id.
    async fn by_id(&self, id: InvitationId) -> AppResult<Option<Invitation>>;

    /// Whether a `New`-status invitation exists for the pair. Resolved
    /// invitations do not count, so re-inviting after a rejection works.
    async fn has_pending(&self, company_id: CompanyId, user_id: UserId) -> AppResult<bool>;

    /// Persist a mutated invitation.
    async fn update(&self, invitation: &Invitation) -> AppResult<()>;
}

/// Write-capable persistence port for join requests.
#[async_trait]
pub trait UserRequestGateway: Send + Sync {
    /// Insert a request and return the assigned id.
    async fn add(&self, request: NewUserRequest) -> AppResult<UserRequestId>;

    /// Load a request by id.
    async fn by_id(&self, id: UserRequestId) -> AppResult<Option<UserRequest>>;

    /// Whether a `New`-status request exists for the pair.
    async fn has_pending(&self, company_id: CompanyId, user_id: UserId) -> AppResult<bool>;

    /// Persist a mutated request.
    async fn update(&self, request: &UserRequest) -> AppResult<()>;
}

/// Read-side projection of an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationDetail {
    /// Invitation identifier.
    pub invitation_id: InvitationId,
    /// The inviting company.
    pub company_id: CompanyId,
    /// The invited user.
    pub user_id: UserId,
    /// Lifecycle state.
    pub status: RequestStatus,
}

/// Filters for invitation listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvitationFilters {
    /// Restrict to one company's invitations.
    pub company_id: Option<CompanyId>,
    /// Restrict to one user's invitations.
    pub user_id: Option<UserId>,
}

/// Read-only, paginated persistence port for invitations.
#[async_trait]
pub trait InvitationReader: Send + Sync {
    /// List invitations matching the filters.
    async fn many(
        &self,
        filters: InvitationFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<InvitationDetail>>;

    /// Count invitations matching the filters.
    async fn total(&self, filters: InvitationFilters) -> AppResult<u64>;
}

/// Read-side projection of a join request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRequestDetail {
    /// Request identifier.
    pub user_request_id: UserRequestId,
    /// The company applied to.
    pub company_id: CompanyId,
    /// The applying user.
    pub user_id: UserId,
    /// Lifecycle state.
    pub status: RequestStatus,
}

/// Filters for join-request listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRequestFilters {
    /// Restrict to one company's requests.
    pub company_id: Option<CompanyId>,
    /// Restrict to one user's requests.
    pub user_id: Option<UserId>,
}

/// Read-only, paginated persistence port for join requests.
#[async_trait]
pub trait UserRequestReader: Send + Sync {
    /// List requests matching the filters.
    async fn many(
        &self,
        filters: UserRequestFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<UserRequestDetail>>;

    /// Count requests matching the filters.
    async fn total(&self, filters: UserRequestFilters) -> AppResult<u64>;
}
