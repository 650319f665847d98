//! Invitation and join-request service.
//!
//! Carries the `New -> Accepted | Rejected` state machine for both record
//! kinds. Both transitions are terminal; acceptance additionally creates
//! the membership row inside the same transaction.

use std::sync::Arc;

use quizhive_common::{AppError, AppResult, Pagination};
use serde::Serialize;
use tracing::info;

use crate::access::AccessService;
use crate::entities::{
    CompanyId, CompanyRole, InvitationId, NewCompanyUser, NewInvitation, NewUserRequest,
    RequestStatus, UserId, UserRequestId,
};
use crate::interfaces::{
    Committer, CompanyGateway, CompanyUserGateway, IdProvider, InvitationDetail, InvitationFilters,
    InvitationGateway, InvitationReader, UserGateway, UserRequestDetail, UserRequestFilters,
    UserRequestGateway, UserRequestReader,
};

/// Paginated invitation listing.
#[derive(Debug, Clone, Serialize)]
pub struct GetInvitationsOutput {
    /// Total matching invitations, ignoring pagination.
    pub total: u64,
    /// The requested page.
    pub invitations: Vec<InvitationDetail>,
}

/// Paginated join-request listing.
#[derive(Debug, Clone, Serialize)]
pub struct GetUserRequestsOutput {
    /// Total matching requests, ignoring pagination.
    pub total: u64,
    /// The requested page.
    pub requests: Vec<UserRequestDetail>,
}

/// Invitation and join-request use cases.
#[derive(Clone)]
pub struct InvitationService {
    invitations: Arc<dyn InvitationGateway>,
    user_requests: Arc<dyn UserRequestGateway>,
    companies: Arc<dyn CompanyGateway>,
    company_users: Arc<dyn CompanyUserGateway>,
    users: Arc<dyn UserGateway>,
    invitation_reader: Arc<dyn InvitationReader>,
    user_request_reader: Arc<dyn UserRequestReader>,
    id_provider: Arc<dyn IdProvider>,
    access: AccessService,
    committer: Arc<dyn Committer>,
}

impl InvitationService {
    /// Create a new invitation service.
    #[must_use]
    pub fn new(
        invitations: Arc<dyn InvitationGateway>,
        user_requests: Arc<dyn UserRequestGateway>,
        companies: Arc<dyn CompanyGateway>,
        company_users: Arc<dyn CompanyUserGateway>,
        users: Arc<dyn UserGateway>,
        invitation_reader: Arc<dyn InvitationReader>,
        user_request_reader: Arc<dyn UserRequestReader>,
        id_provider: Arc<dyn IdProvider>,
        access: AccessService,
        committer: Arc<dyn Committer>,
    ) -> Self {
        Self {
            invitations,
            user_requests,
            companies,
            company_users,
            users,
            invitation_reader,
            user_request_reader,
            id_provider,
            access,
            committer,
        }
    }

    async fn load_company(&self, company_id: CompanyId) -> AppResult<crate::entities::Company> {
        self.companies
            .by_id(company_id)
            .await?
            .ok_or(AppError::CompanyNotFound(company_id.into()))
    }

    /// Invite a user into a company. Owner only; the invitee must not
    /// already be a member or hold a pending invitation.
    pub async fn send_invitation(&self, company_id: i64, user_id: i64) -> AppResult<InvitationId> {
        let company = self.load_company(CompanyId(company_id)).await?;

        let user = self
            .users
            .by_id(UserId(user_id))
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        if self.invitations.has_pending(company.id, user.id).await? {
            return Err(AppError::InvitationAlreadyExists {
                company_id,
                user_id,
            });
        }

        self.access
            .ensure_can_send_invitation(&company, user.id)
            .await?;

        let invitation_id = self
            .invitations
            .add(NewInvitation {
                company_id: company.id,
                user_id: user.id,
            })
            .await?;

        self.committer.commit().await?;

        info!(company_id, user_id, "sent invitation");

        Ok(invitation_id)
    }

    /// Apply for membership in a company. Any non-member; at most one
    /// pending request per pair.
    pub async fn send_request(&self, company_id: i64) -> AppResult<UserRequestId> {
        let actor = self.id_provider.current_user().await?;

        let company = self.load_company(CompanyId(company_id)).await?;

        self.access
            .ensure_can_send_request(&company, actor.user_id)
            .await?;

        if self
            .user_requests
            .has_pending(company.id, actor.user_id)
            .await?
        {
            return Err(AppError::UserRequestAlreadyExists {
                company_id,
                user_id: actor.user_id.into(),
            });
        }

        let request_id = self
            .user_requests
            .add(NewUserRequest {
                company_id: company.id,
                user_id: actor.user_id,
            })
            .await?;

        self.committer.commit().await?;

        info!(user = %actor.user_id, company_id, "sent join request");

        Ok(request_id)
    }

    /// Accept an invitation. Invitee only; creates the Member row.
    pub async fn accept_invitation(&self, invitation_id: i64) -> AppResult<()> {
        let mut invitation = self
            .invitations
            .by_id(InvitationId(invitation_id))
            .await?
            .ok_or(AppError::InvitationNotFound(invitation_id))?;

        let company = self.load_company(invitation.company_id).await?;

        self.access
            .ensure_can_accept_invitation(&invitation)
            .await?;

        invitation.status = RequestStatus::Accepted;
        self.invitations.update(&invitation).await?;

        self.company_users
            .add(NewCompanyUser {
                company_id: company.id,
                user_id: invitation.user_id,
                role: CompanyRole::Member,
            })
            .await?;

        self.committer.commit().await?;

        info!(invitation_id, "accepted invitation");

        Ok(())
    }

    /// Accept a join request. Owner only; creates the Member row.
    pub async fn accept_user_request(&self, request_id: i64) -> AppResult<()> {
        let mut request = self
            .user_requests
            .by_id(UserRequestId(request_id))
            .await?
            .ok_or(AppError::UserRequestNotFound(request_id))?;

        let company = self.load_company(request.company_id).await?;

        self.access.ensure_can_accept_user_request(&company).await?;

        request.status = RequestStatus::Accepted;
        self.user_requests.update(&request).await?;

        self.company_users
            .add(NewCompanyUser {
                company_id: company.id,
                user_id: request.user_id,
                role: CompanyRole::Member,
            })
            .await?;

        self.committer.commit().await?;

        info!(request_id, "accepted join request");

        Ok(())
    }

    /// Reject an invitation. Company owner or invitee.
    pub async fn reject_invitation(&self, invitation_id: i64) -> AppResult<()> {
        let mut invitation = self
            .invitations
            .by_id(InvitationId(invitation_id))
            .await?
            .ok_or(AppError::InvitationNotFound(invitation_id))?;

        let company = self.load_company(invitation.company_id).await?;

        self.access
            .ensure_can_reject_invitation(&company, &invitation)
            .await?;

        invitation.status = RequestStatus::Rejected;
        self.invitations.update(&invitation).await?;

        self.committer.commit().await?;

        info!(invitation_id, "rejected invitation");

        Ok(())
    }

    /// Reject a join request. Company owner or the requester.
    pub async fn reject_user_request(&self, request_id: i64) -> AppResult<()> {
        let mut request = self
            .user_requests
            .by_id(UserRequestId(request_id))
            .await?
            .ok_or(AppError::UserRequestNotFound(request_id))?;

        let company = self.load_company(request.company_id).await?;

        self.access
            .ensure_can_reject_user_request(&company, request.user_id)
            .await?;

        request.status = RequestStatus::Rejected;
        self.user_requests.update(&request).await?;

        self.committer.commit().await?;

        info!(request_id, "rejected join request");

        Ok(())
    }

    /// List the actor's own invitations.
    pub async fn my_invitations(&self, pagination: Pagination) -> AppResult<GetInvitationsOutput> {
        let actor = self.id_provider.current_user().await?;

        let filters = InvitationFilters {
            company_id: None,
            user_id: Some(actor.user_id),
        };

        let total = self.invitation_reader.total(filters).await?;
        let invitations = self.invitation_reader.many(filters, pagination).await?;

        Ok(GetInvitationsOutput { total, invitations })
    }

    /// List a company's invitations. Owner only.
    pub async fn company_invitations(
        &self,
        company_id: i64,
        pagination: Pagination,
    ) -> AppResult<GetInvitationsOutput> {
        let company = self.load_company(CompanyId(company_id)).await?;

        self.access.ensure_owner(&company).await?;

        let filters = InvitationFilters {
            company_id: Some(company.id),
            user_id: None,
        };

        let total = self.invitation_reader.total(filters).await?;
        let invitations = self.invitation_reader.many(filters, pagination).await?;

        Ok(GetInvitationsOutput { total, invitations })
    }

    /// List the actor's own join requests.
    pub async fn my_requests(&self, pagination: Pagination) -> AppResult<GetUserRequestsOutput> {
        let actor = self.id_provider.current_user().await?;

        let filters = UserRequestFilters {
            company_id: None,
            user_id: Some(actor.user_id),
        };

        let total = self.user_request_reader.total(filters).await?;
        let requests = self.user_request_reader.many(filters, pagination).await?;

        Ok(GetUserRequestsOutput { total, requests })
    }

    /// List a company's join requests. Owner only.
    pub async fn company_requests(
        &self,
        company_id: i64,
        pagination: Pagination,
    ) -> AppResult<GetUserRequestsOutput> {
        let company = self.load_company(CompanyId(company_id)).await?;

        self.access.ensure_owner(&company).await?;

        let filters = UserRequestFilters {
            company_id: Some(company.id),
            user_id: None,
        };

        let total = self.user_request_reader.total(filters).await?;
        let requests = self.user_request_reader.many(filters, pagination).await?;

        Ok(GetUserRequestsOutput { total, requests })
    }
}
