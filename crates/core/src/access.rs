//! Centralized authorization predicates.
//!
//! Every rule resolves the actor through the injected [`IdProvider`] and
//! operates on entities the caller has already loaded — never on raw ids
//! taken from a request. The building blocks are plain boolean predicates;
//! `ensure_*` methods compose them and turn a `false` into
//! [`AppError::AccessDenied`]. Owner-or-identity rules are expressed as a
//! boolean OR over both predicates so the fallback is auditable without
//! exercising any error path.

use std::sync::Arc;

use quizhive_common::{AppError, AppResult};

use crate::entities::{Company, CompanyId, CompanyRole, Invitation, User, UserId};
use crate::interfaces::{CompanyUserGateway, IdProvider, UserDetail};

/// Whether `actor` is the user identified by `user_id`.
#[must_use]
pub fn is_identity(actor: &UserDetail, user_id: UserId) -> bool {
    actor.user_id == user_id
}

/// Whether `actor` owns `company`.
#[must_use]
pub fn is_owner(actor: &UserDetail, company: &Company) -> bool {
    actor.user_id == company.owner_id
}

/// Stateless authorization service.
#[derive(Clone)]
pub struct AccessService {
    id_provider: Arc<dyn IdProvider>,
    company_users: Arc<dyn CompanyUserGateway>,
}

impl AccessService {
    /// Create a new access service.
    #[must_use]
    pub fn new(id_provider: Arc<dyn IdProvider>, company_users: Arc<dyn CompanyUserGateway>) -> Self {
        Self {
            id_provider,
            company_users,
        }
    }

    async fn actor(&self) -> AppResult<UserDetail> {
        self.id_provider.current_user().await
    }

    /// Whether the actor holds an Admin membership in `company`.
    async fn actor_is_admin(&self, actor: &UserDetail, company: &Company) -> AppResult<bool> {
        let member = self
            .company_users
            .by_company(company.id, actor.user_id)
            .await?;

        Ok(member.is_some_and(|m| m.role == CompanyRole::Admin))
    }

    /// The actor must own `company`.
    pub async fn ensure_owner(&self, company: &Company) -> AppResult<()> {
        let actor = self.actor().await?;

        if !is_owner(&actor, company) {
            return Err(AppError::AccessDenied);
        }
        Ok(())
    }

    /// The pair must not already have a membership row.
    ///
    /// Guards invitation/request creation, so a hit is a conflict, not an
    /// access denial. The storage-level unique constraint on
    /// (company, user) remains the authoritative guard; this check only
    /// reports the friendlier error first.
    pub async fn ensure_not_company_member(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> AppResult<()> {
        let member = self.company_users.by_company(company_id, user_id).await?;

        if member.is_some() {
            return Err(AppError::AlreadyMember {
                company_id: company_id.into(),
                user_id: user_id.into(),
            });
        }
        Ok(())
    }

    /// Owner-only: company profile edits.
    pub async fn ensure_can_edit_company(&self, company: &Company) -> AppResult<()> {
        self.ensure_owner(company).await
    }

    /// Owner-only: removing members.
    pub async fn ensure_can_delete_from_company(&self, company: &Company) -> AppResult<()> {
        self.ensure_owner(company).await
    }

    /// Owner-only: accepting join requests.
    pub async fn ensure_can_accept_user_request(&self, company: &Company) -> AppResult<()> {
        self.ensure_owner(company).await
    }

    /// Owner-only: changing member roles.
    pub async fn ensure_can_edit_member_role(&self, company: &Company) -> AppResult<()> {
        self.ensure_owner(company).await
    }

    /// Owner may invite any user who is not yet a member.
    pub async fn ensure_can_send_invitation(
        &self,
        company: &Company,
        user_id: UserId,
    ) -> AppResult<()> {
        self.ensure_owner(company).await?;
        self.ensure_not_company_member(company.id, user_id).await
    }

    /// Any non-member may request to join.
    pub async fn ensure_can_send_request(
        &self,
        company: &Company,
        user_id: UserId,
    ) -> AppResult<()> {
        self.ensure_not_company_member(company.id, user_id).await
    }

    /// Only the invitee may accept, and only while not yet a member.
    ///
    /// The membership check also makes acceptance idempotent: once the
    /// first accept created the membership row, a second accept fails here
    /// even though it races past the status field.
    pub async fn ensure_can_accept_invitation(&self, invitation: &Invitation) -> AppResult<()> {
        let actor = self.actor().await?;

        if !is_identity(&actor, invitation.user_id) {
            return Err(AppError::AccessDenied);
        }
        self.ensure_not_company_member(invitation.company_id, invitation.user_id)
            .await
    }

    /// Either the company owner or the invitee may reject an invitation.
    pub async fn ensure_can_reject_invitation(
        &self,
        company: &Company,
        invitation: &Invitation,
    ) -> AppResult<()> {
        let actor = self.actor().await?;

        if is_owner(&actor, company) || is_identity(&actor, invitation.user_id) {
            return Ok(());
        }
        Err(AppError::AccessDenied)
    }

    /// Either the company owner or the requester may reject a join request.
    pub async fn ensure_can_reject_user_request(
        &self,
        company: &Company,
        user_id: UserId,
    ) -> AppResult<()> {
        let actor = self.actor().await?;

        if is_owner(&actor, company) || is_identity(&actor, user_id) {
            return Ok(());
        }
        Err(AppError::AccessDenied)
    }

    /// Owner or Admin: create, edit and delete quizzes.
    pub async fn ensure_can_manage_quiz(&self, company: &Company) -> AppResult<()> {
        let actor = self.actor().await?;

        if is_owner(&actor, company) || self.actor_is_admin(&actor, company).await? {
            return Ok(());
        }
        Err(AppError::AccessDenied)
    }

    /// Owner or Admin: company-wide result listings.
    pub async fn ensure_can_view_company_results(&self, company: &Company) -> AppResult<()> {
        self.ensure_can_manage_quiz(company).await
    }

    /// Self-only: password changes.
    pub async fn ensure_can_edit_password(&self, user: &User) -> AppResult<()> {
        let actor = self.actor().await?;

        if !is_identity(&actor, user.id) {
            return Err(AppError::AccessDenied);
        }
        Ok(())
    }

    /// Self-only: name changes.
    pub async fn ensure_can_edit_full_name(&self, user: &User) -> AppResult<()> {
        let actor = self.actor().await?;

        if !is_identity(&actor, user.id) {
            return Err(AppError::AccessDenied);
        }
        Ok(())
    }

    /// Self-only: account deletion.
    pub async fn ensure_can_delete_user(&self, user: &User) -> AppResult<()> {
        let actor = self.actor().await?;

        if !is_identity(&actor, user.id) {
            return Err(AppError::AccessDenied);
        }
        Ok(())
    }

    /// E-mail edits are denied to the address owner and allowed to anyone
    /// else.
    // TODO: confirm with product whether users should be editing their own
    // e-mail here; every other profile rule is self-only.
    pub async fn ensure_can_edit_email(&self, user: &User) -> AppResult<()> {
        let actor = self.actor().await?;

        if is_identity(&actor, user.id) {
            return Err(AppError::AccessDenied);
        }
        Ok(())
    }
}
