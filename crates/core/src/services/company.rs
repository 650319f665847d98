//! Company service.

use std::sync::Arc;

use quizhive_common::{AppError, AppResult, Pagination};
use serde::Serialize;
use tracing::info;

use crate::access::AccessService;
use crate::entities::{
    CompanyDescription, CompanyId, CompanyName, CompanyRole, NewCompany, NewCompanyUser, UserId,
    Visibility,
};
use crate::interfaces::{
    Committer, CompanyDetail, CompanyFilters, CompanyGateway, CompanyReader, CompanyUserDetail,
    CompanyUserFilters, CompanyUserGateway, CompanyUserReader, IdProvider,
};

/// Input for creating a company.
#[derive(Debug, Clone)]
pub struct CreateCompanyInput {
    /// Unique display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// Input for changing a member's role.
#[derive(Debug, Clone)]
pub struct EditMemberRoleInput {
    /// The company.
    pub company_id: i64,
    /// The member whose role changes.
    pub user_id: i64,
    /// The role to assign.
    pub new_role: CompanyRole,
}

/// Paginated company listing.
#[derive(Debug, Clone, Serialize)]
pub struct GetCompaniesOutput {
    /// Total matching companies, ignoring pagination.
    pub total: u64,
    /// The requested page.
    pub companies: Vec<CompanyDetail>,
}

/// Paginated member listing.
#[derive(Debug, Clone, Serialize)]
pub struct GetCompanyUsersOutput {
    /// Total members, ignoring pagination.
    pub total: u64,
    /// The requested page.
    pub users: Vec<CompanyUserDetail>,
}

/// Company and membership use cases.
#[derive(Clone)]
pub struct CompanyService {
    companies: Arc<dyn CompanyGateway>,
    company_users: Arc<dyn CompanyUserGateway>,
    company_reader: Arc<dyn CompanyReader>,
    company_user_reader: Arc<dyn CompanyUserReader>,
    id_provider: Arc<dyn IdProvider>,
    access: AccessService,
    committer: Arc<dyn Committer>,
}

impl CompanyService {
    /// Create a new company service.
    #[must_use]
    pub fn new(
        companies: Arc<dyn CompanyGateway>,
        company_users: Arc<dyn CompanyUserGateway>,
        company_reader: Arc<dyn CompanyReader>,
        company_user_reader: Arc<dyn CompanyUserReader>,
        id_provider: Arc<dyn IdProvider>,
        access: AccessService,
        committer: Arc<dyn Committer>,
    ) -> Self {
        Self {
            companies,
            company_users,
            company_reader,
            company_user_reader,
            id_provider,
            access,
            committer,
        }
    }

    async fn load_company(&self, company_id: i64) -> AppResult<crate::entities::Company> {
        self.companies
            .by_id(CompanyId(company_id))
            .await?
            .ok_or(AppError::CompanyNotFound(company_id))
    }

    /// Create a company; the actor becomes its Owner member.
    ///
    /// Company and owner membership land in the same transaction, so a
    /// failure between the two writes leaves nothing behind.
    pub async fn create_company(&self, input: CreateCompanyInput) -> AppResult<CompanyId> {
        let name = CompanyName::new(input.name)?;
        let description = CompanyDescription::new(input.description)?;

        let actor = self.id_provider.current_user().await?;

        if self.companies.name_exists(&name).await? {
            return Err(AppError::CompanyNameTaken(name.as_str().to_string()));
        }

        let company_id = self
            .companies
            .add(NewCompany {
                owner_id: actor.user_id,
                name: name.clone(),
                description,
                visibility: Visibility::Visible,
            })
            .await?;

        self.company_users
            .add(NewCompanyUser {
                company_id,
                user_id: actor.user_id,
                role: CompanyRole::Owner,
            })
            .await?;

        self.committer.commit().await?;

        info!(company = %name, "created company");

        Ok(company_id)
    }

    /// Rename a company. Owner only.
    pub async fn edit_name(&self, company_id: i64, name: &str) -> AppResult<()> {
        let new_name = CompanyName::new(name)?;

        let mut company = self.load_company(company_id).await?;

        self.access.ensure_can_edit_company(&company).await?;

        company.name = new_name;
        self.companies.update(&company).await?;

        self.committer.commit().await?;

        info!(company_id, name, "edited company name");

        Ok(())
    }

    /// Change a company's description. Owner only.
    pub async fn edit_description(&self, company_id: i64, description: &str) -> AppResult<()> {
        let new_description = CompanyDescription::new(description)?;

        let mut company = self.load_company(company_id).await?;

        self.access.ensure_can_edit_company(&company).await?;

        company.description = new_description;
        self.companies.update(&company).await?;

        self.committer.commit().await?;

        info!(company_id, "edited company description");

        Ok(())
    }

    /// Change a company's visibility. Owner only.
    pub async fn edit_visibility(&self, company_id: i64, visibility: Visibility) -> AppResult<()> {
        let mut company = self.load_company(company_id).await?;

        self.access.ensure_can_edit_company(&company).await?;

        company.visibility = visibility;
        self.companies.update(&company).await?;

        self.committer.commit().await?;

        info!(company_id, ?visibility, "edited company visibility");

        Ok(())
    }

    /// Change a member's role. Owner only.
    pub async fn edit_member_role(&self, input: EditMemberRoleInput) -> AppResult<()> {
        let company = self.load_company(input.company_id).await?;

        let mut member = self
            .company_users
            .by_company(company.id, UserId(input.user_id))
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        self.access.ensure_can_edit_member_role(&company).await?;

        member.role = input.new_role;
        self.company_users.update(&member).await?;

        self.committer.commit().await?;

        info!(
            company_user = %member.id,
            role = ?input.new_role,
            "edited member role"
        );

        Ok(())
    }

    /// Leave a company. Deletes exactly the actor's membership row.
    pub async fn leave_company(&self, company_id: i64) -> AppResult<()> {
        let actor = self.id_provider.current_user().await?;

        let company = self.load_company(company_id).await?;

        let member = self
            .company_users
            .by_company(company.id, actor.user_id)
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        self.company_users.delete(member.id).await?;

        self.committer.commit().await?;

        info!(user = %actor.user_id, company_id, "user left company");

        Ok(())
    }

    /// Remove a member from a company. Owner only.
    pub async fn remove_user(&self, company_id: i64, user_id: i64) -> AppResult<()> {
        let company = self.load_company(company_id).await?;

        let member = self
            .company_users
            .by_company(company.id, UserId(user_id))
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        self.access.ensure_can_delete_from_company(&company).await?;

        self.company_users.delete(member.id).await?;

        self.committer.commit().await?;

        info!(user_id, company_id, "removed user from company");

        Ok(())
    }

    /// Delete a company; owned rows cascade. Owner only.
    pub async fn delete_company(&self, company_id: i64) -> AppResult<()> {
        let company = self.load_company(company_id).await?;

        self.access.ensure_can_edit_company(&company).await?;

        self.companies.delete(company.id).await?;

        self.committer.commit().await?;

        info!(company_id, "deleted company");

        Ok(())
    }

    /// Load one company projection.
    pub async fn get_company(&self, company_id: i64) -> AppResult<CompanyDetail> {
        self.company_reader
            .by_id(CompanyId(company_id))
            .await?
            .ok_or(AppError::CompanyNotFound(company_id))
    }

    /// List companies with a total count.
    pub async fn get_companies(
        &self,
        filters: CompanyFilters,
        pagination: Pagination,
    ) -> AppResult<GetCompaniesOutput> {
        let total = self.company_reader.total(filters).await?;
        let companies = self.company_reader.many(filters, pagination).await?;

        Ok(GetCompaniesOutput { total, companies })
    }

    /// List a company's members with a total count.
    pub async fn get_company_users(
        &self,
        company_id: i64,
        pagination: Pagination,
    ) -> AppResult<GetCompanyUsersOutput> {
        let company = self.load_company(company_id).await?;

        let filters = CompanyUserFilters {
            company_id: company.id,
        };
        let total = self.company_user_reader.total(filters).await?;
        let users = self.company_user_reader.many(filters, pagination).await?;

        Ok(GetCompanyUsersOutput { total, users })
    }
}
