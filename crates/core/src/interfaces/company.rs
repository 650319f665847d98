//! Company and membership persistence ports.

use async_trait::async_trait;
use quizhive_common::{AppResult, Pagination};
use serde::Serialize;

use crate::entities::{
    Company, CompanyId, CompanyName, CompanyRole, CompanyUser, CompanyUserId, NewCompany,
    NewCompanyUser, UserId, Visibility,
};

/// Write-capable persistence port for companies.
#[async_trait]
pub trait CompanyGateway: Send + Sync {
    /// Insert a company and return the assigned id.
    async fn add(&self, company: NewCompany) -> AppResult<CompanyId>;

    /// Load a company by id.
    async fn by_id(&self, id: CompanyId) -> AppResult<Option<Company>>;

    /// Whether a company with this exact name exists.
    async fn name_exists(&self, name: &CompanyName) -> AppResult<bool>;

    /// Persist a mutated company.
    async fn update(&self, company: &Company) -> AppResult<()>;

    /// Delete a company; owned rows cascade.
    async fn delete(&self, id: CompanyId) -> AppResult<()>;
}

/// Write-capable persistence port for membership rows.
#[async_trait]
pub trait CompanyUserGateway: Send + Sync {
    /// Insert a membership row and return the assigned id.
    async fn add(&self, company_user: NewCompanyUser) -> AppResult<CompanyUserId>;

    /// Load a membership row by id.
    async fn by_id(&self, id: CompanyUserId) -> AppResult<Option<CompanyUser>>;

    /// Load the membership of `user_id` in `company_id`, if any.
    async fn by_company(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> AppResult<Option<CompanyUser>>;

    /// Load any membership of `user_id`, regardless of company.
    async fn by_identity(&self, user_id: UserId) -> AppResult<Option<CompanyUser>>;

    /// Load every membership row of a company (notification fan-out input).
    async fn for_company(&self, company_id: CompanyId) -> AppResult<Vec<CompanyUser>>;

    /// Persist a mutated membership row.
    async fn update(&self, company_user: &CompanyUser) -> AppResult<()>;

    /// Delete a membership row.
    async fn delete(&self, id: CompanyUserId) -> AppResult<()>;
}

/// Read-side projection of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDetail {
    /// Company identifier.
    pub company_id: CompanyId,
    /// Owning user.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Listing visibility.
    pub visibility: Visibility,
}

/// Filters for company listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyFilters {
    /// Restrict to a visibility class.
    pub visibility: Option<Visibility>,
}

/// Read-only, paginated persistence port for companies.
#[async_trait]
pub trait CompanyReader: Send + Sync {
    /// Load one company projection by id.
    async fn by_id(&self, id: CompanyId) -> AppResult<Option<CompanyDetail>>;

    /// List companies matching the filters.
    async fn many(
        &self,
        filters: CompanyFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<CompanyDetail>>;

    /// Count companies matching the filters.
    async fn total(&self, filters: CompanyFilters) -> AppResult<u64>;
}

/// Read-side projection of a membership row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyUserDetail {
    /// Membership identifier.
    pub company_user_id: CompanyUserId,
    /// The company.
    pub company_id: CompanyId,
    /// The member.
    pub user_id: UserId,
    /// Role within the company.
    pub role: CompanyRole,
}

/// Filters for membership listings.
#[derive(Debug, Clone, Copy)]
pub struct CompanyUserFilters {
    /// The company whose members to list.
    pub company_id: CompanyId,
}

/// Read-only, paginated persistence port for membership rows.
#[async_trait]
pub trait CompanyUserReader: Send + Sync {
    /// Load one membership projection by id.
    async fn by_id(&self, id: CompanyUserId) -> AppResult<Option<CompanyUserDetail>>;

    /// List members matching the filters.
    async fn many(
        &self,
        filters: CompanyUserFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<CompanyUserDetail>>;

    /// Count members matching the filters.
    async fn total(&self, filters: CompanyUserFilters) -> AppResult<u64>;
}
