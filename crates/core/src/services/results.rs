//! Cache-backed quiz-result queries.
//!
//! Results are read far more often right after submission than they are
//! queried historically, so reads go to the cache mirror. A missing or
//! expired entry is an ordinary "no result yet" answer; only transport
//! failures surface as errors.

use std::sync::Arc;

use quizhive_common::{AppError, AppResult};
use serde::Serialize;

use crate::access::AccessService;
use crate::cache_keys::{company_member_key, quiz_result_key};
use crate::entities::{CompanyId, QuizParticipationId};
use crate::interfaces::{
    CacheGateway, CompanyGateway, CompanyUserGateway, IdProvider, QuizParticipationGateway,
};

/// One cached result in a company-wide listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyQuizResult {
    /// The graded participation.
    pub participation_id: QuizParticipationId,
    /// Number of correctly answered questions.
    pub correct_answers: i64,
}

/// Quiz-result read use cases.
#[derive(Clone)]
pub struct ResultsService {
    participations: Arc<dyn QuizParticipationGateway>,
    company_users: Arc<dyn CompanyUserGateway>,
    companies: Arc<dyn CompanyGateway>,
    cache: Arc<dyn CacheGateway>,
    id_provider: Arc<dyn IdProvider>,
    access: AccessService,
}

impl ResultsService {
    /// Create a new results service.
    #[must_use]
    pub fn new(
        participations: Arc<dyn QuizParticipationGateway>,
        company_users: Arc<dyn CompanyUserGateway>,
        companies: Arc<dyn CompanyGateway>,
        cache: Arc<dyn CacheGateway>,
        id_provider: Arc<dyn IdProvider>,
        access: AccessService,
    ) -> Self {
        Self {
            participations,
            company_users,
            companies,
            cache,
            id_provider,
            access,
        }
    }

    /// The actor's own score for one participation; `None` when no result
    /// has been submitted yet or the cache entry expired.
    pub async fn my_result(&self, participation_id: i64) -> AppResult<Option<i64>> {
        let participation = self
            .participations
            .by_id(QuizParticipationId(participation_id))
            .await?
            .ok_or(AppError::QuizParticipationNotFound(participation_id))?;

        let actor = self.id_provider.current_user().await?;

        let company_user = self
            .company_users
            .by_id(participation.company_user_id)
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        if actor.user_id != company_user.user_id {
            return Err(AppError::AccessDenied);
        }

        let cached = self
            .cache
            .get_cache(&quiz_result_key(participation.id))
            .await?;

        Ok(cached.map(|entry| entry.correct_answers))
    }

    /// All cached results across a company, via the member-index key.
    /// Owner or Admin. Entries whose TTL lapsed are skipped.
    pub async fn company_results(&self, company_id: i64) -> AppResult<Vec<CompanyQuizResult>> {
        let company = self
            .companies
            .by_id(CompanyId(company_id))
            .await?
            .ok_or(AppError::CompanyNotFound(company_id))?;

        self.access
            .ensure_can_view_company_results(&company)
            .await?;

        let keys = self
            .cache
            .get_member_data(&company_member_key(company.id))
            .await?;

        let mut results = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(entry) = self.cache.get_cache(&key).await? {
                results.push(CompanyQuizResult {
                    participation_id: entry.participation_id,
                    correct_answers: entry.correct_answers,
                });
            }
        }

        Ok(results)
    }
}
