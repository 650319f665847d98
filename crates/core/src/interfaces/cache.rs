//! Cache port for the quiz-result mirror.

use async_trait::async_trait;
use quizhive_common::AppResult;
use serde::{Deserialize, Serialize};

use crate::entities::{CompanyId, CompanyUserId, QuizId, QuizParticipationId};

/// The JSON blob mirrored into the cache for one submitted result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedQuizResult {
    /// The graded participation.
    pub participation_id: QuizParticipationId,
    /// The member who took the quiz.
    pub company_user_id: CompanyUserId,
    /// The member's company.
    pub company_id: CompanyId,
    /// The quiz taken.
    pub quiz_id: QuizId,
    /// Number of correctly answered questions.
    pub correct_answers: i64,
}

/// TTL-backed key-value cache with a per-company member index.
///
/// A miss (never set, or expired) is a valid, non-exceptional state and
/// comes back as `Ok(None)` / an empty set. Errors are reserved for
/// infrastructure failure — callers must never conflate the two.
#[async_trait]
pub trait CacheGateway: Send + Sync {
    /// Store `value` under `key` with an expiry, overwriting any previous
    /// value.
    async fn set_cache(&self, key: &str, value: &CachedQuizResult, ttl_secs: u64) -> AppResult<()>;

    /// Fetch the value under `key`; `None` on miss or expiry.
    async fn get_cache(&self, key: &str) -> AppResult<Option<CachedQuizResult>>;

    /// Add `cached_key` to the set stored under `member_key`.
    async fn set_member_key(&self, member_key: &str, cached_key: &str) -> AppResult<()>;

    /// Fetch the set of keys stored under `member_key`; empty on absent.
    async fn get_member_data(&self, member_key: &str) -> AppResult<Vec<String>>;
}
