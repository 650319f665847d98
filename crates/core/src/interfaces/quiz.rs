//! Quiz persistence ports.

use async_trait::async_trait;
use quizhive_common::{AppResult, Pagination};
use serde::Serialize;

use crate::entities::{
    CompanyId, NewAnswer, NewQuestion, NewQuiz, NewQuizParticipation, NewQuizResult, QuestionId,
    Quiz, QuizId, QuizParticipation, QuizParticipationId, QuizResult, QuizResultId,
};

/// Write-capable persistence port for quizzes.
#[async_trait]
pub trait QuizGateway: Send + Sync {
    /// Insert a quiz and return the assigned id.
    async fn add(&self, quiz: NewQuiz) -> AppResult<QuizId>;

    /// Load a quiz by id.
    async fn by_id(&self, id: QuizId) -> AppResult<Option<Quiz>>;

    /// Persist a mutated quiz.
    async fn update(&self, quiz: &Quiz) -> AppResult<()>;

    /// Delete a quiz; questions and answers cascade.
    async fn delete(&self, id: QuizId) -> AppResult<()>;
}

/// Write-capable persistence port for questions.
#[async_trait]
pub trait QuestionGateway: Send + Sync {
    /// Insert a question and return the assigned id.
    async fn add(&self, question: NewQuestion) -> AppResult<QuestionId>;
}

/// Write-capable persistence port for answers.
#[async_trait]
pub trait AnswerGateway: Send + Sync {
    /// Bulk-insert the answers of one question.
    async fn add_many(&self, answers: Vec<NewAnswer>) -> AppResult<()>;
}

/// Write-capable persistence port for participations.
#[async_trait]
pub trait QuizParticipationGateway: Send + Sync {
    /// Insert a participation and return the assigned id.
    async fn add(&self, participation: NewQuizParticipation) -> AppResult<QuizParticipationId>;

    /// Load a participation by id.
    async fn by_id(&self, id: QuizParticipationId) -> AppResult<Option<QuizParticipation>>;

    /// Load every participation (reminder scan input).
    async fn all(&self) -> AppResult<Vec<QuizParticipation>>;
}

/// Write-capable persistence port for quiz results.
#[async_trait]
pub trait QuizResultGateway: Send + Sync {
    /// Insert a result and return the assigned id.
    async fn add(&self, result: NewQuizResult) -> AppResult<QuizResultId>;

    /// Load the result of a participation, if already submitted.
    async fn by_participation(&self, id: QuizParticipationId) -> AppResult<Option<QuizResult>>;
}

/// Read-side projection of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDetail {
    /// Quiz identifier.
    pub quiz_id: QuizId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Quiz title.
    pub title: String,
    /// Quiz description.
    pub description: String,
    /// Number of times the quiz has been taken.
    pub participation_count: i64,
}

/// Filters for quiz listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizFilters {
    /// Restrict to one company's quizzes.
    pub company_id: Option<CompanyId>,
}

/// Read-only, paginated persistence port for quizzes.
#[async_trait]
pub trait QuizReader: Send + Sync {
    /// List quizzes matching the filters.
    async fn many(&self, filters: QuizFilters, pagination: Pagination)
    -> AppResult<Vec<QuizDetail>>;

    /// Count quizzes matching the filters.
    async fn total(&self, filters: QuizFilters) -> AppResult<u64>;
}
