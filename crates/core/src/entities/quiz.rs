//! Quiz, question/answer, participation and result entities.

use chrono::{DateTime, Utc};

use super::company::{CompanyId, CompanyUserId};
use super::define_id;

define_id! {
    /// Identifier of a [`Quiz`].
    QuizId
}

define_id! {
    /// Identifier of a [`Question`].
    QuestionId
}

define_id! {
    /// Identifier of an [`Answer`].
    AnswerId
}

define_id! {
    /// Identifier of a [`QuizParticipation`].
    QuizParticipationId
}

define_id! {
    /// Identifier of a [`QuizResult`].
    QuizResultId
}

/// A quiz owned by a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// Storage-assigned identifier.
    pub id: QuizId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Quiz title.
    pub title: String,
    /// Quiz description.
    pub description: String,
    /// Number of times the quiz has been taken.
    pub participation_count: i64,
}

/// A single question of a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Storage-assigned identifier.
    pub id: QuestionId,
    /// Owning quiz.
    pub quiz_id: QuizId,
    /// Question text.
    pub title: String,
}

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Storage-assigned identifier.
    pub id: AnswerId,
    /// Owning question.
    pub question_id: QuestionId,
    /// Answer text.
    pub text: String,
    /// Whether choosing this answer is correct.
    pub is_correct: bool,
}

/// One take-quiz attempt by a company member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParticipation {
    /// Storage-assigned identifier.
    pub id: QuizParticipationId,
    /// The quiz taken.
    pub quiz_id: QuizId,
    /// The member taking it.
    pub company_user_id: CompanyUserId,
    /// When the attempt started; drives the retake reminder scan.
    pub created_at: DateTime<Utc>,
}

/// The graded outcome of a participation. Exactly one per participation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    /// Storage-assigned identifier.
    pub id: QuizResultId,
    /// The graded participation.
    pub quiz_participation_id: QuizParticipationId,
    /// Number of correctly answered questions.
    pub correct_answers: i64,
}

/// Insert record for a [`Quiz`].
#[derive(Debug, Clone)]
pub struct NewQuiz {
    /// Owning company.
    pub company_id: CompanyId,
    /// Quiz title.
    pub title: String,
    /// Quiz description.
    pub description: String,
}

/// Insert record for a [`Question`].
#[derive(Debug, Clone)]
pub struct NewQuestion {
    /// Owning quiz.
    pub quiz_id: QuizId,
    /// Question text.
    pub title: String,
}

/// Insert record for an [`Answer`].
#[derive(Debug, Clone)]
pub struct NewAnswer {
    /// Owning question.
    pub question_id: QuestionId,
    /// Answer text.
    pub text: String,
    /// Whether choosing this answer is correct.
    pub is_correct: bool,
}

/// Insert record for a [`QuizParticipation`].
#[derive(Debug, Clone)]
pub struct NewQuizParticipation {
    /// The quiz taken.
    pub quiz_id: QuizId,
    /// The member taking it.
    pub company_user_id: CompanyUserId,
    /// When the attempt started.
    pub created_at: DateTime<Utc>,
}

/// Insert record for a [`QuizResult`].
#[derive(Debug, Clone)]
pub struct NewQuizResult {
    /// The graded participation.
    pub quiz_participation_id: QuizParticipationId,
    /// Number of correctly answered questions.
    pub correct_answers: i64,
}
