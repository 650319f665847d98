//! Quiz service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use quizhive_common::{AppError, AppResult, Pagination};
use serde::Serialize;
use tracing::{info, warn};

use crate::access::AccessService;
use crate::cache_keys::{company_member_key, quiz_result_key};
use crate::entities::{
    CompanyId, NewAnswer, NewNotification, NewQuestion, NewQuiz, NewQuizParticipation,
    NewQuizResult, QuizId, QuizParticipationId, QuizResultId,
};
use crate::interfaces::{
    AnswerGateway, CacheGateway, CachedQuizResult, Committer, CompanyGateway, CompanyUserGateway,
    IdProvider, NotificationGateway, QuestionGateway, QuizDetail, QuizFilters, QuizGateway,
    QuizParticipationGateway, QuizReader, QuizResultGateway,
};

/// Quizzes with fewer questions than this are rejected.
const MIN_QUESTIONS: usize = 2;
/// Answer-count window per question, inclusive.
const MIN_ANSWERS: usize = 2;
const MAX_ANSWERS: usize = 4;

/// Cached results expire after 48 hours.
const RESULT_CACHE_TTL_SECS: u64 = 48 * 60 * 60;

/// Participations older than this trigger a retake reminder.
const RETAKE_AFTER_HOURS: i64 = 24;

/// One answer option in a create-quiz request.
#[derive(Debug, Clone)]
pub struct AnswerData {
    /// Answer text.
    pub text: String,
    /// Whether this option is correct.
    pub is_correct: bool,
}

/// One question in a create-quiz request.
#[derive(Debug, Clone)]
pub struct QuestionData {
    /// Question text.
    pub title: String,
    /// Its answer options.
    pub answers: Vec<AnswerData>,
}

/// Input for creating a quiz.
#[derive(Debug, Clone)]
pub struct CreateQuizInput {
    /// Owning company.
    pub company_id: i64,
    /// Quiz title.
    pub title: String,
    /// Quiz description.
    pub description: String,
    /// The questions with their answers.
    pub questions: Vec<QuestionData>,
}

/// Paginated quiz listing.
#[derive(Debug, Clone, Serialize)]
pub struct GetQuizzesOutput {
    /// Total matching quizzes, ignoring pagination.
    pub total: u64,
    /// The requested page.
    pub quizzes: Vec<QuizDetail>,
}

/// Validate the shape of a quiz before anything touches storage: at least
/// two questions, two to four answers per question, and at least one
/// correct answer per question.
pub fn validate_quiz_shape(questions: &[QuestionData]) -> AppResult<()> {
    if questions.len() < MIN_QUESTIONS {
        return Err(AppError::InvalidQuestionCount);
    }

    for question in questions {
        if !(MIN_ANSWERS..=MAX_ANSWERS).contains(&question.answers.len()) {
            return Err(AppError::InvalidAnswerCount);
        }
        if !question.answers.iter().any(|answer| answer.is_correct) {
            return Err(AppError::NoCorrectAnswer);
        }
    }

    Ok(())
}

/// Quiz lifecycle, participation and grading use cases.
#[derive(Clone)]
pub struct QuizService {
    quizzes: Arc<dyn QuizGateway>,
    questions: Arc<dyn QuestionGateway>,
    answers: Arc<dyn AnswerGateway>,
    participations: Arc<dyn QuizParticipationGateway>,
    results: Arc<dyn QuizResultGateway>,
    companies: Arc<dyn CompanyGateway>,
    company_users: Arc<dyn CompanyUserGateway>,
    notifications: Arc<dyn NotificationGateway>,
    quiz_reader: Arc<dyn QuizReader>,
    cache: Arc<dyn CacheGateway>,
    id_provider: Arc<dyn IdProvider>,
    access: AccessService,
    committer: Arc<dyn Committer>,
}

impl QuizService {
    /// Create a new quiz service.
    #[must_use]
    pub fn new(
        quizzes: Arc<dyn QuizGateway>,
        questions: Arc<dyn QuestionGateway>,
        answers: Arc<dyn AnswerGateway>,
        participations: Arc<dyn QuizParticipationGateway>,
        results: Arc<dyn QuizResultGateway>,
        companies: Arc<dyn CompanyGateway>,
        company_users: Arc<dyn CompanyUserGateway>,
        notifications: Arc<dyn NotificationGateway>,
        quiz_reader: Arc<dyn QuizReader>,
        cache: Arc<dyn CacheGateway>,
        id_provider: Arc<dyn IdProvider>,
        access: AccessService,
        committer: Arc<dyn Committer>,
    ) -> Self {
        Self {
            quizzes,
            questions,
            answers,
            participations,
            results,
            companies,
            company_users,
            notifications,
            quiz_reader,
            cache,
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

    /// Create a quiz with its questions and answers. Owner or Admin.
    pub async fn create_quiz(&self, input: CreateQuizInput) -> AppResult<QuizId> {
        validate_quiz_shape(&input.questions)?;

        let company = self.load_company(CompanyId(input.company_id)).await?;

        self.access.ensure_can_manage_quiz(&company).await?;

        let quiz_id = self
            .quizzes
            .add(NewQuiz {
                company_id: company.id,
                title: input.title.clone(),
                description: input.description,
            })
            .await?;

        for question in input.questions {
            let question_id = self
                .questions
                .add(NewQuestion {
                    quiz_id,
                    title: question.title,
                })
                .await?;

            let answers = question
                .answers
                .into_iter()
                .map(|answer| NewAnswer {
                    question_id,
                    text: answer.text,
                    is_correct: answer.is_correct,
                })
                .collect::<Vec<_>>();
            self.answers.add_many(answers).await?;
        }

        self.committer.commit().await?;

        info!(quiz = %quiz_id, company = %company.id, "created quiz");

        // Advisory fan-out; the quiz itself is already durable.
        if let Err(error) = self
            .notify_members(company.id, &format!("New quiz available: {}", input.title))
            .await
        {
            warn!(%error, quiz = %quiz_id, "failed to notify members about new quiz");
        }

        Ok(quiz_id)
    }

    /// Rename a quiz. Owner or Admin.
    pub async fn edit_quiz_title(&self, quiz_id: i64, new_title: &str) -> AppResult<()> {
        let mut quiz = self
            .quizzes
            .by_id(QuizId(quiz_id))
            .await?
            .ok_or(AppError::QuizNotFound(quiz_id))?;

        let company = self.load_company(quiz.company_id).await?;

        self.access.ensure_can_manage_quiz(&company).await?;

        quiz.title = new_title.to_string();
        self.quizzes.update(&quiz).await?;

        self.committer.commit().await?;

        info!(quiz_id, "edited quiz title");

        Ok(())
    }

    /// Delete a quiz. Owner or Admin.
    pub async fn delete_quiz(&self, quiz_id: i64) -> AppResult<()> {
        let quiz = self
            .quizzes
            .by_id(QuizId(quiz_id))
            .await?
            .ok_or(AppError::QuizNotFound(quiz_id))?;

        let company = self.load_company(quiz.company_id).await?;

        self.access.ensure_can_manage_quiz(&company).await?;

        self.quizzes.delete(quiz.id).await?;

        self.committer.commit().await?;

        info!(quiz_id, "deleted quiz");

        Ok(())
    }

    /// Start a quiz attempt. Members of the owning company only.
    pub async fn take_quiz(&self, quiz_id: i64) -> AppResult<QuizParticipationId> {
        let actor = self.id_provider.current_user().await?;

        let mut quiz = self
            .quizzes
            .by_id(QuizId(quiz_id))
            .await?
            .ok_or(AppError::QuizNotFound(quiz_id))?;

        let company_user = self
            .company_users
            .by_company(quiz.company_id, actor.user_id)
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        let participation_id = self
            .participations
            .add(NewQuizParticipation {
                quiz_id: quiz.id,
                company_user_id: company_user.id,
                created_at: Utc::now(),
            })
            .await?;

        quiz.participation_count += 1;
        self.quizzes.update(&quiz).await?;

        self.committer.commit().await?;

        info!(quiz_id, participation = %participation_id, "quiz taken");

        Ok(participation_id)
    }

    /// Record the graded outcome of a participation, then mirror it into
    /// the cache.
    ///
    /// One result per participation: a resubmission is a conflict (retakes
    /// go through a fresh participation). The cache write happens strictly
    /// after the commit and its failure leaves the durable result intact.
    pub async fn save_quiz_result(
        &self,
        participation_id: i64,
        correct_answers: i64,
    ) -> AppResult<QuizResultId> {
        let actor = self.id_provider.current_user().await?;

        let participation = self
            .participations
            .by_id(QuizParticipationId(participation_id))
            .await?
            .ok_or(AppError::QuizParticipationNotFound(participation_id))?;

        let quiz = self
            .quizzes
            .by_id(participation.quiz_id)
            .await?
            .ok_or(AppError::QuizNotFound(participation.quiz_id.into()))?;

        let company_user = self
            .company_users
            .by_company(quiz.company_id, actor.user_id)
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        if self
            .results
            .by_participation(participation.id)
            .await?
            .is_some()
        {
            return Err(AppError::QuizResultAlreadyExists(participation_id));
        }

        let result_id = self
            .results
            .add(NewQuizResult {
                quiz_participation_id: participation.id,
                correct_answers,
            })
            .await?;

        self.committer.commit().await?;

        let cached = CachedQuizResult {
            participation_id: participation.id,
            company_user_id: company_user.id,
            company_id: company_user.company_id,
            quiz_id: quiz.id,
            correct_answers,
        };
        if let Err(error) = self.mirror_result(&cached).await {
            warn!(%error, participation_id, "failed to cache quiz result");
        }

        info!(participation_id, correct_answers, "saved quiz result");

        Ok(result_id)
    }

    /// Notify every participant whose attempt is older than 24 hours that
    /// the quiz can be retaken. Returns the number of reminders sent.
    pub async fn quiz_reminder_scan(&self) -> AppResult<u64> {
        let participations = self.participations.all().await?;
        let now = Utc::now();

        let reminders = participations
            .iter()
            .filter(|p| now - p.created_at >= Duration::hours(RETAKE_AFTER_HOURS))
            .map(|p| NewNotification {
                send_to: p.company_user_id,
                text: format!("It's time to retake quiz {}", p.quiz_id),
            })
            .collect::<Vec<_>>();

        let count = reminders.len() as u64;
        if !reminders.is_empty() {
            self.notifications.add_many(reminders).await?;
            self.committer.commit().await?;
        }

        Ok(count)
    }

    /// List quizzes with a total count.
    pub async fn get_quizzes(
        &self,
        filters: QuizFilters,
        pagination: Pagination,
    ) -> AppResult<GetQuizzesOutput> {
        let total = self.quiz_reader.total(filters).await?;
        let quizzes = self.quiz_reader.many(filters, pagination).await?;

        Ok(GetQuizzesOutput { total, quizzes })
    }

    async fn mirror_result(&self, cached: &CachedQuizResult) -> AppResult<()> {
        let cache_key = quiz_result_key(cached.participation_id);
        let member_key = company_member_key(cached.company_id);

        self.cache
            .set_cache(&cache_key, cached, RESULT_CACHE_TTL_SECS)
            .await?;
        self.cache.set_member_key(&member_key, &cache_key).await
    }

    async fn notify_members(&self, company_id: CompanyId, text: &str) -> AppResult<()> {
        let members = self.company_users.for_company(company_id).await?;

        let notifications = members
            .into_iter()
            .map(|member| NewNotification {
                send_to: member.id,
                text: text.to_string(),
            })
            .collect::<Vec<_>>();

        self.notifications.add_many(notifications).await?;
        self.committer.commit().await
    }
}
