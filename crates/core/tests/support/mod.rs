//! In-memory fakes for every port the core consumes, plus a `World` that
//! wires them into fully constructed services for flow tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use quizhive_common::{AppError, AppResult, Pagination};
use quizhive_core::AccessService;
use quizhive_core::entities::*;
use quizhive_core::interfaces::*;
use quizhive_core::services::*;

fn page<T: Clone>(rows: Vec<T>, pagination: Pagination) -> Vec<T> {
    rows.into_iter()
        .skip(usize::try_from(pagination.offset).unwrap())
        .take(usize::try_from(pagination.limit).unwrap())
        .collect()
}

// === Identity ===

pub struct FakeIdProvider {
    current: Mutex<UserDetail>,
}

impl FakeIdProvider {
    pub fn new(user_id: i64) -> Self {
        Self {
            current: Mutex::new(Self::detail(user_id)),
        }
    }

    fn detail(user_id: i64) -> UserDetail {
        UserDetail {
            user_id: UserId(user_id),
            email: format!("user{user_id}@example.com"),
            full_name: None,
        }
    }

    /// Switch the authenticated actor.
    pub fn login(&self, user_id: i64) {
        *self.current.lock().unwrap() = Self::detail(user_id);
    }
}

#[async_trait]
impl IdProvider for FakeIdProvider {
    async fn current_user(&self) -> AppResult<UserDetail> {
        Ok(self.current.lock().unwrap().clone())
    }
}

// === Credentials ===

pub struct FakePasswordHasher;

impl PasswordHasher for FakePasswordHasher {
    fn hash(&self, raw: &UserRawPassword) -> AppResult<String> {
        Ok(format!("hashed:{}", raw.as_str()))
    }

    fn verify(&self, raw: &UserRawPassword, hashed: &str) -> AppResult<()> {
        if hashed == format!("hashed:{}", raw.as_str()) {
            Ok(())
        } else {
            Err(AppError::PasswordMismatch)
        }
    }
}

// === Transaction boundary ===

#[derive(Default)]
pub struct FakeCommitter {
    committed: AtomicBool,
}

impl FakeCommitter {
    pub fn committed(&self) -> bool {
        self.committed.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.committed.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl Committer for FakeCommitter {
    async fn commit(&self) -> AppResult<()> {
        self.committed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

// === Users ===

#[derive(Default)]
pub struct FakeUserGateway {
    pub rows: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl FakeUserGateway {
    fn next(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl UserGateway for FakeUserGateway {
    async fn add(&self, user: NewUser) -> AppResult<UserId> {
        let id = UserId(self.next());
        self.rows.lock().unwrap().push(User {
            id,
            full_name: user.full_name,
            email: user.email,
            hashed_password: user.hashed_password,
            is_active: true,
        });
        Ok(id)
    }

    async fn by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn by_email(&self, email: &UserEmail) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email.as_str() == email))
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|u| u.id == user.id).unwrap();
        *row = user.clone();
        Ok(())
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

fn user_detail(user: &User) -> UserDetail {
    UserDetail {
        user_id: user.id,
        email: user.email.as_str().to_string(),
        full_name: user.full_name.as_ref().map(ToString::to_string),
    }
}

#[async_trait]
impl UserReader for FakeUserGateway {
    async fn by_id(&self, id: UserId) -> AppResult<Option<UserDetail>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .map(user_detail))
    }

    async fn by_email(&self, email: &UserEmail) -> AppResult<Option<UserDetail>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .map(user_detail))
    }

    async fn many(
        &self,
        filters: UserFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<UserDetail>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| filters.is_active.is_none_or(|active| u.is_active == active))
            .map(user_detail)
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total(&self, filters: UserFilters) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| filters.is_active.is_none_or(|active| u.is_active == active))
            .count() as u64)
    }
}

// === Companies ===

#[derive(Default)]
pub struct FakeCompanyGateway {
    pub rows: Mutex<Vec<Company>>,
    next_id: AtomicI64,
}

impl FakeCompanyGateway {
    fn next(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl CompanyGateway for FakeCompanyGateway {
    async fn add(&self, company: NewCompany) -> AppResult<CompanyId> {
        let id = CompanyId(self.next());
        self.rows.lock().unwrap().push(Company {
            id,
            owner_id: company.owner_id,
            name: company.name,
            description: company.description,
            visibility: company.visibility,
        });
        Ok(id)
    }

    async fn by_id(&self, id: CompanyId) -> AppResult<Option<Company>> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn name_exists(&self, name: &CompanyName) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|c| c.name == *name))
    }

    async fn update(&self, company: &Company) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|c| c.id == company.id).unwrap();
        *row = company.clone();
        Ok(())
    }

    async fn delete(&self, id: CompanyId) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

fn company_detail(company: &Company) -> CompanyDetail {
    CompanyDetail {
        company_id: company.id,
        owner_id: company.owner_id,
        name: company.name.as_str().to_string(),
        description: company.description.as_str().to_string(),
        visibility: company.visibility,
    }
}

#[async_trait]
impl CompanyReader for FakeCompanyGateway {
    async fn by_id(&self, id: CompanyId) -> AppResult<Option<CompanyDetail>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .map(company_detail))
    }

    async fn many(
        &self,
        filters: CompanyFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<CompanyDetail>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filters.visibility.is_none_or(|v| c.visibility == v))
            .map(company_detail)
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total(&self, filters: CompanyFilters) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filters.visibility.is_none_or(|v| c.visibility == v))
            .count() as u64)
    }
}

// === Memberships ===

#[derive(Default)]
pub struct FakeCompanyUserGateway {
    pub rows: Mutex<Vec<CompanyUser>>,
    next_id: AtomicI64,
}

impl FakeCompanyUserGateway {
    fn next(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl CompanyUserGateway for FakeCompanyUserGateway {
    async fn add(&self, company_user: NewCompanyUser) -> AppResult<CompanyUserId> {
        let id = CompanyUserId(self.next());
        self.rows.lock().unwrap().push(CompanyUser {
            id,
            company_id: company_user.company_id,
            user_id: company_user.user_id,
            role: company_user.role,
        });
        Ok(id)
    }

    async fn by_id(&self, id: CompanyUserId) -> AppResult<Option<CompanyUser>> {
        Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn by_company(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> AppResult<Option<CompanyUser>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.company_id == company_id && m.user_id == user_id)
            .cloned())
    }

    async fn by_identity(&self, user_id: UserId) -> AppResult<Option<CompanyUser>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.user_id == user_id)
            .cloned())
    }

    async fn for_company(&self, company_id: CompanyId) -> AppResult<Vec<CompanyUser>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn update(&self, company_user: &CompanyUser) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|m| m.id == company_user.id).unwrap();
        *row = company_user.clone();
        Ok(())
    }

    async fn delete(&self, id: CompanyUserId) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}

#[async_trait]
impl CompanyUserReader for FakeCompanyUserGateway {
    async fn by_id(&self, id: CompanyUserId) -> AppResult<Option<CompanyUserDetail>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .map(|m| CompanyUserDetail {
                company_user_id: m.id,
                company_id: m.company_id,
                user_id: m.user_id,
                role: m.role,
            }))
    }

    async fn many(
        &self,
        filters: CompanyUserFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<CompanyUserDetail>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.company_id == filters.company_id)
            .map(|m| CompanyUserDetail {
                company_user_id: m.id,
                company_id: m.company_id,
                user_id: m.user_id,
                role: m.role,
            })
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total(&self, filters: CompanyUserFilters) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.company_id == filters.company_id)
            .count() as u64)
    }
}

// === Invitations / requests ===

#[derive(Default)]
pub struct FakeInvitationGateway {
    pub rows: Mutex<Vec<Invitation>>,
    next_id: AtomicI64,
}

impl FakeInvitationGateway {
    fn next(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl InvitationGateway for FakeInvitationGateway {
    async fn add(&self, invitation: NewInvitation) -> AppResult<InvitationId> {
        let id = InvitationId(self.next());
        self.rows.lock().unwrap().push(Invitation {
            id,
            company_id: invitation.company_id,
            user_id: invitation.user_id,
            status: RequestStatus::New,
        });
        Ok(id)
    }

    async fn by_id(&self, id: InvitationId) -> AppResult<Option<Invitation>> {
        Ok(self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn has_pending(&self, company_id: CompanyId, user_id: UserId) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|i| {
            i.company_id == company_id && i.user_id == user_id && i.status.is_pending()
        }))
    }

    async fn update(&self, invitation: &Invitation) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|i| i.id == invitation.id).unwrap();
        *row = invitation.clone();
        Ok(())
    }
}

#[async_trait]
impl InvitationReader for FakeInvitationGateway {
    async fn many(
        &self,
        filters: InvitationFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<InvitationDetail>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                filters.company_id.is_none_or(|c| i.company_id == c)
                    && filters.user_id.is_none_or(|u| i.user_id == u)
            })
            .map(|i| InvitationDetail {
                invitation_id: i.id,
                company_id: i.company_id,
                user_id: i.user_id,
                status: i.status,
            })
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total(&self, filters: InvitationFilters) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                filters.company_id.is_none_or(|c| i.company_id == c)
                    && filters.user_id.is_none_or(|u| i.user_id == u)
            })
            .count() as u64)
    }
}

#[derive(Default)]
pub struct FakeUserRequestGateway {
    pub rows: Mutex<Vec<UserRequest>>,
    next_id: AtomicI64,
}

impl FakeUserRequestGateway {
    fn next(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl UserRequestGateway for FakeUserRequestGateway {
    async fn add(&self, request: NewUserRequest) -> AppResult<UserRequestId> {
        let id = UserRequestId(self.next());
        self.rows.lock().unwrap().push(UserRequest {
            id,
            company_id: request.company_id,
            user_id: request.user_id,
            status: RequestStatus::New,
        });
        Ok(id)
    }

    async fn by_id(&self, id: UserRequestId) -> AppResult<Option<UserRequest>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn has_pending(&self, company_id: CompanyId, user_id: UserId) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|r| {
            r.company_id == company_id && r.user_id == user_id && r.status.is_pending()
        }))
    }

    async fn update(&self, request: &UserRequest) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|r| r.id == request.id).unwrap();
        *row = request.clone();
        Ok(())
    }
}

#[async_trait]
impl UserRequestReader for FakeUserRequestGateway {
    async fn many(
        &self,
        filters: UserRequestFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<UserRequestDetail>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                filters.company_id.is_none_or(|c| r.company_id == c)
                    && filters.user_id.is_none_or(|u| r.user_id == u)
            })
            .map(|r| UserRequestDetail {
                user_request_id: r.id,
                company_id: r.company_id,
                user_id: r.user_id,
                status: r.status,
            })
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total(&self, filters: UserRequestFilters) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                filters.company_id.is_none_or(|c| r.company_id == c)
                    && filters.user_id.is_none_or(|u| r.user_id == u)
            })
            .count() as u64)
    }
}

// === Quizzes ===

#[derive(Default)]
pub struct FakeQuizGateway {
    pub rows: Mutex<Vec<Quiz>>,
    next_id: AtomicI64,
}

impl FakeQuizGateway {
    fn next(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl QuizGateway for FakeQuizGateway {
    async fn add(&self, quiz: NewQuiz) -> AppResult<QuizId> {
        let id = QuizId(self.next());
        self.rows.lock().unwrap().push(Quiz {
            id,
            company_id: quiz.company_id,
            title: quiz.title,
            description: quiz.description,
            participation_count: 0,
        });
        Ok(id)
    }

    async fn by_id(&self, id: QuizId) -> AppResult<Option<Quiz>> {
        Ok(self.rows.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }

    async fn update(&self, quiz: &Quiz) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|q| q.id == quiz.id).unwrap();
        *row = quiz.clone();
        Ok(())
    }

    async fn delete(&self, id: QuizId) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|q| q.id != id);
        Ok(())
    }
}

#[async_trait]
impl QuizReader for FakeQuizGateway {
    async fn many(
        &self,
        filters: QuizFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<QuizDetail>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| filters.company_id.is_none_or(|c| q.company_id == c))
            .map(|q| QuizDetail {
                quiz_id: q.id,
                company_id: q.company_id,
                title: q.title.clone(),
                description: q.description.clone(),
                participation_count: q.participation_count,
            })
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total(&self, filters: QuizFilters) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| filters.company_id.is_none_or(|c| q.company_id == c))
            .count() as u64)
    }
}

#[derive(Default)]
pub struct FakeQuestionGateway {
    pub rows: Mutex<Vec<Question>>,
    next_id: AtomicI64,
}

#[async_trait]
impl QuestionGateway for FakeQuestionGateway {
    async fn add(&self, question: NewQuestion) -> AppResult<QuestionId> {
        let id = QuestionId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.rows.lock().unwrap().push(Question {
            id,
            quiz_id: question.quiz_id,
            title: question.title,
        });
        Ok(id)
    }
}

#[derive(Default)]
pub struct FakeAnswerGateway {
    pub rows: Mutex<Vec<Answer>>,
    next_id: AtomicI64,
}

#[async_trait]
impl AnswerGateway for FakeAnswerGateway {
    async fn add_many(&self, answers: Vec<NewAnswer>) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        for answer in answers {
            let id = AnswerId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            rows.push(Answer {
                id,
                question_id: answer.question_id,
                text: answer.text,
                is_correct: answer.is_correct,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeQuizParticipationGateway {
    pub rows: Mutex<Vec<QuizParticipation>>,
    next_id: AtomicI64,
}

impl FakeQuizParticipationGateway {
    /// Backdate a participation, for reminder-scan tests.
    pub fn age_by_hours(&self, id: QuizParticipationId, hours: i64) {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|p| p.id == id).unwrap();
        row.created_at = Utc::now() - Duration::hours(hours);
    }
}

#[async_trait]
impl QuizParticipationGateway for FakeQuizParticipationGateway {
    async fn add(&self, participation: NewQuizParticipation) -> AppResult<QuizParticipationId> {
        let id = QuizParticipationId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.rows.lock().unwrap().push(QuizParticipation {
            id,
            quiz_id: participation.quiz_id,
            company_user_id: participation.company_user_id,
            created_at: participation.created_at,
        });
        Ok(id)
    }

    async fn by_id(&self, id: QuizParticipationId) -> AppResult<Option<QuizParticipation>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn all(&self) -> AppResult<Vec<QuizParticipation>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct FakeQuizResultGateway {
    pub rows: Mutex<Vec<QuizResult>>,
    next_id: AtomicI64,
}

#[async_trait]
impl QuizResultGateway for FakeQuizResultGateway {
    async fn add(&self, result: NewQuizResult) -> AppResult<QuizResultId> {
        let id = QuizResultId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.rows.lock().unwrap().push(QuizResult {
            id,
            quiz_participation_id: result.quiz_participation_id,
            correct_answers: result.correct_answers,
        });
        Ok(id)
    }

    async fn by_participation(&self, id: QuizParticipationId) -> AppResult<Option<QuizResult>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.quiz_participation_id == id)
            .cloned())
    }
}

// === Notifications ===

#[derive(Default)]
pub struct FakeNotificationGateway {
    pub rows: Mutex<Vec<Notification>>,
    next_id: AtomicI64,
}

#[async_trait]
impl NotificationGateway for FakeNotificationGateway {
    async fn add_many(&self, notifications: Vec<NewNotification>) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        for notification in notifications {
            let id = NotificationId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            rows.push(Notification {
                id,
                send_to: notification.send_to,
                text: notification.text,
                status: NotificationStatus::New,
            });
        }
        Ok(())
    }

    async fn by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        Ok(self.rows.lock().unwrap().iter().find(|n| n.id == id).cloned())
    }

    async fn update(&self, notification: &Notification) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|n| n.id == notification.id).unwrap();
        *row = notification.clone();
        Ok(())
    }
}

#[async_trait]
impl NotificationReader for FakeNotificationGateway {
    async fn many(
        &self,
        filters: NotificationFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<NotificationDetail>> {
        let rows = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| {
                filters.company_user_id.is_none_or(|c| n.send_to == c)
                    && filters.status.is_none_or(|s| n.status == s)
            })
            .map(|n| NotificationDetail {
                notification_id: n.id,
                text: n.text.clone(),
                status: n.status,
            })
            .collect();
        Ok(page(rows, pagination))
    }
}

// === Cache ===

#[derive(Default)]
pub struct FakeCache {
    pub entries: Mutex<std::collections::HashMap<String, CachedQuizResult>>,
    pub member_keys: Mutex<std::collections::HashMap<String, Vec<String>>>,
}

impl FakeCache {
    /// Drop an entry, simulating TTL expiry.
    pub fn expire(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[async_trait]
impl CacheGateway for FakeCache {
    async fn set_cache(&self, key: &str, value: &CachedQuizResult, _ttl_secs: u64) -> AppResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn get_cache(&self, key: &str) -> AppResult<Option<CachedQuizResult>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_member_key(&self, member_key: &str, cached_key: &str) -> AppResult<()> {
        let mut member_keys = self.member_keys.lock().unwrap();
        let keys = member_keys.entry(member_key.to_string()).or_default();
        if !keys.iter().any(|k| k == cached_key) {
            keys.push(cached_key.to_string());
        }
        Ok(())
    }

    async fn get_member_data(&self, member_key: &str) -> AppResult<Vec<String>> {
        Ok(self
            .member_keys
            .lock()
            .unwrap()
            .get(member_key)
            .cloned()
            .unwrap_or_default())
    }
}

// === World ===

/// Every fake port plus fully wired services.
pub struct World {
    pub id_provider: Arc<FakeIdProvider>,
    pub committer: Arc<FakeCommitter>,
    pub users: Arc<FakeUserGateway>,
    pub companies: Arc<FakeCompanyGateway>,
    pub company_users: Arc<FakeCompanyUserGateway>,
    pub invitations: Arc<FakeInvitationGateway>,
    pub user_requests: Arc<FakeUserRequestGateway>,
    pub quizzes: Arc<FakeQuizGateway>,
    pub questions: Arc<FakeQuestionGateway>,
    pub answers: Arc<FakeAnswerGateway>,
    pub participations: Arc<FakeQuizParticipationGateway>,
    pub results: Arc<FakeQuizResultGateway>,
    pub notifications: Arc<FakeNotificationGateway>,
    pub cache: Arc<FakeCache>,
    pub access: AccessService,
}

impl World {
    /// A world authenticated as `user_id`.
    pub fn new(user_id: i64) -> Self {
        let id_provider = Arc::new(FakeIdProvider::new(user_id));
        let company_users = Arc::new(FakeCompanyUserGateway::default());
        let access = AccessService::new(id_provider.clone(), company_users.clone());

        Self {
            id_provider,
            committer: Arc::new(FakeCommitter::default()),
            users: Arc::new(FakeUserGateway::default()),
            companies: Arc::new(FakeCompanyGateway::default()),
            company_users,
            invitations: Arc::new(FakeInvitationGateway::default()),
            user_requests: Arc::new(FakeUserRequestGateway::default()),
            quizzes: Arc::new(FakeQuizGateway::default()),
            questions: Arc::new(FakeQuestionGateway::default()),
            answers: Arc::new(FakeAnswerGateway::default()),
            participations: Arc::new(FakeQuizParticipationGateway::default()),
            results: Arc::new(FakeQuizResultGateway::default()),
            notifications: Arc::new(FakeNotificationGateway::default()),
            cache: Arc::new(FakeCache::default()),
            access,
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(
            self.users.clone(),
            self.users.clone(),
            Arc::new(FakePasswordHasher),
            self.id_provider.clone(),
            self.access.clone(),
            self.committer.clone(),
        )
    }

    pub fn company_service(&self) -> CompanyService {
        CompanyService::new(
            self.companies.clone(),
            self.company_users.clone(),
            self.companies.clone(),
            self.company_users.clone(),
            self.id_provider.clone(),
            self.access.clone(),
            self.committer.clone(),
        )
    }

    pub fn invitation_service(&self) -> InvitationService {
        InvitationService::new(
            self.invitations.clone(),
            self.user_requests.clone(),
            self.companies.clone(),
            self.company_users.clone(),
            self.users.clone(),
            self.invitations.clone(),
            self.user_requests.clone(),
            self.id_provider.clone(),
            self.access.clone(),
            self.committer.clone(),
        )
    }

    pub fn quiz_service(&self) -> QuizService {
        QuizService::new(
            self.quizzes.clone(),
            self.questions.clone(),
            self.answers.clone(),
            self.participations.clone(),
            self.results.clone(),
            self.companies.clone(),
            self.company_users.clone(),
            self.notifications.clone(),
            self.quizzes.clone(),
            self.cache.clone(),
            self.id_provider.clone(),
            self.access.clone(),
            self.committer.clone(),
        )
    }

    pub fn results_service(&self) -> ResultsService {
        ResultsService::new(
            self.participations.clone(),
            self.company_users.clone(),
            self.companies.clone(),
            self.cache.clone(),
            self.id_provider.clone(),
            self.access.clone(),
        )
    }

    pub fn notification_service(&self) -> NotificationService {
        NotificationService::new(
            self.notifications.clone(),
            self.company_users.clone(),
            self.notifications.clone(),
            self.id_provider.clone(),
            self.committer.clone(),
        )
    }

    // === Seed helpers ===

    pub async fn seed_user(&self, email: &str) -> UserId {
        UserGateway::add(
            self.users.as_ref(),
            NewUser {
                full_name: Some(FullName::new("Test", "User").unwrap()),
                email: UserEmail::new(email).unwrap(),
                hashed_password: Some("hashed:passw0rd1".to_string()),
            },
        )
        .await
        .unwrap()
    }

    pub async fn seed_company(&self, owner_id: UserId, name: &str) -> CompanyId {
        let company_id = CompanyGateway::add(
            self.companies.as_ref(),
            NewCompany {
                owner_id,
                name: CompanyName::new(name).unwrap(),
                description: CompanyDescription::new("").unwrap(),
                visibility: Visibility::Visible,
            },
        )
        .await
        .unwrap();

        CompanyUserGateway::add(
            self.company_users.as_ref(),
            NewCompanyUser {
                company_id,
                user_id: owner_id,
                role: CompanyRole::Owner,
            },
        )
        .await
        .unwrap();

        company_id
    }

    pub async fn seed_member(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        role: CompanyRole,
    ) -> CompanyUserId {
        CompanyUserGateway::add(
            self.company_users.as_ref(),
            NewCompanyUser {
                company_id,
                user_id,
                role,
            },
        )
        .await
        .unwrap()
    }

    pub async fn seed_quiz(&self, company_id: CompanyId, title: &str) -> QuizId {
        QuizGateway::add(
            self.quizzes.as_ref(),
            NewQuiz {
                company_id,
                title: title.to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap()
    }
}
