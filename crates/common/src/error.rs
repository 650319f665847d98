//! Error types for quizhive.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // === Not Found ===
    #[error("User with id {0} not found")]
    UserNotFound(i64),

    #[error("User with email {0} not found")]
    UserNotFoundByEmail(String),

    #[error("Company with id {0} not found")]
    CompanyNotFound(i64),

    #[error("Company member not found")]
    CompanyUserNotFound,

    #[error("Invitation with id {0} not found")]
    InvitationNotFound(i64),

    #[error("User request with id {0} not found")]
    UserRequestNotFound(i64),

    #[error("Quiz with id {0} not found")]
    QuizNotFound(i64),

    #[error("Quiz participation with id {0} not found")]
    QuizParticipationNotFound(i64),

    #[error("Notification with id {0} not found")]
    NotificationNotFound(i64),

    // === Validation ===
    #[error("{field} can't be empty")]
    EmptyValue { field: &'static str },

    #[error("{field} is longer than {max} characters")]
    ValueTooLong { field: &'static str, max: usize },

    #[error("Invalid user email {0}")]
    InvalidEmail(String),

    #[error("Invalid user password: {0}")]
    WeakPassword(String),

    #[error("Each quiz must have at least two questions")]
    InvalidQuestionCount,

    #[error("Each question must have at least two answers, but no more than four")]
    InvalidAnswerCount,

    #[error("There must be at least one correct answer per question")]
    NoCorrectAnswer,

    // === Conflict ===
    #[error("Company with name {0} already exists")]
    CompanyNameTaken(String),

    #[error("User with email {0} already exists")]
    EmailTaken(String),

    #[error("Invitation to company {company_id} already sent to user {user_id}")]
    InvitationAlreadyExists { company_id: i64, user_id: i64 },

    #[error("Request to company {company_id} already sent from user {user_id}")]
    UserRequestAlreadyExists { company_id: i64, user_id: i64 },

    #[error("User {user_id} is already a member of company {company_id}")]
    AlreadyMember { company_id: i64, user_id: i64 },

    #[error("Result for participation {0} already saved")]
    QuizResultAlreadyExists(i64),

    // === Auth ===
    #[error("Access denied")]
    AccessDenied,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Password mismatch")]
    PasswordMismatch,

    // === Server Errors ===
    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP-equivalent status code for this error.
    ///
    /// The core never speaks HTTP itself; the transport layer maps errors
    /// onto responses using this classification.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UserNotFound(_)
            | Self::UserNotFoundByEmail(_)
            | Self::CompanyNotFound(_)
            | Self::CompanyUserNotFound
            | Self::InvitationNotFound(_)
            | Self::UserRequestNotFound(_)
            | Self::QuizNotFound(_)
            | Self::QuizParticipationNotFound(_)
            | Self::NotificationNotFound(_) => 404,

            Self::EmptyValue { .. }
            | Self::ValueTooLong { .. }
            | Self::InvalidEmail(_)
            | Self::WeakPassword(_)
            | Self::InvalidQuestionCount
            | Self::InvalidAnswerCount
            | Self::NoCorrectAnswer => 400,

            Self::CompanyNameTaken(_)
            | Self::EmailTaken(_)
            | Self::InvitationAlreadyExists { .. }
            | Self::UserRequestAlreadyExists { .. }
            | Self::AlreadyMember { .. }
            | Self::QuizResultAlreadyExists(_) => 409,

            Self::AccessDenied => 403,
            Self::Unauthorized | Self::PasswordMismatch => 401,

            Self::Database(_) | Self::Cache(_) | Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) | Self::UserNotFoundByEmail(_) => "USER_NOT_FOUND",
            Self::CompanyNotFound(_) => "COMPANY_NOT_FOUND",
            Self::CompanyUserNotFound => "COMPANY_USER_NOT_FOUND",
            Self::InvitationNotFound(_) => "INVITATION_NOT_FOUND",
            Self::UserRequestNotFound(_) => "USER_REQUEST_NOT_FOUND",
            Self::QuizNotFound(_) => "QUIZ_NOT_FOUND",
            Self::QuizParticipationNotFound(_) => "QUIZ_PARTICIPATION_NOT_FOUND",
            Self::NotificationNotFound(_) => "NOTIFICATION_NOT_FOUND",
            Self::EmptyValue { .. }
            | Self::ValueTooLong { .. }
            | Self::InvalidEmail(_)
            | Self::WeakPassword(_)
            | Self::InvalidQuestionCount
            | Self::InvalidAnswerCount
            | Self::NoCorrectAnswer => "VALIDATION_ERROR",
            Self::CompanyNameTaken(_)
            | Self::EmailTaken(_)
            | Self::InvitationAlreadyExists { .. }
            | Self::UserRequestAlreadyExists { .. }
            | Self::AlreadyMember { .. }
            | Self::QuizResultAlreadyExists(_) => "CONFLICT",
            Self::AccessDenied => "FORBIDDEN",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
