//! Ports the core consumes.
//!
//! Write-side gateways are scoped to one entity each; read-side readers
//! return paginated DTO projections (CQRS split). Implementations live
//! outside the core — a persistence adapter binds the gateways and readers
//! to storage per request, `quizhive-cache` binds [`CacheGateway`] to
//! Redis, `quizhive-auth` binds [`PasswordHasher`] to argon2.

pub mod auth;
pub mod cache;
pub mod committer;
pub mod company;
pub mod invitation;
pub mod notification;
pub mod quiz;
pub mod user;

pub use auth::{IdProvider, PasswordHasher};
pub use cache::{CacheGateway, CachedQuizResult};
pub use committer::Committer;
pub use company::{
    CompanyDetail, CompanyFilters, CompanyGateway, CompanyReader, CompanyUserDetail,
    CompanyUserFilters, CompanyUserGateway, CompanyUserReader,
};
pub use invitation::{
    InvitationDetail, InvitationFilters, InvitationGateway, InvitationReader, UserRequestDetail,
    UserRequestFilters, UserRequestGateway, UserRequestReader,
};
pub use notification::{
    NotificationDetail, NotificationFilters, NotificationGateway, NotificationReader,
};
pub use quiz::{
    AnswerGateway, QuestionGateway, QuizDetail, QuizFilters, QuizGateway,
    QuizParticipationGateway, QuizReader, QuizResultGateway,
};
pub use user::{UserDetail, UserFilters, UserGateway, UserReader};
