//! Business logic services.
//!
//! One service per aggregate; every public method is one use case following
//! the same shape: wrap input ids into tagged types, load referenced
//! entities in a fixed order (the first missing entity wins the error
//! race), run access checks against the loaded entities, mutate or
//! construct, write through the gateways, commit once, then fire
//! best-effort side effects.

pub mod company;
pub mod invitation;
pub mod notification;
pub mod quiz;
pub mod results;
pub mod user;

pub use company::{CompanyService, CreateCompanyInput, EditMemberRoleInput, GetCompaniesOutput,
    GetCompanyUsersOutput};
pub use invitation::{GetInvitationsOutput, GetUserRequestsOutput, InvitationService};
pub use notification::{GetNotificationsOutput, NotificationService};
pub use quiz::{
    AnswerData, CreateQuizInput, GetQuizzesOutput, QuestionData, QuizService, validate_quiz_shape,
};
pub use results::{CompanyQuizResult, ResultsService};
pub use user::{AccessTokenData, GetUsersOutput, SignUpInput, UserService};
