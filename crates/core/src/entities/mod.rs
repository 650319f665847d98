//! Domain entities and validated value objects.

pub mod company;
pub mod invitation;
pub mod notification;
pub mod quiz;
pub mod user;
pub mod value_objects;

pub use company::{
    Company, CompanyId, CompanyRole, CompanyUser, CompanyUserId, NewCompany, NewCompanyUser,
    Visibility,
};
pub use invitation::{
    Invitation, InvitationId, NewInvitation, NewUserRequest, RequestStatus, UserRequest,
    UserRequestId,
};
pub use notification::{NewNotification, Notification, NotificationId, NotificationStatus};
pub use quiz::{
    Answer, AnswerId, NewAnswer, NewQuestion, NewQuiz, NewQuizParticipation, NewQuizResult,
    Question, QuestionId, Quiz, QuizId, QuizParticipation, QuizParticipationId, QuizResult,
    QuizResultId,
};
pub use user::{NewUser, User, UserId};
pub use value_objects::{CompanyDescription, CompanyName, FullName, UserEmail, UserRawPassword};

/// Defines a tagged identifier newtype over `i64`.
///
/// Identifiers for different entities are distinct nominal types so that a
/// `CompanyId` can never be passed where a `UserId` is expected.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

pub(crate) use define_id;
