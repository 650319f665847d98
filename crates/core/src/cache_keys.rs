//! Cache key scheme for the quiz-result mirror.

use crate::entities::{CompanyId, QuizParticipationId};

/// Key of one cached quiz result.
#[must_use]
pub fn quiz_result_key(participation_id: QuizParticipationId) -> String {
    format!("quiz_result:{participation_id}")
}

/// Key of the per-company index set accumulating result keys.
#[must_use]
pub fn company_member_key(company_id: CompanyId) -> String {
    format!("company:{company_id}")
}
