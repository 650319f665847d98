//! Notification entity.

use serde::{Deserialize, Serialize};

use super::company::CompanyUserId;
use super::define_id;

define_id! {
    /// Identifier of a [`Notification`].
    NotificationId
}

/// Read state of a notification. One-way: `New` to `Read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Not yet read by the addressee.
    #[default]
    New,
    /// Read by the addressee.
    Read,
}

/// An advisory message addressed to one company member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Storage-assigned identifier.
    pub id: NotificationId,
    /// The addressed membership row.
    pub send_to: CompanyUserId,
    /// Message text.
    pub text: String,
    /// Read state.
    pub status: NotificationStatus,
}

/// Insert record for a [`Notification`]; starts out `New`.
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// The addressed membership row.
    pub send_to: CompanyUserId,
    /// Message text.
    pub text: String,
}
