//! Notification persistence ports.

use async_trait::async_trait;
use quizhive_common::{AppResult, Pagination};
use serde::Serialize;

use crate::entities::{
    CompanyUserId, NewNotification, Notification, NotificationId, NotificationStatus,
};

/// Write-capable persistence port for notifications.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Bulk-insert a fan-out batch in one call.
    async fn add_many(&self, notifications: Vec<NewNotification>) -> AppResult<()>;

    /// Load a notification by id.
    async fn by_id(&self, id: NotificationId) -> AppResult<Option<Notification>>;

    /// Persist a mutated notification.
    async fn update(&self, notification: &Notification) -> AppResult<()>;
}

/// Read-side projection of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationDetail {
    /// Notification identifier.
    pub notification_id: NotificationId,
    /// Message text.
    pub text: String,
    /// Read state.
    pub status: NotificationStatus,
}

/// Filters for notification listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationFilters {
    /// Restrict to one addressee.
    pub company_user_id: Option<CompanyUserId>,
    /// Restrict to one read state.
    pub status: Option<NotificationStatus>,
}

/// Read-only, paginated persistence port for notifications.
#[async_trait]
pub trait NotificationReader: Send + Sync {
    /// List notifications matching the filters.
    async fn many(
        &self,
        filters: NotificationFilters,
        pagination: Pagination,
    ) -> AppResult<Vec<NotificationDetail>>;
}
