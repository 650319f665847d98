//! Notification service.

use std::sync::Arc;

use quizhive_common::{AppError, AppResult, Pagination};
use serde::Serialize;
use tracing::info;

use crate::entities::{Company, CompanyId, NewNotification, NotificationId, NotificationStatus};
use crate::interfaces::{
    Committer, CompanyUserGateway, IdProvider, NotificationDetail, NotificationFilters,
    NotificationGateway, NotificationReader,
};

/// Notification listing for one member.
#[derive(Debug, Clone, Serialize)]
pub struct GetNotificationsOutput {
    /// The requested page.
    pub notifications: Vec<NotificationDetail>,
}

/// Notification fan-out and read-state use cases.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationGateway>,
    company_users: Arc<dyn CompanyUserGateway>,
    notification_reader: Arc<dyn NotificationReader>,
    id_provider: Arc<dyn IdProvider>,
    committer: Arc<dyn Committer>,
}

impl NotificationService {
    /// Create a new notification service.
    #[must_use]
    pub fn new(
        notifications: Arc<dyn NotificationGateway>,
        company_users: Arc<dyn CompanyUserGateway>,
        notification_reader: Arc<dyn NotificationReader>,
        id_provider: Arc<dyn IdProvider>,
        committer: Arc<dyn Committer>,
    ) -> Self {
        Self {
            notifications,
            company_users,
            notification_reader,
            id_provider,
            committer,
        }
    }

    /// Address one notification with `text` to every member of `company`
    /// in a single bulk insert.
    ///
    /// Does not commit; the caller owns the transaction boundary, which is
    /// how fan-out stays detached from the write that triggered it.
    pub async fn notify_company(&self, text: &str, company: &Company) -> AppResult<()> {
        let members = self.company_users.for_company(company.id).await?;

        let notifications = members
            .into_iter()
            .map(|member| NewNotification {
                send_to: member.id,
                text: text.to_string(),
            })
            .collect::<Vec<_>>();

        self.notifications.add_many(notifications).await
    }

    /// Mark a notification read. Addressee only; one-way transition.
    pub async fn mark_read(&self, notification_id: i64) -> AppResult<()> {
        let actor = self.id_provider.current_user().await?;

        let company_user = self
            .company_users
            .by_identity(actor.user_id)
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        let mut notification = self
            .notifications
            .by_id(NotificationId(notification_id))
            .await?
            .ok_or(AppError::NotificationNotFound(notification_id))?;

        if notification.send_to != company_user.id {
            return Err(AppError::AccessDenied);
        }

        notification.status = NotificationStatus::Read;
        self.notifications.update(&notification).await?;

        self.committer.commit().await?;

        info!(notification_id, "marked notification read");

        Ok(())
    }

    /// List the actor's notifications within one company.
    pub async fn my_notifications(
        &self,
        company_id: i64,
        status: Option<NotificationStatus>,
        pagination: Pagination,
    ) -> AppResult<GetNotificationsOutput> {
        let actor = self.id_provider.current_user().await?;

        let company_user = self
            .company_users
            .by_company(CompanyId(company_id), actor.user_id)
            .await?
            .ok_or(AppError::CompanyUserNotFound)?;

        let notifications = self
            .notification_reader
            .many(
                NotificationFilters {
                    company_user_id: Some(company_user.id),
                    status,
                },
                pagination,
            )
            .await?;

        Ok(GetNotificationsOutput { notifications })
    }
}
