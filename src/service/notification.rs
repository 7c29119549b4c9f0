use sea_orm::DatabaseConnection;

use crate::{data::notification::NotificationRepository, error::AppError};

/// Service for delivering in-app notifications.
///
/// Validates the fields before handing them to the repository; a notification
/// with no receiver or an empty message is rejected, it never reaches the
/// store.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a notification for the given receiver.
    ///
    /// # Arguments
    /// - `receiver_id`: User ID the notification is addressed to
    /// - `message`: Notification text
    ///
    /// # Returns
    /// - `Ok(Model)`: The persisted notification
    /// - `Err(AppError::Validation)`: Missing receiver or empty message
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create_notification(
        &self,
        receiver_id: i32,
        message: &str,
    ) -> Result<entity::notification::Model, AppError> {
        if receiver_id <= 0 {
            return Err(AppError::Validation(
                "Notification receiver is missing".to_string(),
            ));
        }
        if message.trim().is_empty() {
            return Err(AppError::Validation(
                "Notification message is empty".to_string(),
            ));
        }

        let notification = NotificationRepository::new(self.db)
            .create(receiver_id, message)
            .await?;

        Ok(notification)
    }
}
