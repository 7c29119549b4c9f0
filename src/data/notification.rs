use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new unread notification record.
    ///
    /// # Arguments
    /// - `receiver_id`: User ID the notification is addressed to
    /// - `message`: Notification text
    ///
    /// # Returns
    /// - `Ok(Model)`: The created notification
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        receiver_id: i32,
        message: &str,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            receiver_id: ActiveValue::Set(receiver_id),
            message: ActiveValue::Set(message.to_string()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
