//! Rental factory for creating test rental entities.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rentals with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::rental::RentalFactory;
///
/// let rental = RentalFactory::new(&db, apartment.id, client.id)
///     .window(check_in, check_out)
///     .rooms(2)
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct RentalFactory<'a> {
    db: &'a DatabaseConnection,
    apartment_id: i32,
    client_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms: i32,
    final_price: f64,
    is_active: bool,
    cancelled: bool,
    expiry_reminder_sent: bool,
}

impl<'a> RentalFactory<'a> {
    /// Creates a new RentalFactory with default values.
    ///
    /// Defaults:
    /// - check_in: today
    /// - check_out: today + 2 days
    /// - rooms: `1`
    /// - final_price: `300.0`
    /// - is_active: `true`
    /// - cancelled: `false`
    /// - expiry_reminder_sent: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `apartment_id` - Apartment the rental belongs to
    /// - `client_id` - Client holding the rental
    ///
    /// # Returns
    /// - `RentalFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, apartment_id: i32, client_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            apartment_id,
            client_id,
            check_in: today,
            check_out: today.checked_add_days(Days::new(2)).unwrap(),
            rooms: 1,
            final_price: 300.0,
            is_active: true,
            cancelled: false,
            expiry_reminder_sent: false,
        }
    }

    /// Sets the rental window.
    ///
    /// # Arguments
    /// - `check_in` - First day of the stay
    /// - `check_out` - Last day of the stay, inclusive
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn window(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// Sets the room count.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rooms(mut self, rooms: i32) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the active flag.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the terminal cancelled flag.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Sets whether the expiry reminder has already been sent.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn expiry_reminder_sent(mut self, sent: bool) -> Self {
        self.expiry_reminder_sent = sent;
        self
    }

    /// Builds and inserts the rental entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rental::Model)` - Created rental entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rental::Model, DbErr> {
        entity::rental::ActiveModel {
            apartment_id: ActiveValue::Set(self.apartment_id),
            client_id: ActiveValue::Set(self.client_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            rooms: ActiveValue::Set(self.rooms),
            final_price: ActiveValue::Set(self.final_price),
            is_active: ActiveValue::Set(self.is_active),
            cancelled: ActiveValue::Set(self.cancelled),
            expiry_reminder_sent: ActiveValue::Set(self.expiry_reminder_sent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rental with default values for the specified apartment and client.
///
/// Shorthand for `RentalFactory::new(db, apartment_id, client_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `apartment_id` - Apartment the rental belongs to
/// - `client_id` - Client holding the rental
///
/// # Returns
/// - `Ok(entity::rental::Model)` - Created rental entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_rental(
    db: &DatabaseConnection,
    apartment_id: i32,
    client_id: i32,
) -> Result<entity::rental::Model, DbErr> {
    RentalFactory::new(db, apartment_id, client_id).build().await
}
