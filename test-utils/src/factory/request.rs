//! Rental request factory for creating test request entities.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rental requests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::request::RequestFactory;
///
/// let request = RequestFactory::new(&db, apartment.id, client.id)
///     .window(check_in, check_out)
///     .rooms(2)
///     .build()
///     .await?;
/// ```
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    apartment_id: i32,
    client_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms: i32,
    final_price: f64,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - check_in: tomorrow
    /// - check_out: three days from today
    /// - rooms: `1`
    /// - final_price: `300.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `apartment_id` - Apartment being requested
    /// - `client_id` - Client submitting the request
    ///
    /// # Returns
    /// - `RequestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, apartment_id: i32, client_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            apartment_id,
            client_id,
            check_in: today.checked_add_days(Days::new(1)).unwrap(),
            check_out: today.checked_add_days(Days::new(3)).unwrap(),
            rooms: 1,
            final_price: 300.0,
        }
    }

    /// Sets the requested window.
    ///
    /// # Arguments
    /// - `check_in` - First day of the requested stay
    /// - `check_out` - Last day of the requested stay, inclusive
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

    /// Sets the final price.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn final_price(mut self, final_price: f64) -> Self {
        self.final_price = final_price;
        self
    }

    /// Builds and inserts the request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rental_request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rental_request::Model, DbErr> {
        entity::rental_request::ActiveModel {
            apartment_id: ActiveValue::Set(self.apartment_id),
            client_id: ActiveValue::Set(self.client_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            rooms: ActiveValue::Set(self.rooms),
            final_price: ActiveValue::Set(self.final_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rental request with default values.
///
/// Shorthand for `RequestFactory::new(db, apartment_id, client_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `apartment_id` - Apartment being requested
/// - `client_id` - Client submitting the request
///
/// # Returns
/// - `Ok(entity::rental_request::Model)` - Created request entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_request(
    db: &DatabaseConnection,
    apartment_id: i32,
    client_id: i32,
) -> Result<entity::rental_request::Model, DbErr> {
    RequestFactory::new(db, apartment_id, client_id)
        .build()
        .await
}
