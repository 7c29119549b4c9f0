//! Apartment factory for creating test apartment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test apartments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::apartment::ApartmentFactory;
///
/// let apartment = ApartmentFactory::new(&db, owner.id)
///     .total_rooms(3)
///     .price(50.0)
///     .build()
///     .await?;
/// ```
pub struct ApartmentFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    location: String,
    total_rooms: i32,
    price: f64,
}

impl<'a> ApartmentFactory<'a> {
    /// Creates a new ApartmentFactory with default values.
    ///
    /// Defaults:
    /// - location: `"Location {id}"` where id is auto-incremented
    /// - total_rooms: `2`
    /// - price: `100.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning user
    ///
    /// # Returns
    /// - `ApartmentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            location: format!("Location {}", id),
            total_rooms: 2,
            price: 100.0,
        }
    }

    /// Sets the apartment location.
    ///
    /// # Arguments
    /// - `location` - Human-readable location string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the total room count.
    ///
    /// # Arguments
    /// - `total_rooms` - Rooms the apartment can let simultaneously
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn total_rooms(mut self, total_rooms: i32) -> Self {
        self.total_rooms = total_rooms;
        self
    }

    /// Sets the price per room per day.
    ///
    /// # Arguments
    /// - `price` - Price per room per day
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the apartment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::apartment::Model)` - Created apartment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::apartment::Model, DbErr> {
        entity::apartment::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            location: ActiveValue::Set(self.location),
            total_rooms: ActiveValue::Set(self.total_rooms),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an apartment with default values for the specified owner.
///
/// Shorthand for `ApartmentFactory::new(db, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - ID of the owning user
///
/// # Returns
/// - `Ok(entity::apartment::Model)` - Created apartment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_apartment(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::apartment::Model, DbErr> {
    ApartmentFactory::new(db, owner_id).build().await
}
