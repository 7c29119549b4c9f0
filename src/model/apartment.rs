//! Apartment domain model.

use serde::Serialize;

/// An apartment listing, read-only from the reservation core's perspective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Apartment {
    /// Unique identifier for the apartment.
    pub id: i32,
    /// ID of the owning user.
    pub owner_id: i32,
    /// Human-readable location, used in notification messages.
    pub location: String,
    /// Total rooms the apartment can let simultaneously.
    pub total_rooms: i32,
    /// Price per room per day.
    pub price: f64,
}

impl Apartment {
    /// Converts an entity model to an apartment domain model at the
    /// repository boundary.
    pub fn from_entity(entity: entity::apartment::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            location: entity.location,
            total_rooms: entity.total_rooms,
            price: entity.price,
        }
    }
}
