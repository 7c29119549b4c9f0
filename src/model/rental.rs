//! Confirmed rental domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::model::request::RentalRequest;

/// A confirmed reservation.
///
/// `is_active` tracks whether the rental window is in effect and is toggled
/// by the reconciliation scheduler. `cancelled` is terminal: once set, the
/// scheduler never reactivates the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    pub id: i32,
    pub apartment_id: i32,
    pub client_id: i32,
    /// First day of the stay.
    pub check_in: NaiveDate,
    /// Last day of the stay, inclusive.
    pub check_out: NaiveDate,
    /// Rooms occupied by this rental.
    pub rooms: i32,
    pub final_price: f64,
    pub is_active: bool,
    pub cancelled: bool,
    /// Whether the upcoming-expiry reminder has already been delivered.
    pub expiry_reminder_sent: bool,
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Converts an entity model to a rental domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::rental::Model) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            client_id: entity.client_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            rooms: entity.rooms,
            final_price: entity.final_price,
            is_active: entity.is_active,
            cancelled: entity.cancelled,
            expiry_reminder_sent: entity.expiry_reminder_sent,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a confirmed rental.
#[derive(Debug, Clone)]
pub struct CreateRentalParams {
    pub apartment_id: i32,
    pub client_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms: i32,
    pub final_price: f64,
}

impl CreateRentalParams {
    /// Builds rental parameters from an accepted reservation request.
    ///
    /// This is the only path from a request to a rental: a new record is
    /// constructed field by field, the request row itself is never mutated
    /// into a rental shape.
    pub fn from_request(request: &RentalRequest) -> Self {
        Self {
            apartment_id: request.apartment_id,
            client_id: request.client_id,
            check_in: request.check_in,
            check_out: request.check_out,
            rooms: request.rooms,
            final_price: request.final_price,
        }
    }
}
