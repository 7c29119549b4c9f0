//! Pending reservation request domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A pending reservation request.
///
/// Exists only until it is accepted (promoted to a rental and removed),
/// declined (removed), or expired (check-in date passed; removed by the
/// reconciliation scheduler).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalRequest {
    pub id: i32,
    pub apartment_id: i32,
    pub client_id: i32,
    /// First day of the requested stay.
    pub check_in: NaiveDate,
    /// Last day of the requested stay, inclusive.
    pub check_out: NaiveDate,
    /// Rooms the client wants to book.
    pub rooms: i32,
    /// Total price computed at submission time.
    pub final_price: f64,
    pub created_at: DateTime<Utc>,
}

impl RentalRequest {
    /// Converts an entity model to a request domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::rental_request::Model) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            client_id: entity.client_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            rooms: entity.rooms,
            final_price: entity.final_price,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for submitting a new reservation request.
#[derive(Debug, Clone)]
pub struct CreateRequestParams {
    pub apartment_id: i32,
    pub client_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms: i32,
    pub final_price: f64,
}
