//! Availability calculation for prospective bookings.
//!
//! Computes which calendar days are off-limits for a client asking for a
//! given number of rooms in an apartment. A day is unavailable when the
//! apartment lacks capacity for the extra rooms or when the client is
//! already committed to a stay elsewhere that day.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::{apartment::ApartmentRepository, rental::RentalRepository, request::RequestRepository},
    error::AppError,
    model::{rental::Rental, request::RentalRequest},
    util::calendar::days_between,
};

/// Rooms-occupied count per calendar day for one apartment.
///
/// Built per calculation call and discarded afterwards; never persisted.
pub type OccupancyMap = BTreeMap<NaiveDate, i32>;

/// Builds the occupancy map for one apartment.
///
/// Every day in a record's inclusive `[check_in, check_out]` span accumulates
/// that record's room count. Pending requests contribute exactly like
/// confirmed rentals: a room is spoken for the moment a request exists, not
/// only once it is accepted.
pub fn occupancy_map(rentals: &[Rental], requests: &[RentalRequest]) -> OccupancyMap {
    let mut occupancy = OccupancyMap::new();

    let spans = rentals
        .iter()
        .map(|r| (r.check_in, r.check_out, r.rooms))
        .chain(requests.iter().map(|r| (r.check_in, r.check_out, r.rooms)));

    for (check_in, check_out, rooms) in spans {
        for day in days_between(check_in, check_out) {
            *occupancy.entry(day).or_insert(0) += rooms;
        }
    }

    occupancy
}

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the unavailable calendar days for a prospective booking.
    ///
    /// Read-only; called once per calendar render. Increasing
    /// `requested_rooms` never shrinks the result.
    ///
    /// # Arguments
    /// - `apartment_id`: Apartment being booked
    /// - `client_id`: User asking for the booking
    /// - `requested_rooms`: Rooms the user wants
    ///
    /// # Returns
    /// - `Ok(Vec<NaiveDate>)`: Sorted, deduplicated unavailable days
    /// - `Err(AppError::NotFound)`: Apartment does not exist
    /// - `Err(AppError::InvalidRequest)`: Room count below one
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn compute_unavailable_dates(
        &self,
        apartment_id: i32,
        client_id: i32,
        requested_rooms: i32,
    ) -> Result<Vec<NaiveDate>, AppError> {
        let apartment = ApartmentRepository::new(self.db)
            .get_by_id(apartment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Apartment {} not found", apartment_id)))?;

        if requested_rooms < 1 {
            return Err(AppError::InvalidRequest(
                "Requested room count must be at least 1".to_string(),
            ));
        }

        let rentals = RentalRepository::new(self.db);
        let requests = RequestRepository::new(self.db);

        let apartment_rentals = rentals.find_active_by_apartment(apartment_id).await?;
        let apartment_requests = requests.find_by_apartment(apartment_id).await?;
        let occupancy = occupancy_map(&apartment_rentals, &apartment_requests);

        // Days the client is already committed to a stay in another
        // apartment; one person cannot occupy two apartments at once.
        let mut unavailable: BTreeSet<NaiveDate> = BTreeSet::new();

        for rental in rentals.find_active_by_client(client_id).await? {
            if rental.apartment_id != apartment_id {
                unavailable.extend(days_between(rental.check_in, rental.check_out));
            }
        }
        for request in requests.find_by_client(client_id).await? {
            if request.apartment_id != apartment_id {
                unavailable.extend(days_between(request.check_in, request.check_out));
            }
        }

        for (day, occupied) in occupancy {
            if occupied + requested_rooms > apartment.total_rooms {
                unavailable.insert(day);
            }
        }

        Ok(unavailable.into_iter().collect())
    }

    /// Same as [`compute_unavailable_dates`](Self::compute_unavailable_dates)
    /// but rendered as `YYYY-MM-DD` strings for calendar consumers.
    pub async fn compute_unavailable_dates_iso(
        &self,
        apartment_id: i32,
        client_id: i32,
        requested_rooms: i32,
    ) -> Result<Vec<String>, AppError> {
        let dates = self
            .compute_unavailable_dates(apartment_id, client_id, requested_rooms)
            .await?;

        Ok(dates
            .into_iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect())
    }
}
