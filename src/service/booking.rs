//! Reservation request lifecycle: submit, accept, decline, cancel.

use sea_orm::DatabaseConnection;

use crate::{
    data::{apartment::ApartmentRepository, rental::RentalRepository, request::RequestRepository},
    error::AppError,
    model::{
        rental::{CreateRentalParams, Rental},
        request::{CreateRequestParams, RentalRequest},
    },
    service::notification::NotificationService,
    util::calendar::days_between,
};

/// Parameters for submitting a reservation request. The final price is
/// computed by the service, not supplied by the caller.
#[derive(Debug, Clone)]
pub struct SubmitRequestParams {
    pub apartment_id: i32,
    pub client_id: i32,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub rooms: i32,
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new reservation request for an apartment.
    ///
    /// The final price is the apartment's per-room daily price times the
    /// room count times the inclusive day count of the stay.
    ///
    /// # Arguments
    /// - `params`: Requested apartment, client, window, and room count
    ///
    /// # Returns
    /// - `Ok(RentalRequest)`: The created pending request
    /// - `Err(AppError::InvalidRequest)`: Room count below one or inverted window
    /// - `Err(AppError::NotFound)`: Apartment does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn submit_request(
        &self,
        params: SubmitRequestParams,
    ) -> Result<RentalRequest, AppError> {
        if params.rooms < 1 {
            return Err(AppError::InvalidRequest(
                "Requested room count must be at least 1".to_string(),
            ));
        }
        if params.check_in > params.check_out {
            return Err(AppError::InvalidRequest(
                "Check-in date must not be after check-out date".to_string(),
            ));
        }

        let apartment = ApartmentRepository::new(self.db)
            .get_by_id(params.apartment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Apartment {} not found", params.apartment_id))
            })?;

        let stay_days = days_between(params.check_in, params.check_out).len() as i32;
        let final_price = apartment.price * params.rooms as f64 * stay_days as f64;

        let request = RequestRepository::new(self.db)
            .create(CreateRequestParams {
                apartment_id: params.apartment_id,
                client_id: params.client_id,
                check_in: params.check_in,
                check_out: params.check_out,
                rooms: params.rooms,
                final_price,
            })
            .await?;

        Ok(request)
    }

    /// Accepts a pending request, promoting it to a confirmed rental.
    ///
    /// A new rental record is constructed from the request via
    /// [`CreateRentalParams::from_request`], the request is removed, and the
    /// client is notified.
    ///
    /// # Arguments
    /// - `request_id`: Request to accept
    ///
    /// # Returns
    /// - `Ok(Rental)`: The confirmed rental
    /// - `Err(AppError::NotFound)`: Request does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn accept_request(&self, request_id: i32) -> Result<Rental, AppError> {
        let requests = RequestRepository::new(self.db);

        let request = requests
            .get_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", request_id)))?;

        let rental = RentalRepository::new(self.db)
            .create(CreateRentalParams::from_request(&request))
            .await?;

        requests.delete(request.id).await?;

        let message = match self.apartment_location(request.apartment_id).await {
            Some(location) => format!(
                "Your booking request for the apartment at {} was accepted",
                location
            ),
            None => "Your booking request was accepted".to_string(),
        };
        self.notify(request.client_id, &message).await;

        Ok(rental)
    }

    /// Declines a pending request, removing it and notifying the client.
    ///
    /// # Arguments
    /// - `request_id`: Request to decline
    ///
    /// # Returns
    /// - `Ok(())`: Request removed
    /// - `Err(AppError::NotFound)`: Request does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn decline_request(&self, request_id: i32) -> Result<(), AppError> {
        let requests = RequestRepository::new(self.db);

        let request = requests
            .get_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", request_id)))?;

        requests.delete(request.id).await?;

        let message = match self.apartment_location(request.apartment_id).await {
            Some(location) => format!(
                "Your booking request for the apartment at {} was declined",
                location
            ),
            None => "Your booking request was declined".to_string(),
        };
        self.notify(request.client_id, &message).await;

        Ok(())
    }

    /// Cancels a confirmed rental.
    ///
    /// Cancellation is terminal: the rental is deactivated and flagged so the
    /// reconciliation scheduler never reactivates it.
    ///
    /// # Arguments
    /// - `rental_id`: Rental to cancel
    ///
    /// # Returns
    /// - `Ok(Rental)`: The cancelled rental
    /// - `Err(AppError::NotFound)`: Rental does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn cancel_rental(&self, rental_id: i32) -> Result<Rental, AppError> {
        let rentals = RentalRepository::new(self.db);

        rentals
            .get_by_id(rental_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", rental_id)))?;

        let rental = rentals.cancel(rental_id).await?;

        let message = match self.apartment_location(rental.apartment_id).await {
            Some(location) => {
                format!("Your rental of the apartment at {} was cancelled", location)
            }
            None => "Your rental was cancelled".to_string(),
        };
        self.notify(rental.client_id, &message).await;

        Ok(rental)
    }

    /// Looks up the apartment location for a notification message.
    ///
    /// A missing apartment or lookup failure only degrades the message, it
    /// never fails the calling operation.
    async fn apartment_location(&self, apartment_id: i32) -> Option<String> {
        match ApartmentRepository::new(self.db).get_by_id(apartment_id).await {
            Ok(Some(apartment)) => Some(apartment.location),
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to fetch apartment {}: {}", apartment_id, e);
                None
            }
        }
    }

    /// Delivers a notification, logging rather than propagating failures.
    async fn notify(&self, receiver_id: i32, message: &str) {
        if let Err(e) = NotificationService::new(self.db)
            .create_notification(receiver_id, message)
            .await
        {
            tracing::error!("Failed to notify user {}: {}", receiver_id, e);
        }
    }
}
