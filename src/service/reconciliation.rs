//! One reconciliation pass over rentals and pending requests.
//!
//! Each run takes a single "today" snapshot from the injected clock and,
//! in order: bulk-deactivates ended rentals, bulk-reactivates rentals whose
//! window is in effect, expires stale pending requests, and sends
//! upcoming-expiry reminders. Both bulk updates commit before the expiration
//! loop starts. A run on unchanged data is a no-op.

use sea_orm::DatabaseConnection;

use crate::{
    data::{apartment::ApartmentRepository, rental::RentalRepository, request::RequestRepository},
    error::AppError,
    service::notification::NotificationService,
    util::clock::Clock,
};

/// Modification counts from one reconciliation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconciliationSummary {
    pub rentals_deactivated: u64,
    pub rentals_activated: u64,
    pub requests_expired: u64,
    pub reminders_sent: u64,
}

impl ReconciliationSummary {
    /// True when the run changed nothing.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

pub struct ReconciliationService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
    /// Lookahead window (days) for upcoming-expiry reminders.
    notice_days: i64,
}

impl<'a> ReconciliationService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock, notice_days: i64) -> Self {
        Self {
            db,
            clock,
            notice_days,
        }
    }

    /// Executes one reconciliation run.
    ///
    /// Per-record failures (an apartment that cannot be fetched, a
    /// notification that fails validation) are logged and skipped; a
    /// store-level error aborts the run and surfaces to the scheduler, which
    /// retries on its next tick.
    ///
    /// # Returns
    /// - `Ok(ReconciliationSummary)`: Counts of modifications made
    /// - `Err(AppError::DbErr)`: Store-level failure, run aborted
    pub async fn run(&self) -> Result<ReconciliationSummary, AppError> {
        let today = self.clock.today();
        let rentals = RentalRepository::new(self.db);

        let mut summary = ReconciliationSummary {
            rentals_deactivated: rentals.deactivate_ended(today).await?,
            rentals_activated: rentals.activate_current(today).await?,
            ..Default::default()
        };

        summary.requests_expired = self.expire_requests(today).await?;
        summary.reminders_sent = self.send_expiry_reminders(today).await?;

        if !summary.is_noop() {
            tracing::info!(
                "Reconciliation run: {} rentals deactivated, {} activated, {} requests expired, {} reminders sent",
                summary.rentals_deactivated,
                summary.rentals_activated,
                summary.requests_expired,
                summary.reminders_sent,
            );
        }

        Ok(summary)
    }

    /// Deletes pending requests whose check-in date has passed, notifying
    /// each client.
    ///
    /// The notification references the apartment location. If the apartment
    /// cannot be fetched the notification is skipped with a log entry, but
    /// the stale request is still deleted.
    async fn expire_requests(&self, today: chrono::NaiveDate) -> Result<u64, AppError> {
        let requests = RequestRepository::new(self.db);
        let apartments = ApartmentRepository::new(self.db);

        let expired = requests.find_expired(today).await?;
        let mut deleted = 0;

        for request in expired {
            match apartments.get_by_id(request.apartment_id).await {
                Ok(Some(apartment)) => {
                    let message = format!(
                        "Your booking request for the apartment at {} expired because its check-in date has passed",
                        apartment.location
                    );
                    match NotificationService::new(self.db)
                        .create_notification(request.client_id, &message)
                        .await
                    {
                        Ok(_) => {}
                        Err(AppError::DbErr(e)) => return Err(AppError::DbErr(e)),
                        Err(e) => {
                            tracing::error!("Failed to notify user {}: {}", request.client_id, e);
                        }
                    }
                }
                Ok(None) => {
                    tracing::warn!(
                        "Apartment {} for expired request {} no longer exists, skipping notification",
                        request.apartment_id,
                        request.id
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to fetch apartment {} for expired request {}: {}",
                        request.apartment_id,
                        request.id,
                        e
                    );
                }
            }

            requests.delete(request.id).await?;
            deleted += 1;
        }

        Ok(deleted)
    }

    /// Sends one reminder to each tenant whose ongoing rental ends within
    /// the notice window.
    ///
    /// The reminder flag is set only after the notification is persisted, so
    /// a rental is reminded at most once and a failed delivery is retried on
    /// the next run.
    async fn send_expiry_reminders(&self, today: chrono::NaiveDate) -> Result<u64, AppError> {
        let rentals = RentalRepository::new(self.db);
        let apartments = ApartmentRepository::new(self.db);

        let expiring = rentals
            .find_expiring(today, self.notice_days.max(0) as u64)
            .await?;
        let mut sent = 0;

        for rental in expiring {
            let location = match apartments.get_by_id(rental.apartment_id).await {
                Ok(Some(apartment)) => apartment.location,
                Ok(None) => {
                    tracing::warn!(
                        "Apartment {} for rental {} no longer exists, skipping reminder",
                        rental.apartment_id,
                        rental.id
                    );
                    continue;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to fetch apartment {} for rental {}: {}",
                        rental.apartment_id,
                        rental.id,
                        e
                    );
                    continue;
                }
            };

            let days_remaining = (rental.check_out - today).num_days();
            let message = if days_remaining == 0 {
                format!("Your stay at {} ends today", location)
            } else {
                format!("Your stay at {} ends in {} day(s)", location, days_remaining)
            };

            match NotificationService::new(self.db)
                .create_notification(rental.client_id, &message)
                .await
            {
                Ok(_) => {
                    rentals.mark_reminder_sent(rental.id).await?;
                    sent += 1;
                }
                Err(AppError::DbErr(e)) => return Err(AppError::DbErr(e)),
                Err(e) => {
                    tracing::error!("Failed to send reminder for rental {}: {}", rental.id, e);
                }
            }
        }

        Ok(sent)
    }
}
