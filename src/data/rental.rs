use chrono::{Days, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::rental::{CreateRentalParams, Rental};

pub struct RentalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new confirmed rental.
    ///
    /// The rental starts out active and not cancelled; reconciliation takes
    /// over the active flag from there.
    ///
    /// # Arguments
    /// - `params`: Rental fields, typically built from an accepted request
    ///
    /// # Returns
    /// - `Ok(Rental)`: The created rental
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateRentalParams) -> Result<Rental, DbErr> {
        let rental = entity::rental::ActiveModel {
            apartment_id: ActiveValue::Set(params.apartment_id),
            client_id: ActiveValue::Set(params.client_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            rooms: ActiveValue::Set(params.rooms),
            final_price: ActiveValue::Set(params.final_price),
            is_active: ActiveValue::Set(true),
            cancelled: ActiveValue::Set(false),
            expiry_reminder_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rental::from_entity(rental))
    }

    /// Gets a rental by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Rental))`: The rental
    /// - `Ok(None)`: Rental not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Rental>, DbErr> {
        let rental = entity::prelude::Rental::find_by_id(id).one(self.db).await?;

        Ok(rental.map(Rental::from_entity))
    }

    /// Gets all active rentals for an apartment.
    ///
    /// # Arguments
    /// - `apartment_id`: Apartment ID
    ///
    /// # Returns
    /// - `Ok(Vec<Rental>)`: Active rentals, ordered by check-in date
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_by_apartment(&self, apartment_id: i32) -> Result<Vec<Rental>, DbErr> {
        let rentals = entity::prelude::Rental::find()
            .filter(entity::rental::Column::ApartmentId.eq(apartment_id))
            .filter(entity::rental::Column::IsActive.eq(true))
            .order_by_asc(entity::rental::Column::CheckIn)
            .all(self.db)
            .await?;

        Ok(rentals.into_iter().map(Rental::from_entity).collect())
    }

    /// Gets all active, non-cancelled rentals held by a client across all
    /// apartments.
    ///
    /// # Arguments
    /// - `client_id`: Client user ID
    ///
    /// # Returns
    /// - `Ok(Vec<Rental>)`: The client's active rentals
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_by_client(&self, client_id: i32) -> Result<Vec<Rental>, DbErr> {
        let rentals = entity::prelude::Rental::find()
            .filter(entity::rental::Column::ClientId.eq(client_id))
            .filter(entity::rental::Column::IsActive.eq(true))
            .filter(entity::rental::Column::Cancelled.eq(false))
            .all(self.db)
            .await?;

        Ok(rentals.into_iter().map(Rental::from_entity).collect())
    }

    /// Bulk-deactivates rentals whose window has ended.
    ///
    /// Flips `is_active` to false for every active rental with
    /// `check_out < today`.
    ///
    /// # Arguments
    /// - `today`: Calendar day the run is reconciling against
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rentals deactivated
    /// - `Err(DbErr)`: Database error
    pub async fn deactivate_ended(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Rental::update_many()
            .col_expr(entity::rental::Column::IsActive, Expr::value(false))
            .filter(entity::rental::Column::IsActive.eq(true))
            .filter(entity::rental::Column::CheckOut.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Bulk-activates rentals whose window is currently in effect.
    ///
    /// Flips `is_active` to true for every inactive, non-cancelled rental
    /// with `check_in < today <= check_out`. Cancelled rentals are terminal
    /// and never touched; the `check_out` bound keeps ended rentals from
    /// flip-flopping between runs.
    ///
    /// # Arguments
    /// - `today`: Calendar day the run is reconciling against
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rentals activated
    /// - `Err(DbErr)`: Database error
    pub async fn activate_current(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Rental::update_many()
            .col_expr(entity::rental::Column::IsActive, Expr::value(true))
            .filter(entity::rental::Column::IsActive.eq(false))
            .filter(entity::rental::Column::Cancelled.eq(false))
            .filter(entity::rental::Column::CheckIn.lt(today))
            .filter(entity::rental::Column::CheckOut.gte(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets active rentals that end within the notice window and have not
    /// yet been reminded.
    ///
    /// Qualifying rentals have already started (`check_in <= today`) and
    /// finish within `[today, today + window_days]`.
    ///
    /// # Arguments
    /// - `today`: Calendar day the run is reconciling against
    /// - `window_days`: Lookahead window in days
    ///
    /// # Returns
    /// - `Ok(Vec<Rental>)`: Rentals due a reminder
    /// - `Err(DbErr)`: Database error
    pub async fn find_expiring(
        &self,
        today: NaiveDate,
        window_days: u64,
    ) -> Result<Vec<Rental>, DbErr> {
        let window_end = today
            .checked_add_days(Days::new(window_days))
            .unwrap_or(NaiveDate::MAX);

        let rentals = entity::prelude::Rental::find()
            .filter(entity::rental::Column::IsActive.eq(true))
            .filter(entity::rental::Column::Cancelled.eq(false))
            .filter(entity::rental::Column::ExpiryReminderSent.eq(false))
            .filter(entity::rental::Column::CheckIn.lte(today))
            .filter(entity::rental::Column::CheckOut.gte(today))
            .filter(entity::rental::Column::CheckOut.lte(window_end))
            .all(self.db)
            .await?;

        Ok(rentals.into_iter().map(Rental::from_entity).collect())
    }

    /// Marks a rental's upcoming-expiry reminder as delivered.
    ///
    /// # Arguments
    /// - `id`: Rental ID
    ///
    /// # Returns
    /// - `Ok(())`: Flag set
    /// - `Err(DbErr)`: Database error or rental not found
    pub async fn mark_reminder_sent(&self, id: i32) -> Result<(), DbErr> {
        let rental = entity::prelude::Rental::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Rental {} not found", id)))?;

        let mut active_model: entity::rental::ActiveModel = rental.into();
        active_model.expiry_reminder_sent = ActiveValue::Set(true);
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Cancels a rental.
    ///
    /// Sets the terminal `cancelled` flag and deactivates the rental.
    /// Reconciliation never reactivates a cancelled record, even if its date
    /// window still overlaps today.
    ///
    /// # Arguments
    /// - `id`: Rental ID
    ///
    /// # Returns
    /// - `Ok(Rental)`: The cancelled rental
    /// - `Err(DbErr)`: Database error or rental not found
    pub async fn cancel(&self, id: i32) -> Result<Rental, DbErr> {
        let rental = entity::prelude::Rental::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Rental {} not found", id)))?;

        let mut active_model: entity::rental::ActiveModel = rental.into();
        active_model.cancelled = ActiveValue::Set(true);
        active_model.is_active = ActiveValue::Set(false);

        let updated = active_model.update(self.db).await?;

        Ok(Rental::from_entity(updated))
    }
}
