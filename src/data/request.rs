use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::request::{CreateRequestParams, RentalRequest};

pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pending reservation request.
    ///
    /// # Arguments
    /// - `params`: Request fields including the precomputed final price
    ///
    /// # Returns
    /// - `Ok(RentalRequest)`: The created request
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateRequestParams) -> Result<RentalRequest, DbErr> {
        let request = entity::rental_request::ActiveModel {
            apartment_id: ActiveValue::Set(params.apartment_id),
            client_id: ActiveValue::Set(params.client_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            rooms: ActiveValue::Set(params.rooms),
            final_price: ActiveValue::Set(params.final_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RentalRequest::from_entity(request))
    }

    /// Gets a request by ID.
    ///
    /// # Returns
    /// - `Ok(Some(RentalRequest))`: The request
    /// - `Ok(None)`: Request not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RentalRequest>, DbErr> {
        let request = entity::prelude::RentalRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(request.map(RentalRequest::from_entity))
    }

    /// Gets all pending requests for an apartment.
    ///
    /// # Arguments
    /// - `apartment_id`: Apartment ID
    ///
    /// # Returns
    /// - `Ok(Vec<RentalRequest>)`: Pending requests, ordered by check-in date
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_apartment(&self, apartment_id: i32) -> Result<Vec<RentalRequest>, DbErr> {
        let requests = entity::prelude::RentalRequest::find()
            .filter(entity::rental_request::Column::ApartmentId.eq(apartment_id))
            .order_by_asc(entity::rental_request::Column::CheckIn)
            .all(self.db)
            .await?;

        Ok(requests
            .into_iter()
            .map(RentalRequest::from_entity)
            .collect())
    }

    /// Gets all pending requests submitted by a client across all
    /// apartments.
    ///
    /// # Arguments
    /// - `client_id`: Client user ID
    ///
    /// # Returns
    /// - `Ok(Vec<RentalRequest>)`: The client's pending requests
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_client(&self, client_id: i32) -> Result<Vec<RentalRequest>, DbErr> {
        let requests = entity::prelude::RentalRequest::find()
            .filter(entity::rental_request::Column::ClientId.eq(client_id))
            .all(self.db)
            .await?;

        Ok(requests
            .into_iter()
            .map(RentalRequest::from_entity)
            .collect())
    }

    /// Gets all requests whose check-in date has passed.
    ///
    /// These are stale: the stay they asked for has already begun, so the
    /// owner can no longer meaningfully accept them.
    ///
    /// # Arguments
    /// - `today`: Calendar day the run is reconciling against
    ///
    /// # Returns
    /// - `Ok(Vec<RentalRequest>)`: Expired requests
    /// - `Err(DbErr)`: Database error
    pub async fn find_expired(&self, today: NaiveDate) -> Result<Vec<RentalRequest>, DbErr> {
        let requests = entity::prelude::RentalRequest::find()
            .filter(entity::rental_request::Column::CheckIn.lt(today))
            .all(self.db)
            .await?;

        Ok(requests
            .into_iter()
            .map(RentalRequest::from_entity)
            .collect())
    }

    /// Deletes a request by ID.
    ///
    /// # Arguments
    /// - `id`: Request ID
    ///
    /// # Returns
    /// - `Ok(())`: Request deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RentalRequest::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
