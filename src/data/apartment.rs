use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::apartment::Apartment;

pub struct ApartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an apartment by ID.
    ///
    /// # Arguments
    /// - `id`: Apartment ID
    ///
    /// # Returns
    /// - `Ok(Some(Apartment))`: The apartment
    /// - `Ok(None)`: Apartment not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Apartment>, DbErr> {
        let apartment = entity::prelude::Apartment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(apartment.map(Apartment::from_entity))
    }
}
