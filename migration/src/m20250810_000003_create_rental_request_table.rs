use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250810_000001_create_user_table::User,
    m20250810_000002_create_apartment_table::Apartment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalRequest::Id))
                    .col(integer(RentalRequest::ApartmentId))
                    .col(integer(RentalRequest::ClientId))
                    .col(date(RentalRequest::CheckIn))
                    .col(date(RentalRequest::CheckOut))
                    .col(integer(RentalRequest::Rooms))
                    .col(double(RentalRequest::FinalPrice))
                    .col(
                        timestamp(RentalRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_request_apartment_id")
                            .from(RentalRequest::Table, RentalRequest::ApartmentId)
                            .to(Apartment::Table, Apartment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_request_client_id")
                            .from(RentalRequest::Table, RentalRequest::ClientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RentalRequest {
    Table,
    Id,
    ApartmentId,
    ClientId,
    CheckIn,
    CheckOut,
    Rooms,
    FinalPrice,
    CreatedAt,
}
