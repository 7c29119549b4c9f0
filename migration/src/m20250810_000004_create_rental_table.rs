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
                    .table(Rental::Table)
                    .if_not_exists()
                    .col(pk_auto(Rental::Id))
                    .col(integer(Rental::ApartmentId))
                    .col(integer(Rental::ClientId))
                    .col(date(Rental::CheckIn))
                    .col(date(Rental::CheckOut))
                    .col(integer(Rental::Rooms))
                    .col(double(Rental::FinalPrice))
                    .col(boolean(Rental::IsActive).default(true))
                    .col(boolean(Rental::Cancelled).default(false))
                    .col(boolean(Rental::ExpiryReminderSent).default(false))
                    .col(
                        timestamp(Rental::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_apartment_id")
                            .from(Rental::Table, Rental::ApartmentId)
                            .to(Apartment::Table, Apartment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_client_id")
                            .from(Rental::Table, Rental::ClientId)
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
            .drop_table(Table::drop().table(Rental::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rental {
    Table,
    Id,
    ApartmentId,
    ClientId,
    CheckIn,
    CheckOut,
    Rooms,
    FinalPrice,
    IsActive,
    Cancelled,
    ExpiryReminderSent,
    CreatedAt,
}
