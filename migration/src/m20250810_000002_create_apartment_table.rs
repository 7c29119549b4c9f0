use sea_orm_migration::{prelude::*, schema::*};

use super::m20250810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apartment::Table)
                    .if_not_exists()
                    .col(pk_auto(Apartment::Id))
                    .col(integer(Apartment::OwnerId))
                    .col(string(Apartment::Location))
                    .col(integer(Apartment::TotalRooms))
                    .col(double(Apartment::Price))
                    .col(
                        timestamp(Apartment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartment_owner_id")
                            .from(Apartment::Table, Apartment::OwnerId)
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
            .drop_table(Table::drop().table(Apartment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Apartment {
    Table,
    Id,
    OwnerId,
    Location,
    TotalRooms,
    Price,
    CreatedAt,
}
