pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_user_table;
mod m20250810_000002_create_apartment_table;
mod m20250810_000003_create_rental_request_table;
mod m20250810_000004_create_rental_table;
mod m20250810_000005_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_user_table::Migration),
            Box::new(m20250810_000002_create_apartment_table::Migration),
            Box::new(m20250810_000003_create_rental_request_table::Migration),
            Box::new(m20250810_000004_create_rental_table::Migration),
            Box::new(m20250810_000005_create_notification_table::Migration),
        ]
    }
}
