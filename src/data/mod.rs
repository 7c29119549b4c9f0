//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD, bulk updates) for
//! each domain. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All
//! queries, inserts, updates, and deletes go through these repositories.

pub mod apartment;
pub mod notification;
pub mod rental;
pub mod request;

#[cfg(test)]
mod test;
