//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these domain models at the
//! data-layer boundary; services construct the `Create*Params` types before
//! handing them to a repository.

pub mod apartment;
pub mod rental;
pub mod request;
