//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let (owner, client, apartment) = factory::helpers::create_booking_dependencies(&db).await?;
//!     let rental = factory::rental::create_rental(&db, apartment.id, client.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod apartment;
pub mod helpers;
pub mod rental;
pub mod request;
pub mod user;
