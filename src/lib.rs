//! Reservation availability and status reconciliation engine for an
//! apartment rental marketplace.
//!
//! The crate has two entry surfaces:
//!
//! - [`service::availability`] answers, per apartment and requested room
//!   count, which calendar days a client cannot book.
//! - [`scheduler::reconciliation`] runs the periodic job that toggles rental
//!   activation with the calendar, expires stale requests, and reminds
//!   tenants of upcoming checkouts.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Business logic and domain error handling
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Error Layer** (`error/`) - Application error types
//! - **Scheduler** (`scheduler/`) - Periodic reconciliation job
//! - **Utilities** (`util/`) - Calendar walking and the injectable clock
//!
//! Configuration (`config`) and startup (`startup`) wire the binary together.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
