//! Error types for the reservation engine.
//!
//! `AppError` is the top-level error type. Availability and booking
//! operations surface `NotFound`/`InvalidRequest` directly to their caller;
//! the reconciliation scheduler treats `DbErr` as a store-level failure that
//! aborts the current run while per-record failures are logged and skipped.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Transient connectivity or query failures land here. During a
    /// reconciliation run this aborts the run; the scheduler retries on the
    /// next tick.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Requested resource (apartment, rental, request) does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request input, e.g. a non-positive room count or an
    /// inverted date range.
    #[error("{0}")]
    InvalidRequest(String),

    /// A record to be persisted is missing required fields.
    #[error("{0}")]
    Validation(String),

    /// Internal error with a custom message.
    #[error("{0}")]
    InternalError(String),
}
