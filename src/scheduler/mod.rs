//! Periodic background jobs.

pub mod reconciliation;
