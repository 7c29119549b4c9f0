//! Business logic layer.
//!
//! Services orchestrate repositories and raise domain errors; they are the
//! only place `NotFound`/`InvalidRequest`/`Validation` originate.

pub mod availability;
pub mod booking;
pub mod notification;
pub mod reconciliation;

#[cfg(test)]
mod test;
