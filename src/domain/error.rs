//! Domain error types for lawdesk.
//!
//! These errors represent domain-level failures. Storage failures travel
//! as `anyhow::Error`; the enums below can be recovered from it with
//! `downcast_ref` when a caller needs to react to a specific case.

use super::appointment::AppointmentStatus;
use thiserror::Error;

/// Domain errors related to appointment requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Unknown appointment status: {0}")]
    UnknownStatus(String),

    #[error("Invalid appointment status transition from {current} to {next}")]
    InvalidStatusTransition {
        current: AppointmentStatus,
        next: AppointmentStatus,
    },
}

/// Domain errors related to lawyer records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LawyerError {
    #[error("Lawyer {0} must not be empty")]
    MissingField(&'static str),
}

/// Validation failures for a booking submission.
///
/// The messages are the prompts shown to the person filling the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter your phone number")]
    MissingPhone,

    #[error("Please enter your preferred date and time")]
    MissingDate,
}
