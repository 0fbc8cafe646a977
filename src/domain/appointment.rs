use super::error::AppointmentError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for an appointment request
pub type AppointmentId = i64;

/// Lifecycle tag of an appointment request.
///
/// `Pending` moves to `Confirmed` or `Cancelled`; `Confirmed` moves to
/// `Completed`. `Cancelled` and `Completed` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Statuses an administrator may move this appointment to.
    pub fn available_actions(&self) -> &'static [AppointmentStatus] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::Completed],
            Self::Cancelled | Self::Completed => &[],
        }
    }

    /// Re-applying the current status is accepted as a no-op.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        *self == next || self.available_actions().contains(&next)
    }

    pub fn is_final(&self) -> bool {
        self.available_actions().is_empty()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(AppointmentError::UnknownStatus(s.to_string())),
        }
    }
}

/// A stored appointment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    /// Name of the person requesting the appointment
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Requested date and time, free text as typed by the requester
    pub date: String,
    #[serde(default)]
    pub message: Option<String>,
    pub status: AppointmentStatus,
    /// Set by the store at insert time (UTC)
    pub created_at: NaiveDateTime,
}

/// Fields of an appointment request that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Defaults to pending when absent
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
}
