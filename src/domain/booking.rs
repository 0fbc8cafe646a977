//! Booking form submitted by a prospective client.

use super::appointment::NewAppointment;
use super::error::BookingError;
use serde::{Deserialize, Serialize};

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    #[serde(default)]
    pub message: String,
}

impl BookingForm {
    /// Trims every field and checks the required ones, in form order.
    ///
    /// The email check only requires an `@`; the date is free text.
    pub fn validate(&self) -> Result<NewAppointment, BookingError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BookingError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(BookingError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(BookingError::InvalidEmail);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(BookingError::MissingPhone);
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err(BookingError::MissingDate);
        }
        let message = self.message.trim();

        Ok(NewAppointment {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            date: date.to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
            status: None,
        })
    }
}
