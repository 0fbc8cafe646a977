//! Domain types for lawdesk
//! Defines the lawyer and appointment records and the rules that govern them.

pub mod appointment;
pub mod booking;
pub mod error;
pub mod lawyer;

pub use appointment::*;
pub use booking::*;
pub use error::*;
pub use lawyer::*;
