//! Repository implementations for data access in lawdesk.
//!
//! Provides database operations for appointment requests and lawyers.
//! Every operation logs its failure before handing it back to the caller.

mod appointment;
mod lawyer;

pub use appointment::AppointmentRepository;
pub use lawyer::LawyerRepository;

use anyhow::{Result, anyhow};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

pub type DbConn = Arc<Mutex<Connection>>;

pub(crate) fn lock(conn: &DbConn) -> Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| anyhow!("database connection lock poisoned"))
}

pub(super) fn log_failure(err: &anyhow::Error) {
    log::error!("{:#}", err);
}

#[cfg(test)]
mod tests;
