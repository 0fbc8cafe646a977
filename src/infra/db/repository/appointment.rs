use super::{DbConn, lock, log_failure};
use crate::domain::{
    Appointment, AppointmentError, AppointmentId, AppointmentStatus, NewAppointment,
};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};
use std::str::FromStr;

/// Format of SQLite's `CURRENT_TIMESTAMP`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SELECT_COLUMNS: &str =
    "SELECT id, name, email, phone, date, message, status, created_at FROM appointments";

#[derive(Clone)]
pub struct AppointmentRepository {
    conn: DbConn,
}

impl AppointmentRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Insert a request; `created_at` is stamped by the store.
    pub fn create(&self, appointment: &NewAppointment) -> Result<AppointmentId> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        conn.execute(
            "INSERT INTO appointments (name, email, phone, date, message, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                appointment.name,
                appointment.email,
                appointment.phone,
                appointment.date,
                appointment.message,
                appointment.status.unwrap_or_default().as_str(),
            ],
        )
        .map(|_| conn.last_insert_rowid())
        .context("Error creating appointment")
        .inspect_err(log_failure)
    }

    /// All requests, newest first.
    pub fn find_all(&self) -> Result<Vec<Appointment>> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        Self::query_all(&conn)
            .context("Error fetching appointments")
            .inspect_err(log_failure)
    }

    pub fn find_by_id(&self, id: AppointmentId) -> Result<Option<Appointment>> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        Self::query_one(&conn, id)
            .with_context(|| format!("Error fetching appointment {}", id))
            .inspect_err(log_failure)
    }

    /// Move a request to `status`, refusing transitions the workflow does
    /// not allow. Returns the number of updated rows (0 for an unknown id).
    pub fn update_status(&self, id: AppointmentId, status: AppointmentStatus) -> Result<usize> {
        let mut conn = lock(&self.conn).inspect_err(log_failure)?;
        Self::transition(&mut conn, id, status)
            .with_context(|| format!("Error updating appointment {} status", id))
            .inspect_err(log_failure)
    }

    pub fn delete(&self, id: AppointmentId) -> Result<usize> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        conn.execute("DELETE FROM appointments WHERE id = ?1", [id])
            .with_context(|| format!("Error deleting appointment {}", id))
            .inspect_err(log_failure)
    }

    fn query_all(conn: &Connection) -> rusqlite::Result<Vec<Appointment>> {
        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))?;
        let rows = stmt.query_map([], Self::row_to_appointment)?;
        rows.collect()
    }

    fn query_one(conn: &Connection, id: AppointmentId) -> rusqlite::Result<Option<Appointment>> {
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            [id],
            Self::row_to_appointment,
        )
        .optional()
    }

    fn transition(
        conn: &mut Connection,
        id: AppointmentId,
        next: AppointmentStatus,
    ) -> Result<usize> {
        let tx = conn.transaction()?;

        let current: Option<String> = tx
            .query_row(
                "SELECT status FROM appointments WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(current) = current else {
            return Ok(0);
        };
        let current = AppointmentStatus::from_str(&current)?;
        if !current.can_transition_to(next) {
            return Err(AppointmentError::InvalidStatusTransition { current, next }.into());
        }

        let updated = tx.execute(
            "UPDATE appointments SET status = ?2 WHERE id = ?1",
            rusqlite::params![id, next.as_str()],
        )?;
        tx.commit()?;
        Ok(updated)
    }

    fn row_to_appointment(row: &Row) -> rusqlite::Result<Appointment> {
        let status: String = row.get(6)?;
        let created_at: String = row.get(7)?;

        Ok(Appointment {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            date: row.get(4)?,
            message: row.get(5)?,
            status: AppointmentStatus::from_str(&status)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?,
            created_at: NaiveDateTime::parse_from_str(&created_at, TIMESTAMP_FORMAT)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?,
        })
    }
}
