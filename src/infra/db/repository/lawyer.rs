use super::{DbConn, lock, log_failure};
use crate::domain::{Lawyer, LawyerId, NewLawyer};
use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, Row};

#[derive(Clone)]
pub struct LawyerRepository {
    conn: DbConn,
}

impl LawyerRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn add(&self, lawyer: &NewLawyer) -> Result<LawyerId> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        conn.execute(
            "INSERT INTO lawyers (name, specialty, experience, image, bio, email, phone) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                lawyer.name,
                lawyer.specialty,
                lawyer.experience,
                lawyer.image,
                lawyer.bio,
                lawyer.email,
                lawyer.phone,
            ],
        )
        .map(|_| conn.last_insert_rowid())
        .context("Error adding lawyer")
        .inspect_err(log_failure)
    }

    /// Overwrite every mutable column of lawyer `id`.
    pub fn update(&self, id: LawyerId, lawyer: &NewLawyer) -> Result<usize> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        conn.execute(
            r#"
            UPDATE lawyers
            SET name = ?2, specialty = ?3, experience = ?4, image = ?5, bio = ?6, email = ?7, phone = ?8
            WHERE id = ?1
            "#,
            rusqlite::params![
                id,
                lawyer.name,
                lawyer.specialty,
                lawyer.experience,
                lawyer.image,
                lawyer.bio,
                lawyer.email,
                lawyer.phone,
            ],
        )
        .with_context(|| format!("Error updating lawyer {}", id))
        .inspect_err(log_failure)
    }

    pub fn delete(&self, id: LawyerId) -> Result<usize> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        conn.execute("DELETE FROM lawyers WHERE id = ?1", [id])
            .with_context(|| format!("Error deleting lawyer {}", id))
            .inspect_err(log_failure)
    }

    /// All lawyers ordered by name.
    pub fn find_all(&self) -> Result<Vec<Lawyer>> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        Self::query(&conn, "ORDER BY name", rusqlite::params![])
            .context("Error fetching lawyers")
            .inspect_err(log_failure)
    }

    pub fn find_by_id(&self, id: LawyerId) -> Result<Option<Lawyer>> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        conn.query_row(
            r#"
            SELECT id, name, specialty, experience, image, bio, email, phone
            FROM lawyers
            WHERE id = ?1
            "#,
            [id],
            Self::row_to_lawyer,
        )
        .optional()
        .with_context(|| format!("Error fetching lawyer {}", id))
        .inspect_err(log_failure)
    }

    /// Lawyers whose specialty equals `specialty` exactly, ordered by name.
    pub fn find_by_specialty(&self, specialty: &str) -> Result<Vec<Lawyer>> {
        let conn = lock(&self.conn).inspect_err(log_failure)?;
        Self::query(&conn, "WHERE specialty = ?1 ORDER BY name", [specialty])
            .with_context(|| format!("Error fetching lawyers by specialty {}", specialty))
            .inspect_err(log_failure)
    }

    fn query<P: rusqlite::Params>(
        conn: &Connection,
        clause: &str,
        params: P,
    ) -> rusqlite::Result<Vec<Lawyer>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, specialty, experience, image, bio, email, phone FROM lawyers {}",
            clause
        ))?;
        let rows = stmt.query_map(params, Self::row_to_lawyer)?;
        rows.collect()
    }

    fn row_to_lawyer(row: &Row) -> rusqlite::Result<Lawyer> {
        Ok(Lawyer {
            id: row.get(0)?,
            name: row.get(1)?,
            specialty: row.get(2)?,
            experience: row.get(3)?,
            image: row.get(4)?,
            bio: row.get(5)?,
            email: row.get(6)?,
            phone: row.get(7)?,
        })
    }
}
