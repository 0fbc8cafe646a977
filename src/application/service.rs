//! Async entry point used by the front ends.
//!
//! Each call runs the blocking SQLite work on tokio's blocking pool, so the
//! caller simply awaits the store's answer. Calls are not coordinated with
//! each other; the last write wins.

use crate::domain::{
    Appointment, AppointmentId, AppointmentStatus, BookingForm, Lawyer, LawyerId, NewAppointment,
    NewLawyer,
};
use crate::infra::db::{Database, StoreHealth, TableInfo};
use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;

/// Full contents of both tables, for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct DirectorySnapshot {
    pub appointments: Vec<Appointment>,
    pub lawyers: Vec<Lawyer>,
}

#[derive(Clone)]
pub struct DeskService {
    db: Arc<Database>,
}

impl DeskService {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }

    pub fn health(&self) -> &StoreHealth {
        self.db.health()
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Validate a booking form and store it as a pending request.
    pub async fn book(&self, form: BookingForm) -> Result<AppointmentId> {
        let appointment = form.validate()?;
        let id = self.create_appointment(appointment).await?;
        log::info!("Appointment created with ID: {}", id);
        Ok(id)
    }

    pub async fn create_appointment(&self, appointment: NewAppointment) -> Result<AppointmentId> {
        self.run(move |db| db.appointment_repo().create(&appointment))
            .await
    }

    pub async fn appointments(&self) -> Result<Vec<Appointment>> {
        self.run(|db| db.appointment_repo().find_all()).await
    }

    pub async fn appointment(&self, id: AppointmentId) -> Result<Option<Appointment>> {
        self.run(move |db| db.appointment_repo().find_by_id(id))
            .await
    }

    pub async fn set_appointment_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<usize> {
        self.run(move |db| db.appointment_repo().update_status(id, status))
            .await
    }

    pub async fn delete_appointment(&self, id: AppointmentId) -> Result<usize> {
        self.run(move |db| db.appointment_repo().delete(id)).await
    }

    pub async fn lawyers(&self) -> Result<Vec<Lawyer>> {
        self.run(|db| db.lawyer_repo().find_all()).await
    }

    pub async fn lawyer(&self, id: LawyerId) -> Result<Option<Lawyer>> {
        self.run(move |db| db.lawyer_repo().find_by_id(id)).await
    }

    pub async fn lawyers_by_specialty(&self, specialty: String) -> Result<Vec<Lawyer>> {
        self.run(move |db| db.lawyer_repo().find_by_specialty(&specialty))
            .await
    }

    pub async fn add_lawyer(&self, lawyer: NewLawyer) -> Result<LawyerId> {
        lawyer.validate()?;
        self.run(move |db| db.lawyer_repo().add(&lawyer)).await
    }

    pub async fn update_lawyer(&self, id: LawyerId, lawyer: NewLawyer) -> Result<usize> {
        lawyer.validate()?;
        self.run(move |db| db.lawyer_repo().update(id, &lawyer))
            .await
    }

    pub async fn delete_lawyer(&self, id: LawyerId) -> Result<usize> {
        self.run(move |db| db.lawyer_repo().delete(id)).await
    }

    pub async fn table_overview(&self) -> Result<Vec<TableInfo>> {
        self.run(|db| db.table_overview()).await
    }

    pub async fn snapshot(&self) -> Result<DirectorySnapshot> {
        self.run(|db| {
            Ok(DirectorySnapshot {
                appointments: db.appointment_repo().find_all()?,
                lawyers: db.lawyer_repo().find_all()?,
            })
        })
        .await
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || op(&db))
            .await
            .context("storage task did not complete")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingError;

    fn service() -> DeskService {
        DeskService::new(Database::open_in_memory().unwrap())
    }

    #[tokio::test]
    async fn test_book_rejects_invalid_form() {
        let service = service();
        let err = service
            .book(BookingForm {
                name: "Ada".into(),
                email: "ada".into(),
                phone: "555".into(),
                date: "Mon".into(),
                message: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<BookingError>(),
            Some(&BookingError::InvalidEmail)
        );
        assert!(service.appointments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_lawyer_requires_fields() {
        let service = service();
        assert!(service.add_lawyer(NewLawyer::default()).await.is_err());
        assert_eq!(service.lawyers().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_snapshot() {
        let service = service();
        service
            .book(BookingForm {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: "555".into(),
                date: "Mon".into(),
                message: "Will".into(),
            })
            .await
            .unwrap();

        let snapshot = service.snapshot().await.unwrap();
        assert_eq!(snapshot.appointments.len(), 1);
        assert_eq!(snapshot.lawyers.len(), 6);
        assert_eq!(service.health(), &StoreHealth::Ready);
    }
}
