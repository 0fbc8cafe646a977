use crate::domain::{AppointmentError, AppointmentStatus, NewAppointment, NewLawyer};
use crate::infra::db::Database;
use crate::infra::db::repository::*;

fn booking(name: &str) -> NewAppointment {
    NewAppointment {
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: "555".to_string(),
        date: "Mon".to_string(),
        message: None,
        status: None,
    }
}

fn lawyer(name: &str, specialty: &str) -> NewLawyer {
    NewLawyer {
        name: name.to_string(),
        specialty: specialty.to_string(),
        experience: "5 years".to_string(),
        image: "https://example.com/portrait.jpg".to_string(),
        bio: None,
        email: Some("office@lawfirm.com".to_string()),
        phone: None,
    }
}

#[test]
fn test_appointment_create_defaults() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = AppointmentRepository::new(db.connection());

    let id = repo.create(&booking("A"))?;
    let all = repo.find_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].name, "A");
    assert_eq!(all[0].email, "a@x.com");
    assert_eq!(all[0].date, "Mon");
    assert_eq!(all[0].message, None);
    assert_eq!(all[0].status, AppointmentStatus::Pending);

    let age = chrono::Utc::now().naive_utc() - all[0].created_at;
    assert!(age.num_minutes().abs() < 5);

    Ok(())
}

#[test]
fn test_appointment_create_with_status() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.appointment_repo();

    let id = repo.create(&NewAppointment {
        message: Some("Lease review".into()),
        status: Some(AppointmentStatus::Confirmed),
        ..booking("B")
    })?;
    let stored = repo.find_by_id(id)?.expect("appointment");
    assert_eq!(stored.status, AppointmentStatus::Confirmed);
    assert_eq!(stored.message.as_deref(), Some("Lease review"));

    Ok(())
}

#[test]
fn test_appointment_find_all_newest_first() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.appointment_repo();

    let first = repo.create(&booking("First"))?;
    let second = repo.create(&booking("Second"))?;
    {
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        guard.execute(
            "UPDATE appointments SET created_at = '2020-01-01 09:00:00' WHERE id = ?1",
            [second],
        )?;
    }
    let third = repo.create(&booking("Third"))?;

    let ids: Vec<_> = repo.find_all()?.into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![third, first, second]);

    Ok(())
}

#[test]
fn test_appointment_update_status() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.appointment_repo();

    let id = repo.create(&booking("A"))?;
    let before = repo.find_by_id(id)?.expect("appointment");

    assert_eq!(repo.update_status(id, AppointmentStatus::Confirmed)?, 1);
    let after = repo.find_by_id(id)?.expect("appointment");
    assert_eq!(after.status, AppointmentStatus::Confirmed);
    assert_eq!(after.name, before.name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.date, before.date);
    assert_eq!(after.message, before.message);
    assert_eq!(after.created_at, before.created_at);

    assert_eq!(repo.update_status(id, AppointmentStatus::Completed)?, 1);
    assert_eq!(
        repo.find_by_id(id)?.expect("appointment").status,
        AppointmentStatus::Completed
    );

    Ok(())
}

#[test]
fn test_appointment_rejects_illegal_transition() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.appointment_repo();

    let id = repo.create(&booking("A"))?;
    repo.update_status(id, AppointmentStatus::Cancelled)?;

    let err = repo
        .update_status(id, AppointmentStatus::Confirmed)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<AppointmentError>(),
        Some(&AppointmentError::InvalidStatusTransition {
            current: AppointmentStatus::Cancelled,
            next: AppointmentStatus::Confirmed,
        })
    );
    assert_eq!(
        repo.find_by_id(id)?.expect("appointment").status,
        AppointmentStatus::Cancelled
    );

    let pending = repo.create(&booking("B"))?;
    assert!(
        repo.update_status(pending, AppointmentStatus::Completed)
            .is_err()
    );
    assert_eq!(repo.update_status(pending, AppointmentStatus::Pending)?, 1);

    Ok(())
}

#[test]
fn test_appointment_delete() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.appointment_repo();

    let keep = repo.create(&booking("Keep"))?;
    let id = repo.create(&booking("Gone"))?;
    assert_eq!(repo.delete(id)?, 1);
    assert!(repo.find_by_id(id)?.is_none());
    assert!(repo.find_by_id(keep)?.is_some());

    // ids are never handed out twice
    let next = repo.create(&booking("Next"))?;
    assert!(next > id);

    Ok(())
}

#[test]
fn test_appointment_missing_id_is_noop() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.appointment_repo();
    repo.create(&booking("A"))?;

    assert!(repo.find_by_id(999)?.is_none());
    assert_eq!(repo.update_status(999, AppointmentStatus::Confirmed)?, 0);
    assert_eq!(repo.delete(999)?, 0);
    assert_eq!(repo.find_all()?.len(), 1);

    Ok(())
}

#[test]
fn test_lawyer_seeded_directory() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = LawyerRepository::new(db.connection());

    let all = repo.find_all()?;
    let names: Vec<_> = all.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Emily Johnson",
            "Jane Smith",
            "Michael Lee",
            "Richard Davis",
            "Robert Brown",
            "Sarah Walker",
        ]
    );
    assert!(all.iter().all(|l| l.bio.is_some() && l.email.is_some()));

    Ok(())
}

#[test]
fn test_lawyer_find_by_specialty_exact() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.lawyer_repo();
    repo.add(&lawyer("Aaron Ames", "Family Law"))?;
    repo.add(&lawyer("Bea Bell", "family law"))?;
    repo.add(&lawyer("Cal Cole", "Family Law and Mediation"))?;

    let family = repo.find_by_specialty("Family Law")?;
    let names: Vec<_> = family.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Aaron Ames", "Jane Smith"]);
    assert!(family.iter().all(|l| l.specialty == "Family Law"));

    assert!(repo.find_by_specialty("Tax Law")?.is_empty());

    Ok(())
}

#[test]
fn test_lawyer_crud() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.lawyer_repo();

    let id = repo.add(&lawyer("Dana Doyle", "Tax Law"))?;
    let stored = repo.find_by_id(id)?.expect("lawyer");
    assert_eq!(stored.name, "Dana Doyle");
    assert_eq!(stored.bio, None);
    assert_eq!(stored.email.as_deref(), Some("office@lawfirm.com"));

    let mut changes = NewLawyer::from(stored);
    changes.experience = "6 years".into();
    changes.email = None;
    changes.bio = Some("Tax disputes and planning.".into());
    assert_eq!(repo.update(id, &changes)?, 1);

    let updated = repo.find_by_id(id)?.expect("lawyer");
    assert_eq!(updated.experience, "6 years");
    assert_eq!(updated.email, None);
    assert_eq!(updated.bio.as_deref(), Some("Tax disputes and planning."));
    assert_eq!(updated.id, id);

    assert_eq!(repo.delete(id)?, 1);
    assert!(repo.find_by_id(id)?.is_none());
    assert_eq!(repo.find_all()?.len(), 6);

    Ok(())
}

#[test]
fn test_lawyer_missing_id_is_noop() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.lawyer_repo();

    assert!(repo.find_by_id(999)?.is_none());
    assert_eq!(repo.update(999, &lawyer("Nobody", "None"))?, 0);
    assert_eq!(repo.delete(999)?, 0);
    assert_eq!(repo.find_all()?.len(), 6);

    Ok(())
}
