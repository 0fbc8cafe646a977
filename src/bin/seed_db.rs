use lawdesk::domain::{AppointmentStatus, NewAppointment};
use lawdesk::infra::app_config::load_config;
use lawdesk::infra::db::Database;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let db_path = load_config().database_path();
    run(&db_path)
}

/// Sample requests covering every status the admin list renders.
fn sample_appointments() -> Vec<NewAppointment> {
    let sample = |name: &str,
                  email: &str,
                  date: &str,
                  message: Option<&str>,
                  status: AppointmentStatus| NewAppointment {
        name: name.to_string(),
        email: email.to_string(),
        phone: "(555) 010-0000".to_string(),
        date: date.to_string(),
        message: message.map(str::to_string),
        status: Some(status),
    };

    vec![
        sample(
            "Olivia Carter",
            "olivia.carter@example.com",
            "Monday 10:00 AM",
            Some("Question about a custody arrangement."),
            AppointmentStatus::Pending,
        ),
        sample(
            "Marcus Reid",
            "marcus.reid@example.com",
            "Tuesday 2:30 PM",
            Some("Need help reviewing a commercial lease."),
            AppointmentStatus::Confirmed,
        ),
        sample(
            "Priya Natarajan",
            "priya.n@example.com",
            "Next Friday morning",
            None,
            AppointmentStatus::Cancelled,
        ),
        sample(
            "Tom Alvarez",
            "tom.alvarez@example.com",
            "March 3, 9:00 AM",
            Some("Work visa renewal."),
            AppointmentStatus::Completed,
        ),
    ]
}

/// Open the store (which seeds the lawyer directory when empty) and add
/// sample appointment requests if there are none yet.
pub fn run(db_path: &Path) -> anyhow::Result<()> {
    println!("Connecting to database at: {}", db_path.display());
    let db = Database::open_at(db_path)?;

    let appointments = db.appointment_repo();
    if appointments.find_all()?.is_empty() {
        for appointment in sample_appointments() {
            let id = appointments.create(&appointment)?;
            println!("Inserted appointment {}: {}", id, appointment.name);
        }
    } else {
        println!("Appointments already present, skipping samples.");
    }

    println!("Lawyers: {}", db.lawyer_repo().find_all()?.len());
    println!("Appointments: {}", appointments.find_all()?.len());
    Ok(())
}
