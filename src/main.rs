//! lawdesk CLI entry point.
//!
//! Terminal front end over the lawyer directory and appointment requests.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use lawdesk::application::DeskService;
use lawdesk::domain::{
    Appointment, AppointmentId, AppointmentStatus, BookingForm, Lawyer, LawyerId, NewLawyer,
};
use lawdesk::infra::app_config::{config_path, load_config};
use lawdesk::infra::db::{Database, StoreHealth};

#[derive(Parser, Debug)]
#[command(name = "lawdesk")]
#[command(version)]
#[command(about = "Lawyer directory and appointment requests for the firm", long_about = None)]
struct Args {
    /// Database file (overrides LAWDESK_DB_PATH and the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse and maintain the lawyer directory
    Lawyers {
        #[command(subcommand)]
        command: LawyerCommand,
    },

    /// Book and administer appointment requests
    Appointments {
        #[command(subcommand)]
        command: AppointmentCommand,
    },

    /// Inspect the local store
    Debug {
        #[command(subcommand)]
        command: DebugCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LawyerCommand {
    /// List lawyers by name
    List {
        /// Only lawyers with exactly this specialty
        #[arg(long)]
        specialty: Option<String>,
    },
    /// Show one lawyer
    Show { id: LawyerId },
    /// Add a lawyer
    Add(LawyerFields),
    /// Replace the details of a lawyer
    Update {
        id: LawyerId,
        #[command(flatten)]
        fields: LawyerFields,
    },
    /// Remove a lawyer
    Delete { id: LawyerId },
}

#[derive(clap::Args, Debug)]
struct LawyerFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    specialty: String,
    /// e.g. "12 years"
    #[arg(long)]
    experience: String,
    /// Portrait URI
    #[arg(long)]
    image: String,
    #[arg(long)]
    bio: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

impl From<LawyerFields> for NewLawyer {
    fn from(fields: LawyerFields) -> Self {
        Self {
            name: fields.name,
            specialty: fields.specialty,
            experience: fields.experience,
            image: fields.image,
            bio: fields.bio,
            email: fields.email,
            phone: fields.phone,
        }
    }
}

#[derive(Subcommand, Debug)]
enum AppointmentCommand {
    /// Request an appointment
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// Preferred date and time, free text
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// List requests, newest first
    List,
    /// Show one request
    Show { id: AppointmentId },
    /// Move a request to pending, confirmed, cancelled or completed
    SetStatus {
        id: AppointmentId,
        status: AppointmentStatus,
    },
    /// Remove a request permanently
    Delete { id: AppointmentId },
}

#[derive(Subcommand, Debug)]
enum DebugCommand {
    /// Table schemas and row counts
    Info,
    /// Dump both tables
    Tables,
    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = load_config();
    let db_path = args.db.clone().unwrap_or_else(|| config.database_path());

    if let Commands::Debug {
        command: DebugCommand::Config,
    } = &args.command
    {
        println!("Config file: {}", config_path().display());
        println!("Database: {}", db_path.display());
        println!("Seed defaults: {}", config.seed_defaults);
        return Ok(());
    }

    let db = Database::initialize(&db_path, config.seed_defaults)?;
    if let StoreHealth::Degraded { reason } = db.health() {
        log::warn!("Running in degraded mode: {}", reason);
        eprintln!("warning: database unavailable, changes will not be saved ({reason})");
    }
    let service = DeskService::new(db);
    let out = Output { json: args.json };

    match args.command {
        Commands::Lawyers { command } => run_lawyers(&service, &out, command).await,
        Commands::Appointments { command } => run_appointments(&service, &out, command).await,
        Commands::Debug { command } => run_debug(&service, &out, command).await,
    }
}

async fn run_lawyers(service: &DeskService, out: &Output, command: LawyerCommand) -> Result<()> {
    match command {
        LawyerCommand::List { specialty } => {
            let lawyers = match specialty {
                Some(specialty) => service.lawyers_by_specialty(specialty).await?,
                None => service.lawyers().await?,
            };
            out.list(&lawyers, print_lawyer)
        }
        LawyerCommand::Show { id } => match service.lawyer(id).await? {
            Some(lawyer) => out.one(&lawyer, print_lawyer),
            None => {
                println!("No lawyer with id {}", id);
                Ok(())
            }
        },
        LawyerCommand::Add(fields) => {
            let id = service.add_lawyer(fields.into()).await?;
            println!("Added lawyer {}", id);
            Ok(())
        }
        LawyerCommand::Update { id, fields } => {
            let updated = service.update_lawyer(id, fields.into()).await?;
            report(updated, &format!("Updated lawyer {}", id), "lawyer", id);
            Ok(())
        }
        LawyerCommand::Delete { id } => {
            let deleted = service.delete_lawyer(id).await?;
            report(deleted, &format!("Deleted lawyer {}", id), "lawyer", id);
            Ok(())
        }
    }
}

async fn run_appointments(
    service: &DeskService,
    out: &Output,
    command: AppointmentCommand,
) -> Result<()> {
    match command {
        AppointmentCommand::Book {
            name,
            email,
            phone,
            date,
            message,
        } => {
            let form = BookingForm {
                name,
                email,
                phone,
                date,
                message,
            };
            let id = service.book(form).await?;
            println!(
                "Appointment request {} submitted. The firm will contact you to confirm.",
                id
            );
            Ok(())
        }
        AppointmentCommand::List => {
            let appointments = service.appointments().await?;
            out.list(&appointments, print_appointment)
        }
        AppointmentCommand::Show { id } => match service.appointment(id).await? {
            Some(appointment) => out.one(&appointment, print_appointment),
            None => {
                println!("No appointment with id {}", id);
                Ok(())
            }
        },
        AppointmentCommand::SetStatus { id, status } => {
            let updated = service.set_appointment_status(id, status).await?;
            report(
                updated,
                &format!("Appointment {} marked as {}", id, status),
                "appointment",
                id,
            );
            Ok(())
        }
        AppointmentCommand::Delete { id } => {
            let deleted = service.delete_appointment(id).await?;
            report(deleted, &format!("Deleted appointment {}", id), "appointment", id);
            Ok(())
        }
    }
}

async fn run_debug(service: &DeskService, out: &Output, command: DebugCommand) -> Result<()> {
    match command {
        DebugCommand::Info => {
            let tables = service.table_overview().await?;
            if out.json {
                println!("{}", serde_json::to_string_pretty(&tables)?);
                return Ok(());
            }
            match service.database().path() {
                Some(path) => println!("Database: {}", path.display()),
                None => println!("Database: in memory"),
            }
            for table in tables {
                println!("\n{} ({} rows)", table.name, table.row_count);
                println!("{}", table.sql);
            }
            Ok(())
        }
        DebugCommand::Tables => {
            let snapshot = service.snapshot().await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
        // Handled before the store is opened.
        DebugCommand::Config => Ok(()),
    }
}

struct Output {
    json: bool,
}

impl Output {
    fn list<T: Serialize>(&self, items: &[T], print: fn(&T)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(items)?);
        } else if items.is_empty() {
            println!("Nothing found");
        } else {
            items.iter().for_each(print);
        }
        Ok(())
    }

    fn one<T: Serialize>(&self, item: &T, print: fn(&T)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(item)?);
        } else {
            print(item);
        }
        Ok(())
    }
}

fn report(affected: usize, done: &str, kind: &str, id: i64) {
    if affected == 0 {
        println!("No {} with id {}", kind, id);
    } else {
        println!("{}", done);
    }
}

fn print_lawyer(lawyer: &Lawyer) {
    println!(
        "#{} {} - {} ({})",
        lawyer.id, lawyer.name, lawyer.specialty, lawyer.experience
    );
    for value in [&lawyer.email, &lawyer.phone].into_iter().flatten() {
        println!("    {}", value);
    }
    if let Some(bio) = &lawyer.bio {
        println!("    {}", bio);
    }
}

fn print_appointment(appointment: &Appointment) {
    println!(
        "#{} [{}] {} <{}> {} - {}",
        appointment.id,
        appointment.status.as_str().to_uppercase(),
        appointment.name,
        appointment.email,
        appointment.phone,
        appointment.date
    );
    if let Some(message) = &appointment.message {
        println!("    {}", message);
    }
    println!("    created {}", appointment.created_at);
    let actions = appointment.status.available_actions();
    if !actions.is_empty() {
        let actions: Vec<_> = actions.iter().map(|s| s.as_str()).collect();
        println!("    next: {}", actions.join(", "));
    }
}
