//! SQLite persistence (infrastructure).

pub mod database;
pub mod inspect;
pub mod repository;
pub mod seed;

pub use database::{Database, StoreHealth};
pub use inspect::TableInfo;
pub use repository::{AppointmentRepository, DbConn, LawyerRepository};
