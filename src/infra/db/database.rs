//! SQLite database setup and connection management for lawdesk
//! Handles opening the store, schema creation and first-run seeding.

use super::inspect::{self, TableInfo};
use super::repository::{AppointmentRepository, DbConn, LawyerRepository, lock};
use super::seed;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const SCHEMA_VERSION: i32 = 1;

/// Outcome of initialization, kept on the handle for callers to inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreHealth {
    Ready,
    /// Initialization failed; reads and writes may fail or may not persist.
    Degraded { reason: String },
}

impl StoreHealth {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Database wrapper that owns the shared SQLite connection
pub struct Database {
    conn: DbConn,
    path: Option<PathBuf>,
    health: StoreHealth,
}

impl Database {
    /// Open the database at `path` for an application start.
    ///
    /// Never gives up on a broken file: failures are logged and recorded as
    /// [`StoreHealth::Degraded`]. When the file cannot be opened at all the
    /// handle falls back to an in-memory store so the app keeps working for
    /// the session. Errors only if SQLite cannot allocate that fallback.
    pub fn initialize(path: &Path, seed_defaults: bool) -> Result<Self> {
        let (conn, path, mut health) = match Self::connect(path) {
            Ok(conn) => (conn, Some(path.to_path_buf()), StoreHealth::Ready),
            Err(err) => {
                log::error!(
                    "Database initialization failed, using in-memory store: {:#}",
                    err
                );
                let conn = Connection::open_in_memory()
                    .context("failed to open fallback in-memory database")?;
                let reason = format!("{:#}", err);
                (conn, None, StoreHealth::Degraded { reason })
            }
        };

        let mut db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
            health: StoreHealth::Ready,
        };

        match db.init(seed_defaults) {
            Ok(()) => log::info!("Database initialized successfully"),
            Err(err) => {
                log::error!("Database initialization failed: {:#}", err);
                if !health.is_degraded() {
                    health = StoreHealth::Degraded {
                        reason: format!("{:#}", err),
                    };
                }
            }
        }
        db.health = health;
        Ok(db)
    }

    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
            health: StoreHealth::Ready,
        };
        db.init(true)?;
        Ok(db)
    }

    /// Create or open the database at a specific path, failing on any error
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Self::connect(path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path.to_path_buf()),
            health: StoreHealth::Ready,
        };
        db.init(true)?;
        Ok(db)
    }

    fn connect(path: &Path) -> Result<Connection> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        Connection::open(path).with_context(|| format!("failed to open {}", path.display()))
    }

    /// Create the schema if absent, then seed the lawyer directory if empty.
    fn init(&self, seed_defaults: bool) -> Result<()> {
        let mut conn = lock(&self.conn)?;

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
        if existing_version > SCHEMA_VERSION {
            anyhow::bail!(
                "database schema version {} is newer than supported version {}",
                existing_version,
                SCHEMA_VERSION
            );
        }

        Self::create_schema(&conn)?;
        if existing_version < SCHEMA_VERSION {
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        if seed_defaults {
            let inserted = seed::seed_lawyers(&mut conn, &seed::default_lawyers())?;
            if inserted > 0 {
                log::info!("Lawyers seeded successfully ({} records)", inserted);
            }
        }
        Ok(())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS appointments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                date TEXT NOT NULL,
                message TEXT,
                status TEXT NOT NULL DEFAULT 'pending' CHECK (status IN ('pending','confirmed','cancelled','completed')),
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS lawyers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                specialty TEXT NOT NULL,
                experience TEXT NOT NULL,
                image TEXT NOT NULL,
                bio TEXT,
                email TEXT,
                phone TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_appointments_created_at ON appointments(created_at);
            CREATE INDEX IF NOT EXISTS idx_lawyers_specialty ON lawyers(specialty);
            "#,
        )?;
        Ok(())
    }

    pub fn health(&self) -> &StoreHealth {
        &self.health
    }

    /// File backing the store, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> DbConn {
        self.conn.clone()
    }

    pub fn appointment_repo(&self) -> AppointmentRepository {
        AppointmentRepository::new(self.connection())
    }

    pub fn lawyer_repo(&self) -> LawyerRepository {
        LawyerRepository::new(self.connection())
    }

    /// Schema and row count of every table.
    pub fn table_overview(&self) -> Result<Vec<TableInfo>> {
        let conn = lock(&self.conn)?;
        inspect::table_overview(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    fn lawyer_count(db: &Database) -> i64 {
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        guard
            .query_row("SELECT COUNT(*) FROM lawyers", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.health(), &StoreHealth::Ready);
        assert!(db.path().is_none());
        assert_eq!(lawyer_count(&db), 6);

        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let version: i32 = guard
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("lawdesk.db");

        let first = Database::initialize(&path, true).unwrap();
        assert_eq!(first.health(), &StoreHealth::Ready);
        assert_eq!(first.path(), Some(path.as_path()));
        assert_eq!(lawyer_count(&first), 6);
        drop(first);

        let second = Database::initialize(&path, true).unwrap();
        assert_eq!(second.health(), &StoreHealth::Ready);
        assert_eq!(lawyer_count(&second), 6);
    }

    #[test]
    fn test_initialize_without_seed() {
        let dir = TempDir::new().unwrap();
        let db = Database::initialize(&dir.path().join("empty.db"), false).unwrap();
        assert_eq!(db.health(), &StoreHealth::Ready);
        assert_eq!(lawyer_count(&db), 0);
    }

    #[test]
    fn test_initialize_falls_back_to_memory() {
        // A regular file cannot be used as the parent directory.
        let blocker = NamedTempFile::new().unwrap();
        let path = blocker.path().join("lawdesk.db");

        let db = Database::initialize(&path, true).unwrap();
        assert!(db.health().is_degraded());
        assert!(db.path().is_none());
        assert_eq!(lawyer_count(&db), 6);

        assert!(Database::open_at(&path).is_err());
    }

    #[test]
    fn test_initialize_reports_newer_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("future.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        }

        assert!(Database::open_at(&path).is_err());

        let db = Database::initialize(&path, true).unwrap();
        match db.health() {
            StoreHealth::Degraded { reason } => assert!(reason.contains("newer")),
            other => panic!("expected degraded store, got {:?}", other),
        }
        assert_eq!(db.path(), Some(path.as_path()));
    }
}
