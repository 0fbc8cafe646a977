use lawdesk::infra::app_config::load_config;
use rusqlite::Connection;
use std::path::Path;

const TABLES: [&str; 2] = ["appointments", "lawyers"];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let db_path = load_config().database_path();
    run(&db_path)
}

/// Delete every appointment and lawyer row. The lawyer directory is
/// re-seeded the next time the app starts.
pub fn run(db_path: &Path) -> anyhow::Result<()> {
    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to database at: {}", db_path.display());
    let mut conn = Connection::open(db_path)?;

    let tables_exist: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('appointments', 'lawyers')",
        [],
        |row| row.get(0),
    )?;
    if tables_exist < TABLES.len() as i32 {
        println!("Tables do not exist. No reset needed.");
        return Ok(());
    }

    println!("Current record counts:");
    for table in TABLES {
        println!("  {}: {}", table, count(&conn, table)?);
    }

    let tx = conn.transaction()?;
    for table in TABLES {
        let deleted = tx.execute(&format!("DELETE FROM {}", table), [])?;
        log::info!("Cleared {} rows from {}", deleted, table);
    }
    tx.commit()?;

    println!("\nAfter reset:");
    let mut remaining = 0;
    for table in TABLES {
        let rows = count(&conn, table)?;
        remaining += rows;
        println!("  {}: {}", table, rows);
    }

    if remaining == 0 {
        println!("\nDatabase successfully reset! All records have been deleted.");
    } else {
        eprintln!("\nWarning: Some records still exist in the database.");
    }
    println!("Database location: {}", db_path.display());

    Ok(())
}

fn count(conn: &Connection, table: &str) -> rusqlite::Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
}
