//! Read-only introspection of the store, for debugging.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    pub name: String,
    /// `CREATE TABLE` statement as stored by SQLite
    pub sql: String,
    pub row_count: i64,
}

pub fn table_overview(conn: &Connection) -> Result<Vec<TableInfo>> {
    let mut stmt = conn.prepare(
        "SELECT name, sql FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let tables = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut overview = Vec::with_capacity(tables.len());
    for (name, sql) in tables {
        let quoted = name.replace('"', "\"\"");
        let row_count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", quoted),
            [],
            |row| row.get(0),
        )?;
        overview.push(TableInfo {
            name,
            sql: sql.unwrap_or_default(),
            row_count,
        });
    }
    Ok(overview)
}

#[cfg(test)]
mod tests {
    use crate::infra::db::Database;

    #[test]
    fn test_table_overview() {
        let db = Database::open_in_memory().unwrap();
        db.appointment_repo()
            .create(&crate::domain::NewAppointment {
                name: "A".into(),
                email: "a@x.com".into(),
                phone: "555".into(),
                date: "Mon".into(),
                ..Default::default()
            })
            .unwrap();

        let overview = db.table_overview().unwrap();
        let names: Vec<_> = overview.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["appointments", "lawyers"]);

        assert_eq!(overview[0].row_count, 1);
        assert_eq!(overview[1].row_count, 6);
        assert!(overview[1].sql.contains("specialty TEXT NOT NULL"));
    }
}
