// src/store/mod.rs
//
// The SQLite file behind both binaries. The GUI only ever opens it
// read-only; the loader opens it read-write and owns the schema.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

pub mod schema;

#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Fails if the file does not exist; never creates it.
    pub fn open_read_only(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Creates the file if needed, with foreign keys enforced.
    pub fn open_read_write(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }
}

pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(schema::SCHEMA_SQL)
}

pub fn drop_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(schema::DROP_SQL)
}

/// True when every table the readers need exists.
pub fn has_schema(conn: &Connection) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    for table in schema::TABLES {
        let n: i64 = stmt.query_row([*table], |r| r.get(0))?;
        if n == 0 {
            logd!("Store: table {table} missing");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Row count of one of the known tables.
pub fn count_rows(conn: &Connection, table: &str) -> rusqlite::Result<i64> {
    debug_assert!(schema::TABLES.contains(&table), "unknown table {table}");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
}
