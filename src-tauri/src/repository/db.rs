//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

pub(crate) type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper. Starts empty; the connection is installed once
/// migrations have run.
#[derive(Clone, Default)]
pub struct DbState {
    pub conn: SharedConnection,
}

impl DbState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an initialized connection
    pub async fn install(&self, conn: Connection) {
        *self.conn.lock().await = Some(conn);
    }
}

pub(crate) fn not_initialized() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

/// Open (or create) the database at `db_path` and run migrations.
/// `":memory:"` opens a private in-memory database.
pub fn open_database(db_path: &Path) -> DomainResult<Connection> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
    .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Initialize database with path
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = open_database(db_path)?;
    let state = DbState::new();
    state.install(conn).await;
    Ok(state)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(mut rows) = stmt.query([]) else {
        return false;
    };
    while let Ok(Some(row)) = rows.next() {
        if let Ok(name) = row.get::<_, String>(1) {
            if name == column {
                return true;
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'In Progress',
            owner TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER
        );
        CREATE TABLE IF NOT EXISTS board_columns (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            board_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            created_at INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            board_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            column_id INTEGER NOT NULL REFERENCES board_columns(id) ON DELETE CASCADE,
            created_at INTEGER NOT NULL,
            updated_at INTEGER
        );",
    )?;

    // Sequence order of the last batch update
    if !column_exists(conn, "tasks", "seq") {
        conn.execute("ALTER TABLE tasks ADD COLUMN seq INTEGER NOT NULL DEFAULT 0", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add seq: {}", e)))?;
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_columns_board ON board_columns(board_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_board ON tasks(board_id, seq);",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = open_database(Path::new(":memory:")).unwrap();
        run_migrations(&conn).unwrap();
        assert!(column_exists(&conn, "tasks", "seq"));
        assert!(!column_exists(&conn, "tasks", "position"));
    }

    #[test]
    fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.db");
        open_database(&path).unwrap();
        assert!(path.exists());
    }
}
