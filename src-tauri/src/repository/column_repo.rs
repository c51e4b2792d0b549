//! Column Repository

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::{not_initialized, SharedConnection};
use super::traits::BoardScopedRepository;
use crate::domain::{Column, DomainError, DomainResult};

pub struct ColumnRepository {
    conn: SharedConnection,
}

impl ColumnRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Add a column at the end of the board
    pub async fn create(&self, name: &str, board_id: u32) -> DomainResult<Column> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Column name is required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let board_exists = conn
            .query_row("SELECT 1 FROM projects WHERE id = ?", params![board_id], |_| Ok(()))
            .optional()?
            .is_some();
        if !board_exists {
            return Err(DomainError::NotFound(format!("Project {} not found", board_id)));
        }

        conn.execute(
            "INSERT INTO board_columns (name, board_id, created_at) VALUES (?, ?, ?)",
            params![name, board_id, chrono::Utc::now().timestamp_millis()],
        )?;
        Ok(Column::new(conn.last_insert_rowid() as u32, name, board_id))
    }
}

pub(super) fn find_column(conn: &Connection, id: u32) -> DomainResult<Option<Column>> {
    let column = conn
        .query_row(
            "SELECT id, name, board_id FROM board_columns WHERE id = ?",
            params![id],
            row_to_column,
        )
        .optional()?;
    Ok(column)
}

#[async_trait]
impl BoardScopedRepository<Column> for ColumnRepository {
    async fn list_for_board(&self, board_id: u32) -> DomainResult<Vec<Column>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare("SELECT id, name, board_id FROM board_columns WHERE board_id = ? ORDER BY id")?;
        let columns = stmt
            .query_map(params![board_id], row_to_column)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Column>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        find_column(conn, id)
    }

    /// Tasks of the column go with it (foreign key cascade)
    async fn delete(&self, id: u32) -> DomainResult<Column> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let column = find_column(conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", id)))?;
        conn.execute("DELETE FROM board_columns WHERE id = ?", params![id])?;
        Ok(column)
    }
}

fn row_to_column(row: &Row<'_>) -> rusqlite::Result<Column> {
    Ok(Column {
        id: row.get(0)?,
        name: row.get(1)?,
        board_id: row.get(2)?,
    })
}
