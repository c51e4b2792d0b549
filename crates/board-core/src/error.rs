//! Error types for board synchronisation

use thiserror::Error;

use crate::model::ProjectId;

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The remote store rejected or failed a call
    #[error("remote call failed: {0}")]
    Remote(String),

    /// A drag was committed before the board's tasks were loaded
    #[error("no tasks loaded for board {board_id}")]
    TasksNotLoaded { board_id: ProjectId },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BoardError {
    pub fn remote(message: impl Into<String>) -> Self {
        BoardError::Remote(message.into())
    }
}
