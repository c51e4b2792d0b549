//! Board State Store
//!
//! Client-side ordered columns and tasks for one board. Local drag edits
//! land here first; every server snapshot replaces them wholesale.
//!
//! Sequences are held as `Arc<Vec<_>>` so "has this changed since the last
//! fetch" is a pointer comparison against the server snapshot.

use std::sync::Arc;

use crate::model::{Column, ColumnId, ProjectId, Task, TaskId};

#[derive(Debug, Clone)]
pub struct BoardState {
    board_id: ProjectId,
    columns: Option<Arc<Vec<Column>>>,
    tasks: Option<Arc<Vec<Task>>>,
    /// Task sequence exactly as last received from the server
    server_tasks: Option<Arc<Vec<Task>>>,
}

impl BoardState {
    pub fn new(board_id: ProjectId) -> Self {
        Self {
            board_id,
            columns: None,
            tasks: None,
            server_tasks: None,
        }
    }

    pub fn board_id(&self) -> ProjectId {
        self.board_id
    }

    /// Seed or replace both collections from a fresh fetch
    pub fn replace(&mut self, tasks: Vec<Task>, columns: Vec<Column>) {
        self.replace_tasks(tasks);
        self.replace_columns(columns);
    }

    /// Replace the task sequence. Pending local edits are discarded.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        let snapshot = Arc::new(tasks);
        log::debug!(
            "board {}: replacing tasks with {} from server",
            self.board_id,
            snapshot.len()
        );
        self.server_tasks = Some(Arc::clone(&snapshot));
        self.tasks = Some(snapshot);
    }

    pub fn replace_columns(&mut self, columns: Vec<Column>) {
        self.columns = Some(Arc::new(columns));
    }

    /// Apply a pure transformation to the task sequence.
    ///
    /// `updater` returns `None` to leave the sequence (and its identity)
    /// untouched. Returns whether a new sequence was installed.
    pub fn mutate<F>(&mut self, updater: F) -> bool
    where
        F: FnOnce(&[Task]) -> Option<Vec<Task>>,
    {
        let Some(current) = self.tasks.as_ref() else {
            return false;
        };
        match updater(current) {
            Some(next) => {
                self.tasks = Some(Arc::new(next));
                true
            }
            None => false,
        }
    }

    pub fn tasks(&self) -> Option<&Arc<Vec<Task>>> {
        self.tasks.as_ref()
    }

    pub fn server_tasks(&self) -> Option<&Arc<Vec<Task>>> {
        self.server_tasks.as_ref()
    }

    pub fn columns(&self) -> Option<&Arc<Vec<Column>>> {
        self.columns.as_ref()
    }

    /// Both queries have produced a snapshot
    pub fn is_loaded(&self) -> bool {
        self.tasks.is_some() && self.columns.is_some()
    }

    /// The local sequence is no longer the one the server sent
    pub fn has_local_changes(&self) -> bool {
        match (&self.tasks, &self.server_tasks) {
            (Some(local), Some(server)) => !Arc::ptr_eq(local, server),
            (None, None) => false,
            _ => true,
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.as_ref()?.iter().find(|t| t.id == id)
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.as_ref()?.iter().find(|c| c.id == id)
    }

    /// Tasks of one column in sequence order
    pub fn tasks_in_column(&self, column_id: ColumnId) -> Vec<Task> {
        self.tasks
            .as_ref()
            .map(|tasks| {
                tasks
                    .iter()
                    .filter(|t| t.column_id == column_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> BoardState {
        let mut state = BoardState::new(1);
        state.replace(
            vec![
                Task::new(1, "a", 1, 10),
                Task::new(2, "b", 1, 20),
                Task::new(3, "c", 1, 10),
            ],
            vec![Column::new(10, "Todo", 1), Column::new(20, "Done", 1)],
        );
        state
    }

    #[test]
    fn test_new_state_is_not_loaded() {
        let state = BoardState::new(5);
        assert!(!state.is_loaded());
        assert!(!state.has_local_changes());
        assert!(state.tasks_in_column(10).is_empty());
    }

    #[test]
    fn test_partition_preserves_sequence_order() {
        let state = seeded();
        let todo: Vec<_> = state.tasks_in_column(10).iter().map(|t| t.id).collect();
        assert_eq!(todo, vec![1, 3]);
        assert_eq!(state.tasks_in_column(20).len(), 1);
    }

    #[test]
    fn test_mutate_none_keeps_identity() {
        let mut state = seeded();
        assert!(!state.mutate(|_| None));
        assert!(!state.has_local_changes());
    }

    #[test]
    fn test_mutate_some_installs_new_sequence() {
        let mut state = seeded();
        let original = Arc::clone(state.tasks().unwrap());

        assert!(state.mutate(|tasks| Some(tasks.to_vec())));
        assert!(state.has_local_changes());
        // The previous sequence is untouched.
        assert_eq!(*original, **state.server_tasks().unwrap());
    }

    #[test]
    fn test_replace_discards_local_only_tasks() {
        let mut state = seeded();
        state.mutate(|tasks| {
            let mut next = tasks.to_vec();
            next.push(Task::new(99, "local only", 1, 10));
            Some(next)
        });

        state.replace_tasks(vec![Task::new(1, "a", 1, 10), Task::new(2, "b", 1, 20)]);

        let ids: Vec<_> = state.tasks().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(state.task(99).is_none());
        assert!(!state.has_local_changes());
    }

    #[test]
    fn test_mutate_before_load_is_ignored() {
        let mut state = BoardState::new(1);
        assert!(!state.mutate(|_| Some(Vec::new())));
        assert!(state.tasks().is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let state = seeded();
        assert_eq!(state.task(2).map(|t| t.column_id), Some(20));
        assert_eq!(state.column(20).map(|c| c.name.as_str()), Some("Done"));
        assert!(state.column(30).is_none());
    }
}
