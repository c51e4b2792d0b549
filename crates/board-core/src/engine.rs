//! Drag Reconciliation Engine
//!
//! Turns `start / over / end` gestures into local task reorders and, on
//! completion, a batch sync plan for the remote store.

use crate::entity::{DragEntity, DragKind};
use crate::error::{BoardError, BoardResult};
use crate::model::{ProjectId, Task};
use crate::reorder::reorder;
use crate::store::BoardState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Carries the record captured at drag start
    Dragging(DragEntity),
}

/// Full task sequence to push for a board
#[derive(Debug, Clone, PartialEq)]
pub struct BatchUpdate {
    pub board_id: ProjectId,
    pub tasks: Vec<Task>,
}

/// What to do once a drag has ended
#[derive(Debug, Clone, PartialEq)]
pub enum CommitPlan {
    /// The sequence is still the server snapshot
    Unchanged,
    Sync(BatchUpdate),
}

#[derive(Debug, Clone, Default)]
pub struct DragEngine {
    state: DragState,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Entity currently being dragged
    pub fn active(&self) -> Option<&DragEntity> {
        match &self.state {
            DragState::Dragging(entity) => Some(entity),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// Enter `Dragging` for a tagged entity. Returns false (staying idle)
    /// when the gesture carries no usable payload.
    pub fn drag_start(&mut self, active: Option<&DragEntity>) -> bool {
        match active {
            Some(entity) => {
                log::debug!("drag start: {:?} {}", entity.kind(), entity.id());
                self.state = DragState::Dragging(entity.clone());
                true
            }
            None => false,
        }
    }

    /// Reorder the local sequence for an intermediate hover event.
    /// Returns whether the store received a new sequence.
    ///
    /// Only a task drag in progress reorders, and only for the entity that
    /// started it.
    pub fn drag_over(
        &mut self,
        store: &mut BoardState,
        active: Option<&DragEntity>,
        over: Option<&DragEntity>,
    ) -> bool {
        let (Some(active), Some(over)) = (active, over) else {
            return false;
        };
        let DragState::Dragging(dragged @ DragEntity::Task { task }) = &self.state else {
            return false;
        };
        if !active.same_entity(dragged) || active.same_entity(over) {
            return false;
        }
        let active_id = task.id;
        store.mutate(|tasks| reorder(tasks, active_id, over.as_drop_target()))
    }

    /// Leave `Dragging` and decide whether the board needs a batch sync.
    pub fn drag_end(&mut self, store: &BoardState) -> BoardResult<CommitPlan> {
        let DragState::Dragging(entity) = std::mem::take(&mut self.state) else {
            return Ok(CommitPlan::Unchanged);
        };
        log::debug!("drag end: {:?} {}", entity.kind(), entity.id());

        let tasks = store.tasks().ok_or(BoardError::TasksNotLoaded {
            board_id: store.board_id(),
        })?;
        if !store.has_local_changes() {
            return Ok(CommitPlan::Unchanged);
        }
        Ok(CommitPlan::Sync(BatchUpdate {
            board_id: store.board_id(),
            tasks: tasks.as_ref().clone(),
        }))
    }

    pub fn active_kind(&self) -> Option<DragKind> {
        self.active().map(DragEntity::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn board() -> BoardState {
        let mut state = BoardState::new(1);
        state.replace(
            vec![
                Task::new(1, "T1", 1, 10),
                Task::new(2, "T2", 1, 10),
                Task::new(3, "T3", 1, 20),
            ],
            vec![Column::new(10, "C1", 1), Column::new(20, "C2", 1)],
        );
        state
    }

    fn task_entity(state: &BoardState, id: u32) -> DragEntity {
        DragEntity::task(state.task(id).cloned().unwrap())
    }

    fn column_entity(state: &BoardState, id: u32) -> DragEntity {
        DragEntity::column(state.column(id).cloned().unwrap())
    }

    fn order(state: &BoardState) -> Vec<(u32, u32)> {
        state.tasks().unwrap().iter().map(|t| (t.id, t.column_id)).collect()
    }

    #[test]
    fn test_start_without_payload_stays_idle() {
        let mut engine = DragEngine::new();
        assert!(!engine.drag_start(None));
        assert_eq!(engine.state(), &DragState::Idle);
    }

    #[test]
    fn test_start_with_payload_enters_dragging() {
        let state = board();
        let mut engine = DragEngine::new();
        let active = task_entity(&state, 1);
        assert!(engine.drag_start(Some(&active)));
        assert_eq!(engine.active_kind(), Some(DragKind::Task));
        assert_eq!(engine.active(), Some(&active));
    }

    #[test]
    fn test_over_cross_column_moves_and_reassigns() {
        let mut state = board();
        let mut engine = DragEngine::new();
        let active = task_entity(&state, 1);
        let over = task_entity(&state, 3);
        engine.drag_start(Some(&active));

        assert!(engine.drag_over(&mut state, Some(&active), Some(&over)));
        assert_eq!(order(&state), vec![(2, 10), (1, 20), (3, 20)]);

        let c1: Vec<_> = state.tasks_in_column(10).iter().map(|t| t.id).collect();
        let c2: Vec<_> = state.tasks_in_column(20).iter().map(|t| t.id).collect();
        assert_eq!(c1, vec![2]);
        assert_eq!(c2, vec![1, 3]);
    }

    #[test]
    fn test_over_uses_current_sequence_not_stale_payload() {
        let mut state = board();
        let mut engine = DragEngine::new();
        // Payload captured at drag start still says column 10.
        let active = task_entity(&state, 1);
        engine.drag_start(Some(&active));
        let done = column_entity(&state, 20);
        engine.drag_over(&mut state, Some(&active), Some(&done));

        // Now in column 20, hovering T3 is a same-column move.
        let over = task_entity(&state, 3);
        assert!(engine.drag_over(&mut state, Some(&active), Some(&over)));
        assert_eq!(order(&state), vec![(2, 10), (3, 20), (1, 20)]);
    }

    #[test]
    fn test_over_column_keeps_position() {
        let mut state = board();
        let mut engine = DragEngine::new();
        let active = task_entity(&state, 2);
        engine.drag_start(Some(&active));

        let done = column_entity(&state, 20);
        assert!(engine.drag_over(&mut state, Some(&active), Some(&done)));
        assert_eq!(order(&state), vec![(1, 10), (2, 20), (3, 20)]);
    }

    #[test]
    fn test_over_self_or_untagged_is_noop() {
        let mut state = board();
        let mut engine = DragEngine::new();
        let active = task_entity(&state, 1);
        engine.drag_start(Some(&active));

        assert!(!engine.drag_over(&mut state, Some(&active), Some(&active)));
        assert!(!engine.drag_over(&mut state, Some(&active), None));
        assert!(!engine.drag_over(&mut state, None, Some(&active)));
        assert!(!state.has_local_changes());
    }

    #[test]
    fn test_column_drag_never_reorders() {
        let mut state = board();
        let mut engine = DragEngine::new();
        let active = column_entity(&state, 10);
        engine.drag_start(Some(&active));

        let task = task_entity(&state, 3);
        let other = column_entity(&state, 20);
        assert!(!engine.drag_over(&mut state, Some(&active), Some(&task)));
        assert!(!engine.drag_over(&mut state, Some(&active), Some(&other)));
        assert_eq!(engine.drag_end(&state), Ok(CommitPlan::Unchanged));
    }

    #[test]
    fn test_end_without_changes_plans_nothing() {
        let state = board();
        let mut engine = DragEngine::new();
        engine.drag_start(Some(&task_entity(&state, 1)));
        assert_eq!(engine.drag_end(&state), Ok(CommitPlan::Unchanged));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_end_after_reorder_plans_full_sequence() {
        let mut state = board();
        let mut engine = DragEngine::new();
        let active = task_entity(&state, 2);
        engine.drag_start(Some(&active));
        let over = task_entity(&state, 1);
        engine.drag_over(&mut state, Some(&active), Some(&over));

        let CommitPlan::Sync(update) = engine.drag_end(&state).unwrap() else {
            panic!("expected a sync plan");
        };
        assert_eq!(update.board_id, 1);
        let ids: Vec<_> = update.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(engine.state(), &DragState::Idle);
    }

    #[test]
    fn test_end_with_unloaded_tasks_is_an_error() {
        let mut state = BoardState::new(4);
        state.replace_columns(vec![Column::new(10, "C1", 4)]);
        let mut engine = DragEngine::new();
        engine.drag_start(Some(&column_entity(&state, 10)));

        assert_eq!(
            engine.drag_end(&state),
            Err(BoardError::TasksNotLoaded { board_id: 4 })
        );
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_over_while_idle_is_ignored() {
        let mut state = board();
        let mut engine = DragEngine::new();
        let t1 = task_entity(&state, 1);
        let t3 = task_entity(&state, 3);

        assert!(!engine.drag_over(&mut state, Some(&t1), Some(&t3)));
        assert!(!state.has_local_changes());
        assert_eq!(engine.state(), &DragState::Idle);
    }

    #[test]
    fn test_end_while_idle_plans_nothing() {
        let mut state = board();
        // Leftover local edit from an earlier gesture.
        state.mutate(|tasks| reorder(tasks, 2, crate::entity::DropTarget::Task(1)));
        assert!(state.has_local_changes());

        let mut engine = DragEngine::new();
        assert_eq!(engine.drag_end(&state), Ok(CommitPlan::Unchanged));
    }

    #[test]
    fn test_over_for_a_different_task_is_ignored() {
        let mut state = board();
        let mut engine = DragEngine::new();
        engine.drag_start(Some(&task_entity(&state, 1)));

        let stray = task_entity(&state, 2);
        let over = task_entity(&state, 3);
        assert!(!engine.drag_over(&mut state, Some(&stray), Some(&over)));
        assert!(!state.has_local_changes());
    }
}
