//! Task Reordering
//!
//! Pure functions computing the next task sequence for a hover event.
//! Inputs are never mutated; a changed arrangement is a new `Vec`.

use crate::entity::DropTarget;
use crate::model::{Task, TaskId};

/// Move the element at `from` to `to`, sortable-list style.
///
/// A negative `to` counts back from the length of the original slice and a
/// destination past the end lands at the end.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: isize) -> Vec<T> {
    move_owned(items.to_vec(), from, to)
}

fn move_owned<T>(mut items: Vec<T>, from: usize, to: isize) -> Vec<T> {
    if from >= items.len() {
        return items;
    }
    let len = items.len() as isize;
    let dest = if to < 0 { len + to } else { to };
    let item = items.remove(from);
    let dest = dest.clamp(0, items.len() as isize) as usize;
    items.insert(dest, item);
    items
}

/// Compute the sequence after hovering task `active_id` over `target`.
///
/// Returns `None` when nothing changes: hovering over itself, or either id
/// is not part of the sequence.
pub fn reorder(tasks: &[Task], active_id: TaskId, target: DropTarget) -> Option<Vec<Task>> {
    let active_index = tasks.iter().position(|t| t.id == active_id)?;

    match target {
        DropTarget::Task(over_id) => {
            if over_id == active_id {
                return None;
            }
            let over_index = tasks.iter().position(|t| t.id == over_id)?;
            let over_column = tasks[over_index].column_id;

            if tasks[active_index].column_id != over_column {
                // Lands one slot before the hovered task's original index.
                let mut next = tasks.to_vec();
                next[active_index].column_id = over_column;
                Some(move_owned(next, active_index, over_index as isize - 1))
            } else {
                Some(array_move(tasks, active_index, over_index as isize))
            }
        }
        DropTarget::Column(column_id) => {
            let mut next = tasks.to_vec();
            next[active_index].column_id = column_id;
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    /// Board with C1 = [T1, T2], C2 = [T3]
    fn two_columns() -> Vec<Task> {
        vec![
            Task::new(1, "T1", 1, 10),
            Task::new(2, "T2", 1, 10),
            Task::new(3, "T3", 1, 20),
        ]
    }

    #[test]
    fn test_array_move_forward_and_back() {
        assert_eq!(array_move(&[1, 2, 3, 4], 0, 2), vec![2, 3, 1, 4]);
        assert_eq!(array_move(&[1, 2, 3, 4], 3, 1), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_array_move_negative_destination_counts_from_original_length() {
        // -1 resolves to index 3 of the 4-element input, which is the end
        // once the element has been taken out.
        assert_eq!(array_move(&[1, 2, 3, 4], 1, -1), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_array_move_clamps_and_ignores_bad_source() {
        assert_eq!(array_move(&[1, 2, 3], 0, 10), vec![2, 3, 1]);
        assert_eq!(array_move(&[1, 2, 3], 5, 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_same_column_is_a_single_array_move() {
        let tasks = vec![
            Task::new(1, "a", 1, 10),
            Task::new(2, "b", 1, 10),
            Task::new(3, "c", 1, 10),
            Task::new(4, "d", 1, 10),
        ];
        let next = reorder(&tasks, 1, DropTarget::Task(3)).unwrap();
        assert_eq!(ids(&next), vec![2, 3, 1, 4]);
        assert!(next.iter().all(|t| t.column_id == 10));

        let next = reorder(&tasks, 4, DropTarget::Task(2)).unwrap();
        assert_eq!(ids(&next), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_cross_column_lands_before_target_original_index() {
        let tasks = two_columns();
        let next = reorder(&tasks, 1, DropTarget::Task(3)).unwrap();

        // indexOf(T3) == 2, so T1 is spliced in at index 1.
        assert_eq!(ids(&next), vec![2, 1, 3]);
        assert_eq!(next[1].column_id, 20);
        assert_eq!(next[0].column_id, 10);
    }

    #[test]
    fn test_cross_column_onto_first_task_wraps_to_end() {
        let tasks = vec![
            Task::new(3, "T3", 1, 20),
            Task::new(1, "T1", 1, 10),
            Task::new(2, "T2", 1, 10),
        ];
        let next = reorder(&tasks, 1, DropTarget::Task(3)).unwrap();
        assert_eq!(ids(&next), vec![3, 2, 1]);
        assert_eq!(next[2].column_id, 20);
    }

    #[test]
    fn test_drop_on_column_changes_only_column() {
        let tasks = two_columns();
        let next = reorder(&tasks, 2, DropTarget::Column(20)).unwrap();
        assert_eq!(ids(&next), ids(&tasks));
        assert_eq!(next[1].column_id, 20);
        assert_eq!(next[1].content, "T2");
        assert_eq!(next[0], tasks[0]);
        assert_eq!(next[2], tasks[2]);
    }

    #[test]
    fn test_noop_cases() {
        let tasks = two_columns();
        assert!(reorder(&tasks, 1, DropTarget::Task(1)).is_none());
        assert!(reorder(&tasks, 99, DropTarget::Task(1)).is_none());
        assert!(reorder(&tasks, 1, DropTarget::Task(99)).is_none());
        assert!(reorder(&tasks, 99, DropTarget::Column(10)).is_none());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let tasks = two_columns();
        let before = tasks.clone();
        let _ = reorder(&tasks, 1, DropTarget::Task(3));
        assert_eq!(tasks, before);
    }
}
