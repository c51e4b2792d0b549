//! Drag Payloads
//!
//! Every draggable element carries a tagged record of what it is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Column, ColumnId, Task, TaskId};

/// Kind of a draggable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Task,
}

/// Tagged payload attached to a draggable column or task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DragEntity {
    Column { column: Column },
    Task { task: Task },
}

/// Where a dragged task is hovering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Over another task card
    Task(TaskId),
    /// Over a column body
    Column(ColumnId),
}

impl DragEntity {
    pub fn column(column: Column) -> Self {
        DragEntity::Column { column }
    }

    pub fn task(task: Task) -> Self {
        DragEntity::Task { task }
    }

    /// Decode an untyped payload. Anything without a recognised `type` tag
    /// (or with a malformed record) yields `None`.
    pub fn from_payload(value: &Value) -> Option<Self> {
        match value.get("type").and_then(Value::as_str) {
            Some("Column") | Some("Task") => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            DragEntity::Column { .. } => DragKind::Column,
            DragEntity::Task { .. } => DragKind::Task,
        }
    }

    /// Raw identifier of the record. Column and task ids live in separate
    /// spaces, so compare with [`DragEntity::same_entity`].
    pub fn id(&self) -> u32 {
        match self {
            DragEntity::Column { column } => column.id,
            DragEntity::Task { task } => task.id,
        }
    }

    pub fn same_entity(&self, other: &DragEntity) -> bool {
        self.kind() == other.kind() && self.id() == other.id()
    }

    pub fn as_drop_target(&self) -> DropTarget {
        match self {
            DragEntity::Column { column } => DropTarget::Column(column.id),
            DragEntity::Task { task } => DropTarget::Task(task.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_with_task_tag_decodes() {
        let value = json!({
            "type": "Task",
            "task": { "id": 7, "content": "write docs", "board_id": 1, "column_id": 2 }
        });
        let entity = DragEntity::from_payload(&value).expect("tagged task");
        assert_eq!(entity.kind(), DragKind::Task);
        assert_eq!(entity.id(), 7);
    }

    #[test]
    fn test_payload_without_tag_is_rejected() {
        let value = json!({ "task": { "id": 7, "content": "x", "board_id": 1, "column_id": 2 } });
        assert!(DragEntity::from_payload(&value).is_none());

        let value = json!({ "type": "Swimlane", "id": 3 });
        assert!(DragEntity::from_payload(&value).is_none());
    }

    #[test]
    fn test_column_and_task_with_same_id_are_different_entities() {
        let column = DragEntity::column(Column::new(4, "Todo", 1));
        let task = DragEntity::task(Task::new(4, "x", 1, 4));
        assert!(!column.same_entity(&task));
        assert!(column.same_entity(&column.clone()));
    }
}
