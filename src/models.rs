//! Frontend Models
//!
//! Data structures matching the todos API wire format (camelCase fields).

use serde::{Deserialize, Serialize};

/// Todo resource as served by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
}

/// Payload for creating a todo (the server assigns the id)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
}

/// Partial update applied to a single todo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoPatch {
    pub completed: bool,
}

/// One entry of a bulk update request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoUpdate {
    pub id: u32,
    pub data: TodoPatch,
}

/// Slot for the optimistic placeholder shown while a create is in flight.
///
/// A persisted todo always has a non-zero id; the provisional one is the only
/// id-0 todo ever rendered and never enters the authoritative collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TempTodo {
    #[default]
    Empty,
    Provisional(Todo),
}

impl TempTodo {
    /// Placeholder for optimistic display before the server assigns an id
    pub fn provisional(title: &str) -> Self {
        TempTodo::Provisional(Todo {
            id: 0,
            title: title.to_string(),
            completed: false,
            user_id: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_deserializes_camel_case() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":5,"title":"Buy milk","completed":false,"userId":7}"#)
                .unwrap();
        assert_eq!(todo.id, 5);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.user_id, 7);
    }

    #[test]
    fn new_todo_serializes_camel_case() {
        let payload = NewTodo {
            title: "Buy milk".to_string(),
            completed: false,
            user_id: 10875,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["userId"], 10875);
        assert!(value.get("user_id").is_none());
    }

    #[test]
    fn todo_update_serializes_nested_patch() {
        let update = TodoUpdate {
            id: 3,
            data: TodoPatch { completed: true },
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["data"]["completed"], true);
    }

    #[test]
    fn temp_todo_defaults_to_empty() {
        assert_eq!(TempTodo::default(), TempTodo::Empty);
    }

    #[test]
    fn provisional_todo_has_zero_id() {
        match TempTodo::provisional("Buy milk") {
            TempTodo::Provisional(todo) => {
                assert_eq!(todo.id, 0);
                assert_eq!(todo.title, "Buy milk");
                assert!(!todo.completed);
                assert_eq!(todo.user_id, 0);
            }
            TempTodo::Empty => panic!("expected a provisional todo"),
        }
    }
}
