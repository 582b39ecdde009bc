//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::TodoStore;
use crate::models::{TempTodo, Todo};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative todo collection
    pub todos: Vec<Todo>,
    /// Ids currently subject to an in-flight bulk update
    pub handling_todo_ids: Vec<u32>,
    /// Optimistic placeholder slot for a create in flight
    pub temp_todo: TempTodo,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace todos matching by id, leaving the rest untouched
pub fn merge_updated(todos: &mut Vec<Todo>, updated: Vec<Todo>) {
    for new_todo in updated {
        if let Some(todo) = todos.iter_mut().find(|todo| todo.id == new_todo.id) {
            *todo = new_todo;
        }
    }
}

impl TodoStore for AppStore {
    fn add_todo(&self, todo: Todo) {
        self.todos().write().push(todo);
    }

    fn update_todos(&self, updated: Vec<Todo>) {
        let todos = self.todos();
        let mut todos = todos.write();
        merge_updated(&mut todos, updated);
    }

    fn set_handling_todo_ids(&self, ids: Vec<u32>) {
        *self.handling_todo_ids().write() = ids;
    }

    fn set_temp_todo(&self, slot: TempTodo) {
        *self.temp_todo().write() = slot;
    }

    fn all_todos(&self) -> Vec<Todo> {
        self.todos().get_untracked()
    }

    fn size(&self) -> usize {
        self.todos().read_untracked().len()
    }

    fn count_completed(&self) -> usize {
        self.todos()
            .read_untracked()
            .iter()
            .filter(|todo| todo.completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
            user_id: 1,
        }
    }

    #[test]
    fn merge_replaces_matching_ids_in_place() {
        let mut todos = vec![
            todo(1, "a", false),
            todo(2, "b", false),
            todo(3, "c", true),
        ];

        merge_updated(&mut todos, vec![todo(2, "b", true), todo(3, "c", false)]);

        assert_eq!(todos[0], todo(1, "a", false));
        assert_eq!(todos[1], todo(2, "b", true));
        assert_eq!(todos[2], todo(3, "c", false));
    }

    #[test]
    fn merge_ignores_unknown_ids() {
        let mut todos = vec![todo(1, "a", false)];

        merge_updated(&mut todos, vec![todo(9, "ghost", true)]);

        assert_eq!(todos, vec![todo(1, "a", false)]);
    }

    #[test]
    fn merge_with_empty_update_is_noop() {
        let mut todos = vec![todo(1, "a", false)];

        merge_updated(&mut todos, Vec::new());

        assert_eq!(todos.len(), 1);
    }
}
