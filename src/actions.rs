//! Todo Actions
//!
//! The submit and toggle-all flows, written against collaborator traits so the
//! contracts can be exercised without a browser. The live app plugs in the
//! fetch-backed client, the reactive store, and the error context.

use crate::api::USER_ID;
use crate::models::{NewTodo, TempTodo, Todo, TodoPatch, TodoUpdate};

pub const ERR_EMPTY_TITLE: &str = "Title can't be empty";
pub const ERR_ADD_TODO: &str = "Unable to add a todo";
pub const ERR_UPDATE_TODOS: &str = "Unable to update todos";

/// Remote todos API (create + bulk update)
pub trait TodosApi {
    async fn create(&self, new_todo: &NewTodo) -> Result<Todo, String>;
    async fn update(&self, updates: &[TodoUpdate]) -> Result<Vec<Todo>, String>;
}

/// Mutators and counts over the authoritative todo collection
pub trait TodoStore {
    fn add_todo(&self, todo: Todo);
    /// Replace todos matching by id, leaving the rest untouched
    fn update_todos(&self, updated: Vec<Todo>);
    fn set_handling_todo_ids(&self, ids: Vec<u32>);
    fn set_temp_todo(&self, slot: TempTodo);
    fn all_todos(&self) -> Vec<Todo>;
    fn size(&self) -> usize;
    fn count_completed(&self) -> usize;
}

/// Fire-and-forget sink for user-visible error messages
pub trait ErrorNotifier {
    fn notify_about_error(&self, message: &str);
}

/// Submit a draft title as a new todo.
///
/// An empty draft is rejected locally with a notification and no other
/// mutation. Otherwise a provisional todo (id 0) is published for optimistic
/// display and `in_flight` is raised while the create request runs. Whatever
/// the outcome, the provisional slot and the in-flight flag are cleared.
///
/// Returns `true` when a request cycle ran, so the caller knows to reset the
/// draft; the draft survives a validation rejection.
pub async fn submit_todo(
    api: &impl TodosApi,
    store: &impl TodoStore,
    errors: &impl ErrorNotifier,
    draft: &str,
    in_flight: impl Fn(bool),
) -> bool {
    if draft.is_empty() {
        errors.notify_about_error(ERR_EMPTY_TITLE);
        return false;
    }

    store.set_temp_todo(TempTodo::provisional(draft));
    in_flight(true);

    let payload = NewTodo {
        title: draft.to_string(),
        completed: false,
        user_id: USER_ID,
    };
    match api.create(&payload).await {
        Ok(created) => store.add_todo(created),
        Err(_) => errors.notify_about_error(ERR_ADD_TODO),
    }

    store.set_temp_todo(TempTodo::Empty);
    in_flight(false);
    true
}

/// Decide the bulk-toggle targets.
///
/// When every todo is completed the whole collection is scheduled back to
/// incomplete; otherwise only the incomplete todos are scheduled to complete,
/// so a mixed list converges toward "everything done".
pub fn prepare_toggle_updates(todos: &[Todo]) -> Vec<TodoUpdate> {
    let count_completed = todos.iter().filter(|todo| todo.completed).count();

    if count_completed == todos.len() {
        todos
            .iter()
            .map(|todo| TodoUpdate {
                id: todo.id,
                data: TodoPatch { completed: false },
            })
            .collect()
    } else {
        todos
            .iter()
            .filter(|todo| !todo.completed)
            .map(|todo| TodoUpdate {
                id: todo.id,
                data: TodoPatch { completed: true },
            })
            .collect()
    }
}

/// Bulk-toggle the collection per [`prepare_toggle_updates`].
///
/// Affected ids are registered as "handling" before the request so other rows
/// can render busy, and the set is emptied again whatever the outcome. There
/// is no in-flight guard here; overlapping calls are possible and the last
/// response to arrive wins.
pub async fn toggle_all(api: &impl TodosApi, store: &impl TodoStore, errors: &impl ErrorNotifier) {
    let updates = prepare_toggle_updates(&store.all_todos());
    send_updates(api, store, errors, updates).await;
}

/// Toggle a single todo through the same bulk-update contract
pub async fn toggle_todo(
    api: &impl TodosApi,
    store: &impl TodoStore,
    errors: &impl ErrorNotifier,
    id: u32,
    completed: bool,
) {
    let updates = vec![TodoUpdate {
        id,
        data: TodoPatch { completed },
    }];
    send_updates(api, store, errors, updates).await;
}

async fn send_updates(
    api: &impl TodosApi,
    store: &impl TodoStore,
    errors: &impl ErrorNotifier,
    updates: Vec<TodoUpdate>,
) {
    store.set_handling_todo_ids(updates.iter().map(|update| update.id).collect());

    match api.update(&updates).await {
        Ok(updated) => store.update_todos(updated),
        Err(_) => errors.notify_about_error(ERR_UPDATE_TODOS),
    }

    store.set_handling_todo_ids(Vec::new());
}
