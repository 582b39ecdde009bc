//! Todos Endpoints
//!
//! Fetch wrappers for the todo resource plus the [`TodosApi`] client used by
//! the action handlers.

use super::{request, API_BASE_URL};
use crate::actions::TodosApi;
use crate::models::{NewTodo, Todo, TodoUpdate};

/// Load all todos belonging to a user
pub async fn get_todos(user_id: u32) -> Result<Vec<Todo>, String> {
    let url = format!("{API_BASE_URL}/todos?userId={user_id}");
    let result = request("GET", &url, None).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Create a todo; the server assigns the id
pub async fn create_todo(new_todo: &NewTodo) -> Result<Todo, String> {
    let body = serde_json::to_string(new_todo).map_err(|e| e.to_string())?;
    let url = format!("{API_BASE_URL}/todos");
    let result = request("POST", &url, Some(body)).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Apply a batch of partial updates in a single request.
///
/// All-or-nothing: the server either returns every updated todo or fails the
/// whole batch.
pub async fn update_todos(updates: &[TodoUpdate]) -> Result<Vec<Todo>, String> {
    let body = serde_json::to_string(updates).map_err(|e| e.to_string())?;
    let url = format!("{API_BASE_URL}/todos");
    let result = request("PATCH", &url, Some(body)).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Live [`TodosApi`] implementation over the fetch wrappers
#[derive(Clone, Copy)]
pub struct TodosApiClient;

impl TodosApi for TodosApiClient {
    async fn create(&self, new_todo: &NewTodo) -> Result<Todo, String> {
        create_todo(new_todo).await
    }

    async fn update(&self, updates: &[TodoUpdate]) -> Result<Vec<Todo>, String> {
        update_todos(updates).await
    }
}
