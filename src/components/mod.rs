//! UI Components
//!
//! Reusable Leptos components.

mod error_notification;
mod text_field;
mod todo_header;
mod todo_item;
mod todo_list;

pub use error_notification::ErrorNotification;
pub use text_field::TextField;
pub use todo_header::TodoHeader;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
