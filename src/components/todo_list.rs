//! Todo List Component
//!
//! Renders the authoritative collection plus the optimistic placeholder row.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::TempTodo;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="todoapp__main">
            <For
                each=move || store.todos().get()
                // Completion is part of the key so toggles re-render the row
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || match store.temp_todo().get() {
                TempTodo::Provisional(todo) => {
                    Some(view! { <TodoItem todo=todo provisional=true /> })
                }
                TempTodo::Empty => None,
            }}
        </section>
    }
}
