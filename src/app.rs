//! Todoapp Frontend App
//!
//! Root component: wires the store and error context, loads the collection on
//! mount, and lays out header, list, and notification banner.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions::ErrorNotifier;
use crate::api;
use crate::components::{ErrorNotification, TodoHeader, TodoList};
use crate::context::ErrorContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let errors = ErrorContext::new(signal(None), signal(0u32));
    provide_context(errors);

    // Load the authoritative collection on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_todos(api::USER_ID).await {
                Ok(loaded) => {
                    *store.todos().write() = loaded;
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load todos: {err}").into());
                    errors.notify_about_error("Unable to load todos");
                }
            }
        });
    });

    let items_left = move || {
        store
            .todos()
            .read()
            .iter()
            .filter(|todo| !todo.completed)
            .count()
    };

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <TodoHeader />
                <TodoList />

                <footer class="todoapp__footer">
                    <span class="todo-count">
                        {move || format!("{} items left", items_left())}
                    </span>
                </footer>
            </div>

            <ErrorNotification />
        </div>
    }
}
