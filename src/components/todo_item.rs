//! Todo Item Component
//!
//! Single todo row with a completion checkbox. Also renders the provisional
//! placeholder while a create request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::TodosApiClient;
use crate::context::ErrorContext;
use crate::models::Todo;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoItem(todo: Todo, #[prop(default = false)] provisional: bool) -> impl IntoView {
    let store = use_app_store();
    let errors = expect_context::<ErrorContext>();

    let id = todo.id;
    let completed = todo.completed;
    let busy = move || provisional || store.handling_todo_ids().read().contains(&id);

    let on_toggle = move |_| {
        spawn_local(async move {
            actions::toggle_todo(&TodosApiClient, &store, &errors, id, !completed).await;
        });
    };

    view! {
        <div class=move || if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    prop:disabled=move || busy()
                    on:change=on_toggle
                />
            </label>

            <span class="todo__title">{todo.title.clone()}</span>

            <Show when=busy>
                <div class="todo__loader"></div>
            </Show>
        </div>
    }
}
