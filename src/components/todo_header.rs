//! Todo Header Component
//!
//! Title input with submit plus the toggle-all control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::TodosApiClient;
use crate::components::TextField;
use crate::context::ErrorContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoHeader() -> impl IntoView {
    let store = use_app_store();
    let errors = expect_context::<ErrorContext>();

    let (title, set_title) = signal(String::new());
    let (is_handling, set_is_handling) = signal(false);

    // Matches the toggle decision: active iff every todo is completed
    let all_completed = move || store.todos().read().iter().all(|todo| todo.completed);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = title.get();
        spawn_local(async move {
            let attempted =
                actions::submit_todo(&TodosApiClient, &store, &errors, &draft, move |flag| {
                    set_is_handling.set(flag)
                })
                .await;
            if attempted {
                set_title.set(String::new());
            }
        });
    };

    let on_toggle_all = move |_| {
        spawn_local(async move {
            actions::toggle_all(&TodosApiClient, &store, &errors).await;
        });
    };

    view! {
        <header class="todoapp__header">
            <button
                type="button"
                class=move || {
                    if all_completed() {
                        "todoapp__toggle-all active"
                    } else {
                        "todoapp__toggle-all"
                    }
                }
                on:click=on_toggle_all
            ></button>

            <form on:submit=submit>
                <TextField value=title set_value=set_title disabled=is_handling />
            </form>
        </header>
    }
}
