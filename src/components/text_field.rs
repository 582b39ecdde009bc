//! Text Field Component
//!
//! Controlled title input, disabled while a create request is in flight.

use leptos::prelude::*;

#[component]
pub fn TextField(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="todoapp__new-todo"
            placeholder="What needs to be done?"
            prop:value=move || value.get()
            prop:disabled=move || disabled.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
        />
    }
}
