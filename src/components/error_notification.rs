//! Error Notification Component
//!
//! Banner over the shared error context, with manual dismiss and a 3s
//! auto-dismiss that ignores messages newer than the one it was armed for.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::ErrorContext;

const AUTO_DISMISS_MS: u32 = 3_000;

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let errors = expect_context::<ErrorContext>();

    Effect::new(move |_| {
        if errors.message.get().is_some() {
            let armed_for = errors.current_version();
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                if errors.current_version() == armed_for {
                    errors.dismiss();
                }
            });
        }
    });

    view! {
        <Show when=move || errors.message.get().is_some()>
            <div class="notification is-danger">
                <button
                    type="button"
                    class="delete"
                    on:click=move |_| errors.dismiss()
                ></button>
                {move || errors.message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
