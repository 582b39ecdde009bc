//! Application Context
//!
//! Shared error notification state provided via Leptos Context API.

use leptos::prelude::*;

use crate::actions::ErrorNotifier;

/// Process-wide sink for user-visible error messages
#[derive(Clone, Copy)]
pub struct ErrorContext {
    /// Current error message, if any - read
    pub message: ReadSignal<Option<String>>,
    set_message: WriteSignal<Option<String>>,
    /// Bumped on every notification so stale auto-dismiss timers can tell
    version: ReadSignal<u32>,
    set_version: WriteSignal<u32>,
}

impl ErrorContext {
    pub fn new(
        message: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            message: message.0,
            set_message: message.1,
            version: version.0,
            set_version: version.1,
        }
    }

    /// Clear the current message
    pub fn dismiss(&self) {
        self.set_message.set(None);
    }

    pub fn current_version(&self) -> u32 {
        self.version.get_untracked()
    }
}

impl ErrorNotifier for ErrorContext {
    fn notify_about_error(&self, message: &str) {
        self.set_version.update(|v| *v += 1);
        self.set_message.set(Some(message.to_string()));
    }
}
