use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{FormMessage, MessageTone};

/// Outcome banner for a one-off action (approve, delete, save).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notice {
    pub tone: MessageTone,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { tone: MessageTone::Success, message: message.into() }
    }

    pub fn error(err: &AppError) -> Self {
        Self { tone: MessageTone::Error, message: err.message.clone() }
    }

    /// Success text for `Ok`, the error message otherwise.
    pub fn from_result<T>(result: &Result<T, AppError>, success: impl FnOnce(&T) -> String) -> Self {
        match result {
            Ok(value) => Self::success(success(value)),
            Err(err) => Self::error(err),
        }
    }
}

#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    match notice() {
        Some(n) => rsx! { FormMessage { tone: n.tone, message: n.message } },
        None => rsx! {},
    }
}
