use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MessageTone {
    #[default]
    Error,
    Success,
}

/// Inline banner for a submission result. Renders nothing for an empty message.
#[component]
pub fn FormMessage(#[props(default)] tone: MessageTone, message: String) -> Element {
    if message.trim().is_empty() {
        return rsx! {};
    }
    let (class, role) = match tone {
        MessageTone::Error => ("form-message error", "alert"),
        MessageTone::Success => ("form-message success", "status"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class, "role": role, "{message}" }
    }
}
