use dioxus::prelude::*;

use crate::Label;

/// Native file picker. The caller reads the files from the change event.
#[component]
pub fn FileInput(
    label: String,
    name: String,
    #[props(default)] accept: String,
    on_change: EventHandler<FormEvent>,
    /// Name of the file currently attached, if any.
    selected: Option<String>,
    error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "file-input",
            Label { html_for: name.clone(), "{label}" }
            input {
                r#type: "file",
                id: "{name}",
                name: "{name}",
                accept: "{accept}",
                onchange: move |evt| on_change.call(evt),
            }
            if let Some(file_name) = selected {
                p { class: "file-input-selected", "Attached: {file_name}" }
            }
            if let Some(message) = error {
                p { class: "input-error", "{message}" }
            }
        }
    }
}
