use dioxus::prelude::*;

use crate::Label;

/// Native `<select>` for role pickers and list filters.
///
/// Children are `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                Label { html_for: name.clone(), required, "{label}" }
            }
            select {
                class: "form-select",
                id: "{name}",
                name: "{name}",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
