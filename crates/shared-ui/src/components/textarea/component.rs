use dioxus::prelude::*;

use crate::Label;

/// Multi-line input, used by the message composer.
///
/// With `max_chars` set, a counter shows how many characters remain.
#[component]
pub fn Textarea(
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] max_chars: Option<usize>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let remaining = max_chars.map(|max| max.saturating_sub(value.chars().count()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                Label { html_for: name.clone(), "{label}" }
            }
            textarea {
                id: "{name}",
                name: "{name}",
                value: value,
                rows: "{rows}",
                placeholder: placeholder,
                disabled: disabled,
                maxlength: max_chars.map(|m| m.to_string()),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(left) = remaining {
                span { class: "textarea-counter", "{left} characters left" }
            }
        }
    }
}
