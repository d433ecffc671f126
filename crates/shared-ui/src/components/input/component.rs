use dioxus::prelude::*;

/// Labelled text input with an optional inline field error.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] name: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    /// Message shown under the field, e.g. from `AppError::field_error`.
    #[props(default)]
    error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            input {
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "input-error", "{message}" }
            }
        }
    }
}
