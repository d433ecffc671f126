use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Caption for a select, textarea or file picker. `required` adds a marker
/// matching the one `Input` shows.
#[component]
pub fn Label(
    html_for: String,
    #[props(default)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { html_for, class: "form-label",
            {children}
            if required {
                span { class: "form-label-required", aria_hidden: "true", "*" }
            }
        }
    }
}
