use dioxus::prelude::*;

/// Title row at the top of a screen, with an optional subtitle and actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    /// Buttons rendered on the right of the title.
    actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}
