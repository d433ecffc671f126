use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Thin rule between sections. With a `caption` it becomes the centred
/// divider used above the "switch to sign in / register" links.
#[component]
pub fn Separator(
    #[props(default = true)] horizontal: bool,
    #[props(default)] caption: String,
) -> Element {
    if caption.is_empty() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            prim::Separator { horizontal, class: "rule" }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "rule-captioned", role: "separator",
            span { class: "rule-line" }
            span { class: "rule-caption", "{caption}" }
            span { class: "rule-line" }
        }
    }
}
