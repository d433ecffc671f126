use dioxus::prelude::*;

/// Form wrapper that stops the browser's own submission and validation.
///
/// Fields are checked in Rust before any request is sent, so `novalidate` is
/// always set.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "form", None, false),
        Attribute::new("novalidate", true, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Two controls side by side on wide screens.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}
