use dioxus::prelude::*;

/// Pulsing placeholder shown while a resource is loading.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("aria-hidden", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged }
    }
}

/// A column of `rows` skeleton lines, for lists and tables.
#[component]
pub fn SkeletonList(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-list",
            for i in 0..rows {
                Skeleton { key: "{i}", class: "skeleton-row" }
            }
        }
    }
}
