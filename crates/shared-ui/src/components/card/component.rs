use dioxus::prelude::*;

fn section(class: &'static str, attributes: Vec<Attribute>, children: Element) -> Element {
    let base = vec![Attribute::new("class", class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Bordered panel grouping one piece of a dashboard.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {section("card", attributes, children)}
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    section("card-header", attributes, children)
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    rsx! {
        h3 { ..merged, {children} }
    }
}

/// Muted line under a card title.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    section("card-content", attributes, children)
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    section("card-footer", attributes, children)
}
