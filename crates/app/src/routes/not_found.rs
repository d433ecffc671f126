use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "guard-status",
            h1 { "404" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Dashboard {}, "Go to your dashboard" }
        }
    }
}
