use dioxus::prelude::*;
use shared_types::StatTile;

/// Row of labelled counters at the top of a dashboard, in the order given.
#[component]
pub fn StatGrid(tiles: Vec<StatTile>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid",
            for tile in tiles {
                div { key: "{tile.label}", class: "stat-tile",
                    span { class: "stat-label", "{tile.label}" }
                    span { class: "stat-value", "{tile.value}" }
                }
            }
        }
    }
}
