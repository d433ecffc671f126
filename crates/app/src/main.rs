use api_client::{client_config, default_store, ApiClient, SessionHandle};
use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
pub mod format_helpers;
pub mod notify;
mod routes;
pub mod upload;
use auth::AuthState;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = client_config();

    // One session handle for the whole app. It restores the stored token once.
    let api = use_hook(|| ApiClient::new(config.clone(), SessionHandle::restore(default_store())));
    use_context_provider(|| api);
    use_context_provider(|| config.features.clone());
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}

/// Feature flags from `config.toml`.
pub fn use_features() -> FeatureFlags {
    use_context::<FeatureFlags>()
}
