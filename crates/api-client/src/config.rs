use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded so the browser build needs no
/// filesystem access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse the embedded config once and apply the build-time base URL override.
///
/// A missing key or unparseable file falls back to defaults.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = ClientConfig::from_toml_or_default(EMBEDDED_CONFIG)
            .with_base_url_override(option_env!("LAWLINK_API_BASE_URL"));
        tracing::debug!(
            api_base_url = %config.api_base_url,
            features = ?config.features,
            "client config loaded"
        );
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_enables_every_screen() {
        let config = ClientConfig::from_toml_or_default(EMBEDDED_CONFIG);
        assert!(config.features.messaging);
        assert!(config.features.lawyer_directory);
        assert!(config.api_base_url.starts_with("http"));
    }

    #[test]
    fn config_is_loaded_once() {
        assert!(std::ptr::eq(client_config(), client_config()));
    }
}
