use serde::{Deserialize, Serialize};

/// Backend used when neither the config file nor the build environment names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Feature flags controlling which optional screens are shown.
///
/// Every field defaults to `true` except where noted, so a missing or partial
/// config file keeps the full UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub messaging: bool,
    #[serde(default = "default_true")]
    pub lawyer_directory: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            messaging: true,
            lawyer_directory: true,
        }
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub features: FeatureFlags,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            features: FeatureFlags::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document, falling back to defaults when it is unparseable.
    pub fn from_toml_or_default(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_default()
    }

    /// Replace the base URL when an override is given and non-blank.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        self
    }

    /// Join the base URL and a path with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        let path = path.trim();
        if base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}
