//! Runtime settings consumed by the application.

use serde::Deserialize;

/// Deployment URL used when nothing overrides `api_base_url`.
pub const DEFAULT_API_BASE_URL: &str =
    "http://oceanic-lamp-welcome-oceanic-lamp.apps.cluster-6152.sandbox526.opentlc.com";

/// Runtime-tunable settings.
///
/// Every field has a default, so a partial override only replaces the
/// fields it names. Values are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Base URL of the backend API.
    #[serde(alias = "apiBaseUrl", alias = "apiUrl", alias = "api_url")]
    pub api_base_url: String,
    /// Emit diagnostic output on startup.
    #[serde(alias = "debugEnabled", alias = "enableDebug", alias = "enable_debug")]
    pub debug_enabled: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            debug_enabled: true,
        }
    }
}
