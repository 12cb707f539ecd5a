//! Configuration loading for the application.
//!
//! Built-in defaults are overlaid by an optional YAML/JSON override file and
//! then by `OCEANIC_LAMP_*` environment variables. The result is a single
//! value that is never mutated after [`Config::load`] returns.

mod app;
mod env;
mod error;

pub use app::AppConfig;
pub use env::EnvConfig;
pub use error::ConfigError;

use serde::Deserialize;
use std::{env::VarError, fs, path::Path};
use tracing::debug;

/// Override file consulted when no path is given on the command line.
pub const DEFAULT_OVERRIDE_PATH: &str = "config/env.yaml";

pub const ENV_API_BASE_URL: &str = "OCEANIC_LAMP_API_BASE_URL";
pub const ENV_DEBUG_ENABLED: &str = "OCEANIC_LAMP_DEBUG_ENABLED";
pub const ENV_LOG_LEVEL: &str = "OCEANIC_LAMP_LOG_LEVEL";

/// Root configuration structure.
///
/// Both sections are optional in override sources; missing sections and
/// fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Process-level settings like log level.
    pub app: AppConfig,
    /// Settings handed to the application component.
    pub env: EnvConfig,
}

/// Syntax of an override source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from the file extension. Anything other than `.json`
    /// is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the override file, then environment.
    ///
    /// First loads environment variables from `.env` file (if exists).
    /// An explicit `path` must exist; without one, [`DEFAULT_OVERRIDE_PATH`]
    /// is used only if present. Recognised environment variables:
    /// - `OCEANIC_LAMP_API_BASE_URL`
    /// - `OCEANIC_LAMP_DEBUG_ENABLED`
    /// - `OCEANIC_LAMP_LOG_LEVEL`
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        Self::load_with(
            path.map(Path::new),
            Path::new(DEFAULT_OVERRIDE_PATH),
            |name| std::env::var(name),
        )
    }

    /// Same pipeline as [`Config::load`] with the default file location and
    /// the variable source supplied by the caller. Does not read `.env`.
    pub fn load_with<F>(
        path: Option<&Path>,
        default_path: &Path,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if default_path.exists() => Self::from_file(default_path)?,
            None => {
                debug!(path = %default_path.display(), "No override file, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(lookup)?;

        Ok(config)
    }

    /// Parse an override file, filling unspecified fields with defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loaded override file");
        Self::parse(&content, Format::from_path(path))
    }

    /// Parse override text, filling unspecified fields with defaults.
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        // An empty YAML document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = match format {
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Apply environment overrides through `lookup`, which has the shape of
    /// [`std::env::var`]. Unset variables leave the current value untouched;
    /// non-UTF-8 values are rejected.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        if let Some(url) = read_var(&lookup, ENV_API_BASE_URL)? {
            self.env.api_base_url = url;
        }

        if let Some(raw) = read_var(&lookup, ENV_DEBUG_ENABLED)? {
            self.env.debug_enabled =
                parse_bool(&raw).ok_or_else(|| ConfigError::InvalidEnv {
                    name: ENV_DEBUG_ENABLED.to_owned(),
                    value: raw.clone(),
                })?;
        }

        if let Some(level) = read_var(&lookup, ENV_LOG_LEVEL)? {
            self.app.log_level = Some(level);
        }

        Ok(())
    }
}

fn read_var<F>(lookup: &F, name: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidEnv {
            name: name.to_owned(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

/// Parse a boolean the way shells and `.env` files spell them.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
