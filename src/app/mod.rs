//! Root application component.
//!
//! Composition root: receives the loaded settings and reports debug mode.

use std::sync::Arc;

use tracing::info;

use crate::config::EnvConfig;

/// Display title of the application.
pub const TITLE: &str = "oceanic-lamp";

/// Message logged on construction when debug mode is on.
///
/// Emitted at `INFO`, so a subscriber filtered to `warn` or above (for
/// example `app.log_level: warn`) hides it even with `debug_enabled` set.
pub const DEBUG_MESSAGE: &str = "Debug mode enabled!";

/// Root component holding a shared, read-only view of the settings.
#[derive(Debug, Clone)]
pub struct App {
    env: Arc<EnvConfig>,
}

impl App {
    /// Creates the root component.
    ///
    /// Logs [`DEBUG_MESSAGE`] once if `debug_enabled` is set, otherwise
    /// logs nothing.
    pub fn new(env: Arc<EnvConfig>) -> Self {
        if env.debug_enabled {
            info!("{}", DEBUG_MESSAGE);
        }

        Self { env }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn api_base_url(&self) -> &str {
        &self.env.api_base_url
    }

    pub fn debug_enabled(&self) -> bool {
        self.env.debug_enabled
    }
}

#[cfg(test)]
mod tests;
