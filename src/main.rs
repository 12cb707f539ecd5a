mod app;
mod config;
mod logging;

use app::App;
use config::Config;
use std::{env, process::ExitCode, sync::Arc};
use tracing::{debug, info};

fn parse_config_path() -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix("--config=").map(str::to_string))
}

fn main() -> ExitCode {
    let config_path = parse_config_path();

    let config = match Config::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_tracing(config.app.log_level.as_deref());

    debug!(config = ?config, "Configuration loaded");

    let app = App::new(Arc::new(config.env));

    info!(
        title = app.title(),
        api_base_url = app.api_base_url(),
        debug = app.debug_enabled(),
        "Application started"
    );

    ExitCode::SUCCESS
}
