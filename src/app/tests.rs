//! Tests for the root component.

use super::*;
use crate::config::{Config, Format};
use std::io;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a scoped subscriber and return every line it logged.
fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    capture_logs_at(Level::TRACE, f)
}

fn capture_logs_at<T>(max_level: Level, f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);

    let bytes = sink.0.lock().unwrap().clone();
    let lines = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    (out, lines)
}

fn app_from_yaml(yaml: &str) -> (App, Vec<String>) {
    let cfg = Config::parse(yaml, Format::Yaml).unwrap();
    let env = Arc::new(cfg.env);
    capture_logs(move || App::new(env))
}

#[test]
fn test_default_config_logs_debug_once() {
    let env = Arc::new(Config::default().env);
    let (app, lines) = capture_logs(move || App::new(env));

    assert!(app.debug_enabled());
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("Debug mode enabled!"));
    assert!(lines[0].contains("INFO"));
}

#[test]
fn test_debug_disabled_logs_nothing() {
    let (app, lines) = app_from_yaml("env:\n  debug_enabled: false\n");

    assert!(!app.debug_enabled());
    assert!(lines.is_empty(), "{lines:?}");
}

#[test]
fn test_message_emitted_iff_debug_enabled() {
    for debug in [true, false] {
        let env = Arc::new(EnvConfig {
            debug_enabled: debug,
            ..EnvConfig::default()
        });
        let (_, lines) = capture_logs(move || App::new(env));

        let hits = lines.iter().filter(|l| l.contains(DEBUG_MESSAGE)).count();
        assert_eq!(hits, usize::from(debug));
        assert_eq!(lines.len(), usize::from(debug));
    }
}

#[test]
fn test_debug_message_hidden_above_info() {
    let env = Arc::new(EnvConfig::default());
    let (app, lines) = capture_logs_at(Level::WARN, move || App::new(env));

    assert!(app.debug_enabled());
    assert!(lines.is_empty(), "{lines:?}");

    let env = Arc::new(EnvConfig::default());
    let (_, lines) = capture_logs_at(Level::INFO, move || App::new(env));
    assert_eq!(lines.len(), 1, "{lines:?}");
}

#[test]
fn test_api_base_url_override_independent_of_debug() {
    for debug in [true, false] {
        let yaml = format!(
            "env:\n  api_base_url: https://example.test\n  debug_enabled: {}\n",
            debug
        );
        let (app, _) = app_from_yaml(&yaml);

        assert_eq!(app.api_base_url(), "https://example.test");
    }
}

#[test]
fn test_default_accessors() {
    let (app, _) = capture_logs(|| App::new(Arc::new(EnvConfig::default())));

    assert_eq!(app.title(), "oceanic-lamp");
    assert_eq!(app.api_base_url(), EnvConfig::default().api_base_url);
}

#[test]
fn test_shared_config_is_not_copied() {
    let env = Arc::new(EnvConfig::default());
    let (app, _) = capture_logs({
        let env = Arc::clone(&env);
        move || App::new(env)
    });

    assert_eq!(Arc::strong_count(&env), 2);
    drop(app);
    assert_eq!(Arc::strong_count(&env), 1);
}
