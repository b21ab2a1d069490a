//! Library exports shared by the desktop app, the CLI, and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// HTTP agent and bounded response helpers.
pub mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Field validation, prediction client, and result presentation.
pub mod prediction;
