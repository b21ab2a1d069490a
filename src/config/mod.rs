//! Persisted application settings (`config.toml` under the app directory).

mod io;
mod types;


pub use io::{config_path, load_or_default, save, save_to_path};
pub use types::{
    AppSettings, AssetSettings, ConfigError, DEFAULT_ASSETS_DIR, DEFAULT_ENDPOINT_URL,
    EndpointSettings, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
