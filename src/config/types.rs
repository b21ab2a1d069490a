use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_client::HttpTimeouts;

/// Prediction service used when the config does not name one.
pub const DEFAULT_ENDPOINT_URL: &str = "https://air-quality-prediction-final-6.onrender.com/predict";
/// Assets directory used when the config does not name one, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";
/// Lower bound applied to every configured timeout.
pub const MIN_TIMEOUT_SECS: u64 = 1;
/// Upper bound applied to every configured timeout.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// App settings persisted in the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub endpoint: EndpointSettings,
    #[serde(default)]
    pub assets: AssetSettings,
}

/// Where and how predictions are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
    #[serde(default = "default_write_timeout_secs")]
    pub write_timeout_secs: u64,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            write_timeout_secs: default_write_timeout_secs(),
        }
    }
}

impl EndpointSettings {
    /// Timeouts for the HTTP agent.
    pub fn timeouts(&self) -> HttpTimeouts {
        HttpTimeouts {
            connect: Duration::from_secs(self.connect_timeout_secs),
            read: Duration::from_secs(self.read_timeout_secs),
            write: Duration::from_secs(self.write_timeout_secs),
        }
    }

    /// Parse the endpoint, accepting only absolute http(s) URLs.
    pub fn parsed_url(&self) -> Result<url::Url, ConfigError> {
        let parsed = url::Url::parse(self.url.trim()).map_err(|err| ConfigError::InvalidEndpoint {
            url: self.url.clone(),
            reason: err.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(ConfigError::InvalidEndpoint {
                url: self.url.clone(),
                reason: format!("unsupported scheme '{scheme}'"),
            }),
        }
    }
}

/// Location of the background and result images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSettings {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl AssetSettings {
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
    }
}

impl AppSettings {
    /// Clamp out-of-range values loaded from disk.
    pub(crate) fn normalized(mut self) -> Self {
        let endpoint = &mut self.endpoint;
        endpoint.url = endpoint.url.trim().to_string();
        endpoint.connect_timeout_secs = clamp_timeout(endpoint.connect_timeout_secs);
        endpoint.read_timeout_secs = clamp_timeout(endpoint.read_timeout_secs);
        endpoint.write_timeout_secs = clamp_timeout(endpoint.write_timeout_secs);
        self
    }
}

fn clamp_timeout(secs: u64) -> u64 {
    secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_read_timeout_secs() -> u64 {
    30
}

fn default_write_timeout_secs() -> u64 {
    30
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("Invalid prediction endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("No suitable config directory found")]
    NoConfigDir,
}
