use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::Error as SerdeDeError;

use crate::app_dirs;

use super::CONFIG_FILE_NAME;
use super::types::{AppSettings, ConfigError};

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, writing defaults when the file is missing.
///
/// A failure to write the defaults is logged and otherwise ignored; a file
/// that exists but does not parse is an error.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    load_or_default_from(&path)
}

pub(super) fn load_or_default_from(path: &Path) -> Result<AppSettings, ConfigError> {
    let settings = if path.exists() {
        load_settings_from(path)?
    } else {
        let defaults = AppSettings::default();
        match save_to_path(&defaults, path) {
            Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
            Err(err) => tracing::warn!("Could not write default config: {err}"),
        }
        defaults
    };
    settings.endpoint.parsed_url()?;
    Ok(settings)
}

pub(super) fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    toml::from_str::<AppSettings>(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
        .map(AppSettings::normalized)
}

/// Persist configuration to the default location.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(settings, &path)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes())
}

/// Write through a uniquely named sibling temp file, then rename over the target.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    use rand::TryRngCore;
    let write_error = |path: &Path, message: String| ConfigError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other(message),
    };
    let dir = path
        .parent()
        .ok_or_else(|| write_error(path, "config path has no parent directory".into()))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| write_error(path, "config path has no file name".into()))?;

    let mut last_err = None;
    for _ in 0..5 {
        let mut bytes = [0u8; 6];
        rand::rngs::OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| write_error(path, format!("failed to generate temp suffix: {err}")))?;
        let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let tmp_path = dir.join(format!("{}.tmp-{suffix}", file_name.to_string_lossy()));

        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                last_err = Some(err);
                continue;
            }
            Err(source) => {
                return Err(ConfigError::Write {
                    path: tmp_path,
                    source,
                });
            }
        };

        let written = file.write_all(data).and_then(|()| file.sync_all());
        drop(file);
        if let Err(source) = written.and_then(|()| std::fs::rename(&tmp_path, path)) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(ConfigError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
        return Ok(());
    }

    Err(write_error(
        path,
        format!(
            "failed to create temporary file: {}",
            last_err
                .map(|err| err.to_string())
                .unwrap_or_else(|| "unknown error".into())
        ),
    ))
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
