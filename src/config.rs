//! Persisted user settings (lives in the OS config directory).

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::io::tiles::OSM_TILE_URL;
use crate::io::{DataSource, TileSource};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    /// URL or path of the projects document.
    pub data_source: String,
    pub request_timeout_secs: u64,
    /// `{z}/{x}/{y}` template for the map basemap. Empty disables it.
    pub map_tile_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            data_source: "data/projects.json".into(),
            request_timeout_secs: 15,
            map_tile_url: OSM_TILE_URL.into(),
        }
    }
}

impl AppSettings {
    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.data_source)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn tile_source(&self) -> Option<TileSource> {
        let template = self.map_tile_url.trim();
        (!template.is_empty()).then(|| TileSource::new(template, self.request_timeout()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to write settings to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes [`AppSettings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Use the platform config directory, falling back to the working directory.
    pub fn discover() -> Self {
        let dir = match directories::ProjectDirs::from("", "", "CustomerPortal") {
            Some(dirs) => dirs.config_dir().to_path_buf(),
            None => {
                log::warn!("no config directory available; using working directory");
                PathBuf::from(".")
            }
        };
        Self::at(dir.join(SETTINGS_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable settings fall back to defaults.
    pub fn load(&self) -> AppSettings {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {}; using defaults", self.path.display());
                return AppSettings::default();
            }
            Err(err) => {
                log::warn!("could not read {}: {err}", self.path.display());
                return AppSettings::default();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|err| {
            log::warn!("ignoring corrupt settings {}: {err}", self.path.display());
            AppSettings::default()
        })
    }

    pub fn save(&self, settings: &AppSettings) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(settings)?;
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, json).map_err(write_err)
    }
}
