use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

/// Runtime configuration: where the city files live and how output is shaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_cities")]
    pub cities: BTreeMap<String, String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_trip_separator")]
    pub trip_separator: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_cities() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("chicago".to_string(), "chicago.csv".to_string()),
        ("new york".to_string(), "new_york_city.csv".to_string()),
        ("washington".to_string(), "washington.csv".to_string()),
    ])
}

fn default_page_size() -> usize {
    5
}

fn default_trip_separator() -> String {
    " to ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cities: default_cities(),
            page_size: default_page_size(),
            trip_separator: default_trip_separator(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbikeshare")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rbikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbikeshare.conf")
    }

    /// Load the default configuration file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicitly chosen file, which must exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{}: file not found",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validated()
    }

    /// Normalize city keys to lowercase and reject unusable values.
    fn validated(mut self) -> AppResult<Self> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.cities.is_empty() {
            return Err(AppError::Config("no cities configured".into()));
        }

        self.cities = self
            .cities
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Ok(self)
    }

    /// City keys accepted at the city prompt, in sorted order.
    pub fn city_names(&self) -> Vec<&str> {
        self.cities.keys().map(String::as_str).collect()
    }

    /// Resolve a city key to its data file. Relative paths are taken
    /// relative to `data_dir`.
    pub fn city_path(&self, city: &str) -> AppResult<PathBuf> {
        let file = self
            .cities
            .get(city)
            .ok_or_else(|| AppError::UnknownCity(city.to_string()))?;

        let file = expand_tilde(file);
        if file.is_absolute() {
            Ok(file)
        } else {
            Ok(expand_tilde(&self.data_dir).join(file))
        }
    }
}
