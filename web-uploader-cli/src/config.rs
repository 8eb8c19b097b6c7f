// ABOUTME: Configuration file loading and hierarchical merging for the web uploader CLI
// ABOUTME: Reads TOML files from XDG locations and serves them to the uploader as a config store

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use web_uploader_sdk::{ConfigSource, JsonPath, UploadConfiguration};

const FILE_NAME: &str = "web-uploader.toml";
const APP_DIR: &str = "web-uploader";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, rename = "picBed", skip_serializing_if = "Option::is_none")]
    pub pic_bed: Option<PicBed>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PicBed {
    #[serde(default, rename = "web-uploader", skip_serializing_if = "Option::is_none")]
    pub web_uploader: Option<UploadConfiguration>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths)
    }

    /// Load configuration from paths listed highest precedence first.
    /// Missing files are skipped; unreadable or invalid ones are errors.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths.iter().rev() {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::load_from_file(path)?);
        }

        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })
    }

    /// Get standard config file paths in order of precedence (highest first)
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(FILE_NAME));
        }

        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(config_home).join(APP_DIR).join("config.toml"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".config").join(APP_DIR).join("config.toml"));
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        let uploader = match (self.uploader().cloned(), other.uploader().cloned()) {
            (Some(base), Some(over)) => Some(base.merge(over)),
            (base, over) => over.or(base),
        };
        Config::from_uploader(uploader)
    }

    /// Apply command-line overrides on top of the file configuration
    pub fn with_overrides(self, overrides: Option<UploadConfiguration>) -> Config {
        match overrides {
            Some(overrides) => self.merge(Config::from_uploader(Some(overrides))),
            None => self,
        }
    }

    pub fn uploader(&self) -> Option<&UploadConfiguration> {
        self.pic_bed.as_ref().and_then(|p| p.web_uploader.as_ref())
    }

    fn from_uploader(uploader: Option<UploadConfiguration>) -> Config {
        Config {
            pic_bed: uploader.map(|u| PicBed {
                web_uploader: Some(u),
            }),
        }
    }
}

impl ConfigSource for Config {
    fn get_config(&self, key: &str) -> Option<serde_json::Value> {
        let root = serde_json::to_value(self).ok()?;
        JsonPath::parse(key).lookup(&root).cloned()
    }
}
