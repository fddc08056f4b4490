// config.rs

//! User configuration, read from `~/.config/theme-store/config.yml`.

use color_eyre::eyre::{eyre, Result, WrapErr};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "config.yml";
const CONFIG_DIR: &str = ".config";
const APP_DIR: &str = "theme-store";
const STORAGE_FILE: &str = "storage.json";
const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding the persisted theme. Defaults to the user data dir.
    pub storage_file: Option<PathBuf>,
    /// CSS file rewritten on every theme change, if set.
    pub stylesheet: Option<PathBuf>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Path of the configuration file in the user's home.
    pub fn default_path() -> Result<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(Path::new(&home)
                .join(CONFIG_DIR)
                .join(APP_DIR)
                .join(FILE_NAME)),
            None => Err(eyre!("No $HOME directory found for config")),
        }
    }

    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let config_string = fs::read_to_string(path)
            .wrap_err_with(|| format!("Could not read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&config_string)
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Where the theme is persisted.
    pub fn storage_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage_file {
            return Ok(path.clone());
        }
        Ok(app_data_dir()?.join(STORAGE_FILE))
    }

    /// Where the preview mirrors its log records.
    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(app_data_dir()?.join(LOG_FILE))
    }

    /// Configured log level, or `default` when none is set.
    pub fn log_level_or(&self, default: LevelFilter) -> Result<LevelFilter> {
        match &self.log_level {
            Some(level) => level
                .parse()
                .map_err(|_| eyre!("Invalid log level in config: {}", level)),
            None => Ok(default),
        }
    }
}

fn app_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .ok_or_else(|| eyre!("Could not determine data directory"))?;
    Ok(data_dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_is_default() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join(FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.log_level_or(LevelFilter::Warn).unwrap(),
            LevelFilter::Warn
        );
    }

    #[test]
    fn partial_config_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(
            &path,
            "storage_file: /tmp/theme.json\nlog_level: info\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(
            config.storage_path().unwrap(),
            PathBuf::from("/tmp/theme.json")
        );
        assert_eq!(config.stylesheet, None);
        assert_eq!(
            config.log_path().unwrap().parent(),
            app_data_dir().ok().as_deref()
        );
        assert_eq!(
            config.log_level_or(LevelFilter::Warn).unwrap(),
            LevelFilter::Info
        );
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "storage_file: [unclosed").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn invalid_log_level_is_an_error() {
        let config = AppConfig {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(config.log_level_or(LevelFilter::Debug).is_err());
    }
}
