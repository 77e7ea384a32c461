//! Persistent user preferences for the accounting shell.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::utils::{app_data_dir, config_file_in, data_dir_in};
use crate::errors::{AccountingError, Result};

const TMP_SUFFIX: &str = "tmp";

/// User-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the stored collections. Defaults to `<home>/data`.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Data directory to use, falling back to `<base>/data`.
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| data_dir_in(base))
    }
}

/// Loads and saves [`Config`] as JSON under an application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        let config_path = config_file_in(&base);
        Ok(Self {
            base_dir: base,
            config_path,
        })
    }

    /// Manager rooted at `$ACCOUNTING_HOME` or `~/.accounting`.
    pub fn default_location() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file, returning defaults when it does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        serde_json::from_str(&data).map_err(|err| {
            AccountingError::Config(format!(
                "{} is not valid: {}",
                self.config_path.display(),
                err
            ))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let mut tmp = self.config_path.clone();
        tmp.set_extension(format!("json.{}", TMP_SUFFIX));
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(
            config.resolve_data_dir(manager.base_dir()),
            dir.path().join("data")
        );
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("books")),
            currency_symbol: "€".into(),
            ui_color_enabled: false,
        };
        manager.save(&config).unwrap();

        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), r#"{"ui_color_enabled": false}"#).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.ui_color_enabled);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), "{").unwrap();

        assert!(matches!(manager.load(), Err(AccountingError::Config(_))));
    }
}
