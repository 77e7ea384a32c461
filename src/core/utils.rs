use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".accounting";
const DATA_DIR: &str = "data";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "ACCOUNTING_HOME";

/// Returns the application directory, defaulting to `~/.accounting`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default directory for the persisted collections under `base`.
pub fn data_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(DATA_DIR)
}

/// Path of the configuration file under `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
