use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".ledger_engine";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.ledger_engine`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("LEDGER_ENGINE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}
