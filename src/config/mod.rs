use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::paths;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for the ledger engine. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub recent_limit: usize,
    pub undo_limit: usize,
    pub outlier_multiplier: Decimal,
    pub budget_suggestions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recent_limit: 10,
            undo_limit: 5,
            outlier_multiplier: Decimal::from(3),
            budget_suggestions: 3,
        }
    }
}

impl EngineConfig {
    /// Capacities must hold at least one entry and the outlier multiplier
    /// must not be negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_limit == 0 {
            return Err(ConfigError::Invalid("recent_limit must be at least 1".into()));
        }
        if self.undo_limit == 0 {
            return Err(ConfigError::Invalid("undo_limit must be at least 1".into()));
        }
        if self.outlier_multiplier.is_sign_negative() && !self.outlier_multiplier.is_zero() {
            return Err(ConfigError::Invalid(format!(
                "outlier_multiplier must not be negative, got {}",
                self.outlier_multiplier
            )));
        }
        Ok(())
    }
}

/// Loads and stores [`EngineConfig`] as JSON under the app data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: paths::config_file_in(base.as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(EngineConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: EngineConfig =
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config, writing the defaults first when no file exists yet.
    pub fn load_or_init(&self) -> Result<EngineConfig, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = EngineConfig::default();
        self.save(&config)?;
        tracing::info!(path = %self.path.display(), "wrote default engine config");
        Ok(config)
    }

    pub fn save(&self, config: &EngineConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
