//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.useradmin.toml` in the working directory
//! 4. `~/.config/useradmin/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL,
    ENV_CONFIRM, ENV_LOG, ENV_TIMEOUT_SECS,
};
use crate::env::Env;
use crate::view::ViewFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
    /// Rejected environment values, reported once logging is up.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Remote collection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base address; the collection lives at `<base_url>/users`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Ask before deleting. Turned off by `--yes`.
    pub confirm_deletes: bool,
    pub format: ViewFormat,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_deletes: true,
            format: ViewFormat::Terminal,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `warn` or `useradmin=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the config in `work_dir`, then applies
    /// environment variable overrides. An explicit `--config` path
    /// replaces the working-directory lookup.
    pub fn load(
        work_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local or explicit config
        if let Some(path) = explicit {
            config.merge(Self::load_file(path)?);
        } else if let Some(dir) = work_dir {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_api = ApiConfig::default();
        if other.api.base_url != default_api.base_url {
            self.api.base_url = other.api.base_url;
        }
        if other.api.timeout_secs != default_api.timeout_secs {
            self.api.timeout_secs = other.api.timeout_secs;
        }

        // Disabling confirmation overrides enabling it
        if !other.ui.confirm_deletes {
            self.ui.confirm_deletes = false;
        }
        if other.ui.format != UiConfig::default().format {
            self.ui.format = other.ui.format;
        }

        if other.log.level != LogConfig::default().level {
            self.log.level = other.log.level;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Ok(val) = env.var(ENV_TIMEOUT_SECS) {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => self
                    .warnings
                    .push(format!("ignoring invalid {ENV_TIMEOUT_SECS} value: {val}")),
            }
        }
        if let Ok(val) = env.var(ENV_LOG) {
            self.log.level = val;
        }
        match env.flag(ENV_CONFIRM) {
            Some(Ok(enabled)) => self.ui.confirm_deletes = enabled,
            Some(Err(val)) => self
                .warnings
                .push(format!("ignoring invalid {ENV_CONFIRM} value: {val}")),
            None => {}
        }
    }
}
