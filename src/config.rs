//! Configuration loaded from a TOML file.
//!
//! Every section is optional; missing fields fall back to defaults.
//!
//! ```toml
//! [engine]
//! constant_entry = "replace"   # or "append"
//!
//! [logging]
//! level = "warn"
//! file = "/tmp/calctty.log"
//!
//! [logging.modules]
//! calctty = "debug"
//!
//! [keys]
//! "s" = "√"
//! "i" = "1/x"
//! ```

use crate::engine::calculator::ConstantMode;
use crate::engine::errors::SymbolError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown key name '{0}' in [keys]")]
    UnknownKey(String),

    #[error("bad binding for key '{key}': {source}")]
    Binding {
        key: String,
        #[source]
        source: SymbolError,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,

    /// Extra key bindings: key name to keypad label
    pub keys: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Behaviour of π and e while a numeral is being typed
    pub constant_entry: ConstantMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for all targets
    pub level: String,

    /// Log file; when unset the TUI discards log output
    pub file: Option<PathBuf>,

    /// Per-target level overrides
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
            file: None,
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive string in `EnvFilter` syntax
    pub fn directives(&self) -> String {
        let mut filter = self.level.clone();
        for (module, level) in &self.modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Settings, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
