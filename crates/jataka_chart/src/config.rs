//! Runtime configuration loaded from TOML.
//!
//! ```toml
//! [format]
//! carry_seconds = false
//!
//! [logging]
//! filter = "warn"
//! json = false
//! ```
//!
//! Every key is optional. Unknown keys are rejected.

use std::path::Path;

use jataka_base::DmsStyle;
use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub format: FormatConfig,
    pub logging: LoggingConfig,
}

/// Display formatting options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Roll 60 seconds into the next minute when formatting degrees.
    pub carry_seconds: bool,
}

/// Log subscriber options, consumed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Degree display style selected by `format.carry_seconds`.
    pub fn dms_style(&self) -> DmsStyle {
        if self.format.carry_seconds {
            DmsStyle::Carry
        } else {
            DmsStyle::Reference
        }
    }
}
