//! Parser configuration.

use crate::error::{FsError, Result};
use pulseparse_core::{Envelope, Transformer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = ".pulseparse.yml";

/// Configuration stored in `.pulseparse.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Placeholder board, group and email settings for transformed items.
    #[serde(default)]
    pub envelope: Envelope,
}

const fn default_version() -> u32 {
    1
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            envelope: Envelope::default(),
        }
    }
}

impl ParserConfig {
    /// Load a config file that must exist.
    ///
    /// # Errors
    /// Returns `FsError::ConfigNotFound` if the file is missing, or a YAML error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FsError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load `.pulseparse.yml` from a directory, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            debug!(dir = %dir.as_ref().display(), "No config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Write the default configuration to a new file.
    ///
    /// # Errors
    /// Returns `FsError::ConfigExists` if the file is already there, or an IO error.
    pub fn write_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(FsError::ConfigExists(path.to_path_buf()));
        }

        let config = Self::default();
        fs::write(path, serde_yaml::to_string(&config)?)?;
        info!(path = %path.display(), "Wrote default config");
        Ok(config)
    }

    /// Build a transformer reading the system clock.
    #[must_use]
    pub fn transformer(&self) -> Transformer {
        Transformer::new(self.envelope.clone())
    }
}
