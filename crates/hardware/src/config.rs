//! Configuration system for the Y86 emulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline limits (maximum memory size, no step limit).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//!
//! Configuration is supplied as JSON (`y86emul --config run.json`); every field
//! is optional and `Config::default()` reproduces the stock behavior.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::constants::DEFAULT_MAX_CAPACITY;

    /// Largest `.size` a program may request (16 MiB).
    pub const MAX_CAPACITY: u32 = DEFAULT_MAX_CAPACITY;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use y86_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_instructions": 1000 },
///     "memory": { "max_capacity": 65536 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_instructions, Some(1000));
/// assert_eq!(config.memory.max_capacity, 65536);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory image limits
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log every retired instruction at trace level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many instructions even if the program is still running
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

/// Memory image limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Largest capacity a `.size` directive may request
    #[serde(default = "MemoryConfig::default_max_capacity")]
    pub max_capacity: u32,
}

impl MemoryConfig {
    /// Returns the default capacity limit.
    const fn default_max_capacity() -> u32 {
        defaults::MAX_CAPACITY
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_capacity: defaults::MAX_CAPACITY,
        }
    }
}
