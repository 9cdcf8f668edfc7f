//! Configuration system for the LS-8 simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Reset values for PC and the stack pointer, and output behavior.
//! 2. **Structures:** A hierarchical `Config` with a `general` section.
//! 3. **Loading:** Deserialization from JSON text or a JSON file.
//!
//! Every field is optional in JSON; anything left out takes its default, so
//! `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::SP_INIT;

/// Default configuration constants for the simulator.
mod defaults {
    /// PC after reset: programs are loaded at address 0.
    pub const START_PC: u8 = 0x00;

    /// Stack pointer after reset.
    pub const INITIAL_SP: u8 = super::SP_INIT;

    /// Whether `PRN` output goes to stdout when no console is injected.
    pub const ECHO_OUTPUT: bool = true;
}

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{path}': {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the text is not valid configuration JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::Config;
    ///
    /// let config = Config::from_json(r#"{ "general": { "max_steps": 1000 } }"#).unwrap();
    /// assert_eq!(config.general.max_steps, Some(1000));
    /// assert_eq!(config.general.initial_sp, 0xF4);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, [`ConfigError::Parse`]
    /// when its contents are not valid configuration JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
///
/// Contains tracing, reset state, the optional step budget, and output
/// behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at debug level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// PC after reset.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,

    /// Stack pointer (`R7`) after reset.
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u8,

    /// Stop after this many instructions. `None` runs until halt.
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Print `PRN` output to stdout when no console is injected.
    #[serde(default = "GeneralConfig::default_echo_output")]
    pub echo_output: bool,
}

impl GeneralConfig {
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }

    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }

    const fn default_echo_output() -> bool {
        defaults::ECHO_OUTPUT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            initial_sp: defaults::INITIAL_SP,
            max_steps: None,
            echo_output: defaults::ECHO_OUTPUT,
        }
    }
}
