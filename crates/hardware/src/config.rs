//! Configuration system for the E20 simulator.
//!
//! This module defines the run parameters of the simulator. It provides:
//! 1. **Defaults:** The values used by the command-line front end.
//! 2. **Structures:** Hierarchical config for general machine setup and for the final report.
//!
//! Embedders can deserialize a `Config` from JSON; every field is optional and
//! falls back to its default.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Program counter at reset.
    pub const START_PC: u16 = 0;

    /// Number of memory words printed in the final report.
    pub const MEMORY_WORDS: usize = 128;

    /// Memory words per line of the final report.
    pub const WORDS_PER_LINE: usize = 8;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use e20_core::config::Config;
///
/// let config = Config::from_json(r#"{ "report": { "memory_words": 16 } }"#).unwrap();
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.report.memory_words, 16);
/// assert_eq!(config.report.words_per_line, 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Machine setup.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Final state report layout.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// General machine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u16 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
        }
    }
}

/// Layout of the final state report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Number of memory words, from address 0, to dump.
    #[serde(default = "ReportConfig::default_memory_words")]
    pub memory_words: usize,

    /// Words per dump line.
    #[serde(default = "ReportConfig::default_words_per_line")]
    pub words_per_line: usize,
}

impl ReportConfig {
    const fn default_memory_words() -> usize {
        defaults::MEMORY_WORDS
    }

    const fn default_words_per_line() -> usize {
        defaults::WORDS_PER_LINE
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            memory_words: defaults::MEMORY_WORDS,
            words_per_line: defaults::WORDS_PER_LINE,
        }
    }
}
