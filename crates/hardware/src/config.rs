//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (initial stack pointer).
//! 2. **Structures:** Two sections, `general` (tracing, cycle limit) and `memory` (stack layout).
//!
//! Configuration is supplied as JSON (the CLI's `--config` flag) or built with `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the emulator.
mod defaults {
    /// Initial stack pointer: four bytes below the top of memory.
    ///
    /// The stack grows downward from here.
    pub const STACK_TOP: u8 = crate::common::constants::DEFAULT_STACK_TOP;
}

/// Root configuration structure.
///
/// Every section and field is optional in JSON; missing entries take their defaults.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 10000 },
///     "memory": { "stack_top": 240 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(10_000));
/// assert_eq!(config.memory.stack_top, 0xF0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory and stack layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON, unknown keys, or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a `TRACE:` line per executed instruction at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop the run after this many instructions even if the program never halts.
    ///
    /// This is a host-side guard for runaway programs, not part of the machine.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Memory and stack layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Initial stack pointer (`R7`).
    #[serde(default = "MemoryConfig::default_stack_top")]
    pub stack_top: u8,
}

impl MemoryConfig {
    /// Returns the default initial stack pointer.
    const fn default_stack_top() -> u8 {
        defaults::STACK_TOP
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            stack_top: defaults::STACK_TOP,
        }
    }
}
