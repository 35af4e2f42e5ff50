//! Configuration system for the simulator.
//!
//! This module defines the structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline latencies of the modeled processor (1-cycle ALU, 2/45-cycle memory).
//! 2. **Structures:** Hierarchical config for general, core and memory settings.
//! 3. **Enums:** The register width policy applied on register writes.
//!
//! Configuration is supplied as JSON (`iss run --config cfg.json`) or built with
//! `Config::default()`. Every field is optional in JSON and falls back to its default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{REG_MAX, REG_MIN};
use crate::common::{Result, SimError};

/// Default configuration constants for the simulator.
///
/// These values describe the modeled hardware when not explicitly
/// overridden in a configuration file.
mod defaults {
    /// Cycles taken by MOV, ADD, CMP, JE and JMP.
    pub const ALU_LATENCY: u64 = 1;

    /// Cycles taken by a load or store to a location already resident in local memory.
    pub const HIT_LATENCY: u64 = 2;

    /// Cycles taken by the first load or store to a location.
    ///
    /// Models the fill from slow backing memory.
    pub const MISS_LATENCY: u64 = 45;
}

/// Policy applied to values written into general-purpose registers.
///
/// Registers are documented as 8-bit signed, but arithmetic results are
/// only range-limited when [`RegisterWidth::Saturate`] is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RegisterWidth {
    /// Keep values at full host width; ADD wraps only on 64-bit overflow.
    #[default]
    Native,
    /// Clamp every register write to `[-128, 127]`.
    #[serde(alias = "Clamp")]
    Saturate,
}

impl RegisterWidth {
    /// Applies the policy to a value about to be written into a register.
    ///
    /// # Examples
    ///
    /// ```
    /// use iss_core::config::RegisterWidth;
    ///
    /// assert_eq!(RegisterWidth::Native.apply(300), 300);
    /// assert_eq!(RegisterWidth::Saturate.apply(300), 127);
    /// assert_eq!(RegisterWidth::Saturate.apply(-300), -128);
    /// ```
    #[inline]
    pub const fn apply(self, val: i64) -> i64 {
        match self {
            Self::Native => val,
            Self::Saturate => {
                if val > REG_MAX {
                    REG_MAX
                } else if val < REG_MIN {
                    REG_MIN
                } else {
                    val
                }
            }
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use iss_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.hit_latency, 2);
/// assert_eq!(config.memory.miss_latency, 45);
/// assert_eq!(config.general.max_steps, None);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use iss_core::config::{Config, RegisterWidth};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 10000 },
///     "core": { "register_width": "Saturate" },
///     "memory": { "miss_latency": 100 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(10000));
/// assert_eq!(config.core.register_width, RegisterWidth::Saturate);
/// assert_eq!(config.core.alu_latency, 1);
/// assert_eq!(config.memory.hit_latency, 2);
/// assert_eq!(config.memory.miss_latency, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Execution core settings
    #[serde(default)]
    pub core: CoreConfig,
    /// Local memory timing
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at `TRACE` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Upper bound on executed instructions; `None` runs until the program halts.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Execution core configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoreConfig {
    /// Cycles charged for every non-memory instruction.
    #[serde(default = "CoreConfig::default_alu_latency")]
    pub alu_latency: u64,

    /// Width policy for register writes.
    #[serde(default)]
    pub register_width: RegisterWidth,
}

impl CoreConfig {
    /// Returns the default ALU latency.
    const fn default_alu_latency() -> u64 {
        defaults::ALU_LATENCY
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            alu_latency: defaults::ALU_LATENCY,
            register_width: RegisterWidth::default(),
        }
    }
}

/// Local memory timing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Cycles for an access to a previously touched location.
    #[serde(default = "MemoryConfig::default_hit_latency")]
    pub hit_latency: u64,

    /// Cycles for the first access to a location.
    #[serde(default = "MemoryConfig::default_miss_latency")]
    pub miss_latency: u64,
}

impl MemoryConfig {
    /// Returns the default hit latency.
    const fn default_hit_latency() -> u64 {
        defaults::HIT_LATENCY
    }

    /// Returns the default miss latency.
    const fn default_miss_latency() -> u64 {
        defaults::MISS_LATENCY
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            hit_latency: defaults::HIT_LATENCY,
            miss_latency: defaults::MISS_LATENCY,
        }
    }
}
