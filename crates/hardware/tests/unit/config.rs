//! # Configuration Tests
//!
//! Defaults must reproduce the reference timing (1-cycle ALU, 2/45-cycle
//! memory, native register width, no step budget), and JSON documents may
//! override any subset of fields.

use std::io::Write;

use iss_core::SimError;
use iss_core::config::{Config, CoreConfig, GeneralConfig, MemoryConfig, RegisterWidth};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn defaults_match_reference_timing() {
    let config = Config::default();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: false,
                max_steps: None,
            },
            core: CoreConfig {
                alu_latency: 1,
                register_width: RegisterWidth::Native,
            },
            memory: MemoryConfig {
                hit_latency: 2,
                miss_latency: 45,
            },
        }
    );
}

#[test]
fn empty_json_object_is_default() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json_str(r#"{ "memory": { "hit_latency": 3 } }"#).unwrap();
    assert_eq!(config.memory.hit_latency, 3);
    assert_eq!(config.memory.miss_latency, 45);
    assert_eq!(config.core, CoreConfig::default());
}

#[test]
fn register_width_accepts_clamp_alias() {
    let config = Config::from_json_str(r#"{ "core": { "register_width": "Clamp" } }"#).unwrap();
    assert_eq!(config.core.register_width, RegisterWidth::Saturate);
}

#[test]
fn invalid_json_is_config_error() {
    let err = Config::from_json_str(r#"{ "core": { "register_width": "Wide" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)), "got {err:?}");
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "max_steps": 64 }} }}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.general.max_steps, Some(64));
}

#[test]
fn missing_file_is_io_error() {
    let err = Config::from_json_file("/nonexistent/iss-config.json").unwrap_err();
    assert!(matches!(err, SimError::Io { .. }), "got {err:?}");
}
