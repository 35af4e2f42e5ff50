//! Core processor implementation.
//!
//! This module contains the execution engine and the architectural state it
//! owns for the duration of a run: the register file and the local memory.

/// Architectural state (general-purpose registers).
pub mod arch;

/// CPU state and the per-instruction execution rules.
pub mod cpu;

/// Execution units (ALU, local memory).
pub mod units;

pub use self::cpu::Cpu;
