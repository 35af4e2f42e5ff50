//! Simulator error definitions.
//!
//! This module defines every way a simulation can fail. It provides:
//! 1. **Load Errors:** Malformed assembly, unknown opcode codes, unreadable files or configs.
//! 2. **Execution Faults:** Out-of-range jump targets, memory addresses and register ids.
//! 3. **Run Guards:** Step-budget exhaustion and cooperative cancellation.
//!
//! All execution faults are fatal: a failed run never yields statistics.

use std::path::PathBuf;

/// Errors produced while loading or executing a program.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A source line does not match any recognized opcode or operand shape.
    ///
    /// `line` is the 1-based line number within the source text.
    #[error("malformed instruction on line {line} ({text:?}): {reason}")]
    MalformedInstruction {
        /// 1-based line number within the source text.
        line: usize,
        /// The offending source text, trimmed.
        text: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A raw opcode code does not name any instruction kind.
    #[error("unknown opcode {0}")]
    UnknownOpcode(u8),

    /// A jump resolved to an index outside the program.
    #[error("line {line}: jump target {target} resolves outside the program ({len} instructions)")]
    OutOfRangeControlTarget {
        /// Source line of the jump instruction.
        line: u32,
        /// Raw target line number carried by the jump.
        target: i64,
        /// Number of instructions in the program.
        len: usize,
    },

    /// A load or store address fell outside local memory.
    #[error("line {line}: memory address {address} is outside local memory [0, 255]")]
    OutOfRangeMemoryAddress {
        /// Source line of the load/store instruction.
        line: u32,
        /// The computed address.
        address: i64,
    },

    /// An instruction referenced a register that does not exist.
    #[error("line {line}: register R{reg} does not exist")]
    InvalidRegister {
        /// Source line of the instruction.
        line: u32,
        /// The register id that was referenced.
        reg: usize,
    },

    /// The run executed its whole step budget without halting.
    #[error("step budget of {steps} instructions exhausted before the program halted")]
    StepBudgetExhausted {
        /// Number of instructions executed.
        steps: u64,
    },

    /// The run was cancelled from outside.
    #[error("run cancelled after {steps} instructions")]
    Cancelled {
        /// Number of instructions executed before cancellation was observed.
        steps: u64,
    },

    /// A program or configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Returns `true` for faults raised by the execution engine itself.
    ///
    /// Load-time and I/O errors return `false`; so do the run guards,
    /// which stop a program that is still well-formed.
    pub const fn is_execution_fault(&self) -> bool {
        matches!(
            self,
            Self::UnknownOpcode(_)
                | Self::OutOfRangeControlTarget { .. }
                | Self::OutOfRangeMemoryAddress { .. }
                | Self::InvalidRegister { .. }
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SimError>;
