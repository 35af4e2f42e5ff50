//! Instruction-set simulator for a minimal 8-bit embedded processor.
//!
//! This crate executes decoded programs and reports execution statistics:
//! 1. **ISA:** Opcodes, the decoded instruction record, assembly decoding and disassembly.
//! 2. **Core:** Register file with comparison flag, 256-byte local memory with hit/miss
//!    timing, and the per-instruction execution rules.
//! 3. **Simulation:** Program loading, line-to-index mapping, and the run loop with
//!    optional step budget and cancellation.
//! 4. **Statistics:** Instruction, cycle, memory-hit and load/store counters.
//!
//! ```
//! use iss_core::{Config, Program, Simulator};
//!
//! let program = Program::parse("1 MOV R0, 5\n2 MOV R1, 3\n3 ADD R0, R1\n4 CMP R0, R1\n").unwrap();
//! let outcome = Simulator::new(program, &Config::default()).run().unwrap();
//! assert_eq!(outcome.stats.instructions, 4);
//! assert_eq!(outcome.stats.cycles, 4);
//! assert_eq!(outcome.registers[0], 8);
//! assert!(!outcome.flag);
//! ```

/// Common types and constants (addresses, registers, errors).
pub mod common;
/// Simulator configuration (defaults, register width policy, latencies).
pub mod config;
/// CPU core (registers, local memory, execution).
pub mod core;
/// Instruction set (opcodes, decoding, disassembly).
pub mod isa;
/// Program loading and the run loop.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type returned by every fallible operation.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory and stats.
pub use crate::core::Cpu;
/// Decoded instruction and its opcode kind.
pub use crate::isa::{Instruction, Opcode};
/// Decoded program with its line-to-index mapping.
pub use crate::sim::loader::Program;
/// Top-level simulator and its successful result.
pub use crate::sim::simulator::{CancelToken, RunOutcome, Simulator};
/// Aggregate run counters.
pub use crate::stats::SimStats;
