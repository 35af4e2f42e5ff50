//! Architectural Constants.
//!
//! This module defines the fixed properties of the modeled processor. It includes:
//! 1. **Register File:** Number of general-purpose registers and their documented value range.
//! 2. **Local Memory:** Size of the byte-addressable local store.
//!
//! Latencies are not defined here; they are configurable through [`crate::config`].

/// Number of general-purpose registers (`R0`-`R6`).
pub const NUM_REGISTERS: usize = 7;

/// Number of addressable cells in local memory.
pub const LOCAL_MEMORY_SIZE: usize = 256;

/// Smallest value representable by an 8-bit signed register.
pub const REG_MIN: i64 = -128;

/// Largest value representable by an 8-bit signed register.
pub const REG_MAX: i64 = 127;

/// Prefix that marks a register operand in assembly source (`R3`).
pub const REGISTER_PREFIX: char = 'R';

/// Prefix that starts a comment line in assembly source.
pub const COMMENT_PREFIX: char = ';';
