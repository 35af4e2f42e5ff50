//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Address Types:** A validated local-memory address.
//! 2. **Constants:** Register count, memory size and the 8-bit value range.
//! 3. **Error Handling:** The crate-wide [`SimError`] and [`Result`] alias.
//! 4. **Register Management:** The register file with the comparison flag.

/// Local memory address type.
pub mod addr;

/// Architectural constants.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::MemAddr;
pub use constants::{LOCAL_MEMORY_SIZE, NUM_REGISTERS};
pub use error::{Result, SimError};
pub use reg::RegisterFile;
