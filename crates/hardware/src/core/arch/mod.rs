//! Architectural state of the modeled processor.
//!
//! The processor has no privilege modes, CSRs or floating point; the only
//! architectural storage besides local memory is the general-purpose
//! register file.

/// General-Purpose Register file implementation.
pub mod gpr;
