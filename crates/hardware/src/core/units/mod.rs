//! Execution units and functional components.
//!
//! This module contains the units the execution engine dispatches to:
//! the integer ALU and the local memory with its hit/miss timing model.

/// Arithmetic Logic Unit for MOV, ADD and CMP.
pub mod alu;

/// Local memory with per-location residency tracking.
pub mod cache;
