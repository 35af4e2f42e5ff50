//! Simulation statistics collection and reporting.
//!
//! This module tracks the aggregate counters of one run. It provides:
//! 1. **Counters:** Executed instructions, total cycles, local memory hits, and LD/ST count.
//! 2. **Derived Metrics:** Misses and cycles per instruction.
//! 3. **Reporting:** The plain-text report printed at the end of a run, and JSON export.

use std::fmt;

use serde::Serialize;

/// Aggregate counters for one run.
///
/// Counters only grow during a run. A run that faults never hands its
/// statistics to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions executed, counting every loop iteration.
    pub instructions: u64,
    /// Total cycles charged.
    pub cycles: u64,
    /// Loads and stores that found their location already resident.
    pub memory_hits: u64,
    /// Number of LD and ST instructions executed.
    pub load_store: u64,
}

impl SimStats {
    /// Loads and stores that paid the miss latency.
    pub const fn memory_misses(&self) -> u64 {
        self.load_store - self.memory_hits
    }

    /// Average cycles per executed instruction, or 0 for an empty run.
    pub fn cpi(&self) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions as f64
        }
    }

    /// Prints the end-of-run report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Serializes the counters as a JSON object.
    pub fn to_json(&self) -> String {
        // Serializing four integers cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total number of executed instructions: {}",
            self.instructions
        )?;
        writeln!(f, "Total number of clock cycles: {}", self.cycles)?;
        writeln!(f, "Number of hits to local memory: {}", self.memory_hits)?;
        writeln!(
            f,
            "Total number of executed LD/ST instructions: {}",
            self.load_store
        )
    }
}
