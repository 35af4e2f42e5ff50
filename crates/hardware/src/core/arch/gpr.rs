//! General-Purpose Register File.
//!
//! This module implements the seven integer registers `R0`-`R6`. It performs the following:
//! 1. **Storage:** Holds each register as a full-width signed integer.
//! 2. **Bounds:** Reports, rather than panics on, references to registers that do not exist.
//! 3. **Debugging:** Formats the complete register state for dumps.

use std::fmt;

use crate::common::constants::NUM_REGISTERS;

/// General-Purpose Register file.
///
/// There is no hardwired zero register; every register is writable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i64; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with all registers set to 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Returns
    ///
    /// The register value, or `None` if `idx` is not a valid register.
    #[inline]
    pub fn read(&self, idx: usize) -> Option<i64> {
        self.regs.get(idx).copied()
    }

    /// Writes a register.
    ///
    /// # Returns
    ///
    /// `false` if `idx` is not a valid register; the file is left unchanged.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i64) -> bool {
        match self.regs.get_mut(idx) {
            Some(slot) => {
                *slot = val;
                true
            }
            None => false,
        }
    }

    /// Returns a copy of every register value, `R0` first.
    pub const fn snapshot(&self) -> [i64; NUM_REGISTERS] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "R{i}={val:<4}")?;
        }
        Ok(())
    }
}
