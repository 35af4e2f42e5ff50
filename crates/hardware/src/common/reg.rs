//! Register File.
//!
//! This module provides the `RegisterFile` struct, the processor state touched by
//! MOV, ADD, CMP, JE and LD. It provides:
//! 1. **Storage:** The general-purpose registers and the single comparison flag.
//! 2. **Width Policy:** Applies the configured [`RegisterWidth`] on every register write.
//! 3. **Observability:** A snapshot of the final state for reporting and tests.

use std::fmt;

use crate::common::constants::NUM_REGISTERS;
use crate::config::RegisterWidth;
use crate::core::arch::gpr::Gpr;

/// General-purpose registers plus the comparison flag set by `CMP`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    flag: bool,
    width: RegisterWidth,
}

impl RegisterFile {
    /// Creates a register file with all registers zero and the flag clear.
    ///
    /// # Arguments
    ///
    /// * `width` - Policy applied to values written into registers.
    pub fn new(width: RegisterWidth) -> Self {
        Self {
            gpr: Gpr::new(),
            flag: false,
            width,
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Returns
    ///
    /// The register value, or `None` if `idx` is out of range.
    #[inline]
    pub fn read(&self, idx: usize) -> Option<i64> {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register after applying the width policy.
    ///
    /// # Returns
    ///
    /// `false` if `idx` is out of range.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i64) -> bool {
        self.gpr.write(idx, self.width.apply(val))
    }

    /// Current value of the comparison flag.
    #[inline]
    pub const fn flag(&self) -> bool {
        self.flag
    }

    /// Sets the comparison flag.
    #[inline]
    pub const fn set_flag(&mut self, flag: bool) {
        self.flag = flag;
    }

    /// Width policy this file was created with.
    pub const fn width(&self) -> RegisterWidth {
        self.width
    }

    /// Returns a copy of every register value, `R0` first.
    pub const fn snapshot(&self) -> [i64; NUM_REGISTERS] {
        self.gpr.snapshot()
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(RegisterWidth::default())
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FLAG={}", self.gpr, u8::from(self.flag))
    }
}
