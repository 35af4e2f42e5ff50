//! Local memory address type.
//!
//! Registers hold signed values of arbitrary width, so an address computed
//! from a register may be negative or too large. [`MemAddr`] can only be
//! built from a value inside `[0, LOCAL_MEMORY_SIZE)`, which lets the memory
//! model index its arrays without further checks.

use std::fmt;

use super::constants::LOCAL_MEMORY_SIZE;

/// A validated address into local memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemAddr(u8);

impl MemAddr {
    /// Converts a register value into an address.
    ///
    /// # Returns
    ///
    /// `Some(addr)` when `value` lies in `[0, 255]`, `None` otherwise.
    pub fn from_value(value: i64) -> Option<Self> {
        if (0..LOCAL_MEMORY_SIZE as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Returns the address as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for MemAddr {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

impl fmt::Display for MemAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
