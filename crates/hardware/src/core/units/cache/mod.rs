//! Local Memory Timing Model.
//!
//! This module implements the processor's 256-byte local memory. Each location
//! carries an occupancy bit standing in for "resident in fast memory": the
//! structure behaves like a direct-mapped, infinite-capacity write-back cache in
//! front of slow backing memory. It models:
//! 1. **Cold Misses:** The first access to a location pays the miss latency.
//! 2. **Warm Hits:** Every later access to that location pays the hit latency.
//! 3. **Symmetry:** Loads and stores follow the same rule, and the access that
//!    misses is the one that makes the location resident.

use crate::common::MemAddr;
use crate::common::constants::LOCAL_MEMORY_SIZE;
use crate::config::MemoryConfig;

/// Timing outcome of a single local memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemAccess {
    /// Cycles charged for the access.
    pub cycles: u64,
    /// Whether the location was already resident before the access.
    pub hit: bool,
}

/// Byte-addressable local memory with occupancy tracking.
#[derive(Clone, Debug)]
pub struct LocalMemory {
    values: [i64; LOCAL_MEMORY_SIZE],
    occupied: [bool; LOCAL_MEMORY_SIZE],
    hit_latency: u64,
    miss_latency: u64,
}

impl LocalMemory {
    /// Creates an empty memory: every location holds 0 and is unoccupied.
    ///
    /// # Arguments
    ///
    /// * `config` - Hit and miss latencies.
    pub const fn new(config: &MemoryConfig) -> Self {
        Self {
            values: [0; LOCAL_MEMORY_SIZE],
            occupied: [false; LOCAL_MEMORY_SIZE],
            hit_latency: config.hit_latency,
            miss_latency: config.miss_latency,
        }
    }

    /// Returns every location to its initial state, keeping the latencies.
    pub fn reset(&mut self) {
        self.values.fill(0);
        self.occupied.fill(false);
    }

    /// Charges an access against `addr` and marks the location occupied.
    fn touch(&mut self, addr: MemAddr) -> MemAccess {
        let idx = addr.index();
        let hit = self.occupied[idx];
        self.occupied[idx] = true;
        MemAccess {
            cycles: if hit { self.hit_latency } else { self.miss_latency },
            hit,
        }
    }

    /// Loads the value stored at `addr`.
    ///
    /// # Returns
    ///
    /// The stored value (0 if never written) and the timing of the access.
    pub fn load(&mut self, addr: MemAddr) -> (i64, MemAccess) {
        let access = self.touch(addr);
        (self.values[addr.index()], access)
    }

    /// Stores `value` at `addr`.
    ///
    /// # Returns
    ///
    /// The timing of the access, based on occupancy before the write.
    pub fn store(&mut self, addr: MemAddr, value: i64) -> MemAccess {
        let access = self.touch(addr);
        self.values[addr.index()] = value;
        access
    }

    /// Reads a location without charging an access or changing occupancy.
    pub const fn peek(&self, addr: MemAddr) -> i64 {
        self.values[addr.index()]
    }

    /// Whether `addr` has been accessed since the last reset.
    pub const fn is_occupied(&self, addr: MemAddr) -> bool {
        self.occupied[addr.index()]
    }

    /// Number of locations accessed since the last reset.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }
}

impl Default for LocalMemory {
    fn default() -> Self {
        Self::new(&MemoryConfig::default())
    }
}
