//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and local memory.
//! It performs the following:
//! 1. **Address Validation:** Rejects register values outside `[0, 255]`.
//! 2. **Latency Modeling:** Charges the hit or miss latency reported by local memory.
//! 3. **Accounting:** Counts hits and executed loads/stores.

use super::Cpu;
use crate::common::{MemAddr, Result, SimError};
use crate::core::units::cache::MemAccess;
use crate::isa::Instruction;

impl Cpu {
    /// Resolves the address held in the address register of `ins` (`reg2`).
    fn effective_address(&self, ins: &Instruction) -> Result<MemAddr> {
        let raw = self.read_reg(ins, ins.reg2)?;
        MemAddr::from_value(raw).ok_or(SimError::OutOfRangeMemoryAddress {
            line: ins.line,
            address: raw,
        })
    }

    /// Adds the timing of one load/store to the run statistics.
    fn account(&mut self, access: MemAccess) {
        self.stats.cycles = self.stats.cycles.saturating_add(access.cycles);
        self.stats.load_store += 1;
        if access.hit {
            self.stats.memory_hits += 1;
        }
    }

    /// Executes `LD Rd, [Ra]`.
    pub(super) fn execute_load(&mut self, ins: &Instruction) -> Result<()> {
        let addr = self.effective_address(ins)?;
        let (val, access) = self.memory.load(addr);
        self.write_reg(ins, ins.reg1, val)?;
        self.account(access);
        Ok(())
    }

    /// Executes `ST [Ra], Rs`.
    pub(super) fn execute_store(&mut self, ins: &Instruction) -> Result<()> {
        let addr = self.effective_address(ins)?;
        let val = self.read_reg(ins, ins.reg1)?;
        let access = self.memory.store(addr, val);
        self.account(access);
        Ok(())
    }
}
