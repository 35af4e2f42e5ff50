//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! processor state of one run. It coordinates the following:
//! 1. **State Management:** Registers, comparison flag and program counter.
//! 2. **Memory:** The local memory and its hit/miss timing model.
//! 3. **Accounting:** The run statistics, updated as instructions execute.

/// Per-opcode execution rules and the single-step entry point.
pub mod execution;

/// Load/store handling and memory access accounting.
pub mod memory;

use crate::common::{RegisterFile, Result, SimError};
use crate::config::Config;
use crate::core::units::cache::LocalMemory;
use crate::isa::Instruction;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// The program counter is an index into the executing
/// [`Program`](crate::sim::loader::Program), not a source line number.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers and comparison flag.
    pub regs: RegisterFile,
    /// Program counter (instruction index).
    pub pc: usize,
    /// Local memory.
    pub memory: LocalMemory,
    /// Performance statistics.
    pub stats: SimStats,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Cycles charged for non-memory instructions.
    alu_latency: u64,
}

impl Cpu {
    /// Creates a CPU in its initial state.
    ///
    /// # Arguments
    ///
    /// * `config` - Latencies, register width policy and tracing switch.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.core.register_width),
            pc: 0,
            memory: LocalMemory::new(&config.memory),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            alu_latency: config.core.alu_latency,
        }
    }

    /// Returns every piece of run state to its initial value.
    ///
    /// Configuration (latencies, width policy, tracing) is kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new(self.regs.width());
        self.pc = 0;
        self.memory.reset();
        self.stats = SimStats::default();
    }

    /// Reads register `idx` on behalf of `ins`.
    #[inline]
    fn read_reg(&self, ins: &Instruction, idx: usize) -> Result<i64> {
        self.regs.read(idx).ok_or(SimError::InvalidRegister {
            line: ins.line,
            reg: idx,
        })
    }

    /// Writes register `idx` on behalf of `ins`.
    #[inline]
    fn write_reg(&mut self, ins: &Instruction, idx: usize, val: i64) -> Result<()> {
        if self.regs.write(idx, val) {
            Ok(())
        } else {
            Err(SimError::InvalidRegister {
                line: ins.line,
                reg: idx,
            })
        }
    }
}
