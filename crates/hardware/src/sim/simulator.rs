//! Simulator: owns the CPU and the program side-by-side.
//!
//! A run is one deterministic pass over a static program. It ends in one of three ways:
//! 1. **Halt:** The program counter falls off the end; statistics are returned.
//! 2. **Fault:** An instruction faults; the error is returned and statistics are dropped.
//! 3. **Guard:** The step budget runs out or the run is cancelled; treated like a fault.
//!
//! Without a budget or cancellation token, a program that loops forever runs forever.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::debug;

use crate::common::constants::NUM_REGISTERS;
use crate::common::{Result, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::execution::StepStatus;
use crate::sim::loader::Program;
use crate::stats::SimStats;

/// Shared flag that asks a running simulation to stop.
///
/// Clones observe the same flag, so one clone can be handed to another
/// thread or a signal handler while the simulator holds the other.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a run that halted normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Aggregate counters.
    pub stats: SimStats,
    /// Final register values, `R0` first.
    pub registers: [i64; NUM_REGISTERS],
    /// Final comparison flag.
    pub flag: bool,
}

impl RunOutcome {
    /// Serializes the outcome as a JSON object.
    pub fn to_json(&self) -> String {
        // Only integers and a bool; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Top-level simulator: CPU state plus the program it executes.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    program: Program,
    max_steps: Option<u64>,
    cancel: Option<CancelToken>,
}

impl Simulator {
    /// Creates a simulator in its initial state.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            program,
            max_steps: config.general.max_steps,
            cancel: None,
        }
    }

    /// Attaches a cancellation token, checked before every instruction.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Overrides the step budget from the configuration.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// The program being executed.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Whether the program has run to completion.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted(&self.program)
    }

    /// Returns the CPU to its initial state so the program can run again.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes a single instruction.
    ///
    /// Ignores the step budget and cancellation token; those only guard [`run`](Self::run).
    pub fn step(&mut self) -> Result<StepStatus> {
        self.cpu.step(&self.program)
    }

    /// Runs from the current state until the program halts.
    ///
    /// # Errors
    ///
    /// Returns the first execution fault, [`SimError::StepBudgetExhausted`] if the
    /// configured budget is used up before halting, or [`SimError::Cancelled`] once
    /// the cancellation token fires. No statistics are returned in those cases.
    pub fn run(&mut self) -> Result<RunOutcome> {
        debug!(
            instructions = self.program.len(),
            bias = self.program.bias(),
            max_steps = self.max_steps,
            "starting run"
        );

        while !self.is_halted() {
            let steps = self.cpu.stats.instructions;
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return Err(SimError::Cancelled { steps });
            }
            if self.max_steps.is_some_and(|max| steps >= max) {
                return Err(SimError::StepBudgetExhausted { steps });
            }
            if let Err(err) = self.cpu.step(&self.program) {
                debug!(pc = self.cpu.pc, %err, "run faulted");
                return Err(err);
            }
        }

        let outcome = RunOutcome {
            stats: self.cpu.stats,
            registers: self.cpu.regs.snapshot(),
            flag: self.cpu.regs.flag(),
        };
        debug!(
            instructions = outcome.stats.instructions,
            cycles = outcome.stats.cycles,
            memory_hits = outcome.stats.memory_hits,
            load_store = outcome.stats.load_store,
            "run halted"
        );
        Ok(outcome)
    }
}

/// Runs `program` once from a fresh state.
///
/// # Examples
///
/// ```
/// use iss_core::config::Config;
/// use iss_core::sim::loader::Program;
/// use iss_core::sim::simulator::execute;
///
/// let program = Program::parse("1 MOV R0, 10\n2 ST [R1], R0\n3 LD R2, [R1]\n").unwrap();
/// let outcome = execute(&program, &Config::default()).unwrap();
/// assert_eq!(outcome.stats.cycles, 1 + 45 + 2);
/// assert_eq!(outcome.registers[2], 10);
/// ```
pub fn execute(program: &Program, config: &Config) -> Result<RunOutcome> {
    Simulator::new(program.clone(), config).run()
}
