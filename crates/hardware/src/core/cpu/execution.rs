//! Main Execution Step.
//!
//! This module implements the per-instruction state transition. It performs the following:
//! 1. **Fetch:** Selects the instruction at the program counter; falling off the end halts.
//! 2. **Dispatch:** Applies the MOV/ADD/CMP/JE/JMP/LD/ST rule to registers, flag and memory.
//! 3. **Control Flow:** Advances the program counter or redirects it to a bounds-checked target.
//! 4. **Accounting:** Counts every executed instruction once and charges its cycles.

use tracing::trace;

use super::Cpu;
use crate::common::{Result, SimError};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::disasm::disassemble;
use crate::isa::{Instruction, Opcode};
use crate::sim::loader::Program;

/// State of the CPU after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// The program counter names another instruction.
    Running,
    /// The program counter has reached the end of the program.
    Halted,
}

impl Cpu {
    /// Whether the program counter has run off the end of `program`.
    #[inline]
    pub fn is_halted(&self, program: &Program) -> bool {
        self.pc >= program.len()
    }

    /// Executes the instruction at the program counter.
    ///
    /// A CPU that has already halted stays halted and executes nothing.
    ///
    /// # Errors
    ///
    /// Any fault leaves the CPU in an unspecified intermediate state; the
    /// statistics gathered so far must be discarded.
    pub fn step(&mut self, program: &Program) -> Result<StepStatus> {
        let Some(&ins) = program.get(self.pc) else {
            return Ok(StepStatus::Halted);
        };

        if self.trace {
            trace!(pc = self.pc, cycles = self.stats.cycles, "{}", disassemble(&ins));
        }
        self.stats.instructions += 1;

        let next = match ins.kind {
            Opcode::Move => {
                let src = self.source_operand(&ins)?;
                self.write_reg(&ins, ins.reg1, Alu::execute(AluOp::Move, 0, src))?;
                self.charge_alu();
                self.pc + 1
            }
            Opcode::Add => {
                let acc = self.read_reg(&ins, ins.reg1)?;
                let src = self.source_operand(&ins)?;
                self.write_reg(&ins, ins.reg1, Alu::execute(AluOp::Add, acc, src))?;
                self.charge_alu();
                self.pc + 1
            }
            Opcode::Compare => {
                let a = self.read_reg(&ins, ins.reg1)?;
                let b = self.read_reg(&ins, ins.reg2)?;
                self.regs.set_flag(Alu::execute(AluOp::CompareEq, a, b) != 0);
                self.charge_alu();
                self.pc + 1
            }
            Opcode::JumpIfEqual => {
                self.charge_alu();
                if self.regs.flag() {
                    Self::branch_target(program, &ins)?
                } else {
                    self.pc + 1
                }
            }
            Opcode::Jump => {
                self.charge_alu();
                Self::branch_target(program, &ins)?
            }
            Opcode::Load => {
                self.execute_load(&ins)?;
                self.pc + 1
            }
            Opcode::Store => {
                self.execute_store(&ins)?;
                self.pc + 1
            }
        };

        self.pc = next;
        Ok(if self.is_halted(program) {
            StepStatus::Halted
        } else {
            StepStatus::Running
        })
    }

    /// Second operand of MOV/ADD: the immediate or the value of `reg2`.
    #[inline]
    fn source_operand(&self, ins: &Instruction) -> Result<i64> {
        if ins.is_immediate {
            Ok(ins.immediate)
        } else {
            self.read_reg(ins, ins.reg2)
        }
    }

    /// Resolves the target of a JE/JMP into an instruction index.
    fn branch_target(program: &Program, ins: &Instruction) -> Result<usize> {
        ins.target_line()
            .and_then(|target| program.target_index(target))
            .ok_or(SimError::OutOfRangeControlTarget {
                line: ins.line,
                target: ins.target,
                len: program.len(),
            })
    }

    /// Charges the ALU latency for a non-memory instruction.
    #[inline]
    const fn charge_alu(&mut self) {
        self.stats.cycles = self.stats.cycles.saturating_add(self.alu_latency);
    }
}
