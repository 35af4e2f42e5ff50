//! Instruction Disassembler.
//!
//! Renders decoded instructions back into assembly syntax for trace logging,
//! program listings and test diagnostics. The output of [`disassemble`] is
//! accepted unchanged by [`decode_line`](crate::isa::decode::decode_line).
//!
//! # Usage
//!
//! ```
//! use iss_core::isa::Instruction;
//! use iss_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(&Instruction::ld(7, 2, 1)), "7 LD R2, [R1]");
//! assert_eq!(Instruction::add_imm(8, 0, -1).to_string(), "ADD R0, -1");
//! ```

use std::fmt;

use crate::isa::instruction::{Instruction, Opcode};

impl fmt::Display for Instruction {
    /// Formats the instruction without its line label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.kind.mnemonic();
        match self.kind {
            Opcode::Move | Opcode::Add if self.is_immediate => {
                write!(f, "{op} R{}, {}", self.reg1, self.immediate)
            }
            Opcode::Move | Opcode::Add | Opcode::Compare => {
                write!(f, "{op} R{}, R{}", self.reg1, self.reg2)
            }
            Opcode::JumpIfEqual | Opcode::Jump => write!(f, "{op} {}", self.target),
            Opcode::Load => write!(f, "{op} R{}, [R{}]", self.reg1, self.reg2),
            Opcode::Store => write!(f, "{op} [R{}], R{}", self.reg2, self.reg1),
        }
    }
}

/// Disassembles one instruction, prefixed with its line label.
pub fn disassemble(ins: &Instruction) -> String {
    format!("{} {ins}", ins.line)
}

/// Renders a whole instruction sequence, one instruction per line.
pub fn listing(program: &[Instruction]) -> String {
    program.iter().fold(String::new(), |mut out, ins| {
        out.push_str(&disassemble(ins));
        out.push('\n');
        out
    })
}
