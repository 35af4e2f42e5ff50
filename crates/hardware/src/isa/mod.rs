//! Instruction Set Architecture (ISA) Definitions.
//!
//! The processor recognizes seven operations: MOV, ADD, CMP, JE, JMP, LD and ST.
//! Programs arrive as assembly text, one instruction per line, each prefixed by
//! its source line number:
//!
//! ```text
//! 10 MOV R0, 5
//! 11 ST [R1], R0
//! 12 LD R2, [R1]
//! 13 JMP 10
//! ```

/// Assembly text decoder producing [`Instruction`](instruction::Instruction) values.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Opcode kinds and the decoded instruction record.
pub mod instruction;

pub use instruction::{Instruction, Opcode};
