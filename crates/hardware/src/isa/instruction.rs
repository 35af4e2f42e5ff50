//! Decoded instruction representation.
//!
//! Provides the [`Opcode`] kinds and the flat [`Instruction`] record consumed by
//! the execution engine. Operand fields are interpreted per opcode:
//!
//! | kind | `reg1` | `reg2` | `immediate` | `target` |
//! |------|--------|--------|-------------|----------|
//! | MOV / ADD | destination | source (register form) | source (immediate form) | - |
//! | CMP | left operand | right operand | - | - |
//! | JE / JMP | - | - | - | target source line |
//! | LD | destination | address register | - | - |
//! | ST | value register | address register | - | - |
//!
//! Jump targets are signed: any integer decodes, and a target outside the
//! program only faults when the jump is taken.

use std::fmt;

use crate::common::SimError;

/// Operation category of a decoded instruction.
///
/// The discriminants are the raw opcode codes accepted by
/// [`Opcode::try_from`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `MOV Rd, Rs|imm`: register or immediate move.
    Move = 0,
    /// `ADD Rd, Rs|imm`: accumulate into a register.
    Add = 1,
    /// `CMP Rn, Rm`: set the comparison flag if equal.
    Compare = 2,
    /// `JE line`: jump if the comparison flag is set.
    JumpIfEqual = 3,
    /// `JMP line`: unconditional jump.
    Jump = 4,
    /// `LD Rd, [Ra]`: load from local memory.
    Load = 5,
    /// `ST [Ra], Rs`: store to local memory.
    Store = 6,
}

impl Opcode {
    /// Every opcode, in raw-code order.
    pub const ALL: [Self; 7] = [
        Self::Move,
        Self::Add,
        Self::Compare,
        Self::JumpIfEqual,
        Self::Jump,
        Self::Load,
        Self::Store,
    ];

    /// Assembly mnemonic for this opcode.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Move => "MOV",
            Self::Add => "ADD",
            Self::Compare => "CMP",
            Self::JumpIfEqual => "JE",
            Self::Jump => "JMP",
            Self::Load => "LD",
            Self::Store => "ST",
        }
    }

    /// Looks up an opcode by its assembly mnemonic (case-sensitive).
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == s)
    }

    /// Whether this opcode accesses local memory.
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Load | Self::Store)
    }

    /// Whether this opcode may redirect the program counter.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::JumpIfEqual | Self::Jump)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = SimError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(SimError::UnknownOpcode(code))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// One decoded instruction.
///
/// Values are immutable once built; the constructors below produce the
/// operand layout each opcode expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Source line number; the label jump targets refer to.
    pub line: u32,
    /// Operation category.
    pub kind: Opcode,
    /// First operand (see the module table).
    pub reg1: usize,
    /// Second operand (see the module table).
    pub reg2: usize,
    /// Immediate literal, meaningful only when `is_immediate` is set.
    pub immediate: i64,
    /// Selects the immediate form of MOV and ADD.
    pub is_immediate: bool,
    /// Source line a JE/JMP continues at.
    pub target: i64,
}

impl Instruction {
    const fn new(line: u32, kind: Opcode, reg1: usize, reg2: usize) -> Self {
        Self {
            line,
            kind,
            reg1,
            reg2,
            immediate: 0,
            is_immediate: false,
            target: 0,
        }
    }

    const fn with_immediate(line: u32, kind: Opcode, rd: usize, imm: i64) -> Self {
        Self {
            line,
            kind,
            reg1: rd,
            reg2: 0,
            immediate: imm,
            is_immediate: true,
            target: 0,
        }
    }

    /// `MOV Rd, imm`
    pub const fn mov_imm(line: u32, rd: usize, imm: i64) -> Self {
        Self::with_immediate(line, Opcode::Move, rd, imm)
    }

    /// `MOV Rd, Rs`
    pub const fn mov_reg(line: u32, rd: usize, rs: usize) -> Self {
        Self::new(line, Opcode::Move, rd, rs)
    }

    /// `ADD Rd, imm`
    pub const fn add_imm(line: u32, rd: usize, imm: i64) -> Self {
        Self::with_immediate(line, Opcode::Add, rd, imm)
    }

    /// `ADD Rd, Rs`
    pub const fn add_reg(line: u32, rd: usize, rs: usize) -> Self {
        Self::new(line, Opcode::Add, rd, rs)
    }

    /// `CMP Rn, Rm`
    pub const fn cmp(line: u32, rn: usize, rm: usize) -> Self {
        Self::new(line, Opcode::Compare, rn, rm)
    }

    const fn branch(line: u32, kind: Opcode, target: i64) -> Self {
        let mut ins = Self::new(line, kind, 0, 0);
        ins.target = target;
        ins
    }

    /// `JE target`
    pub const fn je(line: u32, target: i64) -> Self {
        Self::branch(line, Opcode::JumpIfEqual, target)
    }

    /// `JMP target`
    pub const fn jmp(line: u32, target: i64) -> Self {
        Self::branch(line, Opcode::Jump, target)
    }

    /// `LD Rd, [Ra]`
    pub const fn ld(line: u32, rd: usize, ra: usize) -> Self {
        Self::new(line, Opcode::Load, rd, ra)
    }

    /// `ST [Ra], Rs`
    ///
    /// Arguments follow the surface syntax (address first); the value
    /// register is stored in `reg1` and the address register in `reg2`.
    pub const fn st(line: u32, ra: usize, rs: usize) -> Self {
        Self::new(line, Opcode::Store, rs, ra)
    }

    /// Jump target line, for JE and JMP.
    pub const fn target_line(&self) -> Option<i64> {
        if self.kind.is_branch() {
            Some(self.target)
        } else {
            None
        }
    }
}
