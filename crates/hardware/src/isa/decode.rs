//! Assembly Text Decoder.
//!
//! This module turns one line of assembly into one [`Instruction`]. It performs:
//! 1. **Tokenization:** Splits a line into its line label, mnemonic and operands.
//!    Operands may be separated by commas, whitespace, or both.
//! 2. **Operand Shapes:** Validates registers (`R3`), memory operands (`[R1]`),
//!    immediates (`-12`) and jump targets (`40`) against each mnemonic.
//! 3. **Filtering:** Blank lines and `;` comments produce no instruction.
//!
//! Any mismatch is reported as [`SimError::MalformedInstruction`].

use crate::common::constants::{COMMENT_PREFIX, NUM_REGISTERS, REGISTER_PREFIX};
use crate::common::{Result, SimError};
use crate::isa::instruction::{Instruction, Opcode};

/// Location of the text being decoded, used to build error values.
struct LineCtx<'a> {
    line_no: usize,
    text: &'a str,
}

impl LineCtx<'_> {
    fn malformed(&self, reason: impl Into<String>) -> SimError {
        SimError::MalformedInstruction {
            line: self.line_no,
            text: self.text.to_string(),
            reason: reason.into(),
        }
    }

    fn register(&self, tok: &str) -> Result<usize> {
        let digits = tok
            .strip_prefix(REGISTER_PREFIX)
            .ok_or_else(|| self.malformed(format!("expected a register, found `{tok}`")))?;
        let idx: usize = digits
            .parse()
            .map_err(|_| self.malformed(format!("invalid register `{tok}`")))?;
        if idx >= NUM_REGISTERS {
            return Err(self.malformed(format!(
                "register `{tok}` does not exist (R0-R{})",
                NUM_REGISTERS - 1
            )));
        }
        Ok(idx)
    }

    fn memory(&self, tok: &str) -> Result<usize> {
        let inner = tok
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| self.malformed(format!("expected `[Rn]`, found `{tok}`")))?;
        self.register(inner)
    }

    fn immediate(&self, tok: &str) -> Result<i64> {
        tok.parse()
            .map_err(|_| self.malformed(format!("expected an integer, found `{tok}`")))
    }

    fn target(&self, tok: &str) -> Result<i64> {
        tok.parse()
            .map_err(|_| self.malformed(format!("expected a target line number, found `{tok}`")))
    }

    fn arity<'t>(&self, op: Opcode, operands: &'t [&'t str], want: usize) -> Result<&'t [&'t str]> {
        if operands.len() == want {
            Ok(operands)
        } else {
            Err(self.malformed(format!(
                "{op} takes {want} operand{}, found {}",
                if want == 1 { "" } else { "s" },
                operands.len()
            )))
        }
    }
}

/// Decodes a single line of assembly.
///
/// # Arguments
///
/// * `line_no` - 1-based position of the line in its source text, for error messages.
/// * `text` - The raw line.
///
/// # Returns
///
/// `Ok(None)` for blank and comment-only lines, `Ok(Some(_))` for an instruction.
///
/// # Examples
///
/// ```
/// use iss_core::isa::decode::decode_line;
/// use iss_core::isa::Instruction;
///
/// let ins = decode_line(1, "12 ST [R1], R0").unwrap();
/// assert_eq!(ins, Some(Instruction::st(12, 1, 0)));
/// assert_eq!(decode_line(2, "   ; comment").unwrap(), None);
/// ```
pub fn decode_line(line_no: usize, text: &str) -> Result<Option<Instruction>> {
    let code = text
        .split_once(COMMENT_PREFIX)
        .map_or(text, |(code, _)| code)
        .trim();
    if code.is_empty() {
        return Ok(None);
    }

    let ctx = LineCtx {
        line_no,
        text: text.trim(),
    };
    let tokens: Vec<&str> = code
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let (label, rest) = tokens
        .split_first()
        .ok_or_else(|| ctx.malformed("empty instruction"))?;
    let line: u32 = label
        .parse()
        .map_err(|_| ctx.malformed(format!("expected a line number, found `{label}`")))?;
    let (mnemonic, operands) = rest
        .split_first()
        .ok_or_else(|| ctx.malformed("missing mnemonic"))?;
    let op = Opcode::from_mnemonic(&mnemonic.to_ascii_uppercase())
        .ok_or_else(|| ctx.malformed(format!("unknown mnemonic `{mnemonic}`")))?;

    let ins = match op {
        Opcode::Move | Opcode::Add => {
            let ops = ctx.arity(op, operands, 2)?;
            let rd = ctx.register(ops[0])?;
            if ops[1].starts_with(REGISTER_PREFIX) {
                let rs = ctx.register(ops[1])?;
                if op == Opcode::Move {
                    Instruction::mov_reg(line, rd, rs)
                } else {
                    Instruction::add_reg(line, rd, rs)
                }
            } else {
                let imm = ctx.immediate(ops[1])?;
                if op == Opcode::Move {
                    Instruction::mov_imm(line, rd, imm)
                } else {
                    Instruction::add_imm(line, rd, imm)
                }
            }
        }
        Opcode::Compare => {
            let ops = ctx.arity(op, operands, 2)?;
            Instruction::cmp(line, ctx.register(ops[0])?, ctx.register(ops[1])?)
        }
        Opcode::JumpIfEqual => {
            let ops = ctx.arity(op, operands, 1)?;
            Instruction::je(line, ctx.target(ops[0])?)
        }
        Opcode::Jump => {
            let ops = ctx.arity(op, operands, 1)?;
            Instruction::jmp(line, ctx.target(ops[0])?)
        }
        Opcode::Load => {
            let ops = ctx.arity(op, operands, 2)?;
            Instruction::ld(line, ctx.register(ops[0])?, ctx.memory(ops[1])?)
        }
        Opcode::Store => {
            let ops = ctx.arity(op, operands, 2)?;
            Instruction::st(line, ctx.memory(ops[0])?, ctx.register(ops[1])?)
        }
    };
    Ok(Some(ins))
}

/// Decodes a complete source text.
///
/// Decoding is all-or-nothing: the first malformed line aborts and no
/// instructions are returned.
pub fn decode_source(source: &str) -> Result<Vec<Instruction>> {
    let mut out = Vec::new();
    for (i, text) in source.lines().enumerate() {
        if let Some(ins) = decode_line(i + 1, text)? {
            out.push(ins);
        }
    }
    Ok(out)
}
