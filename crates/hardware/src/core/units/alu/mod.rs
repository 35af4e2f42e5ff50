//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer datapath shared by MOV, ADD and CMP.
//! The register width policy is not applied here; it is enforced when the
//! result is written back into the register file.

/// Operations the ALU can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Pass the second operand through.
    Move,
    /// Add both operands, wrapping on 64-bit overflow.
    Add,
    /// Produce 1 if the operands are equal, 0 otherwise.
    CompareEq,
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (current value of the destination register)
    /// * `b`  - Second operand (source register or immediate)
    ///
    /// # Examples
    ///
    /// ```
    /// use iss_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 3), 8);
    /// assert_eq!(Alu::execute(AluOp::Move, 5, 3), 3);
    /// assert_eq!(Alu::execute(AluOp::CompareEq, 8, 3), 0);
    /// ```
    #[inline]
    pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
        match op {
            AluOp::Move => b,
            AluOp::Add => a.wrapping_add(b),
            AluOp::CompareEq => (a == b) as i64,
        }
    }
}
