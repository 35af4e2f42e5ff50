//! Program Loading.
//!
//! This module turns assembly source into a [`Program`] ready for execution. It performs:
//! 1. **Loading:** Reads a source file, or takes source text directly, and decodes it all-or-nothing.
//! 2. **Line Mapping:** Converts jump targets from source-line space to instruction-index space.
//! 3. **Sanity Checks:** Warns when line labels are not contiguous, since jumps then resolve
//!    to unexpected instructions.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::common::{Result, SimError};
use crate::isa::Instruction;
use crate::isa::decode::decode_source;

/// An ordered, finite sequence of decoded instructions.
///
/// The first instruction's line label is the *bias*: a jump to line `L`
/// continues at index `L - bias`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps an already decoded instruction sequence.
    ///
    /// Line labels are expected to increase by exactly one per instruction.
    /// This is not enforced; a gap only produces a warning.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        let program = Self { instructions };
        if !program.is_contiguous() {
            warn!(
                bias = program.bias(),
                len = program.len(),
                "line labels are not contiguous; jump targets may resolve to the wrong instruction"
            );
        }
        program
    }

    /// Decodes assembly source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use iss_core::sim::loader::Program;
    ///
    /// let program = Program::parse("10 MOV R0, 1\n11 JMP 10\n").unwrap();
    /// assert_eq!(program.len(), 2);
    /// assert_eq!(program.bias(), Some(10));
    /// assert_eq!(program.target_index(11), Some(1));
    /// assert_eq!(program.target_index(12), None);
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        Ok(Self::new(decode_source(source)?))
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at execution index `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Instruction> {
        self.instructions.get(idx)
    }

    /// All instructions in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Line label of the first instruction, or `None` for an empty program.
    pub fn bias(&self) -> Option<u32> {
        self.instructions.first().map(|ins| ins.line)
    }

    /// Whether every line label is one more than the previous one.
    pub fn is_contiguous(&self) -> bool {
        self.instructions
            .windows(2)
            .all(|w| w[0].line.checked_add(1) == Some(w[1].line))
    }

    /// Maps a jump target from source-line space to an execution index.
    ///
    /// # Returns
    ///
    /// `Some(target - bias)` when that index names an instruction, `None` otherwise
    /// (including negative targets, targets below the bias and any target in an
    /// empty program).
    pub fn target_index(&self, target_line: i64) -> Option<usize> {
        let bias = i64::from(self.bias()?);
        let idx = target_line.checked_sub(bias)?;
        usize::try_from(idx)
            .ok()
            .filter(|&idx| idx < self.instructions.len())
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

/// Reads and decodes an assembly source file.
///
/// # Arguments
///
/// * `path` - Path to the source file.
///
/// # Returns
///
/// The decoded program, or the first I/O or decode error.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = Program::parse(&source)?;
    debug!(
        path = %path.display(),
        instructions = program.len(),
        bias = program.bias(),
        "loaded program"
    );
    Ok(program)
}
