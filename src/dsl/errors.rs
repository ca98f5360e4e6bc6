//! Errors for the array-manipulation mini-language
//!
//! These are the only errors in the program that end users are expected to
//! see and act on. Each variant names the offending token and the 1-based
//! source line so the UI can point at the failing instruction.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DslError {
    /// First token of a line is not a known instruction.
    UnknownInstruction { name: String, line: usize },

    /// Right instruction, wrong number of operands.
    WrongArity {
        instr: &'static str,
        expected: usize,
        got: usize,
        line: usize,
    },

    /// An operand failed to parse as a non-negative integer.
    BadOperand { token: String, line: usize },

    /// An index was outside the current array at execution time.
    IndexOutOfRange {
        index: usize,
        len: usize,
        line: usize,
    },
}

impl DslError {
    /// The 1-based source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            DslError::UnknownInstruction { line, .. }
            | DslError::WrongArity { line, .. }
            | DslError::BadOperand { line, .. }
            | DslError::IndexOutOfRange { line, .. } => *line,
        }
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DslError::UnknownInstruction { name, line } => {
                write!(f, "Line {line}: unknown instruction '{name}'")
            }
            DslError::WrongArity {
                instr,
                expected,
                got,
                line,
            } => {
                write!(
                    f,
                    "Line {line}: '{instr}' expects {expected} operand{}, got {got}",
                    if *expected == 1 { "" } else { "s" }
                )
            }
            DslError::BadOperand { token, line } => {
                write!(f, "Line {line}: '{token}' is not a non-negative integer")
            }
            DslError::IndexOutOfRange { index, len, line } => {
                write!(
                    f,
                    "Line {line}: index {index} is out of range for array of length {len}"
                )
            }
        }
    }
}

impl std::error::Error for DslError {}
