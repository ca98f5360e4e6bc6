//! Cooperative stepping executor for the mini-language
//!
//! The sandbox is an explicit state machine — program counter, working
//! array, marked set, optional halt error — rather than a suspended
//! coroutine, so the host can synchronously pause, resume, and reset it
//! from any state. [`Sandbox::step`] executes exactly one instruction and
//! returns the delay the host should wait before the next call; the host
//! re-renders in between. Pausing is simply not calling `step`; the
//! program counter keeps its place. Resetting rewinds the counter, restores
//! the initial array, and clears marks and error, and because the host owns
//! the timing there is no stale continuation left to fire afterward.
//!
//! A failing instruction (index out of range) halts the sandbox at that
//! instruction: the counter stops moving, the array keeps its last valid
//! contents, and the error stays readable until the next reset.

use super::errors::DslError;
use super::parser::{self, Instr, SourcedInstr};
use rustc_hash::FxHashSet;
use std::time::Duration;

/// Delay charged by `compare`, `swap`, and `mark`.
pub const DEFAULT_TICK: Duration = Duration::from_millis(350);

/// What one call to [`Sandbox::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction ran; wait this long before stepping again.
    Ran { delay: Duration },
    /// The program counter is past the last instruction.
    Finished,
    /// A previous step failed; inspect [`Sandbox::error`].
    Halted,
}

#[derive(Debug, Clone)]
pub struct Sandbox {
    program: Vec<SourcedInstr>,
    array: Vec<i32>,
    initial: Vec<i32>,
    pc: usize,
    marked: FxHashSet<usize>,
    highlight: Option<(usize, usize)>,
    error: Option<DslError>,
    tick: Duration,
}

impl Sandbox {
    /// Parse `source` and stage it against a copy of `array`.
    ///
    /// A parse failure means nothing has executed; the caller still holds
    /// the untouched array.
    pub fn new(source: &str, array: Vec<i32>) -> Result<Self, DslError> {
        let program = parser::parse_program(source)?;
        Ok(Sandbox {
            program,
            initial: array.clone(),
            array,
            pc: 0,
            marked: FxHashSet::default(),
            highlight: None,
            error: None,
            tick: DEFAULT_TICK,
        })
    }

    /// Override the per-instruction tick (playback speed).
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Execute the instruction at the program counter.
    pub fn step(&mut self) -> StepOutcome {
        if self.error.is_some() {
            return StepOutcome::Halted;
        }
        let Some(sourced) = self.program.get(self.pc) else {
            return StepOutcome::Finished;
        };

        let delay = match sourced.instr {
            Instr::Compare(i, j) => {
                if let Err(e) = self.check_bounds(&[i, j], sourced.line) {
                    self.error = Some(e);
                    return StepOutcome::Halted;
                }
                self.highlight = Some((i, j));
                self.tick
            }
            Instr::Swap(i, j) => {
                if let Err(e) = self.check_bounds(&[i, j], sourced.line) {
                    self.error = Some(e);
                    return StepOutcome::Halted;
                }
                self.array.swap(i, j);
                self.highlight = Some((i, j));
                self.tick
            }
            Instr::Mark(i) => {
                if let Err(e) = self.check_bounds(&[i], sourced.line) {
                    self.error = Some(e);
                    return StepOutcome::Halted;
                }
                self.marked.insert(i);
                self.highlight = None;
                self.tick
            }
            Instr::Sleep(ms) => {
                self.highlight = None;
                Duration::from_millis(ms)
            }
        };

        self.pc += 1;
        StepOutcome::Ran { delay }
    }

    /// Rewind to the initial state. Idempotent and valid from any state,
    /// including mid-run, already-halted, and already-reset.
    pub fn reset(&mut self) {
        self.array = self.initial.clone();
        self.pc = 0;
        self.marked.clear();
        self.highlight = None;
        self.error = None;
    }

    fn check_bounds(&self, indices: &[usize], line: usize) -> Result<(), DslError> {
        for &index in indices {
            if index >= self.array.len() {
                return Err(DslError::IndexOutOfRange {
                    index,
                    len: self.array.len(),
                    line,
                });
            }
        }
        Ok(())
    }

    pub fn array(&self) -> &[i32] {
        &self.array
    }

    pub fn marked(&self) -> &FxHashSet<usize> {
        &self.marked
    }

    /// The pair highlighted by the last compare/swap, if any.
    pub fn highlight(&self) -> Option<(usize, usize)> {
        self.highlight
    }

    pub fn error(&self) -> Option<&DslError> {
        self.error.as_ref()
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// Source line of the instruction about to execute (or that failed).
    pub fn current_line(&self) -> Option<usize> {
        self.program.get(self.pc).map(|s| s.line)
    }

    pub fn finished(&self) -> bool {
        self.error.is_none() && self.pc >= self.program.len()
    }

    pub fn halted(&self) -> bool {
        self.error.is_some()
    }
}
