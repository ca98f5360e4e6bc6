//! Parser for the array-manipulation mini-language
//!
//! The grammar is flat enough that tokenizing and parsing collapse into one
//! pass: split each line on whitespace, dispatch on the first token, parse
//! the operands. Blank lines and `#` comment lines are skipped; every kept
//! instruction remembers its 1-based source line for error reporting and
//! for highlighting the current line during playback.

use super::errors::DslError;

/// One executable instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// Highlight two indices for one tick.
    Compare(usize, usize),
    /// Exchange two elements, then one tick.
    Swap(usize, usize),
    /// Add an index to the persistent marked set, then one tick.
    Mark(usize),
    /// Delay for the given milliseconds; no state change.
    Sleep(u64),
}

/// An instruction plus the source line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcedInstr {
    pub instr: Instr,
    pub line: usize,
}

/// Parse a whole program. The first malformed line aborts the parse, so a
/// program that fails here has executed nothing.
pub fn parse_program(source: &str) -> Result<Vec<SourcedInstr>, DslError> {
    let mut program = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let (name, operands) = (tokens[0], &tokens[1..]);

        let instr = match name {
            "compare" => {
                let [i, j] = two_operands("compare", operands, line)?;
                Instr::Compare(i, j)
            }
            "swap" => {
                let [i, j] = two_operands("swap", operands, line)?;
                Instr::Swap(i, j)
            }
            "mark" => Instr::Mark(one_operand("mark", operands, line)?),
            "sleep" => Instr::Sleep(one_operand("sleep", operands, line)? as u64),
            _ => {
                return Err(DslError::UnknownInstruction {
                    name: name.to_string(),
                    line,
                })
            }
        };

        program.push(SourcedInstr { instr, line });
    }

    Ok(program)
}

fn one_operand(instr: &'static str, operands: &[&str], line: usize) -> Result<usize, DslError> {
    if operands.len() != 1 {
        return Err(DslError::WrongArity {
            instr,
            expected: 1,
            got: operands.len(),
            line,
        });
    }
    parse_int(operands[0], line)
}

fn two_operands(
    instr: &'static str,
    operands: &[&str],
    line: usize,
) -> Result<[usize; 2], DslError> {
    if operands.len() != 2 {
        return Err(DslError::WrongArity {
            instr,
            expected: 2,
            got: operands.len(),
            line,
        });
    }
    Ok([parse_int(operands[0], line)?, parse_int(operands[1], line)?])
}

fn parse_int(token: &str, line: usize) -> Result<usize, DslError> {
    token.parse().map_err(|_| DslError::BadOperand {
        token: token.to_string(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_instructions() {
        let program = parse_program("compare 0 1\nswap 1 2\nmark 0\nsleep 250\n").unwrap();
        assert_eq!(
            program.iter().map(|s| s.instr).collect::<Vec<_>>(),
            vec![
                Instr::Compare(0, 1),
                Instr::Swap(1, 2),
                Instr::Mark(0),
                Instr::Sleep(250),
            ]
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let program = parse_program("# header\n\n  # indented comment\nmark 3\n").unwrap();
        assert_eq!(program.len(), 1);
        assert_eq!(program[0].line, 4);
    }

    #[test]
    fn unknown_instruction_names_the_token() {
        let err = parse_program("compare 0 1\nshuffle 1 2\n").unwrap_err();
        assert_eq!(
            err,
            DslError::UnknownInstruction {
                name: "shuffle".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = parse_program("swap 1\n").unwrap_err();
        assert!(matches!(
            err,
            DslError::WrongArity {
                instr: "swap",
                expected: 2,
                got: 1,
                line: 1,
            }
        ));
    }

    #[test]
    fn non_integer_operand_is_rejected() {
        let err = parse_program("mark x\n").unwrap_err();
        assert_eq!(
            err,
            DslError::BadOperand {
                token: "x".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn negative_operand_is_rejected() {
        let err = parse_program("compare -1 0\n").unwrap_err();
        assert!(matches!(err, DslError::BadOperand { .. }));
    }

    #[test]
    fn line_numbers_survive_interleaved_comments() {
        let program = parse_program("# one\nswap 0 1\n# three\nswap 1 2\n").unwrap();
        assert_eq!(program[0].line, 2);
        assert_eq!(program[1].line, 4);
    }
}
