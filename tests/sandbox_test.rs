// Integration tests for the DSL sandbox

use algotty::dsl::{DslError, Sandbox, StepOutcome};
use std::time::Duration;

const SORT_PROGRAM: &str = "\
# sort three elements with an explicit network
compare 0 1
swap 0 1
compare 1 2
swap 1 2
compare 0 1
swap 0 1
mark 0
mark 1
mark 2
";

#[test]
fn program_runs_to_completion_and_sorts() {
    let mut sandbox = Sandbox::new(SORT_PROGRAM, vec![3, 2, 1]).unwrap();
    while let StepOutcome::Ran { .. } = sandbox.step() {}
    assert!(sandbox.finished());
    assert_eq!(sandbox.array(), &[1, 2, 3]);
    assert_eq!(sandbox.marked().len(), 3);
}

#[test]
fn reset_after_any_play_pause_sequence_restores_everything() {
    let initial = vec![4, 3, 2, 1];
    let mut sandbox = Sandbox::new(SORT_PROGRAM, initial.clone()).unwrap();

    // Interleave runs and resets of various lengths, checking the reset
    // contract each time
    for steps_before_reset in [0, 1, 3, 5, 9, 2] {
        for _ in 0..steps_before_reset {
            sandbox.step();
        }
        sandbox.reset();
        assert_eq!(sandbox.array(), initial.as_slice());
        assert_eq!(sandbox.pc(), 0);
        assert!(sandbox.marked().is_empty());
        assert!(sandbox.error().is_none());
        assert!(sandbox.highlight().is_none());
    }
}

#[test]
fn double_reset_is_idempotent() {
    let mut sandbox = Sandbox::new(SORT_PROGRAM, vec![2, 1, 3]).unwrap();
    sandbox.step();
    sandbox.step();
    sandbox.reset();
    let after_first: Vec<i32> = sandbox.array().to_vec();
    sandbox.reset();
    assert_eq!(sandbox.array(), after_first.as_slice());
    assert_eq!(sandbox.pc(), 0);
}

#[test]
fn parse_failures_carry_line_and_token() {
    match Sandbox::new("compare 0 one\n", vec![1, 2]) {
        Err(DslError::BadOperand { token, line }) => {
            assert_eq!(token, "one");
            assert_eq!(line, 1);
        }
        other => panic!("expected BadOperand, got {other:?}"),
    }

    match Sandbox::new("swap 0 1\n\nswap 0 1 2\n", vec![1, 2]) {
        Err(DslError::WrongArity { line, got, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(got, 3);
        }
        other => panic!("expected WrongArity, got {other:?}"),
    }
}

#[test]
fn runtime_halt_preserves_last_valid_state_and_recovers_on_reset() {
    let source = "swap 0 1\nsleep 100\nswap 1 7\nmark 0\n";
    let mut sandbox = Sandbox::new(source, vec![10, 20]).unwrap();

    assert!(matches!(sandbox.step(), StepOutcome::Ran { .. }));
    assert!(matches!(sandbox.step(), StepOutcome::Ran { .. }));
    assert_eq!(sandbox.step(), StepOutcome::Halted);

    assert!(sandbox.halted());
    assert_eq!(sandbox.array(), &[20, 10], "array keeps last valid state");
    let err = sandbox.error().unwrap();
    assert_eq!(err.line(), 3);
    assert!(err.to_string().contains("out of range"));

    // The documented recovery path: reset back to a known-good state
    sandbox.reset();
    assert!(!sandbox.halted());
    assert_eq!(sandbox.array(), &[10, 20]);
}

#[test]
fn sleep_delay_is_honored_and_state_free() {
    let mut sandbox = Sandbox::new("sleep 42\nmark 0\n", vec![9]).unwrap();
    match sandbox.step() {
        StepOutcome::Ran { delay } => assert_eq!(delay, Duration::from_millis(42)),
        other => panic!("expected Ran, got {other:?}"),
    }
    assert_eq!(sandbox.array(), &[9]);
    assert!(sandbox.marked().is_empty());
}

#[test]
fn tick_override_applies_to_state_instructions() {
    let tick = Duration::from_millis(10);
    let mut sandbox = Sandbox::new("compare 0 1\n", vec![1, 2])
        .unwrap()
        .with_tick(tick);
    match sandbox.step() {
        StepOutcome::Ran { delay } => assert_eq!(delay, tick),
        other => panic!("expected Ran, got {other:?}"),
    }
}

#[test]
fn comment_only_program_finishes_immediately() {
    let mut sandbox = Sandbox::new("# nothing to do\n\n# still nothing\n", vec![1]).unwrap();
    assert_eq!(sandbox.step(), StepOutcome::Finished);
    assert!(sandbox.finished());
}
