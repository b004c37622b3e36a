//! Tests for the `pipeline!` macro.

use crate::{pipeline, Outcome};

use super::common::{Add, Probe, Sub};

pipeline! {
    Tally<u8> {
        first: Add,
        second: Add,
        third: Sub,
    }
}

pipeline! {
    Guarded<u8> {
        base: Add,
        overflow: Add,
        witness: Probe,
    }
}

/// A pipeline runs its steps in declaration order through one chain.
#[test]
fn pipeline_runs_steps_in_order() {
    let chain = Tally::new(TallySteps {
        first: Add(5),
        second: Add(5),
        third: Sub(3),
    })
    .run();

    assert_eq!(chain.result(), Some(&Outcome::Success(7)));
}

/// A failing step halts the pipeline; steps after it never run.
#[test]
fn pipeline_halts_at_the_first_failure() {
    let witness = Probe::new(Outcome::Success(1));
    let seen = witness.seen.clone();

    let chain = Guarded::new(GuardedSteps {
        base: Add(200),
        overflow: Add(100), // 200 + 100 overflows
        witness,
    })
    .run();

    assert_eq!(chain.result(), Some(&Outcome::Failure(200)));
    assert!(seen.borrow().is_empty());
}

/// Same pipeline type, failing input: the failure is the final result.
#[test]
fn pipeline_surfaces_the_first_failure() {
    let chain = Tally::new(TallySteps {
        first: Add(200),
        second: Add(100),
        third: Sub(1),
    })
    .run();

    assert_eq!(chain.result(), Some(&Outcome::Failure(200)));
}
