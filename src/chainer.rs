//! The chain state holder.
//!
//! A `Chainer` owns a single mutable slot: the most recent [`Outcome`]. The
//! two operations on it are `chain`, which runs a step or skips it when a
//! failure has latched, and `result`, which reads the slot.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::step::Step;

/// The current phase of a chain, derived from its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No step has run yet.
    #[default]
    Idle,
    /// The last step succeeded; the next step will run.
    Running,
    /// A failure latched; every later step is skipped.
    Halted,
}

/// Error returned by [`Chainer::try_result`] when no step has run yet.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no step has run yet")]
pub struct NoOutcome;

/// Runs an ordered series of steps, threading each success value into the
/// next step and latching on the first failure.
///
/// `chain` always returns the same instance, so pipelines compose fluently:
///
/// ```
/// use chainer::{Chainer, Outcome};
///
/// let mut chain = Chainer::new();
/// chain
///     .chain(|_: Option<&bool>| Outcome::Success(true))
///     .chain(|_: Option<&bool>| Outcome::Failure(false))
///     .chain(|_: Option<&bool>| Outcome::Success(true)); // skipped
///
/// assert_eq!(chain.result(), Some(&Outcome::Failure(false)));
/// ```
///
/// A `Chainer` is exclusively owned, synchronous state: each `chain` call runs
/// (or skips) its step fully before returning. Callers that need to share one
/// across threads must serialize access themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chainer<T> {
    current: Option<Outcome<T>>,
}

impl<T> Chainer<T> {
    /// Create a fresh chain with no outcome stored.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Returns `true` once a `Failure` outcome has latched.
    pub fn halted(&self) -> bool {
        matches!(self.current, Some(Outcome::Failure(_)))
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        match &self.current {
            None => Phase::Idle,
            Some(outcome) if outcome.is_failure() => Phase::Halted,
            Some(_) => Phase::Running,
        }
    }

    /// Run the step, or skip it if the chain has halted.
    ///
    /// The step receives `None` on the first-ever call on this instance and
    /// the previously stored carried value on every later call. Its returned
    /// outcome replaces the slot. Once the slot holds a `Failure` the step is
    /// not invoked and the slot is left untouched.
    ///
    /// `chain` itself never fails. A panic inside the step propagates to the
    /// caller unmodified and leaves the slot exactly as it was before the
    /// call.
    pub fn chain<S>(&mut self, mut step: S) -> &mut Self
    where
        S: Step<T>,
    {
        if self.halted() {
            return self;
        }
        let outcome = step.run(self.current.as_ref().map(Outcome::value));
        self.current = Some(outcome);
        self
    }

    /// Read the stored outcome: the last success, or the first failure.
    ///
    /// Returns `None` until a step has run.
    pub fn result(&self) -> Option<&Outcome<T>> {
        self.current.as_ref()
    }

    /// Read the stored outcome, failing if no step has run yet.
    pub fn try_result(&self) -> Result<&Outcome<T>, NoOutcome> {
        self.current.as_ref().ok_or(NoOutcome)
    }

    /// Consume the chain and return the stored outcome.
    pub fn into_result(self) -> Option<Outcome<T>> {
        self.current
    }
}

impl<T> Default for Chainer<T> {
    fn default() -> Self {
        Self::new()
    }
}
