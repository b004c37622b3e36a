//! Step trait and helpers.
//!
//! A `Step` is an atomic unit of work invoked with the value carried by the
//! previous outcome. Closures of the right shape are steps with no ceremony;
//! named types implement the trait directly when a step needs its own state.

use crate::outcome::Outcome;

/// A single unit of work in a chain.
///
/// The chain invokes `run` with `None` on the first step of a fresh chain and
/// with `Some(&value)` of the previously stored outcome on every later step.
/// Whatever the step returns becomes the chain's new current outcome.
pub trait Step<T> {
    /// Run the step with the previous carried value, if any.
    fn run(&mut self, prev: Option<&T>) -> Outcome<T>;
}

impl<T, F> Step<T> for F
where
    F: FnMut(Option<&T>) -> Outcome<T>,
{
    fn run(&mut self, prev: Option<&T>) -> Outcome<T> {
        self(prev)
    }
}

/// A step that ignores the previous value and replies with a clone of a fixed
/// outcome on every invocation.
pub fn always<T: Clone>(outcome: Outcome<T>) -> impl Step<T> {
    move |_: Option<&T>| outcome.clone()
}
