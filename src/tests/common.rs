//! Common step types for tests.
//!
//! All chains in the tests carry `u8` values. Failures carry the last good
//! value so both variants stay over the same type.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Outcome, Step};

/// Add step: adds its operand to the previous value, starting from zero.
///
/// Fails on overflow, carrying the value it started from.
#[derive(Debug, Clone)]
pub struct Add(pub u8);

impl Step<u8> for Add {
    fn run(&mut self, prev: Option<&u8>) -> Outcome<u8> {
        let base = prev.copied().unwrap_or(0);
        match base.checked_add(self.0) {
            Some(sum) => Outcome::Success(sum),
            None => Outcome::Failure(base),
        }
    }
}

/// Sub step: subtracts its operand from the previous value.
///
/// Fails on underflow, carrying the value it started from.
#[derive(Debug, Clone)]
pub struct Sub(pub u8);

impl Step<u8> for Sub {
    fn run(&mut self, prev: Option<&u8>) -> Outcome<u8> {
        let base = prev.copied().unwrap_or(0);
        match base.checked_sub(self.0) {
            Some(diff) => Outcome::Success(diff),
            None => Outcome::Failure(base),
        }
    }
}

/// Probe step: records the argument it receives on every invocation, then
/// replies with a fixed outcome.
///
/// Probes sharing one `seen` log reconstruct the exact argument sequence a
/// chain fed to its steps.
#[derive(Debug, Clone)]
pub struct Probe {
    pub seen: Rc<RefCell<Vec<Option<u8>>>>,
    pub reply: Outcome<u8>,
}

impl Probe {
    /// Create a probe with its own empty log.
    pub fn new(reply: Outcome<u8>) -> Self {
        Self {
            seen: Rc::new(RefCell::new(Vec::new())),
            reply,
        }
    }

    /// Create a probe appending to an existing log.
    pub fn sharing(seen: Rc<RefCell<Vec<Option<u8>>>>, reply: Outcome<u8>) -> Self {
        Self { seen, reply }
    }
}

impl Step<u8> for Probe {
    fn run(&mut self, prev: Option<&u8>) -> Outcome<u8> {
        self.seen.borrow_mut().push(prev.copied());
        self.reply
    }
}
