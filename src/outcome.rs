//! The outcome every step returns.
//!
//! An `Outcome` is the uniform contract between a chain and its steps: a
//! success or a failure, each carrying a value of the same type. The chain
//! never builds outcomes itself; steps do.

use serde::{Deserialize, Serialize};

/// Outcome of a single step execution.
///
/// Both variants carry a value. Which variant a step returns decides whether
/// the chain keeps running or latches into its halted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// The step succeeded; its value is fed to the next step.
    Success(T),
    /// The step failed; the chain halts and all later steps are skipped.
    Failure(T),
}

impl<T> Outcome<T> {
    /// Returns `true` if this outcome is a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this outcome is a `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Get a reference to the carried value, success or failure alike.
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }

    /// Consume the outcome and return the carried value.
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }

    /// Map the carried value, preserving the variant.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(value) => Outcome::Failure(f(value)),
        }
    }
}
