#![deny(missing_docs)]

//! Chainer — sequential composition of fallible steps.
//!
//! # Design Goals
//!
//! Chainer is focused on **flat, branch-free sequencing**:
//!
//! - **One slot of state**: the most recent [`Outcome`] is all a chain carries
//! - **Sticky failure**: the first `Failure` latches; later steps never run
//! - **Fluent by identity**: `chain` returns the same instance, so pipelines
//!   read as a single expression instead of nested conditionals
//!
//! # Core Concepts
//!
//! - [`Outcome`]: a `Success(value)` or `Failure(value)` returned by a step
//! - [`Step`]: a single unit of work invoked with the previous carried value
//! - [`Chainer`]: the state slot with `chain` (run-or-skip) and `result` (read)
//!
//! # Example
//!
//! ```
//! use chainer::{Chainer, Outcome};
//!
//! let mut chain = Chainer::new();
//! let result = chain
//!     .chain(|_: Option<&u32>| Outcome::Success(2))
//!     .chain(|prev: Option<&u32>| Outcome::Success(prev.copied().unwrap_or(0) * 21))
//!     .result();
//!
//! assert_eq!(result, Some(&Outcome::Success(42)));
//! ```
//!
// Re-export paste for macros
pub use paste;

// Modules
pub mod chainer;
mod macros;
pub mod outcome;
pub mod step;

// Re-exports for convenience
pub use chainer::{Chainer, NoOutcome, Phase};
pub use outcome::Outcome;
pub use step::{always, Step};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests;
