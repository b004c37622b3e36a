//! Tests for the chain combinator.
//!
//! ## Test Organization
//!
//! - `common`: Shared step types and recording fixtures
//! - `basic`: Success paths, fluent identity, value threading
//! - `halt`: Sticky failure, skipping, panic propagation
//! - `pipeline`: The `pipeline!` macro
//!
//! ## Test Steps
//!
//! Tests use a small arithmetic domain over `u8` values:
//! - `Add`: Adds its operand to the previous value, fails on overflow
//! - `Sub`: Subtracts its operand from the previous value, fails on underflow
//! - `Probe`: Records the argument it receives, replies with a fixed outcome

mod common;

mod pipeline;
