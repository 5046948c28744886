//! Common test utilities for arsenal CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp project directory
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`
//! - Fixtures: Reusable data file constants

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
