//! Common test utilities for icongen CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project root, tool directory and config home
//! - Assertion macros: `assert_generated!`, `assert_output_contains!`, etc.
//! - Fixtures: fake `rsvg-convert` scripts and SVG content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
