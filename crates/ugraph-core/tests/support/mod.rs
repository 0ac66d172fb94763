// crates/ugraph-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and fixtures for graph integration tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;

use ugraph_core::EdgeListOptions;
use ugraph_core::UndirectedGraph;
use ugraph_core::parse_edge_list;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across graph integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// Fixtures
// ========================================================================

/// The 3-node path 1-2, 1-3 in 1-indexed edge-list form.
pub const PATH3: &str = "3 2\n1 2\n1 3\n";

/// The complete graph on three nodes in 1-indexed edge-list form.
pub const TRIANGLE: &str = "3 3\n1 2\n2 3\n1 3\n";

/// Parses a fixture with default options.
///
/// # Errors
/// Returns the parse error when the fixture is malformed.
pub fn parse(text: &str) -> TestResult<UndirectedGraph> {
    Ok(parse_edge_list(text, &EdgeListOptions::default())?)
}
