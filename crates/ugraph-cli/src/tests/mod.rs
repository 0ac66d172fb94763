// crates/ugraph-cli/src/tests/mod.rs
// ============================================================================
// Module: CLI Library Unit Tests
// Description: Unit tests for the message catalog and audit sinks.
// Purpose: Keep crate-private catalog data and sink wiring covered.
// Dependencies: ugraph-cli library modules
// ============================================================================

//! ## Overview
//! Unit tests for crate-private catalog data and audit sink wiring.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]
