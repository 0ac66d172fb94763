// crates/ugraph-core/src/tests.rs
// ============================================================================
// Module: ugraph Core Unit Tests
// Description: Crate-internal checks for node label conversions.
// Purpose: Cover helpers that integration tests cannot reach.
// Dependencies: ugraph-core
// ============================================================================

//! ## Overview
//! Unit tests for crate-private helpers. Public behaviour is covered by the
//! integration suites under `tests/`.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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

// ============================================================================
// SECTION: Tests
// ============================================================================

use crate::graph::NodeIndex;
use crate::graph::to_index;
use crate::graph::to_usize;

#[test]
fn node_label_conversions_are_inverse_in_range() {
    for position in [0_usize, 1, 7, 65_535] {
        assert_eq!(to_usize(to_index(position)), position);
    }
}

#[test]
fn oversized_positions_saturate_instead_of_wrapping() {
    let position = usize::try_from(u64::from(NodeIndex::MAX) + 1).unwrap_or(usize::MAX);
    assert_eq!(to_index(position), NodeIndex::MAX);
}
