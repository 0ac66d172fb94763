// crates/ugraph-cli/src/lib.rs
// ============================================================================
// Module: ugraph CLI Library
// Description: Shared helpers for the `ugraph` binary.
// Purpose: Expose the message catalog and audit sinks to the binary and tests.
// Dependencies: crate::{audit, i18n}
// ============================================================================

//! ## Overview
//! The `ugraph` binary keeps its command dispatch in `main.rs`; this library
//! holds the pieces that are tested independently: the [`t!`] message
//! catalog and the audit sinks.

pub mod audit;
pub mod i18n;

#[cfg(test)]
mod tests;
