// crates/ugraph-core/src/error.rs
// ============================================================================
// Module: Graph Error Definitions
// Description: Structural failures raised while building graphs and matrices.
// Purpose: Give construction paths one typed error surface.
// Dependencies: thiserror, crate::graph
// ============================================================================

//! ## Overview
//! Construction of [`UndirectedGraph`](crate::UndirectedGraph) and
//! [`AdjacencyMatrix`](crate::AdjacencyMatrix) values is fallible whenever the
//! caller supplies node labels or matrix rows. Every such failure is reported
//! through [`GraphError`] so higher layers (edge-list parsing, document
//! decoding, the CLI) can wrap it without string matching.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::graph::NodeIndex;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Structural errors for graph and matrix construction.
///
/// # Invariants
/// - Indices reported here are 0-based node labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node label does not name a node of the graph.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// Offending node label.
        node: u64,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// The node count cannot be represented by [`NodeIndex`](crate::NodeIndex)
    /// or exceeds a caller-supplied limit.
    #[error("graph has {count} nodes, limit is {max}")]
    TooManyNodes {
        /// Requested node count.
        count: usize,
        /// Maximum supported node count.
        max: usize,
    },

    /// A matrix does not cover the requested `nodes x nodes` block.
    #[error("matrix row {row} has {columns} columns, expected at least {nodes} ({rows} rows)")]
    MatrixTooSmall {
        /// Requested node count.
        nodes: usize,
        /// Rows present in the matrix.
        rows: usize,
        /// First row that is too short (or `rows` when rows are missing).
        row: usize,
        /// Columns found in that row (0 when the row is missing).
        columns: usize,
    },

    /// A neighbour list names a node whose own list does not name it back.
    #[error("node {node} lists {neighbor} but node {neighbor} does not list {node}")]
    Asymmetric {
        /// Node whose list holds the one-way entry.
        node: NodeIndex,
        /// Neighbour missing the reverse entry.
        neighbor: NodeIndex,
    },

    /// Rows passed to a square matrix constructor are ragged.
    #[error("matrix row {row} has {columns} columns, expected {size}")]
    MatrixNotSquare {
        /// Expected side length.
        size: usize,
        /// First offending row.
        row: usize,
        /// Columns found in that row.
        columns: usize,
    },
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for graph construction.
pub type GraphResult<T = ()> = Result<T, GraphError>;
