// crates/ugraph-core/src/lib.rs
// ============================================================================
// Module: ugraph Core Root
// Description: Public API surface for the undirected graph library.
// Purpose: Wire together the graph model, matrix view, and text/document codecs.
// Dependencies: crate::{edge_list, error, graph, matrix, render, serde_support}
// ============================================================================

//! ## Overview
//! `ugraph-core` models an undirected graph as one ordered neighbour list per
//! node and converts it to and from a dense adjacency matrix, the 1-indexed
//! edge-list text format, and JSON/RON documents.
//!
//! ```
//! use ugraph_core::EdgeListOptions;
//! use ugraph_core::MatrixFormat;
//! use ugraph_core::parse_edge_list;
//! use ugraph_core::render_matrix;
//!
//! let graph = parse_edge_list("3 2\n1 2\n1 3\n", &EdgeListOptions::default())?;
//! let text = render_matrix(&graph.adjacency_matrix(), &MatrixFormat::default());
//! assert_eq!(text, "0 1 1 \n1 0 0 \n1 0 0 \n");
//! # Ok::<(), ugraph_core::EdgeListError>(())
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod edge_list;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod render;
pub mod serde_support;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use edge_list::EdgeListError;
pub use edge_list::EdgeListOptions;
pub use edge_list::IndexBase;
pub use edge_list::parse_edge_list;
pub use edge_list::read_edge_list;
pub use edge_list::write_edge_list;
pub use error::GraphError;
pub use error::GraphResult;
pub use graph::AdjacencyList;
pub use graph::MAX_NODE_COUNT;
pub use graph::NodeIndex;
pub use graph::UndirectedGraph;
pub use matrix::AdjacencyMatrix;
pub use render::MatrixFormat;
pub use render::render_matrix;
pub use render::write_adjacency;
pub use render::write_graph_matrix;
pub use render::write_matrix;
pub use serde_support::GraphDocument;
pub use serde_support::GraphSerializer;
pub use serde_support::SerdeConfig;
pub use serde_support::SerdeError;
