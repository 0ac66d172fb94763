// crates/ugraph-core/src/serde_support.rs
// ============================================================================
// Module: Graph Serde Support
// Description: Document model and validated JSON/RON codecs for graphs.
// Purpose: Exchange graphs as structured documents without bypassing checks.
// Dependencies: ron, serde, serde_json, thiserror, crate::{error, graph}
// ============================================================================

//! ## Overview
//! [`GraphDocument`] is the wire model for graphs:
//!
//! ```json
//! {"nodes": 3, "adjacencies": [[1, 2], [0], [0]]}
//! ```
//!
//! Decoding always rebuilds the graph through
//! [`UndirectedGraph::from_adjacency_lists`], so out-of-range neighbours are
//! rejected. Documents are untrusted input; limits in [`SerdeConfig`] are
//! checked before the graph is built.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::error::GraphError;
use crate::graph::NodeIndex;
use crate::graph::UndirectedGraph;

// ============================================================================
// SECTION: Document Model
// ============================================================================

/// Serializable form of an [`UndirectedGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    /// Declared node count; must match `adjacencies.len()`.
    pub nodes: usize,
    /// Neighbour lists indexed by 0-based node label.
    pub adjacencies: Vec<Vec<NodeIndex>>,
}

impl From<&UndirectedGraph> for GraphDocument {
    fn from(graph: &UndirectedGraph) -> Self {
        Self {
            nodes: graph.node_count(),
            adjacencies: graph.adjacencies().iter().map(|list| list.to_vec()).collect(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while encoding or decoding graph documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeError {
    /// Text could not be parsed or produced in the requested format.
    #[error("invalid graph document: {0}")]
    Format(String),
    /// Declared node count disagrees with the number of lists.
    #[error("graph document declares {declared} nodes but lists {actual}")]
    NodeCountMismatch {
        /// Value of the `nodes` field.
        declared: usize,
        /// Number of adjacency lists present.
        actual: usize,
    },
    /// Document exceeds the configured node limit.
    #[error("graph document has {count} nodes, limit is {max}")]
    TooManyNodes {
        /// Node count in the document.
        count: usize,
        /// Configured limit.
        max: usize,
    },
    /// Document is not symmetric while symmetry is required.
    #[error("graph document is not symmetric")]
    NotSymmetric,
    /// Graph construction rejected the document.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Validation settings for document decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerdeConfig {
    /// Largest accepted node count.
    pub max_nodes: usize,
    /// Whether decoded graphs must be symmetric.
    pub require_symmetric: bool,
}

impl Default for SerdeConfig {
    fn default() -> Self {
        Self {
            max_nodes: crate::edge_list::DEFAULT_MAX_NODES,
            require_symmetric: false,
        }
    }
}

// ============================================================================
// SECTION: Serializer
// ============================================================================

/// Validated JSON and RON codec for graphs.
#[derive(Debug, Clone, Default)]
pub struct GraphSerializer {
    /// Decoding limits.
    config: SerdeConfig,
}

impl GraphSerializer {
    /// Creates a serializer with the given configuration.
    #[must_use]
    pub const fn new(config: SerdeConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SerdeConfig {
        &self.config
    }

    /// Serializes a graph as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError::Format`] if serialization fails.
    pub fn to_json(&self, graph: &UndirectedGraph) -> Result<String, SerdeError> {
        serde_json::to_string_pretty(&GraphDocument::from(graph))
            .map_err(|err| SerdeError::Format(err.to_string()))
    }

    /// Deserializes and validates a graph from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError`] when parsing or validation fails.
    pub fn parse_json(&self, text: &str) -> Result<UndirectedGraph, SerdeError> {
        let document: GraphDocument =
            serde_json::from_str(text).map_err(|err| SerdeError::Format(err.to_string()))?;
        self.decode(document)
    }

    /// Serializes a graph as pretty-printed RON.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError::Format`] if serialization fails.
    pub fn to_ron(&self, graph: &UndirectedGraph) -> Result<String, SerdeError> {
        ron::ser::to_string_pretty(&GraphDocument::from(graph), ron::ser::PrettyConfig::default())
            .map_err(|err| SerdeError::Format(err.to_string()))
    }

    /// Deserializes and validates a graph from RON.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError`] when parsing or validation fails.
    pub fn parse_ron(&self, text: &str) -> Result<UndirectedGraph, SerdeError> {
        let document: GraphDocument =
            ron::from_str(text).map_err(|err| SerdeError::Format(err.to_string()))?;
        self.decode(document)
    }

    /// Validates a decoded document and builds the graph.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError`] when the document violates the configuration or
    /// names out-of-range neighbours.
    pub fn decode(&self, document: GraphDocument) -> Result<UndirectedGraph, SerdeError> {
        let actual = document.adjacencies.len();
        if document.nodes != actual {
            return Err(SerdeError::NodeCountMismatch {
                declared: document.nodes,
                actual,
            });
        }
        if actual > self.config.max_nodes {
            return Err(SerdeError::TooManyNodes {
                count: actual,
                max: self.config.max_nodes,
            });
        }
        let graph = UndirectedGraph::from_adjacency_lists(document.adjacencies)?;
        if self.config.require_symmetric && !graph.is_symmetric() {
            return Err(SerdeError::NotSymmetric);
        }
        Ok(graph)
    }
}
