// crates/ugraph-core/src/edge_list.rs
// ============================================================================
// Module: Edge-List Codec
// Description: Reader and writer for the whitespace-separated edge-list format.
// Purpose: Turn `n m` headers plus `m` endpoint pairs into graphs and back.
// Dependencies: serde, thiserror, crate::{error, graph}
// ============================================================================

//! ## Overview
//! The edge-list format is a stream of integers separated by arbitrary
//! whitespace: the node count `n`, the edge count `m`, then `m` endpoint
//! pairs. Endpoints are 1-indexed unless [`IndexBase::Zero`] is selected.
//!
//! ```text
//! 3 2
//! 1 2
//! 1 3
//! ```
//!
//! describes the 3-node path. Line structure is not significant.
//!
//! Input is untrusted: the header is bounded by [`EdgeListOptions`] before any
//! allocation, and every endpoint is range-checked.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Read;
use std::io::Write;
use std::str::SplitAsciiWhitespace;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::error::GraphError;
use crate::graph::NodeIndex;
use crate::graph::UndirectedGraph;
use crate::graph::to_index;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default upper bound on the declared node count.
pub const DEFAULT_MAX_NODES: usize = 65_536;
/// Default upper bound on the declared edge count.
pub const DEFAULT_MAX_EDGES: usize = 4_194_304;

// ============================================================================
// SECTION: Index Base
// ============================================================================

/// Numbering used for node labels in text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexBase {
    /// Labels start at 0.
    Zero,
    /// Labels start at 1.
    #[default]
    One,
}

impl IndexBase {
    /// Returns the label of the first node.
    #[must_use]
    pub const fn offset(self) -> u64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Returns the text label for a node.
    #[must_use]
    pub fn label(self, node: NodeIndex) -> u64 {
        u64::from(node) + self.offset()
    }

    /// Returns the text label for a node position.
    #[must_use]
    pub fn label_usize(self, node: usize) -> u64 {
        u64::try_from(node).unwrap_or(u64::MAX).saturating_add(self.offset())
    }

    /// Returns the stable lowercase name used in config and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
        }
    }
}

// ============================================================================
// SECTION: Options
// ============================================================================

/// Parsing limits and numbering for edge-list input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListOptions {
    /// Numbering of endpoint labels.
    pub index_base: IndexBase,
    /// Largest accepted node count.
    pub max_nodes: usize,
    /// Largest accepted edge count.
    pub max_edges: usize,
    /// Whether tokens after the last edge are an error.
    pub reject_trailing: bool,
}

impl Default for EdgeListOptions {
    fn default() -> Self {
        Self {
            index_base: IndexBase::One,
            max_nodes: DEFAULT_MAX_NODES,
            max_edges: DEFAULT_MAX_EDGES,
            reject_trailing: false,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures while reading or writing an edge list.
///
/// Token positions are 1-based and count every integer token from the start
/// of input, header included.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Input ended before the expected value.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// Description of the missing value.
        expected: &'static str,
    },
    /// A token is not a non-negative integer.
    #[error("token {position} ('{token}') is not a valid {expected}")]
    InvalidToken {
        /// 1-based token position.
        position: usize,
        /// Offending token text.
        token: String,
        /// Description of the expected value.
        expected: &'static str,
    },
    /// An endpoint does not name a node.
    #[error("edge {edge} endpoint {endpoint} is outside the {nodes} declared nodes")]
    EndpointOutOfRange {
        /// 1-based edge number.
        edge: usize,
        /// Endpoint label as written.
        endpoint: u64,
        /// Declared node count.
        nodes: usize,
    },
    /// The declared node count exceeds the configured limit.
    #[error("declared node count {count} exceeds limit {max}")]
    TooManyNodes {
        /// Declared node count.
        count: u64,
        /// Configured limit.
        max: usize,
    },
    /// The declared edge count exceeds the configured limit.
    #[error("declared edge count {count} exceeds limit {max}")]
    TooManyEdges {
        /// Declared edge count.
        count: u64,
        /// Configured limit.
        max: usize,
    },
    /// Tokens remain after the declared edges.
    #[error("unexpected trailing input at token {position}")]
    TrailingInput {
        /// 1-based position of the first trailing token.
        position: usize,
    },
    /// Reading the input failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),
    /// Writing the output failed.
    #[error("failed to write edge list: {0}")]
    Write(#[source] io::Error),
    /// Graph construction rejected the input.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses an edge list from text.
///
/// # Errors
///
/// Returns [`EdgeListError`] when the input is truncated, malformed, exceeds
/// the limits in `options`, or names an endpoint outside the declared nodes.
pub fn parse_edge_list(
    input: &str,
    options: &EdgeListOptions,
) -> Result<UndirectedGraph, EdgeListError> {
    let mut tokens = Tokens::new(input);

    let nodes = tokens.next_integer("node count")?;
    let nodes_limit = u64::try_from(options.max_nodes).unwrap_or(u64::MAX);
    if nodes > nodes_limit {
        return Err(EdgeListError::TooManyNodes {
            count: nodes,
            max: options.max_nodes,
        });
    }
    let edges = tokens.next_integer("edge count")?;
    let edges_limit = u64::try_from(options.max_edges).unwrap_or(u64::MAX);
    if edges > edges_limit {
        return Err(EdgeListError::TooManyEdges {
            count: edges,
            max: options.max_edges,
        });
    }

    // Both counts are bounded by usize limits above.
    let nodes = usize::try_from(nodes).unwrap_or(usize::MAX);
    let edges = usize::try_from(edges).unwrap_or(usize::MAX);
    let mut graph = UndirectedGraph::with_nodes(nodes)?;
    for edge in 1 ..= edges {
        let from = tokens.next_integer("edge endpoint")?;
        let to = tokens.next_integer("edge endpoint")?;
        let from = resolve_endpoint(from, edge, nodes, options.index_base)?;
        let to = resolve_endpoint(to, edge, nodes, options.index_base)?;
        graph.add_edge(from, to)?;
    }

    if options.reject_trailing && tokens.peek_remaining() {
        return Err(EdgeListError::TrailingInput {
            position: tokens.position + 1,
        });
    }
    Ok(graph)
}

/// Reads an edge list from any reader.
///
/// The reader is consumed to the end before parsing; callers reading from
/// untrusted sources should bound it (for example with [`Read::take`]).
///
/// # Errors
///
/// Returns [`EdgeListError::Io`] when reading fails or the input is not
/// UTF-8, otherwise the errors of [`parse_edge_list`].
pub fn read_edge_list<R>(
    mut reader: R,
    options: &EdgeListOptions,
) -> Result<UndirectedGraph, EdgeListError>
where
    R: Read,
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_edge_list(&input, options)
}

/// Converts a written endpoint label into a node index.
fn resolve_endpoint(
    label: u64,
    edge: usize,
    nodes: usize,
    base: IndexBase,
) -> Result<NodeIndex, EdgeListError> {
    let out_of_range = || EdgeListError::EndpointOutOfRange {
        edge,
        endpoint: label,
        nodes,
    };
    let index = label.checked_sub(base.offset()).ok_or_else(out_of_range)?;
    let index = usize::try_from(index).map_err(|_| out_of_range())?;
    if index >= nodes {
        return Err(out_of_range());
    }
    Ok(to_index(index))
}

// ============================================================================
// SECTION: Writing
// ============================================================================

/// Writes `graph` in edge-list form.
///
/// The header is `n m`, followed by one `a b` line per entry of
/// [`UndirectedGraph::edges`]. Parsing the output yields a graph with the same
/// adjacency matrix.
///
/// # Errors
///
/// Returns [`EdgeListError::Graph`] with [`GraphError::Asymmetric`] when an
/// adjacency is not mirrored, and [`EdgeListError::Write`] for any I/O error raised by `out`.
pub fn write_edge_list<W>(
    out: &mut W,
    graph: &UndirectedGraph,
    base: IndexBase,
) -> Result<(), EdgeListError>
where
    W: Write + ?Sized,
{
    graph.ensure_symmetric()?;
    let edges = graph.edges();
    writeln!(out, "{} {}", graph.node_count(), edges.len()).map_err(EdgeListError::Write)?;
    for (a, b) in edges {
        writeln!(out, "{} {}", base.label(a), base.label(b)).map_err(EdgeListError::Write)?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Tokenizer
// ============================================================================

/// Whitespace tokenizer that tracks token positions.
struct Tokens<'a> {
    /// Remaining tokens.
    inner: std::iter::Peekable<SplitAsciiWhitespace<'a>>,
    /// Number of tokens consumed so far.
    position: usize,
}

impl<'a> Tokens<'a> {
    /// Creates a tokenizer over `input`.
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace().peekable(),
            position: 0,
        }
    }

    /// Consumes the next token as a non-negative integer.
    fn next_integer(&mut self, expected: &'static str) -> Result<u64, EdgeListError> {
        let token = self.inner.next().ok_or(EdgeListError::UnexpectedEnd {
            expected,
        })?;
        self.position += 1;
        token.parse::<u64>().map_err(|_| EdgeListError::InvalidToken {
            position: self.position,
            token: token.to_string(),
            expected,
        })
    }

    /// Returns whether any token is left.
    fn peek_remaining(&mut self) -> bool {
        self.inner.peek().is_some()
    }
}
