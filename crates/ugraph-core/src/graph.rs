// crates/ugraph-core/src/graph.rs
// ============================================================================
// Module: Undirected Graph
// Description: Adjacency-list graph with dense-matrix conversion.
// Purpose: Own the canonical in-memory representation of an undirected graph.
// Dependencies: smallvec, crate::{error, matrix}
// ============================================================================

//! ## Overview
//! [`UndirectedGraph`] keeps one ordered neighbour list per node. Lists are
//! [`SmallVec`] backed so sparse graphs stay allocation-free per node for the
//! common low-degree case.
//!
//! Lists are stored exactly as supplied: duplicates are kept, order is kept,
//! and symmetry is not enforced for list or matrix input. Graphs grown with
//! [`UndirectedGraph::add_edge`] are symmetric by construction.
//!
//! ## Invariants
//! - Every stored neighbour is `< node_count()`.
//! - `node_count()` fits in [`NodeIndex`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use smallvec::SmallVec;

use crate::error::GraphError;
use crate::error::GraphResult;
use crate::matrix::AdjacencyMatrix;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Dense 0-based node label.
pub type NodeIndex = u32;

/// Neighbours kept inline before a list spills to the heap.
pub const INLINE_NEIGHBORS: usize = 8;

/// Ordered neighbour list for a single node.
pub type AdjacencyList = SmallVec<[NodeIndex; INLINE_NEIGHBORS]>;

/// Largest node count representable by [`NodeIndex`].
pub const MAX_NODE_COUNT: usize = NodeIndex::MAX as usize;

/// Undirected graph stored as adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndirectedGraph {
    /// One neighbour list per node, indexed by node label.
    adjacencies: Vec<AdjacencyList>,
}

// ============================================================================
// SECTION: Construction
// ============================================================================

impl UndirectedGraph {
    /// Creates a graph with `nodes` isolated nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::TooManyNodes`] when `nodes` exceeds [`MAX_NODE_COUNT`].
    pub fn with_nodes(nodes: usize) -> GraphResult<Self> {
        ensure_node_count(nodes)?;
        Ok(Self {
            adjacencies: vec![AdjacencyList::new(); nodes],
        })
    }

    /// Creates a graph from one neighbour list per node.
    ///
    /// Nodes with no neighbours are given as empty lists. Each list is copied
    /// in order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] when a neighbour does not name a
    /// node, or [`GraphError::TooManyNodes`] when the list count exceeds
    /// [`MAX_NODE_COUNT`].
    pub fn from_adjacency_lists<I, L>(lists: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = NodeIndex>,
    {
        let adjacencies: Vec<AdjacencyList> =
            lists.into_iter().map(|list| list.into_iter().collect()).collect();
        let node_count = adjacencies.len();
        ensure_node_count(node_count)?;
        for neighbor in adjacencies.iter().flatten() {
            if to_usize(*neighbor) >= node_count {
                return Err(GraphError::NodeOutOfRange {
                    node: u64::from(*neighbor),
                    node_count,
                });
            }
        }
        Ok(Self {
            adjacencies,
        })
    }

    /// Creates a graph from the leading `nodes x nodes` block of a boolean matrix.
    ///
    /// `matrix[i][j] == true` records `j` as a neighbour of `i`. Neighbours are
    /// listed in ascending order. Cells outside the block are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MatrixTooSmall`] when the matrix has fewer than
    /// `nodes` rows or a row shorter than `nodes`, and
    /// [`GraphError::TooManyNodes`] when `nodes` exceeds [`MAX_NODE_COUNT`].
    pub fn from_adjacency_matrix<R>(nodes: usize, matrix: &[R]) -> GraphResult<Self>
    where
        R: AsRef<[bool]>,
    {
        ensure_node_count(nodes)?;
        if matrix.len() < nodes {
            return Err(GraphError::MatrixTooSmall {
                nodes,
                rows: matrix.len(),
                row: matrix.len(),
                columns: 0,
            });
        }
        let mut adjacencies = Vec::with_capacity(nodes);
        for (row_index, row) in matrix.iter().take(nodes).enumerate() {
            let row = row.as_ref();
            if row.len() < nodes {
                return Err(GraphError::MatrixTooSmall {
                    nodes,
                    rows: matrix.len(),
                    row: row_index,
                    columns: row.len(),
                });
            }
            adjacencies.push(row_neighbors(&row[.. nodes]));
        }
        Ok(Self {
            adjacencies,
        })
    }

    /// Creates a graph from a typed square matrix.
    #[must_use]
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        Self {
            adjacencies: matrix.rows().map(row_neighbors).collect(),
        }
    }

    /// Adds the undirected edge `{a, b}`.
    ///
    /// `b` is appended to `a`'s list and `a` to `b`'s list, so a self-loop is
    /// recorded twice in its own list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] when either endpoint does not name a node.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> GraphResult<()> {
        let node_count = self.node_count();
        for endpoint in [a, b] {
            if to_usize(endpoint) >= node_count {
                return Err(GraphError::NodeOutOfRange {
                    node: u64::from(endpoint),
                    node_count,
                });
            }
        }
        self.adjacencies[to_usize(a)].push(b);
        self.adjacencies[to_usize(b)].push(a);
        Ok(())
    }
}

// ============================================================================
// SECTION: Views
// ============================================================================

impl UndirectedGraph {
    /// Returns the graph as a read-only slice of adjacency lists.
    #[must_use]
    pub fn adjacencies(&self) -> &[AdjacencyList] {
        &self.adjacencies
    }

    /// Returns the square adjacency matrix for this graph.
    #[must_use]
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let size = self.node_count();
        let mut matrix = AdjacencyMatrix::new(size);
        for (row, list) in self.adjacencies.iter().enumerate() {
            for neighbor in list {
                matrix.mark(row, to_usize(*neighbor));
            }
        }
        matrix
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.adjacencies.len()
    }

    /// Returns whether the graph has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adjacencies.is_empty()
    }

    /// Returns the neighbour list of `node`, or `None` for an unknown node.
    #[must_use]
    pub fn neighbors(&self, node: NodeIndex) -> Option<&[NodeIndex]> {
        self.adjacencies.get(to_usize(node)).map(AdjacencyList::as_slice)
    }

    /// Returns the length of `node`'s adjacency list, counting duplicates.
    #[must_use]
    pub fn degree(&self, node: NodeIndex) -> Option<usize> {
        self.neighbors(node).map(<[NodeIndex]>::len)
    }

    /// Returns whether `b` appears in `a`'s adjacency list.
    #[must_use]
    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.neighbors(a).is_some_and(|list| list.contains(&b))
    }

    /// Returns whether every `b` in `a`'s list is matched by `a` in `b`'s list.
    ///
    /// Multiplicity is ignored; this is the symmetry of the adjacency matrix.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.ensure_symmetric().is_ok()
    }

    /// Checks that every adjacency is mirrored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Asymmetric`] naming the first one-way adjacency
    /// in node order.
    pub fn ensure_symmetric(&self) -> GraphResult<()> {
        for (node, list) in self.adjacencies.iter().enumerate() {
            for neighbor in list {
                let mirrored =
                    self.adjacencies[to_usize(*neighbor)].iter().any(|back| to_usize(*back) == node);
                if !mirrored {
                    return Err(GraphError::Asymmetric {
                        node: to_index(node),
                        neighbor: *neighbor,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the edges as `(low, high)` pairs.
    ///
    /// For `a < b` one edge is produced per occurrence of `b` in `a`'s list.
    /// A self-loop on `a` is recorded twice in its own list by
    /// [`UndirectedGraph::add_edge`], so `k` occurrences yield `ceil(k / 2)` edges.
    #[must_use]
    pub fn edges(&self) -> Vec<(NodeIndex, NodeIndex)> {
        let mut edges = Vec::new();
        for (node, list) in self.adjacencies.iter().enumerate() {
            let mut loops = 0_usize;
            for neighbor in list {
                let other = to_usize(*neighbor);
                if other == node {
                    loops += 1;
                } else if node < other {
                    edges.push((to_index(node), *neighbor));
                }
            }
            for _ in 0 .. loops.div_ceil(2) {
                edges.push((to_index(node), to_index(node)));
            }
        }
        edges
    }

    /// Returns the number of edges produced by [`UndirectedGraph::edges`].
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacencies
            .iter()
            .enumerate()
            .map(|(node, list)| {
                let mut loops = 0_usize;
                let mut upper = 0_usize;
                for neighbor in list {
                    let other = to_usize(*neighbor);
                    if other == node {
                        loops += 1;
                    } else if node < other {
                        upper += 1;
                    }
                }
                upper + loops.div_ceil(2)
            })
            .sum()
    }

    /// Returns the number of self-loop edges.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.adjacencies
            .iter()
            .enumerate()
            .map(|(node, list)| {
                list.iter().filter(|neighbor| to_usize(**neighbor) == node).count().div_ceil(2)
            })
            .sum()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects node counts that cannot be labelled by [`NodeIndex`].
const fn ensure_node_count(count: usize) -> GraphResult<()> {
    if count > MAX_NODE_COUNT {
        return Err(GraphError::TooManyNodes {
            count,
            max: MAX_NODE_COUNT,
        });
    }
    Ok(())
}

/// Collects the set columns of a matrix row as neighbours.
fn row_neighbors(row: &[bool]) -> AdjacencyList {
    row.iter().enumerate().filter(|(_, set)| **set).map(|(column, _)| to_index(column)).collect()
}

/// Widens a node label for indexing.
pub(crate) const fn to_usize(node: NodeIndex) -> usize {
    node as usize
}

/// Narrows an in-range position back to a node label.
///
/// Callers only pass positions below a validated node count.
pub(crate) fn to_index(position: usize) -> NodeIndex {
    NodeIndex::try_from(position).unwrap_or(NodeIndex::MAX)
}
