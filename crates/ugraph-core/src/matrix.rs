// crates/ugraph-core/src/matrix.rs
// ============================================================================
// Module: Adjacency Matrix
// Description: Square boolean grid describing node adjacency.
// Purpose: Provide the dense view of a graph and a dense construction input.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! [`AdjacencyMatrix`] stores a square `bool` grid in row-major order. Cell
//! `(i, j)` is set when node `j` appears in node `i`'s adjacency list.
//! Multiplicity is not represented; duplicate edges collapse to one cell.
//!
//! ## Invariants
//! - `cells.len() == size * size` for every constructed value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::slice::ChunksExact;

use crate::error::GraphError;
use crate::error::GraphResult;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Square boolean adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    /// Side length of the matrix.
    size: usize,
    /// Row-major cells.
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates an all-false matrix with the given side length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size.saturating_mul(size)],
        }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MatrixNotSquare`] when any row length differs
    /// from the number of rows.
    pub fn from_rows<R>(rows: &[R]) -> GraphResult<Self>
    where
        R: AsRef<[bool]>,
    {
        let size = rows.len();
        let mut matrix = Self::new(size);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GraphError::MatrixNotSquare {
                    size,
                    row: row_index,
                    columns: row.len(),
                });
            }
            let start = row_index * size;
            matrix.cells[start .. start + size].copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// Returns the side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns whether the matrix has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the cell at `(row, column)`; cells outside the grid read as `false`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> bool {
        if row >= self.size || column >= self.size {
            return false;
        }
        self.cells[row * self.size + column]
    }

    /// Sets the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] when either coordinate is outside the grid.
    pub fn set(&mut self, row: usize, column: usize, value: bool) -> GraphResult<()> {
        for index in [row, column] {
            if index >= self.size {
                return Err(GraphError::NodeOutOfRange {
                    node: u64::try_from(index).unwrap_or(u64::MAX),
                    node_count: self.size,
                });
            }
        }
        self.cells[row * self.size + column] = value;
        Ok(())
    }

    /// Sets the cell at `(row, column)` for coordinates already known to be in range.
    pub(crate) fn mark(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.size && column < self.size, "matrix cell out of bounds");
        self.cells[row * self.size + column] = true;
    }

    /// Returns one row, or `None` when `row` is outside the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start .. start + self.size])
    }

    /// Iterates rows in order.
    #[must_use]
    pub fn rows(&self) -> MatrixRows<'_> {
        MatrixRows {
            // chunks_exact panics on 0; an empty matrix has no cells to chunk.
            inner: self.cells.chunks_exact(self.size.max(1)),
        }
    }

    /// Returns whether `(i, j)` and `(j, i)` agree for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0 .. self.size).all(|i| (i + 1 .. self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns the number of set cells.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }

    /// Copies the matrix into nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }
}

// ============================================================================
// SECTION: Row Iterator
// ============================================================================

/// Iterator over the rows of an [`AdjacencyMatrix`].
#[derive(Debug, Clone)]
pub struct MatrixRows<'a> {
    /// Chunked view over the row-major cells.
    inner: ChunksExact<'a, bool>,
}

impl<'a> Iterator for MatrixRows<'a> {
    type Item = &'a [bool];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MatrixRows<'_> {}
