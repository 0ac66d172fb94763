// crates/ugraph-core/src/render.rs
// ============================================================================
// Module: Text Rendering
// Description: Plain-text writers for adjacency matrices and adjacency lists.
// Purpose: Produce the line-oriented output consumed by the CLI and tests.
// Dependencies: std::io, crate::{edge_list, graph, matrix}
// ============================================================================

//! ## Overview
//! The matrix writer prints one line per row. With the default
//! [`MatrixFormat`] every cell is printed as `1` or `0` followed by a single
//! space, and each row is terminated by a newline:
//!
//! ```text
//! 0 1 1
//! 1 0 1
//! 1 1 0
//! ```
//!
//! The adjacency writer prints `label: n1 n2 ...` per node using the chosen
//! [`IndexBase`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Write;

use serde::Deserialize;
use serde::Serialize;

use crate::edge_list::IndexBase;
use crate::graph::UndirectedGraph;
use crate::graph::to_usize;
use crate::matrix::AdjacencyMatrix;

// ============================================================================
// SECTION: Matrix Format
// ============================================================================

/// Symbols and separators used when printing a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixFormat {
    /// Text printed for a set cell.
    pub one: String,
    /// Text printed for a clear cell.
    pub zero: String,
    /// Text placed between cells.
    pub separator: String,
    /// Whether the separator also follows the last cell of a row.
    pub trailing_separator: bool,
}

impl Default for MatrixFormat {
    fn default() -> Self {
        Self {
            one: "1".to_string(),
            zero: "0".to_string(),
            separator: " ".to_string(),
            trailing_separator: true,
        }
    }
}

// ============================================================================
// SECTION: Writers
// ============================================================================

/// Writes `matrix` to `out` using `format`.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_matrix<W>(
    out: &mut W,
    matrix: &AdjacencyMatrix,
    format: &MatrixFormat,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut line = String::new();
    for row in matrix.rows() {
        write_row(out, &mut line, row, format)?;
    }
    Ok(())
}

/// Writes the adjacency matrix of `graph` to `out` one row at a time.
///
/// Produces the same text as [`write_matrix`] over
/// [`UndirectedGraph::adjacency_matrix`] while holding a single row in
/// memory, so output size is bounded only by `out`.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_graph_matrix<W>(
    out: &mut W,
    graph: &UndirectedGraph,
    format: &MatrixFormat,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut row = vec![false; graph.node_count()];
    let mut line = String::new();
    for list in graph.adjacencies() {
        row.fill(false);
        for neighbor in list {
            if let Some(cell) = row.get_mut(to_usize(*neighbor)) {
                *cell = true;
            }
        }
        write_row(out, &mut line, &row, format)?;
    }
    Ok(())
}

/// Renders `matrix` into a string using `format`.
#[must_use]
pub fn render_matrix(matrix: &AdjacencyMatrix, format: &MatrixFormat) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_matrix(&mut buffer, matrix, format);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Formats one matrix row into `line` and writes it to `out`.
fn write_row<W>(
    out: &mut W,
    line: &mut String,
    row: &[bool],
    format: &MatrixFormat,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    line.clear();
    for (column, cell) in row.iter().enumerate() {
        if column > 0 {
            line.push_str(&format.separator);
        }
        line.push_str(if *cell { &format.one } else { &format.zero });
    }
    if format.trailing_separator && !row.is_empty() {
        line.push_str(&format.separator);
    }
    line.push('\n');
    out.write_all(line.as_bytes())
}

/// Writes one `label: neighbours` line per node of `graph`.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_adjacency<W>(out: &mut W, graph: &UndirectedGraph, base: IndexBase) -> io::Result<()>
where
    W: Write + ?Sized,
{
    for (node, list) in graph.adjacencies().iter().enumerate() {
        let mut line = format!("{}:", base.label_usize(node));
        for neighbor in list {
            line.push(' ');
            line.push_str(&base.label(*neighbor).to_string());
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}
