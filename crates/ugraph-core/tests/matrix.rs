// crates/ugraph-core/tests/matrix.rs
// ============================================================================
// Module: Adjacency Matrix Tests
// Description: Tests for the dense matrix view and its text rendering.
// ============================================================================
//! ## Overview
//! Validates matrix construction, bounds handling, and the byte-exact matrix
//! and adjacency text output.

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

mod support;

use support::PATH3;
use support::TRIANGLE;
use support::TestResult;
use support::ensure;
use support::parse;
use ugraph_core::AdjacencyMatrix;
use ugraph_core::GraphError;
use ugraph_core::IndexBase;
use ugraph_core::MatrixFormat;
use ugraph_core::render_matrix;
use ugraph_core::UndirectedGraph;
use ugraph_core::write_adjacency;
use ugraph_core::write_graph_matrix;

// ============================================================================
// SECTION: Matrix Model
// ============================================================================

#[test]
fn from_rows_rejects_ragged_rows() {
    let rows = vec![vec![false, true], vec![true]];
    assert_eq!(
        AdjacencyMatrix::from_rows(&rows),
        Err(GraphError::MatrixNotSquare {
            size: 2,
            row: 1,
            columns: 1,
        })
    );
}

#[test]
fn get_outside_grid_reads_false_and_set_fails() -> TestResult {
    let mut matrix = AdjacencyMatrix::new(2);
    matrix.set(0, 1, true)?;
    ensure(matrix.get(0, 1), "cell set")?;
    ensure(!matrix.get(5, 5), "outside reads false")?;
    ensure(matrix.set(2, 0, true).is_err(), "outside write rejected")?;
    ensure(matrix.row(2).is_none(), "no third row")?;
    Ok(())
}

#[test]
fn graph_matrix_marks_each_listed_neighbor() -> TestResult {
    let matrix = parse(PATH3)?.adjacency_matrix();
    let expected = vec![vec![false, true, true], vec![true, false, false], vec![true, false, false]];
    ensure(matrix.to_rows() == expected, "path matrix")?;
    ensure(matrix.is_symmetric(), "symmetric")?;
    ensure(matrix.set_count() == 4, "four set cells")?;
    Ok(())
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

#[test]
fn default_format_matches_classic_output() -> TestResult {
    let text = render_matrix(&parse(TRIANGLE)?.adjacency_matrix(), &MatrixFormat::default());
    ensure(text == "0 1 1 \n1 0 1 \n1 1 0 \n", format!("unexpected output: {text:?}"))?;
    Ok(())
}

#[test]
fn custom_format_without_trailing_separator() -> TestResult {
    let format = MatrixFormat {
        one: "#".to_string(),
        zero: ".".to_string(),
        separator: String::new(),
        trailing_separator: false,
    };
    let text = render_matrix(&parse(PATH3)?.adjacency_matrix(), &format);
    ensure(text == ".##\n#..\n#..\n", format!("unexpected output: {text:?}"))?;
    Ok(())
}

#[test]
fn streamed_graph_matrix_matches_dense_rendering() -> TestResult {
    let custom = MatrixFormat {
        one: "x".to_string(),
        zero: "-".to_string(),
        separator: "|".to_string(),
        trailing_separator: false,
    };
    let one_way = UndirectedGraph::from_adjacency_lists(vec![vec![], vec![0, 0, 1]])?;
    for graph in [parse(TRIANGLE)?, parse(PATH3)?, one_way, UndirectedGraph::with_nodes(0)?] {
        for format in [MatrixFormat::default(), custom.clone()] {
            let mut streamed = Vec::new();
            write_graph_matrix(&mut streamed, &graph, &format)?;
            let dense = render_matrix(&graph.adjacency_matrix(), &format);
            ensure(String::from_utf8(streamed)? == dense, "streamed rows match dense matrix")?;
        }
    }
    Ok(())
}

#[test]
fn empty_matrix_renders_empty_string() {
    assert_eq!(render_matrix(&AdjacencyMatrix::new(0), &MatrixFormat::default()), "");
}

#[test]
fn adjacency_lines_follow_index_base() -> TestResult {
    let graph = parse(PATH3)?;
    let mut one_based = Vec::new();
    write_adjacency(&mut one_based, &graph, IndexBase::One)?;
    ensure(String::from_utf8(one_based)? == "1: 2 3\n2: 1\n3: 1\n", "1-based lines")?;

    let mut zero_based = Vec::new();
    write_adjacency(&mut zero_based, &graph, IndexBase::Zero)?;
    ensure(String::from_utf8(zero_based)? == "0: 1 2\n1: 0\n2: 0\n", "0-based lines")?;
    Ok(())
}
