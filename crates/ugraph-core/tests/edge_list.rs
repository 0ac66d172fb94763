// crates/ugraph-core/tests/edge_list.rs
// ============================================================================
// Module: Edge-List Codec Tests
// Description: Parsing, limits, and writing of the edge-list text format.
// ============================================================================
//! ## Overview
//! Validates that edge-list input is tokenised on any whitespace, that every
//! malformed or oversized input fails with a precise error, and that written
//! edge lists parse back to the same adjacency matrix.

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

use std::io::Cursor;

use support::PATH3;
use support::TRIANGLE;
use support::TestResult;
use support::ensure;
use support::parse;
use ugraph_core::EdgeListError;
use ugraph_core::EdgeListOptions;
use ugraph_core::GraphError;
use ugraph_core::IndexBase;
use ugraph_core::UndirectedGraph;
use ugraph_core::parse_edge_list;
use ugraph_core::read_edge_list;
use ugraph_core::write_edge_list;

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn path_input_builds_one_indexed_adjacency() -> TestResult {
    let graph = parse(PATH3)?;
    ensure(graph.neighbors(0) == Some(&[1, 2][..]), "node 1 neighbours")?;
    ensure(graph.neighbors(1) == Some(&[0][..]), "node 2 neighbours")?;
    ensure(graph.neighbors(2) == Some(&[0][..]), "node 3 neighbours")?;
    Ok(())
}

#[test]
fn line_layout_is_not_significant() -> TestResult {
    let compact = parse("3 2 1 2 1 3")?;
    let spread = parse("  3\n\n2\t1\r\n2 1\n 3  ")?;
    ensure(compact == parse(PATH3)? && spread == compact, "same graph")?;
    Ok(())
}

#[test]
fn zero_based_option_shifts_labels() -> TestResult {
    let options = EdgeListOptions {
        index_base: IndexBase::Zero,
        ..EdgeListOptions::default()
    };
    let graph = parse_edge_list("3 2 0 1 0 2", &options)?;
    ensure(graph == parse(PATH3)?, "zero-based equals one-based")?;
    Ok(())
}

#[test]
fn nodes_without_edges_are_allowed() -> TestResult {
    let graph = parse("4 0")?;
    ensure(graph.node_count() == 4 && graph.edge_count() == 0, "isolated nodes")?;
    Ok(())
}

#[test]
fn trailing_tokens_are_ignored_by_default() -> TestResult {
    let graph = parse("2 1 1 2 9 9 9")?;
    ensure(graph.edge_count() == 1, "only declared edges read")?;
    Ok(())
}

#[test]
fn read_edge_list_consumes_reader() -> TestResult {
    let graph = read_edge_list(Cursor::new(TRIANGLE.as_bytes()), &EdgeListOptions::default())?;
    ensure(graph.edge_count() == 3, "triangle edges")?;
    Ok(())
}

// ============================================================================
// SECTION: Failures
// ============================================================================

#[test]
fn empty_input_reports_missing_node_count() {
    let err = parse_edge_list("", &EdgeListOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EdgeListError::UnexpectedEnd {
            expected: "node count"
        }
    ));
}

#[test]
fn truncated_edge_reports_missing_endpoint() {
    let err = parse_edge_list("3 2 1 2 1", &EdgeListOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EdgeListError::UnexpectedEnd {
            expected: "edge endpoint"
        }
    ));
}

#[test]
fn non_integer_token_reports_position() {
    let err = parse_edge_list("3 2 1 x 1 3", &EdgeListOptions::default()).unwrap_err();
    match err {
        EdgeListError::InvalidToken {
            position,
            token,
            ..
        } => {
            assert_eq!(position, 4);
            assert_eq!(token, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_token_is_invalid() {
    let err = parse_edge_list("-3 0", &EdgeListOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EdgeListError::InvalidToken {
            position: 1,
            ..
        }
    ));
}

#[test]
fn endpoint_zero_is_out_of_range_when_one_based() {
    let err = parse_edge_list("2 1 0 1", &EdgeListOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EdgeListError::EndpointOutOfRange {
            edge: 1,
            endpoint: 0,
            nodes: 2
        }
    ));
}

#[test]
fn endpoint_past_node_count_is_out_of_range() {
    let err = parse_edge_list("2 2 1 2 2 3", &EdgeListOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EdgeListError::EndpointOutOfRange {
            edge: 2,
            endpoint: 3,
            nodes: 2
        }
    ));
}

#[test]
fn header_limits_are_enforced_before_allocation() {
    let options = EdgeListOptions {
        max_nodes: 10,
        max_edges: 5,
        ..EdgeListOptions::default()
    };
    let nodes = parse_edge_list("11 0", &options).unwrap_err();
    assert!(matches!(
        nodes,
        EdgeListError::TooManyNodes {
            count: 11,
            max: 10
        }
    ));
    let edges = parse_edge_list("3 6", &options).unwrap_err();
    assert!(matches!(
        edges,
        EdgeListError::TooManyEdges {
            count: 6,
            max: 5
        }
    ));
    let huge = parse_edge_list("99999999999999999999999 0", &options).unwrap_err();
    assert!(matches!(huge, EdgeListError::InvalidToken { .. }));
}

#[test]
fn strict_mode_rejects_trailing_tokens() {
    let options = EdgeListOptions {
        reject_trailing: true,
        ..EdgeListOptions::default()
    };
    let err = parse_edge_list("2 1 1 2 7", &options).unwrap_err();
    assert!(matches!(
        err,
        EdgeListError::TrailingInput {
            position: 5
        }
    ));
}

#[test]
fn invalid_utf8_reader_is_an_io_error() {
    let bytes: &[u8] = &[b'2', b' ', 0xff, 0xfe];
    let err = read_edge_list(bytes, &EdgeListOptions::default()).unwrap_err();
    assert!(matches!(err, EdgeListError::Io(_)));
}

// ============================================================================
// SECTION: Writing
// ============================================================================

#[test]
fn written_edge_list_lists_header_then_pairs() -> TestResult {
    let mut out = Vec::new();
    write_edge_list(&mut out, &parse(TRIANGLE)?, IndexBase::One)?;
    ensure(String::from_utf8(out)? == "3 3\n1 2\n1 3\n2 3\n", "triangle edge list")?;
    Ok(())
}

#[test]
fn written_self_loops_parse_back_to_same_lists() -> TestResult {
    let mut graph = UndirectedGraph::with_nodes(3)?;
    graph.add_edge(0, 0)?;
    graph.add_edge(1, 2)?;
    graph.add_edge(2, 2)?;

    let mut out = Vec::new();
    write_edge_list(&mut out, &graph, IndexBase::One)?;
    let reparsed = parse(&String::from_utf8(out)?)?;
    ensure(reparsed.adjacency_matrix() == graph.adjacency_matrix(), "same matrix")?;
    ensure(reparsed.self_loop_count() == 2, "loops preserved")?;
    Ok(())
}

#[test]
fn writing_rejects_one_way_adjacency_before_output() -> TestResult {
    let graph = UndirectedGraph::from_adjacency_lists(vec![vec![], vec![0]])?;
    let mut out = Vec::new();
    let err = write_edge_list(&mut out, &graph, IndexBase::One)
        .err()
        .ok_or("asymmetric graph written")?;
    ensure(
        matches!(
            err,
            EdgeListError::Graph(GraphError::Asymmetric {
                node: 1,
                neighbor: 0
            })
        ),
        format!("unexpected error: {err}"),
    )?;
    ensure(out.is_empty(), "nothing written")?;
    Ok(())
}
