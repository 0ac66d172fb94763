// crates/ugraph-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration for ugraph.
// Purpose: Give `ugraph config example` and docs a single validated source.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The example lists every key with its default value. It must always parse
//! through [`crate::UgraphConfig::from_toml_str`].

/// Returns a commented `ugraph.toml` example with default values.
#[must_use]
pub fn config_toml_example() -> String {
    let mut out = String::new();
    out.push_str("# ugraph.toml\n");
    out.push_str("# Every key is optional; the values below are the defaults.\n\n");

    out.push_str("[input]\n");
    out.push_str("# Label of the first node in edge lists: \"one\" or \"zero\".\n");
    out.push_str("index_base = \"one\"\n");
    out.push_str("# Maximum input size in bytes (1 ..= 268435456).\n");
    out.push_str("max_input_bytes = 16777216\n");
    out.push_str("# Maximum declared node count (1 ..= 1048576).\n");
    out.push_str("max_nodes = 65536\n");
    out.push_str("# Maximum declared edge count.\n");
    out.push_str("max_edges = 4194304\n");
    out.push_str("# Fail when tokens follow the last declared edge.\n");
    out.push_str("reject_trailing_tokens = false\n\n");

    out.push_str("[output.matrix]\n");
    out.push_str("one = \"1\"\n");
    out.push_str("zero = \"0\"\n");
    out.push_str("separator = \" \"\n");
    out.push_str("# Print the separator after the last cell of each row.\n");
    out.push_str("trailing_separator = true\n\n");

    out.push_str("[audit]\n");
    out.push_str("# \"none\", \"stderr\", or \"file\" (file also needs `path`).\n");
    out.push_str("sink = \"none\"\n");
    out
}
