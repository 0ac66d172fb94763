// crates/ugraph-cli/src/main.rs
// ============================================================================
// Module: ugraph CLI Entry Point
// Description: Command dispatcher for graph conversion and inspection.
// Purpose: Read untrusted graph input with hard limits and print one view.
// Dependencies: clap, serde, serde_json, thiserror, ugraph-config, ugraph-core
// ============================================================================

//! ## Overview
//! `ugraph` reads an undirected graph from a file or stdin and prints it as an
//! adjacency matrix, adjacency lists, another interchange format, or a JSON
//! summary. With no config file, `ugraph matrix` reads a 1-indexed edge list
//! and prints `0`/`1` cells each followed by a space.
//!
//! All user-facing strings are routed through the message catalog. Input is
//! untrusted: reads are bounded by `input.max_input_bytes` and parsing is
//! bounded by the node and edge limits in `[input]`.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use ugraph_cli::audit::AuditOutcome;
use ugraph_cli::audit::AuditSink;
use ugraph_cli::audit::GraphAuditEvent;
use ugraph_cli::audit::GraphAuditEventParams;
use ugraph_cli::audit::sink_from_config;
use ugraph_cli::t;
use ugraph_config::UgraphConfig;
use ugraph_config::config_toml_example;
use ugraph_core::EdgeListError;
use ugraph_core::GraphSerializer;
use ugraph_core::UndirectedGraph;
use ugraph_core::parse_edge_list;
use ugraph_core::write_adjacency;
use ugraph_core::write_edge_list;
use ugraph_core::write_graph_matrix;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "ugraph", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the adjacency matrix of a graph.
    Matrix(GraphInputArgs),
    /// Print the neighbour list of every node.
    Adjacency(GraphInputArgs),
    /// Convert a graph between edge-list, JSON, and RON forms.
    Convert(ConvertCommand),
    /// Print node, edge, and degree statistics as JSON.
    Stats(GraphInputArgs),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a ugraph configuration file.
    Validate(ConfigValidateCommand),
    /// Print an example configuration with default values.
    Example,
}

/// Arguments shared by every graph command.
#[derive(Args, Debug)]
struct GraphInputArgs {
    /// Input file (reads stdin when omitted or `-`).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Input format.
    #[arg(long, value_enum, default_value_t = GraphFormat::Edges)]
    from: GraphFormat,
    /// Optional config file path (defaults to ugraph.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for graph conversion.
#[derive(Args, Debug)]
struct ConvertCommand {
    /// Input selection.
    #[command(flatten)]
    input: GraphInputArgs,
    /// Output format.
    #[arg(long, value_enum)]
    to: GraphFormat,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to ugraph.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Graph interchange formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum GraphFormat {
    /// Whitespace-separated edge list (`n m` then `m` pairs).
    Edges,
    /// JSON graph document.
    Json,
    /// RON graph document.
    Ron,
}

impl GraphFormat {
    /// Returns the format label used in messages.
    const fn as_str(self) -> &'static str {
        match self {
            Self::Edges => "edges",
            Self::Json => "json",
            Self::Ron => "ron",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Matrix(args) => run_graph_command(GraphCommand::Matrix, &args),
        Commands::Adjacency(args) => run_graph_command(GraphCommand::Adjacency, &args),
        Commands::Convert(command) => {
            run_graph_command(GraphCommand::Convert(command.to), &command.input)
        }
        Commands::Stats(args) => run_graph_command(GraphCommand::Stats, &args),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Example => command_config_example(),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the example configuration.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_bytes(config_toml_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads configuration for a command.
fn load_config(path: Option<&Path>) -> CliResult<UgraphConfig> {
    UgraphConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Graph Commands
// ============================================================================

/// Graph command selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GraphCommand {
    /// Print the adjacency matrix.
    Matrix,
    /// Print adjacency lists.
    Adjacency,
    /// Re-encode the graph.
    Convert(GraphFormat),
    /// Print statistics.
    Stats,
}

impl GraphCommand {
    /// Returns the subcommand name recorded in audit events.
    const fn name(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Adjacency => "adjacency",
            Self::Convert(_) => "convert",
            Self::Stats => "stats",
        }
    }
}

/// Facts collected while a graph command runs, for the audit event.
#[derive(Debug, Default)]
struct CommandFacts {
    /// Bytes of input read.
    input_bytes: Option<usize>,
    /// Node count of the decoded graph.
    nodes: Option<usize>,
    /// Edge count of the decoded graph.
    edges: Option<usize>,
}

/// Loads config, runs a graph command, and records its audit event.
fn run_graph_command(command: GraphCommand, args: &GraphInputArgs) -> CliResult<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let sink = open_audit_sink(&config)?;
    let source = InputSource::from_arg(args.input.as_deref());
    let mut facts = CommandFacts::default();
    let result = execute_graph_command(command, args.from, &source, &config, &mut facts);
    record_audit(sink.as_ref(), command, &source, &facts, &result);
    result.map(|()| ExitCode::SUCCESS)
}

/// Reads, decodes, and prints the graph for `command`.
fn execute_graph_command(
    command: GraphCommand,
    from: GraphFormat,
    source: &InputSource,
    config: &UgraphConfig,
    facts: &mut CommandFacts,
) -> CliResult<()> {
    let text = read_input_text(source, config.input.max_input_bytes)?;
    facts.input_bytes = Some(text.len());
    let graph = decode_graph(&text, from, source, config)?;
    facts.nodes = Some(graph.node_count());
    facts.edges = Some(graph.edge_count());
    let mut stdout = BufWriter::new(std::io::stdout().lock());
    render_graph(&mut stdout, command, &graph, config)?;
    stdout.flush().map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Decodes graph text in the requested format.
fn decode_graph(
    text: &str,
    from: GraphFormat,
    source: &InputSource,
    config: &UgraphConfig,
) -> CliResult<UndirectedGraph> {
    let serializer = GraphSerializer::new(config.serde_config());
    let decode_error = |error: String| {
        CliError::new(t!(
            "graph.decode_failed",
            format = from.as_str(),
            source = source.label(),
            error = error
        ))
    };
    match from {
        GraphFormat::Edges => parse_edge_list(text, &config.edge_list_options()).map_err(|err| {
            CliError::new(t!("graph.parse_failed", source = source.label(), error = err))
        }),
        GraphFormat::Json => serializer.parse_json(text).map_err(|err| decode_error(err.to_string())),
        GraphFormat::Ron => serializer.parse_ron(text).map_err(|err| decode_error(err.to_string())),
    }
}

/// Writes the output of `command` to `out`.
///
/// Matrix rows are streamed from the adjacency lists one row at a time.
fn render_graph<W: Write>(
    out: &mut W,
    command: GraphCommand,
    graph: &UndirectedGraph,
    config: &UgraphConfig,
) -> CliResult<()> {
    let write_error = |err: std::io::Error| CliError::new(output_error("stdout", &err));
    match command {
        GraphCommand::Matrix => {
            write_graph_matrix(out, graph, &config.matrix_format()).map_err(write_error)?;
        }
        GraphCommand::Adjacency => {
            write_adjacency(out, graph, config.input.index_base).map_err(write_error)?;
        }
        GraphCommand::Convert(to) => {
            encode_graph(out, graph, to, config)?;
        }
        GraphCommand::Stats => {
            let stats = GraphStats::from_graph(graph);
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|err| CliError::new(t!("stats.serialize_failed", error = err)))?;
            writeln!(out, "{json}").map_err(write_error)?;
        }
    }
    Ok(())
}

/// Encodes `graph` into `out` using `to`.
fn encode_graph<W: Write>(
    out: &mut W,
    graph: &UndirectedGraph,
    to: GraphFormat,
    config: &UgraphConfig,
) -> CliResult<()> {
    let serializer = GraphSerializer::new(config.serde_config());
    let encode_error = |error: String| {
        CliError::new(t!("graph.encode_failed", format = to.as_str(), error = error))
    };
    let text = match to {
        GraphFormat::Edges => {
            return write_edge_list(out, graph, config.input.index_base).map_err(|err| match err {
                EdgeListError::Write(err) => CliError::new(output_error("stdout", &err)),
                other => encode_error(other.to_string()),
            });
        }
        GraphFormat::Json => serializer.to_json(graph).map_err(|err| encode_error(err.to_string()))?,
        GraphFormat::Ron => serializer.to_ron(graph).map_err(|err| encode_error(err.to_string()))?,
    };
    writeln!(out, "{text}").map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Statistics
// ============================================================================

/// Summary printed by `ugraph stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct GraphStats {
    /// Node count.
    nodes: usize,
    /// Edge count as listed by the edge-list writer.
    edges: usize,
    /// Self-loop edges.
    self_loops: usize,
    /// Smallest neighbour-list length (0 for the empty graph).
    min_degree: usize,
    /// Largest neighbour-list length (0 for the empty graph).
    max_degree: usize,
    /// Whether every adjacency is mirrored.
    symmetric: bool,
}

impl GraphStats {
    /// Computes statistics for `graph`.
    fn from_graph(graph: &UndirectedGraph) -> Self {
        let degrees = graph.adjacencies().iter().map(|list| list.len());
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            self_loops: graph.self_loop_count(),
            min_degree: degrees.clone().min().unwrap_or(0),
            max_degree: degrees.max().unwrap_or(0),
            symmetric: graph.is_symmetric(),
        }
    }
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Opens the audit sink selected by config.
fn open_audit_sink(config: &UgraphConfig) -> CliResult<Box<dyn AuditSink>> {
    sink_from_config(&config.audit).map_err(|err| {
        let path = config
            .audit
            .path
            .as_deref()
            .map_or_else(String::new, |path| path.display().to_string());
        CliError::new(t!("audit.init_failed", path = path, error = err))
    })
}

/// Records the audit event for a finished graph command.
fn record_audit(
    sink: &dyn AuditSink,
    command: GraphCommand,
    source: &InputSource,
    facts: &CommandFacts,
    result: &CliResult<()>,
) {
    let (outcome, error) = match result {
        Ok(()) => (AuditOutcome::Success, None),
        Err(err) => (AuditOutcome::Error, Some(err.to_string())),
    };
    sink.record(&GraphAuditEvent::new(GraphAuditEventParams {
        command: command.name(),
        source: source.label(),
        outcome,
        nodes: facts.nodes,
        edges: facts.edges,
        input_bytes: facts.input_bytes,
        error,
    }));
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Where graph input is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputSource {
    /// Standard input.
    Stdin,
    /// A file path.
    File(PathBuf),
}

impl InputSource {
    /// Resolves the `--input` argument (`-` selects stdin).
    fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Returns the label used in messages and audit events.
    fn label(&self) -> String {
        match self {
            Self::Stdin => t!("input.stdin"),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Errors returned by bounded reads.
#[derive(Debug)]
enum ReadLimitError {
    /// I/O failure.
    Io(std::io::Error),
    /// Input size exceeds the configured limit.
    TooLarge {
        /// Observed size in bytes (at least `limit + 1` for streams).
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads the whole input as UTF-8 text within `max_bytes`.
fn read_input_text(source: &InputSource, max_bytes: usize) -> CliResult<String> {
    let result = match source {
        InputSource::Stdin => read_stream_with_limit(std::io::stdin().lock(), max_bytes),
        InputSource::File(path) => read_bytes_with_limit(path, max_bytes),
    };
    let bytes = result.map_err(|err| match err {
        ReadLimitError::Io(err) => {
            CliError::new(t!("input.read_failed", source = source.label(), error = err))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "input.read_too_large",
            source = source.label(),
            size = size,
            limit = limit
        )),
    })?;
    String::from_utf8(bytes)
        .map_err(|_| CliError::new(t!("input.utf8_invalid", source = source.label())))
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    read_stream_with_limit(file, max_bytes)
}

/// Reads a stream to the end while enforcing a hard size limit.
fn read_stream_with_limit<R: Read>(reader: R, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let read_limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut limited = reader.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = BufWriter::new(std::io::stdout().lock());
    stdout.write_all(bytes)?;
    stdout.flush()
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
