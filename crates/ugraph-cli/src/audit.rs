// crates/ugraph-cli/src/audit.rs
// ============================================================================
// Module: CLI Audit Logging
// Description: Structured audit events for graph commands.
// Purpose: Emit one JSON line per command without touching stdout.
// Dependencies: serde, serde_json, ugraph-config
// ============================================================================

//! ## Overview
//! Every graph command produces a single [`GraphAuditEvent`] describing what
//! was read and whether the command succeeded. Events are routed through an
//! [`AuditSink`] chosen by the `[audit]` config section; the default sink
//! discards them, so normal command output is unaffected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use ugraph_config::AuditConfig;
use ugraph_config::AuditSinkKind;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Command outcome recorded in audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Command completed and wrote its output.
    Success,
    /// Command failed before or while writing output.
    Error,
}

/// Audit event for a single graph command.
#[derive(Debug, Clone, Serialize)]
pub struct GraphAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Subcommand name (`matrix`, `adjacency`, `convert`, `stats`).
    pub command: &'static str,
    /// Input source label (a path or `stdin`).
    pub source: String,
    /// Command outcome.
    pub outcome: AuditOutcome,
    /// Node count when a graph was built.
    pub nodes: Option<usize>,
    /// Edge count when a graph was built.
    pub edges: Option<usize>,
    /// Input size in bytes when input was read.
    pub input_bytes: Option<usize>,
    /// Error message on failure.
    pub error: Option<String>,
}

/// Inputs required to construct a graph audit event.
#[derive(Debug, Clone)]
pub struct GraphAuditEventParams {
    /// Subcommand name.
    pub command: &'static str,
    /// Input source label.
    pub source: String,
    /// Command outcome.
    pub outcome: AuditOutcome,
    /// Node count when known.
    pub nodes: Option<usize>,
    /// Edge count when known.
    pub edges: Option<usize>,
    /// Input size when known.
    pub input_bytes: Option<usize>,
    /// Error message on failure.
    pub error: Option<String>,
}

impl GraphAuditEvent {
    /// Creates a new audit event stamped with the current time.
    #[must_use]
    pub fn new(params: GraphAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "graph_command",
            timestamp_ms,
            command: params.command,
            source: params.source,
            outcome: params.outcome,
            nodes: params.nodes,
            edges: params.edges,
            input_bytes: params.input_bytes,
            error: params.error,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for graph command events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &GraphAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &GraphAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &GraphAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Audit sink that drops all events.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &GraphAuditEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the sink selected by `config`.
///
/// # Errors
///
/// Returns an error when the file sink cannot be opened or has no path.
pub fn sink_from_config(config: &AuditConfig) -> io::Result<Box<dyn AuditSink>> {
    match config.sink {
        AuditSinkKind::None => Ok(Box::new(NoopAuditSink)),
        AuditSinkKind::Stderr => Ok(Box::new(StderrAuditSink)),
        AuditSinkKind::File => {
            let path = config.path.as_deref().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "audit.path is not set")
            })?;
            Ok(Box::new(FileAuditSink::new(path)?))
        }
    }
}
