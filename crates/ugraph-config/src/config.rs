// crates/ugraph-config/src/config.rs
// ============================================================================
// Module: ugraph Configuration
// Description: Configuration loading and validation for the ugraph tool.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml, ugraph-core
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown keys and out-of-range values are rejected rather than ignored.
//!
//! Resolution order is `--config`, then `UGRAPH_CONFIG`, then `ugraph.toml`
//! in the working directory. Only the implicit default file may be absent, in
//! which case built-in defaults apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use ugraph_core::EdgeListOptions;
use ugraph_core::IndexBase;
use ugraph_core::MatrixFormat;
use ugraph_core::SerdeConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "ugraph.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "UGRAPH_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default maximum input size in bytes.
pub(crate) const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;
/// Maximum allowed input size in bytes.
pub(crate) const MAX_INPUT_BYTES: usize = 256 * 1024 * 1024;
/// Default maximum node count.
pub(crate) const DEFAULT_MAX_NODES: usize = 65_536;
/// Maximum allowed node count.
pub(crate) const MAX_NODES: usize = 1_048_576;
/// Default maximum edge count.
pub(crate) const DEFAULT_MAX_EDGES: usize = 4_194_304;
/// Maximum length of a matrix symbol or separator.
pub(crate) const MAX_SYMBOL_LENGTH: usize = 16;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// ugraph tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UgraphConfig {
    /// Input parsing configuration.
    #[serde(default)]
    pub input: InputConfig,
    /// Output formatting configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Path the configuration was loaded from, if any (not serialized).
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl UgraphConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        if resolved.implicit && !resolved.path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&resolved.path)
    }

    /// Loads and validates a specific configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or validated.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::from_toml_str(content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()?;
        self.output.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns edge-list parsing options derived from `[input]`.
    #[must_use]
    pub const fn edge_list_options(&self) -> EdgeListOptions {
        EdgeListOptions {
            index_base: self.input.index_base,
            max_nodes: self.input.max_nodes,
            max_edges: self.input.max_edges,
            reject_trailing: self.input.reject_trailing_tokens,
        }
    }

    /// Returns document decoding limits derived from `[input]`.
    #[must_use]
    pub const fn serde_config(&self) -> SerdeConfig {
        SerdeConfig {
            max_nodes: self.input.max_nodes,
            require_symmetric: false,
        }
    }

    /// Returns the matrix format derived from `[output.matrix]`.
    #[must_use]
    pub fn matrix_format(&self) -> MatrixFormat {
        self.output.matrix.clone()
    }
}

// ============================================================================
// SECTION: Input
// ============================================================================

/// Input parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Numbering of node labels in edge-list input and text output.
    #[serde(default)]
    pub index_base: IndexBase,
    /// Maximum input size in bytes.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
    /// Maximum declared node count.
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
    /// Maximum declared edge count.
    #[serde(default = "default_max_edges")]
    pub max_edges: usize,
    /// Reject tokens after the last declared edge.
    #[serde(default)]
    pub reject_trailing_tokens: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            index_base: IndexBase::One,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_nodes: DEFAULT_MAX_NODES,
            max_edges: DEFAULT_MAX_EDGES,
            reject_trailing_tokens: false,
        }
    }
}

impl InputConfig {
    /// Validates input limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 || self.max_input_bytes > MAX_INPUT_BYTES {
            return Err(ConfigError::Invalid(format!(
                "input.max_input_bytes must be between 1 and {MAX_INPUT_BYTES}"
            )));
        }
        if self.max_nodes == 0 || self.max_nodes > MAX_NODES {
            return Err(ConfigError::Invalid(format!(
                "input.max_nodes must be between 1 and {MAX_NODES}"
            )));
        }
        if self.max_edges == 0 {
            return Err(ConfigError::Invalid("input.max_edges must be at least 1".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Output formatting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Matrix rendering symbols.
    #[serde(default)]
    pub matrix: MatrixFormat,
}

impl OutputConfig {
    /// Validates matrix symbols.
    fn validate(&self) -> Result<(), ConfigError> {
        let matrix = &self.matrix;
        validate_symbol("output.matrix.one", &matrix.one, false)?;
        validate_symbol("output.matrix.zero", &matrix.zero, false)?;
        validate_symbol("output.matrix.separator", &matrix.separator, true)?;
        if matrix.one == matrix.zero {
            return Err(ConfigError::Invalid(
                "output.matrix.one and output.matrix.zero must differ".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Destination for audit events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Audit events are discarded.
    #[default]
    None,
    /// Audit events are written to stderr as JSON lines.
    Stderr,
    /// Audit events are appended to a file as JSON lines.
    File,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Selected sink.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log file path (required for the `file` sink).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates sink settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, None) => Err(ConfigError::Invalid(
                "audit.path is required when audit.sink = \"file\"".to_string(),
            )),
            (AuditSinkKind::File, Some(path)) => validate_path(path),
            (AuditSinkKind::None | AuditSinkKind::Stderr, Some(_)) => Err(ConfigError::Invalid(
                "audit.path is only valid when audit.sink = \"file\"".to_string(),
            )),
            (AuditSinkKind::None | AuditSinkKind::Stderr, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolved config path and whether it came from the implicit default.
struct ResolvedPath {
    /// Path to read.
    path: PathBuf,
    /// True when neither the CLI nor the environment named a path.
    implicit: bool,
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<ResolvedPath, ConfigError> {
    if let Some(path) = path {
        return Ok(ResolvedPath {
            path: path.to_path_buf(),
            implicit: false,
        });
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR)
        && !env_path.trim().is_empty()
    {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ResolvedPath {
            path: PathBuf::from(env_path),
            implicit: false,
        });
    }
    Ok(ResolvedPath {
        path: PathBuf::from(DEFAULT_CONFIG_NAME),
        implicit: true,
    })
}

/// Validates a path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a matrix symbol or separator.
fn validate_symbol(field: &str, value: &str, allow_empty: bool) -> Result<(), ConfigError> {
    if value.is_empty() && !allow_empty {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    if value.len() > MAX_SYMBOL_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "{field} exceeds {MAX_SYMBOL_LENGTH} bytes"
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(ConfigError::Invalid(format!("{field} must not contain line breaks")));
    }
    Ok(())
}

/// Serde default for `input.max_input_bytes`.
const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

/// Serde default for `input.max_nodes`.
const fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}

/// Serde default for `input.max_edges`.
const fn default_max_edges() -> usize {
    DEFAULT_MAX_EDGES
}
