// crates/ugraph-config/src/lib.rs
// ============================================================================
// Module: ugraph Config Root
// Description: Public API surface for ugraph configuration.
// Purpose: Expose the config model, loader, and example generator.
// Dependencies: crate::{config, examples}
// ============================================================================

//! ## Overview
//! `ugraph-config` owns the `ugraph.toml` model. Loading is fail-closed:
//! unknown keys, oversized files, and out-of-range limits are errors.

pub mod config;
pub mod examples;

pub use config::AuditConfig;
pub use config::AuditSinkKind;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::DEFAULT_CONFIG_NAME;
pub use config::InputConfig;
pub use config::OutputConfig;
pub use config::UgraphConfig;
pub use examples::config_toml_example;
