//! Client configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line flags.
//!
//! ```toml
//! [output]
//! format = "json"   # "text" or "json"
//! pretty = true     # indent JSON output
//! trace = true      # include the step trace
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable lines.
    #[default]
    Text,
    /// The serialized evaluation.
    Json,
}

/// The `[output]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output encoding.
    pub format: Format,
    /// Indent JSON output.
    pub pretty: bool,
    /// Include the step trace.
    pub trace: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::Text,
            pretty: true,
            trace: true,
        }
    }
}

/// Full client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Output settings.
    pub output: OutputConfig,
}

/// Settings given on the command line, applied over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--format`
    pub format: Option<Format>,
    /// `--no-trace`
    pub no_trace: bool,
    /// `--compact`
    pub compact: bool,
}

impl ClientConfig {
    /// Parse configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML, unknown keys or bad values.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid client configuration")
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Defaults, then `path` if given, then `overrides`.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientConfig::load`] errors.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        Ok(config)
    }

    /// Layer command-line flags over this configuration.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.no_trace {
            self.output.trace = false;
        }
        if overrides.compact {
            self.output.pretty = false;
        }
    }
}
