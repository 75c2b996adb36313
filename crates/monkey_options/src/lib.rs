//! monkey_options: options file parsing.
//!
//! Reads the JSON options file (`monkey.json` by convention) that configures
//! the REPL prompt, the token output format and the scanner extensions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use monkey_scanner::ScannerOptions;

/// Prompt written before each line when none is configured.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Conventional options file name.
pub const OPTIONS_FILE_NAME: &str = "monkey.json";

/// How the REPL renders tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{Type:LET Literal:let}`
    #[default]
    Text,
    /// `{"type":"LET","literal":"let"}`
    Json,
}

/// The options file structure. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MonkeyOptions {
    pub prompt: Option<String>,
    pub format: Option<OutputFormat>,
    pub scanner: Option<ScannerOptions>,
}

impl MonkeyOptions {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn scanner(&self) -> ScannerOptions {
        self.scanner.unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse options from a string.
pub fn parse_options(content: &str) -> Result<MonkeyOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse an options file from a path.
pub fn parse_options_file(path: impl AsRef<Path>) -> Result<MonkeyOptions, OptionsError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let options = parse_options(&content).map_err(|source| OptionsError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), ?options, "loaded options file");
    Ok(options)
}
