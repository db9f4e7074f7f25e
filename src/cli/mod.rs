//! CLI support for classmark
//!
//! Provides programmatic access to the `classmark` command so the same
//! operations can be driven from other tools or from tests.

mod docs;
mod execute;

pub use docs::{DocTopic, get_doc_topic, get_docs_overview};
pub use execute::{Mode, RunOptions, execute};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Markup could not be scanned
    #[error("Parse error: {0}")]
    Scan(#[from] crate::ScanError),

    /// Token JSON could not be read or written
    #[error("Invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input, --file, or pipe text to stdin.")]
    NoInput,

    /// Unknown documentation topic
    #[error("Unknown topic: '{0}'\nRun 'classmark docs' to see available topics.")]
    UnknownTopic(String),
}
