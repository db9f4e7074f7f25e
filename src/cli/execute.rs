//! Run classmark operations over an input buffer

use super::CliError;
use crate::{ScanOptions, output, parse_with};

/// What to produce from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Markup in, token tree JSON out
    Parse { pretty: bool },
    /// Markup in, HTML out
    Render,
    /// Token tree JSON in, HTML out
    RenderJson,
}

/// Options for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: Mode,
    /// Input text (markup, or JSON for [`Mode::RenderJson`])
    pub input: Option<String>,
    pub scan: ScanOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            mode: Mode::Render,
            input: None,
            scan: ScanOptions::default(),
        }
    }
}

/// Execute one run and return the text to print
pub fn execute(options: &RunOptions) -> Result<String, CliError> {
    let input = options.input.as_deref().ok_or(CliError::NoInput)?;

    let output = match options.mode {
        Mode::Parse { pretty } => {
            let tokens = parse_with(input, &options.scan)?;
            if pretty {
                output::to_json_pretty(&tokens)?
            } else {
                output::to_json(&tokens)?
            }
        }
        Mode::Render => {
            let tokens = parse_with(input, &options.scan)?;
            output::to_html(&tokens)
        }
        Mode::RenderJson => {
            let tokens = output::from_json(input)?;
            output::to_html(&tokens)
        }
    };
    Ok(output)
}
