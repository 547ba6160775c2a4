//! Input parsing for the textchain CLI.
//!
//! Accepts either a bare JSON array of strings or an object with an
//! `elements` array:
//!
//! ```json
//! ["c", "a", "b"]
//! { "elements": ["c", "a", "b"] }
//! ```

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A JSON document holding sequence elements.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InputDocument {
    Bare(Vec<String>),
    Wrapped { elements: Vec<String> },
}

impl InputDocument {
    /// Consumes the document, returning its elements in order.
    pub fn into_elements(self) -> Vec<String> {
        match self {
            Self::Bare(elements) | Self::Wrapped { elements } => elements,
        }
    }
}

/// Parses sequence elements from JSON text.
pub fn parse_elements(json: &str) -> Result<Vec<String>> {
    let document: InputDocument =
        serde_json::from_str(json).context("Expected a JSON array of strings")?;
    Ok(document.into_elements())
}

/// Reads elements from `path`, or from stdin when `path` is `-`.
pub fn read_elements(path: &Path) -> Result<Vec<String>> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    parse_elements(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
