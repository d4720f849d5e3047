//! Loading of labeled `label|text` corpus files.
//!
//! The flat-file format, shared by training and test data:
//!
//! ```text
//! # comment line, ignored
//! motor|arabamın motoru çalışmıyor
//! fren|fren pedalı sertleşti
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Each remaining
//! line is split on the first `|`; the label is trimmed and lower-cased,
//! the text is trimmed. Lines without a `|`, or where either side is empty
//! after trimming, are silently discarded.

use std::fs;
use std::path::Path;

use log::debug;

use crate::classifier::types::TrainingExample;
use crate::error::Result;

/// Parse a single corpus line into a labeled example.
///
/// Returns `None` for blank lines, comments, and malformed lines.
pub fn parse_labeled_line(line: &str) -> Option<TrainingExample> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (intent, text) = line.split_once('|')?;
    let intent = intent.trim().to_lowercase();
    let text = text.trim();
    if intent.is_empty() || text.is_empty() {
        return None;
    }

    Some(TrainingExample::new(intent, text))
}

/// Load every well-formed example from a `label|text` file.
///
/// Malformed lines are skipped without error; an unreadable file is an
/// I/O error the caller decides how to handle.
pub fn load_labeled_file<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let content = fs::read_to_string(path.as_ref())?;
    let examples: Vec<TrainingExample> = content.lines().filter_map(parse_labeled_line).collect();

    debug!(
        "loaded {} labeled examples from {}",
        examples.len(),
        path.as_ref().display()
    );

    Ok(examples)
}
