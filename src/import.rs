//! Semicolon-delimited job import.
//!
//! One job per line: `name;duration;priority;deadline`. Blank lines and
//! lines with fewer than four fields are skipped. Fields past the fourth
//! are ignored. Values are not checked here; rows go through
//! [`validation`](crate::validation) before scheduling.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ImportError;
use crate::validation::RawRow;

/// Field separator.
pub const DELIMITER: char = ';';

/// Parses import text into raw rows, dropping malformed lines.
pub fn parse_import(text: &str) -> Vec<RawRow> {
    let mut rows = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
        let [name, duration, priority, deadline, ..] = fields.as_slice() else {
            warn!(line = line_no + 1, "skipping line with fewer than 4 fields");
            continue;
        };
        rows.push(RawRow::new(*name, *duration, *priority, *deadline));
    }

    debug!(rows = rows.len(), "parsed import");
    rows
}

/// Reads and parses an import file (UTF-8).
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<RawRow>, ImportError> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(parse_import(&text))
}
