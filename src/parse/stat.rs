//! Parser for `perf stat` summary output.
//!
//! Every non-empty line is `<value> <label>`:
//!
//! ```text
//!      1,234,567      cycles:u
//!          8,910      instructions:u
//!    0.004512345 seconds
//! ```
//!
//! Thousands separators are dropped from the value, the label is cut at its
//! first `:` and the elapsed-time line (`seconds`) is renamed `total-time`.

use crate::error::{Error, LineError, ParseError, Result};
use crate::table::Table;
use std::path::Path;

/// The single column every statistic is stored under.
pub const VALUE_COLUMN: &str = "value";

/// Name given to the elapsed wall-clock time line.
pub const TOTAL_TIME: &str = "total-time";

/// Parse a summary report file into a statistic-name table.
pub fn parse_stat_file(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let text = super::read_report(path)?;
    parse_stat_str(&text).map_err(|e| Error::line_parse(path, e))
}

/// Parse summary report text. Repeated statistic names keep the last value.
pub fn parse_stat_str(text: &str) -> std::result::Result<Table, ParseError> {
    let mut table = Table::new();
    for (lineno, line) in text.lines().enumerate() {
        if let Some((label, value)) =
            parse_stat_line(line).map_err(|e| ParseError::new(lineno + 1, e))?
        {
            table.set(&label, VALUE_COLUMN, value);
        }
    }
    Ok(table)
}

/// Parse one line into `(label, value)`; `None` for a blank line.
pub fn parse_stat_line(line: &str) -> std::result::Result<Option<(String, f64)>, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[value_token, label_token] = tokens.as_slice() else {
        return Err(LineError::TokenCount(tokens.len()));
    };

    let label = if label_token == "seconds" {
        TOTAL_TIME
    } else {
        // A leading `:` is part of the name, not a modifier separator.
        match label_token.find(':') {
            Some(pos) if pos > 0 => &label_token[..pos],
            _ => label_token,
        }
    };

    let value: f64 = value_token
        .replace(',', "")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| LineError::Number(value_token.to_string()))?;

    Ok(Some((label.to_string(), value)))
}
