//! Parser for `perf report --children` call-graph output.
//!
//! Only two line shapes matter:
//!
//! ```text
//! # Samples: 12K of event 'cycles:u'
//!     45.12%     3.25%  a.out  libfoo.so  [.] foo::bar
//! ```
//!
//! A header sets the counter that subsequent sample lines are attributed to;
//! each sample line records `<counter>(children)` and `<counter>(self)` for
//! its function. Every other line is decoration and is skipped.

use crate::error::{Error, LineError, ParseError, Result};
use crate::table::Table;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const HEADER_MARKER: &str = "Samples";
const SAMPLE_MARKER: &str = "[.]";

// Two `%f%%` fields at the start of the line: children, then self.
const PERCENT_PAIR_RE: &str = r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)%\s+([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)%";

static PERCENT_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PERCENT_PAIR_RE).expect("percent pair regex is valid"));

/// Column name holding the inclusive percentage for `counter`.
pub fn children_column(counter: &str) -> String {
    format!("{}(children)", counter)
}

/// Column name holding the exclusive percentage for `counter`.
pub fn self_column(counter: &str) -> String {
    format!("{}(self)", counter)
}

/// Scanner state carried from one line to the next.
#[derive(Debug, Default)]
pub struct Scanner {
    counter: Option<String>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn counter(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    /// Classify one line and apply it to `table`.
    pub fn scan_line(&mut self, line: &str, table: &mut Table) -> std::result::Result<(), LineError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if line.contains(HEADER_MARKER) {
            self.counter = Some(parse_counter_name(line)?.to_string());
            return Ok(());
        }

        match line.find(SAMPLE_MARKER) {
            Some(pos) if pos > 0 => {
                let function = line[pos + SAMPLE_MARKER.len()..].trim();
                let (children, self_pct) = parse_percent_pair(line)?;
                let counter = self
                    .counter
                    .as_deref()
                    .ok_or(LineError::SampleWithoutCounter)?;

                table.set(function, &children_column(counter), children);
                table.set(function, &self_column(counter), self_pct);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Parse a call-graph report file into a function table.
pub fn parse_callgraph_file(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let text = super::read_report(path)?;
    parse_callgraph_str(&text).map_err(|e| Error::line_parse(path, e))
}

/// Parse call-graph report text.
pub fn parse_callgraph_str(text: &str) -> std::result::Result<Table, ParseError> {
    let mut scanner = Scanner::new();
    let mut table = Table::new();
    for (lineno, line) in text.lines().enumerate() {
        scanner
            .scan_line(line, &mut table)
            .map_err(|e| ParseError::new(lineno + 1, e))?;
    }
    Ok(table)
}

/// The text between the first `'` and the next one.
fn parse_counter_name(line: &str) -> std::result::Result<&str, LineError> {
    let begin = line.find('\'').ok_or(LineError::MissingCounterName)? + 1;
    let len = line[begin..]
        .find('\'')
        .ok_or(LineError::UnterminatedCounterName)?;
    Ok(&line[begin..begin + len])
}

fn parse_percent_pair(line: &str) -> std::result::Result<(f64, f64), LineError> {
    let caps = PERCENT_PAIR
        .captures(line)
        .ok_or(LineError::MissingPercentages)?;
    let field = |idx: usize| -> std::result::Result<f64, LineError> {
        caps.get(idx)
            .ok_or(LineError::MissingPercentages)?
            .as_str()
            .parse()
            .map_err(|_| LineError::MissingPercentages)
    };
    Ok((field(1)?, field(2)?))
}
