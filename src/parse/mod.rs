//! Line-oriented parsers for the two `perf` text reports.
//!
//! Both parsers share the same contract: blank lines are ignored, the first
//! malformed line aborts the pass, and the failure carries its 1-based line
//! number. Nothing is returned for a pass that fails.

pub mod callgraph;
pub mod stat;

pub use callgraph::parse_callgraph_file;
pub use stat::parse_stat_file;

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole report into memory.
fn read_report(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
