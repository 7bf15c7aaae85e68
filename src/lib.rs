//! Convert `perf report` and `perf stat` text output into CSV tables.
//!
//! Two independent passes feed two [`table::Table`]s:
//!
//! - [`parse::callgraph`] scans a call-graph report (`perf report --children`)
//!   and records a `(children)` and `(self)` percentage per function and counter.
//! - [`parse::stat`] reads a summary report (`perf stat`) into one value per
//!   statistic name.
//!
//! [`render::csv`] serializes either table, and [`convert::run`] ties the
//! whole pipeline together for the command-line tool.

pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod parse;
pub mod render;
pub mod table;

pub use convert::{ConvertConfig, ConvertSummary};
pub use error::{Error, LineError, ParseError, Result};
pub use render::csv::{ExportOptions, MissingCellPolicy};
pub use table::Table;
