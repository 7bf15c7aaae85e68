//! Serialization of parsed tables.

pub mod csv;

pub use self::csv::{render_function_csv, render_stat_csv, write_output};
