//! CSV export for the function and statistic tables.
//!
//! Documents are rendered into memory first and only then written to disk,
//! so a failed export never leaves a half-written file behind.

use crate::diagnostics;
use crate::error::{Error, Result};
use crate::parse::stat::VALUE_COLUMN;
use crate::table::Table;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// First header cell of the function table.
pub const FUNCTION_NAME_HEADER: &str = "FunctionName";

/// What to do when a function has no value for a column other functions have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingCellPolicy {
    /// Leave the cell empty and warn.
    #[default]
    Empty,
    /// Abort the export with [`Error::MissingCell`].
    Fail,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub missing_cells: MissingCellPolicy,
    /// Suppress warnings about empty cells.
    pub quiet: bool,
}

#[derive(Serialize)]
struct StatRecord<'a> {
    name: &'a str,
    value: String,
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| Error::Csv(e.into_error().into()))
}

/// Render the function table: a `FunctionName` header followed by one row per
/// function, each value formatted as `12.34%`.
pub fn render_function_csv(table: &Table, opts: &ExportOptions) -> Result<Vec<u8>> {
    let mut writer = csv_writer();

    let mut header = Vec::with_capacity(table.columns().len() + 1);
    header.push(FUNCTION_NAME_HEADER);
    header.extend(table.columns().iter().map(String::as_str));
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.name().to_string());
        for column in table.columns() {
            match row.get(column) {
                Some(value) => record.push(format_percent(value)),
                None => match opts.missing_cells {
                    MissingCellPolicy::Fail => {
                        return Err(Error::MissingCell {
                            row: row.name().to_string(),
                            column: column.clone(),
                        });
                    }
                    MissingCellPolicy::Empty => {
                        if !opts.quiet {
                            diagnostics::warn(format!(
                                "no data \"{}\" for function \"{}\", leaving cell empty",
                                column,
                                row.name()
                            ));
                        }
                        record.push(String::new());
                    }
                },
            }
        }
        writer.write_record(&record)?;
    }

    finish(writer)
}

/// Render the statistic table as header-less `name,value` rows.
pub fn render_stat_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv_writer();

    for row in table.rows() {
        let value = row.get(VALUE_COLUMN).ok_or_else(|| Error::MissingCell {
            row: row.name().to_string(),
            column: VALUE_COLUMN.to_string(),
        })?;
        writer.serialize(StatRecord {
            name: row.name(),
            value: format_value(value),
        })?;
    }

    finish(writer)
}

/// Replace `path` with `contents`.
///
/// The bytes go to a temporary file in the destination directory first, which
/// is renamed over `path` only once fully written.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|source| Error::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    file.persist(path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::callgraph::parse_callgraph_str;
    use crate::parse::stat::parse_stat_str;
    use pretty_assertions::assert_eq;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn function_table_with_header() {
        let table = parse_callgraph_str(
            "Samples: 5 of event 'instructions'\n12.50%   3.25%  0x1000 [.] foo::bar\n",
        )
        .unwrap();
        let out = text(render_function_csv(&table, &ExportOptions::default()).unwrap());
        assert_eq!(
            out,
            "FunctionName,instructions(children),instructions(self)\nfoo::bar,12.50%,3.25%\n"
        );
    }

    #[test]
    fn stat_table_without_header() {
        let table = parse_stat_str("1,234 seconds\n56 cycles:u\n").unwrap();
        let out = text(render_stat_csv(&table).unwrap());
        assert_eq!(out, "total-time,1234.00\ncycles,56.00\n");
    }

    #[test]
    fn large_values_have_no_separators() {
        let mut table = Table::new();
        table.set("cycles", VALUE_COLUMN, 1_234_567.891);
        let out = text(render_stat_csv(&table).unwrap());
        assert_eq!(out, "cycles,1234567.89\n");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let mut table = Table::new();
        table.set("std::map<int, int>::find", "c(self)", 1.0);
        let out = text(render_function_csv(&table, &ExportOptions::default()).unwrap());
        assert_eq!(out, "FunctionName,c(self)\n\"std::map<int, int>::find\",1.00%\n");
    }

    #[test]
    fn sparse_cell_is_empty_by_default() {
        let mut table = Table::new();
        table.set("f", "a(self)", 1.0);
        table.set("g", "b(self)", 2.0);
        let opts = ExportOptions {
            quiet: true,
            ..ExportOptions::default()
        };
        let out = text(render_function_csv(&table, &opts).unwrap());
        assert_eq!(out, "FunctionName,a(self),b(self)\nf,1.00%,\ng,,2.00%\n");
    }

    #[test]
    fn sparse_cell_fails_when_strict() {
        let mut table = Table::new();
        table.set("f", "a(self)", 1.0);
        table.set("g", "b(self)", 2.0);
        let opts = ExportOptions {
            missing_cells: MissingCellPolicy::Fail,
            quiet: true,
        };
        let err = render_function_csv(&table, &opts).unwrap_err();
        match err {
            Error::MissingCell { row, column } => {
                assert_eq!(row, "f");
                assert_eq!(column, "b(self)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn write_output_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents that are longer than the new ones\n").unwrap();

        write_output(&path, b"a,b\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.csv")]);
    }

    #[test]
    fn write_output_into_missing_dir_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_output(&path, b"x\n").unwrap_err();

        assert!(matches!(err, Error::OutputOpen { .. }));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn empty_function_table_is_header_only() {
        let out = text(render_function_csv(&Table::new(), &ExportOptions::default()).unwrap());
        assert_eq!(out, "FunctionName\n");
    }
}
