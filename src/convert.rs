//! End-to-end conversion: check inputs, parse both reports, export both CSVs.

use crate::error::{Error, Result};
use crate::parse::{parse_callgraph_file, parse_stat_file};
use crate::render::csv::{ExportOptions, render_function_csv, render_stat_csv, write_output};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "output.csv";

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// `perf stat` summary report.
    pub stat: PathBuf,
    /// `perf report` call-graph report.
    pub data: PathBuf,
    /// Function-metrics CSV.
    pub output: PathBuf,
    /// Statistics CSV; derived from `output` when unset.
    pub stat_output: Option<PathBuf>,
    pub export: ExportOptions,
}

impl ConvertConfig {
    pub fn new(stat: impl Into<PathBuf>, data: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            stat: stat.into(),
            data: data.into(),
            output: output.into(),
            stat_output: None,
            export: ExportOptions::default(),
        }
    }

    pub fn stat_output_path(&self) -> PathBuf {
        self.stat_output
            .clone()
            .unwrap_or_else(|| derive_stat_output(&self.output))
    }

    /// Both inputs must exist before anything is parsed.
    pub fn check_inputs(&self) -> Result<()> {
        for path in [&self.stat, &self.data] {
            if !path.exists() {
                return Err(Error::InputNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// `dir/output.csv` -> `dir/output_stat.csv`.
pub fn derive_stat_output(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.file_stem().unwrap_or_default());
    name.push("_stat");
    if let Some(ext) = output.extension() {
        name.push(".");
        name.push(ext);
    }
    output.with_file_name(name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    pub functions: usize,
    pub columns: usize,
    pub statistics: usize,
    pub output: PathBuf,
    pub stat_output: PathBuf,
}

/// Run the whole conversion. No output file is touched unless both reports
/// parse and both documents render.
pub fn run(config: &ConvertConfig) -> Result<ConvertSummary> {
    config.check_inputs()?;

    let stats = parse_stat_file(&config.stat)?;
    let funcs = parse_callgraph_file(&config.data)?;

    let func_csv = render_function_csv(&funcs, &config.export)?;
    let stat_csv = render_stat_csv(&stats)?;

    let stat_output = config.stat_output_path();
    write_output(&config.output, &func_csv)?;
    write_output(&stat_output, &stat_csv)?;

    Ok(ConvertSummary {
        functions: funcs.len(),
        columns: funcs.columns().len(),
        statistics: stats.len(),
        output: config.output.clone(),
        stat_output,
    })
}
