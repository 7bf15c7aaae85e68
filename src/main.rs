use anyhow::Context;
use clap::{Parser, ValueEnum};
use perf2csv::convert::{self, ConvertConfig, DEFAULT_OUTPUT};
use perf2csv::diagnostics;
use perf2csv::{ExportOptions, MissingCellPolicy};
use std::path::PathBuf;
use std::process::ExitCode;

pub type Result<T> = anyhow::Result<T>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MissingCells {
    /// Leave the cell empty and print a warning
    Empty,
    /// Abort without writing any output
    Fail,
}

impl From<MissingCells> for MissingCellPolicy {
    fn from(m: MissingCells) -> Self {
        match m {
            MissingCells::Empty => MissingCellPolicy::Empty,
            MissingCells::Fail => MissingCellPolicy::Fail,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "perf2csv")]
#[command(about = "Convert perf stat / perf report text output to CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// perf stat summary report
    #[arg(long)]
    stat: PathBuf,

    /// perf report call-graph report
    #[arg(long)]
    data: PathBuf,

    /// Function metrics CSV
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Statistics CSV (defaults to <output stem>_stat.<ext>)
    #[arg(long)]
    stat_output: Option<PathBuf>,

    /// How to export a function that lacks a value for some counter column
    #[arg(long, value_enum, default_value = "empty")]
    missing_cells: MissingCells,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

impl From<Cli> for ConvertConfig {
    fn from(cli: Cli) -> Self {
        ConvertConfig {
            stat: cli.stat,
            data: cli.data,
            output: cli.output,
            stat_output: cli.stat_output,
            export: ExportOptions {
                missing_cells: cli.missing_cells.into(),
                quiet: cli.quiet,
            },
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    let config = ConvertConfig::from(cli);

    let summary = convert::run(&config).with_context(|| {
        format!(
            "convert {} + {}",
            config.stat.display(),
            config.data.display()
        )
    })?;

    if !quiet {
        println!(
            "Parsed {} functions x {} columns, {} statistics",
            summary.functions, summary.columns, summary.statistics
        );
        println!("Wrote {}", summary.output.display());
        println!("Wrote {}", summary.stat_output.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", diagnostics::error_message(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
