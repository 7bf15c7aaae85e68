//! Error taxonomy shared by the parsers, the exporter and the pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single report line was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("expected 2 whitespace-separated tokens, found {0}")]
    TokenCount(usize),

    #[error("cannot parse stat value {0:?}")]
    Number(String),

    #[error("no counter name after \"Samples\"")]
    MissingCounterName,

    #[error("no ' after counter name")]
    UnterminatedCounterName,

    #[error("expected two leading percentages (children, self)")]
    MissingPercentages,

    #[error("sample line appears before any \"Samples\" header")]
    SampleWithoutCounter,
}

/// A line-level failure together with its 1-based line number.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {source}")]
pub struct ParseError {
    pub line: usize,
    #[source]
    pub source: LineError,
}

impl ParseError {
    pub fn new(line: usize, source: LineError) -> Self {
        Self { line, source }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("input file {} does not exist", path.display())]
    InputNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse failed at {}:{line}: {source}", path.display())]
    LineParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: LineError,
    },

    #[error("cannot open csv file {} to write: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write csv file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot get data {column:?} for {row:?}")]
    MissingCell { row: String, column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Attach the report path to a line-level failure.
    pub fn line_parse(path: impl Into<PathBuf>, err: ParseError) -> Self {
        Error::LineParse {
            path: path.into(),
            line: err.line,
            source: err.source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
