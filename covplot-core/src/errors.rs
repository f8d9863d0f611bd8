use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Can't open file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}:{line}: expected 4 tab separated fields (chrom, start, end, coverage), found {found}")]
    MissingFields {
        source_name: String,
        line: usize,
        found: usize,
    },

    #[error("{source_name}:{line}: can't parse {field} from {value:?}")]
    InvalidField {
        source_name: String,
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("{source_name}:{line}: interval start {start} is past its end {end}")]
    InvertedInterval {
        source_name: String,
        line: usize,
        start: u32,
        end: u32,
    },

    #[error("Corrupted file. 0 coverage records found in: {0}")]
    EmptyBedGraph(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
