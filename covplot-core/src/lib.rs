//! # Core models for coverage plotting.
//!
//! Reads bedgraph files (`chrom`, `start`, `end`, `coverage`; optionally gzipped or
//! from stdin) and groups their rows per scaffold.
//!
//! ```no_run
//! use covplot_core::models::BedGraph;
//!
//! let bedgraph = BedGraph::try_from("coverage.bedgraph.gz").unwrap();
//! for track in &bedgraph.tracks {
//!     println!("{}: {:?}", track.chr, track.mean_coverage());
//! }
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{CoverageError, Result};
