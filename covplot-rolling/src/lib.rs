//! Rolling-window statistics for coverage tracks.
//!
//! This crate smooths bedgraph coverage with a centered window counted in rows and
//! builds the per-scaffold [`CoverageProfile`] that the renderer draws:
//!
//! - the rolling mean of the coverage column (the smoothed line)
//! - the rolling minimum and maximum (the spread envelope)
//! - the plain mean of the coverage column (the average reference line)
//!
//! # Example
//!
//! ```no_run
//! use covplot_core::models::BedGraph;
//! use covplot_rolling::{CoverageProfile, RollingWindow};
//!
//! let bedgraph = BedGraph::try_from("coverage.bedgraph").unwrap();
//! let window = RollingWindow::new(100_000).unwrap();
//!
//! for track in &bedgraph.tracks {
//!     let profile = CoverageProfile::from_track(track, &window);
//!     println!("{}: {} smoothed points", profile.chr, profile.defined_points().count());
//! }
//! ```

pub mod errors;
pub mod profile;
pub mod window;

// re-exports
pub use errors::{Result, RollingError};
pub use profile::{CoverageProfile, ProfilePoint, ProfileSummary};
pub use window::{DEFAULT_WINDOW_SIZE, RollingStats, RollingWindow};
