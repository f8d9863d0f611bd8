//! # Coverage figures
//!
//! Draws a [`CoverageProfile`](covplot_rolling::CoverageProfile) as a single figure: the
//! smoothed coverage line over a shaded min-max band, a dashed line at the average
//! coverage, a dashed grid and a legend in the upper right corner.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use covplot_core::models::BedGraph;
//! use covplot_render::{render_profile, PlotConfig};
//! use covplot_rolling::{CoverageProfile, RollingWindow};
//!
//! let bedgraph = BedGraph::try_from("coverage.bedgraph").unwrap();
//! let window = RollingWindow::default();
//! let config = PlotConfig::default();
//!
//! for track in &bedgraph.tracks {
//!     let profile = CoverageProfile::from_track(track, &window);
//!     render_profile(&profile, &config, Path::new("figures")).unwrap();
//! }
//! ```
pub mod config;
pub mod downsample;
pub mod errors;
pub mod format;
pub mod plot;

pub use config::{OutputFormat, PlotConfig};
pub use errors::{RenderError, Result};
pub use plot::{draw_profile, figure_file_name, render_profile, render_svg_string};
