use log::debug;
use serde::Serialize;

use covplot_core::models::CoverageTrack;

use crate::window::RollingWindow;

///
/// Everything needed to draw one scaffold: plot positions, raw depth, the smoothed
/// line and its min/max envelope, all aligned with the track's rows.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageProfile {
    pub chr: String,
    pub x: Vec<f64>,
    pub coverage: Vec<f64>,
    pub smoothed: Vec<Option<f64>>,
    pub min: Vec<Option<f64>>,
    pub max: Vec<Option<f64>>,
    pub mean_coverage: Option<f64>,
    pub window: usize,
    starts: Vec<u32>,
    ends: Vec<u32>,
    weighted_mean_coverage: Option<f64>,
}

/// One plottable position: smoothed value with its envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub x: f64,
    pub smoothed: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-scaffold numbers reported by `covplot stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub chr: String,
    pub records: usize,
    pub span_start: Option<u32>,
    pub span_end: Option<u32>,
    pub mean_coverage: Option<f64>,
    pub weighted_mean_coverage: Option<f64>,
    pub min_coverage: Option<f64>,
    pub max_coverage: Option<f64>,
    pub smoothed_min: Option<f64>,
    pub smoothed_max: Option<f64>,
    pub defined_points: usize,
    pub window: usize,
}

impl CoverageProfile {
    ///
    /// Run the rolling window over a track.
    ///
    /// # Arguments
    /// - track: the scaffold's rows, in file order
    /// - window: the rolling window (in rows)
    pub fn from_track(track: &CoverageTrack, window: &RollingWindow) -> Self {
        debug!(
            "Smoothing {} rows of {} over a {}-row window",
            track.len(),
            track.chr,
            window.size()
        );

        let coverage = track.coverages();
        let stats = window.stats(&coverage);

        CoverageProfile {
            chr: track.chr.clone(),
            x: track.mid_points(),
            smoothed: stats.mean,
            min: stats.min,
            max: stats.max,
            mean_coverage: track.mean_coverage(),
            window: window.size(),
            starts: track.records.iter().map(|r| r.start).collect(),
            ends: track.records.iter().map(|r| r.end).collect(),
            weighted_mean_coverage: track.weighted_mean_coverage(),
            coverage,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Interval of the row at `index`, as read from the bedgraph.
    pub fn interval(&self, index: usize) -> Option<(u32, u32)> {
        Some((*self.starts.get(index)?, *self.ends.get(index)?))
    }

    /// Point at `index` when mean, min and max are all defined there.
    pub fn point(&self, index: usize) -> Option<ProfilePoint> {
        Some(ProfilePoint {
            x: *self.x.get(index)?,
            smoothed: (*self.smoothed.get(index)?)?,
            min: (*self.min.get(index)?)?,
            max: (*self.max.get(index)?)?,
        })
    }

    /// Indices and points where the rolling statistics are defined.
    pub fn defined_points(&self) -> impl Iterator<Item = (usize, ProfilePoint)> + '_ {
        (0..self.len()).filter_map(|i| self.point(i).map(|p| (i, p)))
    }

    ///
    /// Split the defined positions into maximal runs of consecutive rows.
    /// Each run is drawn as its own line and filled envelope.
    ///
    pub fn segments(&self) -> Vec<Vec<ProfilePoint>> {
        let mut segments: Vec<Vec<ProfilePoint>> = Vec::new();
        let mut current: Vec<ProfilePoint> = Vec::new();
        let mut last_index: Option<usize> = None;

        for (i, point) in self.defined_points() {
            if let Some(last) = last_index {
                if i != last + 1 && !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            current.push(point);
            last_index = Some(i);
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }

    pub fn summary(&self) -> ProfileSummary {
        let smoothed: Vec<f64> = self.smoothed.iter().flatten().copied().collect();

        ProfileSummary {
            chr: self.chr.clone(),
            records: self.len(),
            span_start: self.starts.iter().min().copied(),
            span_end: self.ends.iter().max().copied(),
            mean_coverage: self.mean_coverage,
            weighted_mean_coverage: self.weighted_mean_coverage,
            min_coverage: self.coverage.iter().copied().reduce(f64::min),
            max_coverage: self.coverage.iter().copied().reduce(f64::max),
            smoothed_min: smoothed.iter().copied().reduce(f64::min),
            smoothed_max: smoothed.iter().copied().reduce(f64::max),
            defined_points: smoothed.len(),
            window: self.window,
        }
    }
}
