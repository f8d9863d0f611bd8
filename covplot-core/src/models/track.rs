use crate::models::BedGraphRecord;

///
/// All bedgraph rows of a single scaffold, in the order they appear in the file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageTrack {
    pub chr: String,
    pub records: Vec<BedGraphRecord>,
}

impl CoverageTrack {
    pub fn new(chr: &str) -> Self {
        CoverageTrack {
            chr: chr.to_string(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn coverages(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.coverage).collect()
    }

    pub fn mid_points(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.mid_point()).collect()
    }

    ///
    /// Mean of the coverage column. Every row counts once, whatever its width.
    ///
    pub fn mean_coverage(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: f64 = self.records.iter().map(|r| r.coverage).sum();
        Some(sum / self.records.len() as f64)
    }

    ///
    /// Per-base mean depth: each row weighted by the number of bases it spans.
    ///
    pub fn weighted_mean_coverage(&self) -> Option<f64> {
        let bases: u64 = self.records.iter().map(|r| r.width() as u64).sum();
        if bases == 0 {
            return None;
        }
        let total: f64 = self
            .records
            .iter()
            .map(|r| r.coverage * r.width() as f64)
            .sum();
        Some(total / bases as f64)
    }

    /// Smallest start and largest end on the scaffold.
    pub fn span(&self) -> Option<(u32, u32)> {
        let start = self.records.iter().map(|r| r.start).min()?;
        let end = self.records.iter().map(|r| r.end).max()?;
        Some((start, end))
    }

    pub fn min_coverage(&self) -> Option<f64> {
        self.records.iter().map(|r| r.coverage).reduce(f64::min)
    }

    pub fn max_coverage(&self) -> Option<f64> {
        self.records.iter().map(|r| r.coverage).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn rec(start: u32, end: u32, coverage: f64) -> BedGraphRecord {
        BedGraphRecord {
            chr: "chr1".to_string(),
            start,
            end,
            coverage,
        }
    }

    #[fixture]
    fn track() -> CoverageTrack {
        CoverageTrack {
            chr: "chr1".to_string(),
            records: vec![rec(0, 10, 2.0), rec(10, 40, 6.0), rec(40, 50, 1.0)],
        }
    }

    #[rstest]
    fn test_mean_is_per_row(track: CoverageTrack) {
        assert_eq!(track.mean_coverage(), Some(3.0));
    }

    #[rstest]
    fn test_weighted_mean_is_per_base(track: CoverageTrack) {
        // (2*10 + 6*30 + 1*10) / 50
        assert_eq!(track.weighted_mean_coverage(), Some(4.2));
    }

    #[rstest]
    fn test_span_and_extrema(track: CoverageTrack) {
        assert_eq!(track.span(), Some((0, 50)));
        assert_eq!(track.min_coverage(), Some(1.0));
        assert_eq!(track.max_coverage(), Some(6.0));
    }

    #[rstest]
    fn test_mid_points(track: CoverageTrack) {
        assert_eq!(track.mid_points(), vec![5.0, 25.0, 45.0]);
    }

    #[rstest]
    fn test_empty_track_has_no_statistics() {
        let track = CoverageTrack::new("chrX");
        assert!(track.is_empty());
        assert_eq!(track.mean_coverage(), None);
        assert_eq!(track.weighted_mean_coverage(), None);
        assert_eq!(track.span(), None);
    }
}
