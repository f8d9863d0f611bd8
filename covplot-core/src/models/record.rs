use std::fmt::{self, Display};

///
/// One bedgraph row: a half-open interval `[start, end)` on a scaffold and its read depth.
///
#[derive(PartialEq, Debug, Clone)]
pub struct BedGraphRecord {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub coverage: f64,
}

impl BedGraphRecord {
    ///
    /// Get length of the interval
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Plot position of the interval, halfway between start and end.
    pub fn mid_point(&self) -> f64 {
        (self.start as f64 + self.end as f64) / 2.0
    }

    ///
    /// Get file string of the record
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.coverage
        )
    }
}

impl Display for BedGraphRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn record() -> BedGraphRecord {
        BedGraphRecord {
            chr: "Chrom_1".to_string(),
            start: 100,
            end: 105,
            coverage: 12.0,
        }
    }

    #[rstest]
    fn test_width(record: BedGraphRecord) {
        assert_eq!(record.width(), 5);
    }

    #[rstest]
    fn test_mid_point_keeps_fraction(record: BedGraphRecord) {
        assert_eq!(record.mid_point(), 102.5);
    }

    #[rstest]
    fn test_as_string(record: BedGraphRecord) {
        assert_eq!(record.as_string(), "Chrom_1\t100\t105\t12");
        assert_eq!(format!("{}", record), "Chrom_1\t100\t105\t12");
    }
}
