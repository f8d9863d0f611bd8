//! Axis ticks and text labels.

/// Position tick label: `0` at the origin, whole megabases elsewhere (`5M`, `10M`).
pub fn format_position_tick(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else {
        format!("{:.0}M", x / 1e6)
    }
}

/// Coverage tick label without a fractional part when it is whole.
pub fn format_coverage_tick(y: f64) -> String {
    if y.fract() == 0.0 {
        format!("{:.0}", y)
    } else {
        format!("{}", y)
    }
}

/// Compact window size for the legend: `100000` -> `100kb`, `2000000` -> `2Mb`.
pub fn format_window(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}Mb", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}kb", size / 1_000)
    } else {
        format!("{}bp", size)
    }
}

pub fn title(chr: &str) -> String {
    format!("{} coverage", chr)
}

pub fn smoothed_label(window: usize) -> String {
    format!("Coverage (window size: {})", format_window(window))
}

///
/// Every multiple of `step` inside `[lo, hi]`.
///
pub fn tick_positions(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || hi < lo {
        return Vec::new();
    }

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

///
/// Evenly spaced "round" ticks from 0 to `max` (1, 2 or 5 times a power of ten),
/// aiming for about `target` intervals.
///
pub fn nice_ticks(max: f64, target: usize) -> Vec<f64> {
    if !(max > 0.0) || target == 0 {
        return vec![0.0];
    }

    let raw = max / target as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    tick_positions(0.0, max, step)
}

/// Pad a data range by `fraction` of its width on each side.
pub fn padded_range(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - span * fraction, hi + span * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0.0, "0")]
    #[case(5_000_000.0, "5M")]
    #[case(25_000_000.0, "25M")]
    #[case(-5_000_000.0, "-5M")]
    fn test_format_position_tick(#[case] x: f64, #[case] expected: &str) {
        assert_eq!(format_position_tick(x), expected);
    }

    #[rstest]
    #[case(100_000, "100kb")]
    #[case(2_000_000, "2Mb")]
    #[case(1_500, "1500bp")]
    #[case(7, "7bp")]
    fn test_format_window(#[case] size: usize, #[case] expected: &str) {
        assert_eq!(format_window(size), expected);
    }

    #[rstest]
    fn test_labels() {
        assert_eq!(title("Chrom_1"), "Chrom_1 coverage");
        assert_eq!(smoothed_label(100_000), "Coverage (window size: 100kb)");
        assert_eq!(format_coverage_tick(100.0), "100");
        assert_eq!(format_coverage_tick(2.5), "2.5");
    }

    #[rstest]
    fn test_tick_positions() {
        assert_eq!(
            tick_positions(-1_000_000.0, 12_000_000.0, 5_000_000.0),
            vec![0.0, 5_000_000.0, 10_000_000.0]
        );
        assert!(tick_positions(1.0, 2.0, 5.0).is_empty());
        assert!(tick_positions(0.0, 10.0, 0.0).is_empty());
    }

    #[rstest]
    #[case(500.0, vec![0.0, 100.0, 200.0, 300.0, 400.0, 500.0])]
    #[case(40.0, vec![0.0, 10.0, 20.0, 30.0, 40.0])]
    fn test_nice_ticks(#[case] max: f64, #[case] expected: Vec<f64>) {
        assert_eq!(nice_ticks(max, 5), expected);
    }

    #[rstest]
    fn test_padded_range() {
        assert_eq!(padded_range(0.0, 100.0, 0.05), (-5.0, 105.0));
        assert_eq!(padded_range(7.0, 7.0, 0.05), (6.0, 8.0));
    }
}
