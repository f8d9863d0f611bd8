//! Centered fixed-size rolling windows.
//!
//! A window of `size` rows centered on row `i` covers rows
//! `[i - size / 2, i + (size - 1) / 2]`. A value is produced only when the whole
//! window lies inside the input, so the first `size / 2` and the last
//! `(size - 1) / 2` positions are `None`, and an input shorter than the window has
//! no values at all.

use std::collections::VecDeque;

use crate::errors::{Result, RollingError};

/// Number of rows averaged by default.
pub const DEFAULT_WINDOW_SIZE: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingWindow {
    size: usize,
}

/// Rolling mean, minimum and maximum of the same input, aligned with it row for row.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingStats {
    pub mean: Vec<Option<f64>>,
    pub min: Vec<Option<f64>>,
    pub max: Vec<Option<f64>>,
}

/// Compensated running sum that supports removing values as the window slides.
#[derive(Debug, Default, Clone, Copy)]
struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    fn remove(&mut self, value: f64) {
        self.add(-value);
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        RollingWindow {
            size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl RollingWindow {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(RollingError::EmptyWindow(size));
        }
        Ok(RollingWindow { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows before the center that belong to the window.
    pub fn left_half(&self) -> usize {
        self.size / 2
    }

    /// Rows after the center that belong to the window.
    pub fn right_half(&self) -> usize {
        (self.size - 1) / 2
    }

    ///
    /// Centered rolling mean.
    ///
    /// # Arguments
    /// - values: the series to smooth
    pub fn mean(&self, values: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; values.len()];
        let mut acc = KahanSum::default();

        for (end, &value) in values.iter().enumerate() {
            acc.add(value);
            if end >= self.size {
                acc.remove(values[end - self.size]);
            }
            if end + 1 >= self.size {
                out[end - self.right_half()] = Some(acc.sum / self.size as f64);
            }
        }

        out
    }

    /// Centered rolling minimum.
    pub fn min(&self, values: &[f64]) -> Vec<Option<f64>> {
        self.extremum(values, |candidate, kept| candidate <= kept)
    }

    /// Centered rolling maximum.
    pub fn max(&self, values: &[f64]) -> Vec<Option<f64>> {
        self.extremum(values, |candidate, kept| candidate >= kept)
    }

    pub fn stats(&self, values: &[f64]) -> RollingStats {
        RollingStats {
            mean: self.mean(values),
            min: self.min(values),
            max: self.max(values),
        }
    }

    ///
    /// Monotonic deque scan. `dominates(candidate, kept)` is true when `candidate`
    /// makes `kept` useless for every later window.
    ///
    fn extremum<F>(&self, values: &[f64], dominates: F) -> Vec<Option<f64>>
    where
        F: Fn(f64, f64) -> bool,
    {
        let mut out = vec![None; values.len()];
        let mut deque: VecDeque<usize> = VecDeque::new();

        for (end, &value) in values.iter().enumerate() {
            while let Some(&back) = deque.back() {
                if dominates(value, values[back]) {
                    deque.pop_back();
                } else {
                    break;
                }
            }
            deque.push_back(end);

            if let Some(&front) = deque.front() {
                if front + self.size <= end {
                    deque.pop_front();
                }
            }

            if end + 1 >= self.size {
                out[end - self.right_half()] = deque.front().map(|&i| values[i]);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    /// Straightforward window scan to check the sliding versions against.
    fn naive(values: &[f64], size: usize, f: fn(&[f64]) -> f64) -> Vec<Option<f64>> {
        let left = size / 2;
        let right = (size - 1) / 2;
        (0..values.len())
            .map(|i| {
                if i < left || i + right >= values.len() {
                    None
                } else {
                    Some(f(&values[i - left..=i + right]))
                }
            })
            .collect()
    }

    fn mean_of(w: &[f64]) -> f64 {
        w.iter().sum::<f64>() / w.len() as f64
    }

    fn min_of(w: &[f64]) -> f64 {
        w.iter().copied().fold(f64::INFINITY, f64::min)
    }

    fn max_of(w: &[f64]) -> f64 {
        w.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    #[fixture]
    fn series() -> Vec<f64> {
        vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0, 8.0]
    }

    #[rstest]
    fn test_zero_window_is_rejected() {
        assert_eq!(RollingWindow::new(0), Err(RollingError::EmptyWindow(0)));
    }

    #[rstest]
    fn test_default_window() {
        assert_eq!(RollingWindow::default().size(), DEFAULT_WINDOW_SIZE);
    }

    #[rstest]
    fn test_odd_window_is_symmetric() {
        let window = RollingWindow::new(3).unwrap();
        let mean = window.mean(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(
            mean,
            vec![None, Some(1.0), Some(2.0), Some(3.0), Some(4.0), None]
        );
    }

    #[rstest]
    fn test_even_window_leans_left() {
        // centered sum of 4 over 0..6 gives [NaN, NaN, 6, 10, 14, NaN]
        let window = RollingWindow::new(4).unwrap();
        let mean = window.mean(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(
            mean,
            vec![None, None, Some(1.5), Some(2.5), Some(3.5), None]
        );
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(7)]
    #[case(12)]
    fn test_matches_naive_scan(series: Vec<f64>, #[case] size: usize) {
        let window = RollingWindow::new(size).unwrap();
        let stats = window.stats(&series);

        let expected_mean = naive(&series, size, mean_of);
        for (got, want) in stats.mean.iter().zip(expected_mean.iter()) {
            match (got, want) {
                (Some(g), Some(w)) => assert!((g - w).abs() < 1e-12, "{} != {}", g, w),
                (None, None) => {}
                _ => panic!("definedness differs: {:?} vs {:?}", got, want),
            }
        }
        assert_eq!(stats.min, naive(&series, size, min_of));
        assert_eq!(stats.max, naive(&series, size, max_of));
    }

    #[rstest]
    fn test_window_longer_than_input_is_undefined(series: Vec<f64>) {
        let window = RollingWindow::new(series.len() + 1).unwrap();
        let stats = window.stats(&series);
        assert!(stats.mean.iter().all(Option::is_none));
        assert!(stats.min.iter().all(Option::is_none));
        assert!(stats.max.iter().all(Option::is_none));
    }

    #[rstest]
    fn test_window_of_full_length_has_single_value(series: Vec<f64>) {
        let window = RollingWindow::new(series.len()).unwrap();
        let max = window.max(&series);
        let defined: Vec<(usize, f64)> = max
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
            .collect();
        assert_eq!(defined, vec![(series.len() / 2, 9.0)]);
    }

    #[rstest]
    fn test_mean_stays_accurate_on_long_runs() {
        let mut values = vec![1e9; 5_000];
        values.extend(vec![0.1; 5_000]);
        let window = RollingWindow::new(1_000).unwrap();
        let mean = window.mean(&values);
        let last = mean.iter().rev().find_map(|v| *v).unwrap();
        assert!((last - 0.1).abs() < 1e-6, "drifted to {}", last);
    }

    #[rstest]
    fn test_envelope_contains_mean(series: Vec<f64>) {
        let stats = RollingWindow::new(5).unwrap().stats(&series);
        for i in 0..series.len() {
            if let (Some(lo), Some(m), Some(hi)) = (stats.min[i], stats.mean[i], stats.max[i]) {
                assert!(lo <= m && m <= hi);
            }
        }
    }
}
