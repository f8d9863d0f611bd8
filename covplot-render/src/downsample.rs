use covplot_rolling::ProfilePoint;

///
/// Thin dense segments so that all of them together hold about `max_points` points.
///
/// Consecutive points are merged in fixed-size buckets: the merged point takes the
/// mean position and smoothed value, the lowest minimum and the highest maximum, so
/// the drawn envelope never gets narrower. `max_points == 0` disables thinning.
///
pub fn downsample_segments(segments: &[Vec<ProfilePoint>], max_points: usize) -> Vec<Vec<ProfilePoint>> {
    let total: usize = segments.iter().map(|s| s.len()).sum();
    if max_points == 0 || total <= max_points {
        return segments.to_vec();
    }

    let bucket = total.div_ceil(max_points);
    segments
        .iter()
        .map(|segment| segment.chunks(bucket).map(merge_bucket).collect())
        .collect()
}

fn merge_bucket(points: &[ProfilePoint]) -> ProfilePoint {
    let n = points.len() as f64;
    ProfilePoint {
        x: points.iter().map(|p| p.x).sum::<f64>() / n,
        smoothed: points.iter().map(|p| p.smoothed).sum::<f64>() / n,
        min: points.iter().map(|p| p.min).fold(f64::INFINITY, f64::min),
        max: points.iter().map(|p| p.max).fold(f64::NEG_INFINITY, f64::max),
    }
}
