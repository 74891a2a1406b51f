//! Largest-Triangle-Three-Buckets downsampling.
//!
//! Reduces an x-sorted series to a target point count while keeping the
//! points that shape its silhouette (spikes, valleys, step edges).

use tracing::trace;

use crate::core::{DataPoint, points_in_x_window};

/// Inputs at or below this length are never reduced.
pub const MIN_REDUCIBLE_LEN: usize = 3;

/// Indices of the points LTTB keeps, ascending.
///
/// Returns every index when `data.len() <= target_points` or when the input
/// has three points or fewer. Targets below two are treated as two, so the
/// first and last points are always kept. Within a bucket, the first
/// candidate reaching the maximal triangle area wins.
#[must_use]
pub fn lttb_indices(data: &[DataPoint], target_points: usize) -> Vec<usize> {
    let len = data.len();
    if len <= MIN_REDUCIBLE_LEN || len <= target_points {
        return (0..len).collect();
    }

    let target = target_points.max(2);
    let bucket_count = target - 2;
    let mut selected = Vec::with_capacity(target);
    selected.push(0);

    if bucket_count > 0 {
        // Integer bounds: bucket `bucket_count` always ends at `len - 1`.
        let interior = (len - 2) as u128;
        let bucket_bound = |bucket: usize| -> usize {
            let offset = bucket as u128 * interior / bucket_count as u128;
            (offset as usize + 1).min(len - 1)
        };

        let mut previous = 0usize;
        for bucket in 0..bucket_count {
            let start = bucket_bound(bucket);
            let end = bucket_bound(bucket + 1).max(start + 1);

            let (avg_x, avg_y) = if bucket + 1 < bucket_count {
                mean_of(&data[end..bucket_bound(bucket + 2).max(end + 1)])
            } else {
                (data[len - 1].x, data[len - 1].y)
            };

            let anchor = &data[previous];
            let mut best_index = start;
            let mut best_area = f64::NEG_INFINITY;
            for (index, candidate) in data.iter().enumerate().take(end).skip(start) {
                let area = ((anchor.x - avg_x) * (candidate.y - anchor.y)
                    - (anchor.x - candidate.x) * (avg_y - anchor.y))
                    .abs();
                if area > best_area {
                    best_area = area;
                    best_index = index;
                }
            }

            selected.push(best_index);
            previous = best_index;
        }
    }

    selected.push(len - 1);
    selected
}

/// Owning LTTB downsample; the input is never mutated.
///
/// Kept points are cloned whole, so labels and metadata (including those of
/// the first and last point) pass through unchanged.
#[must_use]
pub fn downsample(data: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    let indices = lttb_indices(data, target_points);
    trace!(
        input = data.len(),
        target = target_points,
        output = indices.len(),
        "lttb downsample"
    );
    indices.into_iter().map(|index| data[index].clone()).collect()
}

/// Downsamples only the points inside an inclusive `x` window.
#[must_use]
pub fn downsample_window(
    data: &[DataPoint],
    x_start: f64,
    x_end: f64,
    target_points: usize,
) -> Vec<DataPoint> {
    downsample(points_in_x_window(data, x_start, x_end), target_points)
}

fn mean_of(points: &[DataPoint]) -> (f64, f64) {
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |acc, point| (acc.0 + point.x, acc.1 + point.y));
    let count = points.len() as f64;
    (sum_x / count, sum_y / count)
}
