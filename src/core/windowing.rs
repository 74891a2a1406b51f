use std::ops::Range;

use crate::core::DataPoint;

/// Index range of the points whose `x` falls inside an inclusive window.
///
/// `points` must be sorted ascending by `x`. Reversed bounds are swapped.
#[must_use]
pub fn x_window_range(points: &[DataPoint], start: f64, end: f64) -> Range<usize> {
    let (min_x, max_x) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let first = points.partition_point(|point| point.x < min_x);
    let last = points.partition_point(|point| point.x <= max_x);
    first..last.max(first)
}

/// Borrowed sub-slice of the points inside an inclusive `x` window.
#[must_use]
pub fn points_in_x_window(points: &[DataPoint], start: f64, end: f64) -> &[DataPoint] {
    &points[x_window_range(points, start, end)]
}
