use crate::core::Point;

/// Default screen-space deviation (pixels) tolerated by simplification.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 2.0;

/// Distance from `point` to the infinite line through `start` and `end`.
///
/// Falls back to the distance to `start` when the chord is degenerate.
#[must_use]
pub fn perpendicular_distance(point: Point, start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let magnitude = dx.hypot(dy);
    if magnitude < 1e-10 {
        return point.distance_to(start);
    }

    ((dy * point.x - dx * point.y + end.x * start.y - end.y * start.x) / magnitude).abs()
}

/// Douglas-Peucker polyline simplification.
///
/// Keeps the first and last points, then recursively keeps the point of
/// maximum deviation from the current chord while that deviation exceeds
/// `tolerance`. Runs on an explicit stack so dense series cannot overflow
/// the call stack. Negative or non-finite tolerances behave like `0.0`.
#[must_use]
pub fn simplify_points(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        0.0
    };

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_distance = 0.0;
        let mut max_index = start;
        for (index, point) in points.iter().enumerate().take(end).skip(start + 1) {
            let distance = perpendicular_distance(*point, points[start], points[end]);
            if distance > max_distance {
                max_distance = distance;
                max_index = index;
            }
        }

        if max_distance > tolerance {
            keep[max_index] = true;
            stack.push((start, max_index));
            stack.push((max_index, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}
