use serde::{Deserialize, Serialize};

use crate::core::{CoordinateSystem, DataPoint, Point, Rect};

use super::Path;
use super::simplify::simplify_points;

/// Default corner rounding for `create_smooth_path`.
pub const DEFAULT_SMOOTHNESS: f64 = 0.3;

/// Default data-space baseline for `create_area_path`.
pub const DEFAULT_AREA_BASELINE: f64 = 0.0;

/// Tuning for Catmull-Rom interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatmullRomOptions {
    /// Tangent scale; `0.5` is the classic uniform Catmull-Rom spline.
    #[serde(default = "default_tension")]
    pub tension: f64,
    /// Straight sub-segments emitted per curve segment, clamped to
    /// `1..=MAX_SEGMENTS_PER_CURVE`.
    #[serde(default = "default_segments_per_curve")]
    pub segments_per_curve: usize,
}

/// Upper bound on `CatmullRomOptions::segments_per_curve`.
pub const MAX_SEGMENTS_PER_CURVE: usize = 1024;

fn default_tension() -> f64 {
    0.5
}

fn default_segments_per_curve() -> usize {
    20
}

impl Default for CatmullRomOptions {
    fn default() -> Self {
        Self {
            tension: default_tension(),
            segments_per_curve: default_segments_per_curve(),
        }
    }
}

/// Connects already-projected points with straight segments.
///
/// A single point yields a lone `MoveTo`; an empty slice yields an empty path.
#[must_use]
pub fn polyline_path(points: &[Point]) -> Path {
    let mut path = Path::with_capacity(points.len());
    let Some((first, rest)) = points.split_first() else {
        return path;
    };

    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    path
}

/// Projects each point and connects consecutive points with straight lines.
#[must_use]
pub fn create_line_path(points: &[DataPoint], coords: CoordinateSystem) -> Path {
    polyline_path(&coords.project_points(points))
}

/// Cubic path through every projected point with tangents shaped by
/// `smoothness`.
///
/// Each segment's control points follow the vector between the segment's
/// outer neighbors scaled by `smoothness`, so `0.0` draws straight segments.
/// Values outside `[0, 1]` are accepted and only over/under-shoot.
#[must_use]
pub fn create_smooth_path(points: &[DataPoint], coords: CoordinateSystem, smoothness: f64) -> Path {
    let projected = coords.project_points(points);
    smooth_polyline(&projected, smoothness)
}

fn smooth_polyline(projected: &[Point], smoothness: f64) -> Path {
    if projected.len() < 3 {
        return polyline_path(projected);
    }

    let smoothness = if smoothness.is_finite() { smoothness } else { 0.0 };
    let mut path = Path::with_capacity(projected.len());
    path.move_to(projected[0]);

    let last = projected.len() - 1;
    for index in 0..last {
        let previous = projected[index.saturating_sub(1)];
        let from = projected[index];
        let to = projected[index + 1];
        let next = projected[(index + 2).min(last)];

        let ctrl1 = Point::new(
            from.x + (to.x - previous.x) * smoothness,
            from.y + (to.y - previous.y) * smoothness,
        );
        let ctrl2 = Point::new(
            to.x - (next.x - from.x) * smoothness,
            to.y - (next.y - from.y) * smoothness,
        );
        path.cubic_to(ctrl1, ctrl2, to);
    }
    path
}

/// Interpolating cardinal spline through every projected point.
///
/// Needs four or more points; shorter inputs fall back to
/// [`create_line_path`]. The end segments reuse their boundary point as the
/// missing neighbor, and the result is one continuous contour made of
/// `segments_per_curve` straight pieces per segment.
#[must_use]
pub fn create_catmull_rom_path(
    points: &[DataPoint],
    coords: CoordinateSystem,
    options: CatmullRomOptions,
) -> Path {
    if points.len() < 4 {
        return create_line_path(points, coords);
    }

    let projected = coords.project_points(points);
    let steps = options.segments_per_curve.clamp(1, MAX_SEGMENTS_PER_CURVE);
    let tension = if options.tension.is_finite() {
        options.tension
    } else {
        default_tension()
    };

    let last = projected.len() - 1;
    let mut path = Path::with_capacity(last.saturating_mul(steps).saturating_add(1));
    path.move_to(projected[0]);

    for index in 0..last {
        let p0 = projected[index.saturating_sub(1)];
        let p1 = projected[index];
        let p2 = projected[index + 1];
        let p3 = projected[(index + 2).min(last)];

        let m1 = Point::new(tension * (p2.x - p0.x), tension * (p2.y - p0.y));
        let m2 = Point::new(tension * (p3.x - p1.x), tension * (p3.y - p1.y));

        for step in 1..steps {
            let t = step as f64 / steps as f64;
            path.line_to(hermite(p1, m1, p2, m2, t));
        }
        // Land exactly on the data point rather than on a rounded evaluation.
        path.line_to(p2);
    }
    path
}

fn hermite(p1: Point, m1: Point, p2: Point, m2: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    Point::new(
        h00 * p1.x + h10 * m1.x + h01 * p2.x + h11 * m2.x,
        h00 * p1.y + h10 * m1.y + h01 * p2.y + h11 * m2.y,
    )
}

/// Straight-line path over the Douglas-Peucker simplification of the
/// projected points. First and last points are always kept.
#[must_use]
pub fn create_simplified_path(
    points: &[DataPoint],
    coords: CoordinateSystem,
    tolerance: f64,
) -> Path {
    let projected = coords.project_points(points);
    polyline_path(&simplify_points(&projected, tolerance))
}

/// Closed fillable region between the series and a data-space baseline.
///
/// The outline follows the line (or smooth, when `is_curved`) path, drops to
/// the baseline's screen Y at the last point, returns along the baseline and
/// closes. Baselines above the data or outside the domain are legal.
#[must_use]
pub fn create_area_path(
    points: &[DataPoint],
    coords: CoordinateSystem,
    baseline: f64,
    is_curved: bool,
) -> Path {
    let baseline_y = coords.data_y_to_screen_y(baseline);
    close_to_baseline(points, coords, baseline_y, is_curved)
}

/// Area path filled down to the domain floor, returned with the bounds a
/// gradient shader should be parameterized with.
///
/// The bounds are the path's own cached bounds so shader extents always
/// match the drawn geometry.
#[must_use]
pub fn create_gradient_path(
    points: &[DataPoint],
    coords: CoordinateSystem,
    is_curved: bool,
) -> (Path, Rect) {
    let floor_y = coords.data_y_to_screen_y(coords.domain().y_min);
    let path = close_to_baseline(points, coords, floor_y, is_curved);
    let bounds = path.bounds();
    (path, bounds)
}

fn close_to_baseline(
    points: &[DataPoint],
    coords: CoordinateSystem,
    baseline_y: f64,
    is_curved: bool,
) -> Path {
    let projected = coords.project_points(points);
    let (Some(first), Some(last)) = (projected.first().copied(), projected.last().copied()) else {
        return Path::new();
    };

    let mut path = if is_curved {
        smooth_polyline(&projected, DEFAULT_SMOOTHNESS)
    } else {
        polyline_path(&projected)
    };
    path.line_to(Point::new(last.x, baseline_y))
        .line_to(Point::new(first.x, baseline_y))
        .close();
    path
}
