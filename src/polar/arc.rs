use crate::core::Point;
use crate::path::Path;

use super::angle::point_on_circle;

/// Largest arc piece approximated by a single cubic.
const MAX_CUBIC_ARC_DEG: f64 = 90.0;

/// Appends a circular arc as cubic Béziers.
///
/// With `connect` the arc joins the open contour with a straight line (skipped
/// when the pen already sits on the arc start); otherwise it starts a new
/// contour. Negative sweeps run counter to the angle convention.
pub(crate) fn append_arc(
    path: &mut Path,
    center: Point,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    connect: bool,
) {
    let start = point_on_circle(center, radius, start_deg);
    match path.current_point() {
        Some(current) if connect => {
            if current.distance_to(start) > 1e-9 {
                path.line_to(start);
            }
        }
        _ => {
            path.move_to(start);
        }
    }

    if sweep_deg == 0.0 || !sweep_deg.is_finite() {
        return;
    }

    let pieces = (sweep_deg.abs() / MAX_CUBIC_ARC_DEG).ceil().max(1.0) as usize;
    let piece_deg = sweep_deg / pieces as f64;
    let handle = 4.0 / 3.0 * (piece_deg.to_radians() / 4.0).tan() * radius;

    for index in 0..pieces {
        let from_deg = start_deg + piece_deg * index as f64;
        let to_deg = from_deg + piece_deg;
        let (from_sin, from_cos) = from_deg.to_radians().sin_cos();
        let (to_sin, to_cos) = to_deg.to_radians().sin_cos();

        let from = point_on_circle(center, radius, from_deg);
        let to = point_on_circle(center, radius, to_deg);
        let ctrl1 = Point::new(from.x - handle * from_sin, from.y + handle * from_cos);
        let ctrl2 = Point::new(to.x + handle * to_sin, to.y - handle * to_cos);
        path.cubic_to(ctrl1, ctrl2, to);
    }
}

/// Open arc path from `start_deg` sweeping `sweep_deg`.
#[must_use]
pub fn arc_path(center: Point, radius: f64, start_deg: f64, sweep_deg: f64) -> Path {
    let mut path = Path::new();
    append_arc(&mut path, center, radius, start_deg, sweep_deg, false);
    path
}
