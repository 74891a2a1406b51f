use crate::core::Point;

/// Slack used when comparing normalized angles against sweep boundaries.
pub const ANGLE_EPSILON_DEG: f64 = 1e-9;

/// Maps any angle to `[0, 360)`. Non-finite input maps to `0.0`.
#[must_use]
pub fn normalize_angle(angle_deg: f64) -> f64 {
    if !angle_deg.is_finite() {
        return 0.0;
    }
    let normalized = angle_deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Maps any angle to `[-180, 180)`. Non-finite input maps to `0.0`.
#[must_use]
pub fn normalize_angle_signed(angle_deg: f64) -> f64 {
    if !angle_deg.is_finite() {
        return 0.0;
    }
    let shifted = normalize_angle(angle_deg + 180.0) - 180.0;
    if shifted >= 180.0 { -180.0 } else { shifted }
}

/// `center + radius * (cos θ, sin θ)`; a zero radius returns `center` exactly.
///
/// Angles grow from the positive screen-X axis toward positive screen-Y,
/// which is clockwise on screen. Negative radii reflect through the center.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    if radius == 0.0 {
        return center;
    }
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Evenly angle-spaced points along an arc.
///
/// Returns `segments + 1` points from `start_deg` to `start_deg + sweep_deg`,
/// except that `0` segments yields nothing and `1` segment yields only the
/// angular midpoint.
#[must_use]
pub fn points_on_arc(
    center: Point,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    segments: usize,
) -> Vec<Point> {
    match segments {
        0 => Vec::new(),
        1 => vec![point_on_circle(center, radius, start_deg + sweep_deg / 2.0)],
        _ => (0..=segments)
            .map(|index| {
                let t = index as f64 / segments as f64;
                point_on_circle(center, radius, start_deg + sweep_deg * t)
            })
            .collect(),
    }
}

/// Angle of `point` around `center`, normalized to `[0, 360)`.
#[must_use]
pub fn angle_of_point(center: Point, point: Point) -> f64 {
    normalize_angle((point.y - center.y).atan2(point.x - center.x).to_degrees())
}

/// Whether `angle_deg` lies in the sweep `[start, start + sweep]`, with
/// wraparound. Negative sweeps run backwards from `start`; sweeps of 360° or
/// more cover every angle.
#[must_use]
pub fn is_angle_in_sweep(angle_deg: f64, start_deg: f64, sweep_deg: f64) -> bool {
    if !angle_deg.is_finite() || !start_deg.is_finite() || !sweep_deg.is_finite() {
        return false;
    }
    if sweep_deg.abs() >= 360.0 {
        return true;
    }

    let (start, sweep) = if sweep_deg < 0.0 {
        (start_deg + sweep_deg, -sweep_deg)
    } else {
        (start_deg, sweep_deg)
    };
    let relative = normalize_angle(angle_deg - start);
    relative <= sweep + ANGLE_EPSILON_DEG || relative >= 360.0 - ANGLE_EPSILON_DEG
}
