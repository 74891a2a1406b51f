use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::path::Path;

use super::angle::{angle_of_point, is_angle_in_sweep, point_on_circle};
use super::arc::append_arc;

/// One wedge of a pie or donut chart.
///
/// Slices are supplied as an ordered list; the list index is the caller's
/// slice index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarSegment {
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl PolarSegment {
    #[must_use]
    pub fn new(
        start_angle_deg: f64,
        sweep_angle_deg: f64,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Self {
        Self {
            start_angle_deg,
            sweep_angle_deg,
            inner_radius,
            outer_radius,
        }
    }

    #[must_use]
    pub fn end_angle_deg(self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg
    }

    #[must_use]
    pub fn mid_angle_deg(self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg / 2.0
    }

    #[must_use]
    pub fn contains(self, center: Point, point: Point) -> bool {
        is_point_in_segment(
            point,
            center,
            self.inner_radius,
            self.outer_radius,
            self.start_angle_deg,
            self.sweep_angle_deg,
        )
    }

    #[must_use]
    pub fn path(self, center: Point, corner_radius: f64) -> Path {
        create_segment_path(
            center,
            self.inner_radius,
            self.outer_radius,
            self.start_angle_deg,
            self.sweep_angle_deg,
            corner_radius,
        )
    }
}

/// Interior anchor at the angular midpoint, halfway between the radii.
#[must_use]
pub fn segment_centroid(center: Point, segment: PolarSegment) -> Point {
    point_on_circle(
        center,
        (segment.inner_radius + segment.outer_radius) / 2.0,
        segment.mid_angle_deg(),
    )
}

/// Anchor on the outer edge at the angular midpoint.
#[must_use]
pub fn segment_outer_midpoint(center: Point, segment: PolarSegment) -> Point {
    point_on_circle(center, segment.outer_radius, segment.mid_angle_deg())
}

/// Whether `point` falls inside the wedge.
///
/// The distance from `center` must lie in `[inner_radius, outer_radius]` and
/// the point's angle must lie in the sweep, with wraparound (a wedge from
/// 350° sweeping 20° contains 5°).
#[must_use]
pub fn is_point_in_segment(
    point: Point,
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle_deg: f64,
    sweep_angle_deg: f64,
) -> bool {
    let distance = point.distance_to(center);
    if !(distance >= inner_radius && distance <= outer_radius) {
        return false;
    }
    // The center of a pie has no direction; it belongs to every slice.
    if distance <= f64::EPSILON {
        return true;
    }
    is_angle_in_sweep(angle_of_point(center, point), start_angle_deg, sweep_angle_deg)
}

/// Index of the first segment containing `point`.
///
/// Overlapping or touching segments resolve to the earliest in the list.
#[must_use]
pub fn find_segment_at_point(
    point: Point,
    center: Point,
    segments: &[PolarSegment],
) -> Option<usize> {
    segments
        .iter()
        .position(|segment| segment.contains(center, point))
}

/// Fillable wedge outline.
///
/// `inner_radius <= 0` draws a pie slice whose edges meet at `center`; a
/// positive inner radius draws a ring segment that excludes the center. A
/// sweep of 360° or more yields a full disc or annulus (the hole is a second,
/// reversed contour). `corner_radius > 0` rounds the two outer corners of a
/// pie slice, or all four corners of a ring segment, shrinking the rounding
/// when the wedge is too thin or too narrow to fit it. Zero or non-finite
/// sweeps and non-positive outer radii yield an empty path.
#[must_use]
pub fn create_segment_path(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle_deg: f64,
    sweep_angle_deg: f64,
    corner_radius: f64,
) -> Path {
    let (mut inner, mut outer) = (inner_radius.max(0.0), outer_radius.max(0.0));
    if inner > outer {
        std::mem::swap(&mut inner, &mut outer);
    }
    if !outer.is_finite()
        || outer <= 0.0
        || !start_angle_deg.is_finite()
        || !sweep_angle_deg.is_finite()
        || sweep_angle_deg == 0.0
    {
        return Path::new();
    }

    let (start, sweep) = if sweep_angle_deg < 0.0 {
        (start_angle_deg + sweep_angle_deg, -sweep_angle_deg)
    } else {
        (start_angle_deg, sweep_angle_deg)
    };

    let mut path = Path::new();
    if sweep >= 360.0 {
        append_arc(&mut path, center, outer, start, 360.0, false);
        path.close();
        if inner > 0.0 {
            append_arc(&mut path, center, inner, start, -360.0, false);
            path.close();
        }
        return path;
    }

    let corner = clamp_corner_radius(corner_radius, inner, outer, sweep);
    if corner <= 0.0 {
        append_sharp_wedge(&mut path, center, inner, outer, start, sweep);
    } else {
        append_rounded_wedge(&mut path, center, inner, outer, start, sweep, corner);
    }
    path.close();
    path
}

fn append_sharp_wedge(
    path: &mut Path,
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    sweep: f64,
) {
    if inner <= 0.0 {
        path.move_to(center);
        append_arc(path, center, outer, start, sweep, true);
    } else {
        append_arc(path, center, outer, start, sweep, false);
        append_arc(path, center, inner, start + sweep, -sweep, true);
    }
}

/// Largest rounding that still fits the ring thickness and the angular
/// opening at both the outer and inner arcs.
fn clamp_corner_radius(requested: f64, inner: f64, outer: f64, sweep: f64) -> f64 {
    if !requested.is_finite() || requested <= 0.0 {
        return 0.0;
    }

    let mut corner = requested.min((outer - inner) / 2.0);
    let half_sweep = (sweep / 2.0).to_radians();
    if half_sweep < std::f64::consts::FRAC_PI_2 {
        let sin_half = half_sweep.sin();
        corner = corner.min(outer * sin_half / (1.0 + sin_half));
        if inner > 0.0 {
            corner = corner.min(inner * sin_half / (1.0 - sin_half));
        }
    }
    if corner > 1e-9 { corner } else { 0.0 }
}

fn append_rounded_wedge(
    path: &mut Path,
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    sweep: f64,
    corner: f64,
) {
    let end = start + sweep;

    // Corner circles tangent to the outer arc (from inside) and a radial edge.
    let outer_track = outer - corner;
    let outer_delta = (corner / outer_track).asin().to_degrees();
    let outer_edge = (outer_track * outer_track - corner * corner).max(0.0).sqrt();

    let start_edge_outer = point_on_circle(center, outer_edge, start);
    if inner <= 0.0 {
        path.move_to(center);
        path.line_to(start_edge_outer);
    } else {
        path.move_to(start_edge_outer);
    }

    let start_corner = point_on_circle(center, outer_track, start + outer_delta);
    append_arc(path, start_corner, corner, start - 90.0, 90.0 + outer_delta, true);
    append_arc(
        path,
        center,
        outer,
        start + outer_delta,
        sweep - 2.0 * outer_delta,
        true,
    );
    let end_corner = point_on_circle(center, outer_track, end - outer_delta);
    append_arc(path, end_corner, corner, end - outer_delta, 90.0 + outer_delta, true);

    if inner <= 0.0 {
        path.line_to(center);
        return;
    }

    // Corner circles tangent to the inner arc (from outside) and a radial edge.
    let inner_track = inner + corner;
    let inner_delta = (corner / inner_track).asin().to_degrees();
    let inner_edge = (inner_track * inner_track - corner * corner).max(0.0).sqrt();

    path.line_to(point_on_circle(center, inner_edge, end));
    let end_inner_corner = point_on_circle(center, inner_track, end - inner_delta);
    append_arc(path, end_inner_corner, corner, end + 90.0, 90.0 - inner_delta, true);
    append_arc(
        path,
        center,
        inner,
        end - inner_delta,
        -(sweep - 2.0 * inner_delta),
        true,
    );
    let start_inner_corner = point_on_circle(center, inner_track, start + inner_delta);
    append_arc(
        path,
        start_inner_corner,
        corner,
        start + inner_delta + 180.0,
        90.0 - inner_delta,
        true,
    );
}
