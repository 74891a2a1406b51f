use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::finite_or;
use crate::core::{Point, Rect, Size};
use crate::render::TextHAlign;

use super::angle::point_on_circle;
use super::segment::{PolarSegment, segment_outer_midpoint};

/// Upper bound on collision-resolution passes in [`distribute_labels`].
pub const MAX_LABEL_ITERATIONS: usize = 100;

/// Overlaps smaller than this are treated as resolved.
const OVERLAP_EPSILON: f64 = 1e-6;

/// Geometry of an outside label connector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchorOptions {
    /// Radial distance from the outer edge to the connector elbow.
    #[serde(default = "default_connector_length")]
    pub connector_length: f64,
    /// Horizontal run from the elbow to the label anchor.
    #[serde(default = "default_horizontal_run")]
    pub horizontal_run: f64,
    /// Angular band around 90° and 270° where labels are centered.
    #[serde(default = "default_center_band_deg")]
    pub center_band_deg: f64,
}

fn default_connector_length() -> f64 {
    12.0
}

fn default_horizontal_run() -> f64 {
    8.0
}

fn default_center_band_deg() -> f64 {
    5.0
}

impl Default for LabelAnchorOptions {
    fn default() -> Self {
        Self {
            connector_length: default_connector_length(),
            horizontal_run: default_horizontal_run(),
            center_band_deg: default_center_band_deg(),
        }
    }
}

/// Where an outside label attaches to its slice and how its text aligns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub arc_point: Point,
    pub label_point: Point,
    pub alignment: TextHAlign,
}

/// Anchors an outside label at the slice's angular midpoint.
///
/// Labels on the right half align left (text grows away from the chart),
/// labels on the left half align right, and labels near straight up or down
/// are centered without a horizontal run.
#[must_use]
pub fn label_anchor(center: Point, segment: PolarSegment, options: LabelAnchorOptions) -> LabelAnchor {
    let arc_point = segment_outer_midpoint(center, segment);
    let mid_angle = segment.mid_angle_deg();
    let elbow = point_on_circle(
        center,
        segment.outer_radius + options.connector_length,
        mid_angle,
    );

    let cos = mid_angle.to_radians().cos();
    let band = options.center_band_deg.to_radians().sin().abs();
    let (alignment, run) = if cos.abs() <= band {
        (TextHAlign::Center, 0.0)
    } else if cos > 0.0 {
        (TextHAlign::Left, options.horizontal_run)
    } else {
        (TextHAlign::Right, -options.horizontal_run)
    };

    LabelAnchor {
        arc_point,
        label_point: Point::new(elbow.x + run, elbow.y),
        alignment,
    }
}

/// Pushes overlapping label boxes apart, then clamps them into `bounds`.
///
/// Boxes are centered on their positions and sized by `label_sizes` (missing
/// sizes count as zero). Any pair closer than `min_spacing` is separated along
/// the axis with the smaller overlap, each box moving half the distance.
/// Resolution stops when no pair collides or after
/// [`MAX_LABEL_ITERATIONS`] passes. Output order matches input order.
#[must_use]
pub fn distribute_labels(
    ideal_positions: &[Point],
    label_sizes: &[Size],
    min_spacing: f64,
    bounds: Rect,
) -> Vec<Point> {
    let spacing = if min_spacing.is_finite() {
        min_spacing.max(0.0)
    } else {
        0.0
    };
    let sizes: Vec<Size> = (0..ideal_positions.len())
        .map(|index| label_sizes.get(index).copied().unwrap_or(Size::ZERO))
        .collect();
    let mut positions = ideal_positions.to_vec();

    let mut converged = positions.len() < 2;
    for _ in 0..MAX_LABEL_ITERATIONS {
        if converged {
            break;
        }
        let mut moved = false;
        for first in 0..positions.len() {
            for second in (first + 1)..positions.len() {
                moved |= separate_pair(&mut positions, &sizes, first, second, spacing);
            }
        }
        converged = !moved;
    }

    if !converged {
        warn!(
            labels = positions.len(),
            iterations = MAX_LABEL_ITERATIONS,
            "label distribution did not converge"
        );
    }

    positions
        .iter()
        .zip(&sizes)
        .map(|(position, size)| clamp_into(*position, *size, bounds))
        .collect()
}

fn separate_pair(
    positions: &mut [Point],
    sizes: &[Size],
    first: usize,
    second: usize,
    spacing: f64,
) -> bool {
    let (a, b) = (positions[first], positions[second]);
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let overlap_x = (sizes[first].width + sizes[second].width) / 2.0 + spacing - dx.abs();
    let overlap_y = (sizes[first].height + sizes[second].height) / 2.0 + spacing - dy.abs();
    if !(overlap_x > OVERLAP_EPSILON && overlap_y > OVERLAP_EPSILON) {
        return false;
    }

    // Coincident boxes push the earlier label up/left.
    if overlap_y <= overlap_x {
        let direction = if dy < 0.0 { -1.0 } else { 1.0 };
        let shift = overlap_y / 2.0 * direction;
        positions[first].y -= shift;
        positions[second].y += shift;
    } else {
        let direction = if dx < 0.0 { -1.0 } else { 1.0 };
        let shift = overlap_x / 2.0 * direction;
        positions[first].x -= shift;
        positions[second].x += shift;
    }
    true
}

fn clamp_into(position: Point, size: Size, bounds: Rect) -> Point {
    Point::new(
        clamp_axis(position.x, size.width, bounds.left, bounds.right()),
        clamp_axis(position.y, size.height, bounds.top, bounds.bottom()),
    )
}

/// Non-finite extents count as zero; a NaN bound leaves the axis unclamped.
fn clamp_axis(value: f64, extent: f64, low: f64, high: f64) -> f64 {
    let half = finite_or(extent, 0.0).max(0.0) / 2.0;
    let min = low + half;
    let max = high - half;
    if min.is_nan() || max.is_nan() {
        value
    } else if min > max {
        finite_or((low + high) / 2.0, value)
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_axis_centers_oversized_boxes() {
        assert_eq!(clamp_axis(3.0, 50.0, 0.0, 20.0), 10.0);
        assert_eq!(clamp_axis(-5.0, 4.0, 0.0, 20.0), 2.0);
    }

    #[test]
    fn clamp_axis_tolerates_nan_inputs() {
        assert_eq!(clamp_axis(3.0, f64::NAN, 0.0, 20.0), 3.0);
        assert_eq!(clamp_axis(30.0, f64::INFINITY, 0.0, 20.0), 20.0);
        assert_eq!(clamp_axis(3.0, 2.0, f64::NEG_INFINITY, f64::NAN), 3.0);
        assert!(clamp_axis(f64::NAN, 2.0, 0.0, 20.0).is_nan());
    }

    #[test]
    fn coincident_pair_is_split_vertically() {
        let mut positions = vec![Point::new(10.0, 10.0), Point::new(10.0, 10.0)];
        let sizes = vec![Size::new(20.0, 10.0), Size::new(20.0, 10.0)];
        assert!(separate_pair(&mut positions, &sizes, 0, 1, 0.0));
        assert!((positions[0].y - 5.0).abs() <= 1e-12);
        assert!((positions[1].y - 15.0).abs() <= 1e-12);
    }
}
