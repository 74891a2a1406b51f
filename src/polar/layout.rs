use serde::{Deserialize, Serialize};

use crate::core::{Point, Size};

use super::segment::PolarSegment;

/// Inputs for sizing a radial chart inside its available area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarLayoutOptions {
    /// Fraction of the largest fitting radius actually used.
    #[serde(default = "default_outer_radius_ratio")]
    pub outer_radius_ratio: f64,
    /// Reserve `label_space` on every side for labels drawn outside the ring.
    #[serde(default)]
    pub has_outside_labels: bool,
    #[serde(default)]
    pub label_space: f64,
    #[serde(default)]
    pub padding: f64,
}

fn default_outer_radius_ratio() -> f64 {
    0.8
}

impl Default for PolarLayoutOptions {
    fn default() -> Self {
        Self {
            outer_radius_ratio: default_outer_radius_ratio(),
            has_outside_labels: false,
            label_space: 0.0,
            padding: 0.0,
        }
    }
}

/// Resolved center and outer radius of a radial chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarLayout {
    pub center: Point,
    pub radius: f64,
}

impl PolarLayout {
    /// Radius of a donut hole expressed as a fraction of the outer radius.
    #[must_use]
    pub fn inner_radius(self, ratio: f64) -> f64 {
        if ratio.is_finite() {
            (self.radius * ratio).clamp(0.0, self.radius)
        } else {
            0.0
        }
    }
}

/// Centers the chart in `available` and sizes its radius:
/// `(min(w, h) - 2 * padding - 2 * label_space) / 2 * outer_radius_ratio`,
/// where `label_space` only counts when labels sit outside. Never negative.
#[must_use]
pub fn calculate_optimal_layout(available: Size, options: PolarLayoutOptions) -> PolarLayout {
    let label_space = if options.has_outside_labels {
        options.label_space
    } else {
        0.0
    };
    let usable = available.shortest_side() - 2.0 * options.padding - 2.0 * label_space;
    let radius = usable / 2.0 * options.outer_radius_ratio;

    PolarLayout {
        center: Point::new(available.width / 2.0, available.height / 2.0),
        radius: if radius.is_finite() { radius.max(0.0) } else { 0.0 },
    }
}

/// Lays out pie slices proportional to `values`.
///
/// Slices follow each other clockwise from `start_angle_deg`. `pad_angle_deg`
/// is trimmed from every slice (split evenly on both sides) without shifting
/// later slices. Negative and non-finite values count as zero; an all-zero
/// input yields zero-sweep slices.
#[must_use]
pub fn segments_from_values(
    values: &[f64],
    start_angle_deg: f64,
    inner_radius: f64,
    outer_radius: f64,
    pad_angle_deg: f64,
) -> Vec<PolarSegment> {
    let sanitized: Vec<f64> = values
        .iter()
        .map(|value| if value.is_finite() { value.max(0.0) } else { 0.0 })
        .collect();
    let total: f64 = sanitized.iter().sum();
    let pad = if pad_angle_deg.is_finite() {
        pad_angle_deg.max(0.0)
    } else {
        0.0
    };

    let mut cursor = start_angle_deg;
    sanitized
        .into_iter()
        .map(|value| {
            let share = if total > 0.0 { value / total * 360.0 } else { 0.0 };
            let trimmed = (share - pad).max(0.0);
            let segment = PolarSegment::new(
                cursor + (share - trimmed) / 2.0,
                trimmed,
                inner_radius,
                outer_radius,
            );
            cursor += share;
            segment
        })
        .collect()
}
