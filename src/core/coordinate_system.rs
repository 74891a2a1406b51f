#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::primitives::finite_or;
use crate::core::{AxisBounds, DataPoint, LinearScale, Point, Rect};
use crate::error::{ChartError, ChartResult};

/// Point counts at or above this size are projected with rayon when the
/// `parallel-projection` feature is enabled.
#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_MIN_POINTS: usize = 16_384;

/// Data-space rectangle shown by a plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataDomain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataDomain {
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Fits the tightest domain around the given points.
    ///
    /// Degenerate (single-value) extents are kept as-is; the coordinate system
    /// handles zero spans without dividing by zero.
    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "cannot fit a data domain to an empty series".to_owned(),
            ));
        }

        let mut domain = Self::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        );
        for point in points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "data point coordinates must be finite".to_owned(),
                ));
            }
            domain.x_min = domain.x_min.min(point.x);
            domain.x_max = domain.x_max.max(point.x);
            domain.y_min = domain.y_min.min(point.y);
            domain.y_max = domain.y_max.max(point.y);
        }
        Ok(domain)
    }
}

/// Immutable mapping between a data rectangle and a screen rectangle.
///
/// Minimum data Y lands on the bottom screen edge and maximum data Y on the
/// top edge unless `y_inversed` is set; `x_inversed` flips the X axis the same
/// way. Every conversion returns a finite number, including for degenerate
/// domains, zero-size screen rects and values outside the domain (which
/// extrapolate rather than clamp).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    screen_rect: Rect,
    domain: DataDomain,
    #[serde(default)]
    x_inversed: bool,
    #[serde(default)]
    y_inversed: bool,
    #[serde(
        default = "default_device_pixel_ratio",
        deserialize_with = "deserialize_device_pixel_ratio"
    )]
    device_pixel_ratio: f64,
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

fn sanitize_device_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        default_device_pixel_ratio()
    }
}

fn deserialize_device_pixel_ratio<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(sanitize_device_pixel_ratio)
}

impl CoordinateSystem {
    #[must_use]
    pub fn new(screen_rect: Rect, domain: DataDomain) -> Self {
        Self {
            screen_rect,
            domain,
            x_inversed: false,
            y_inversed: false,
            device_pixel_ratio: 1.0,
        }
    }

    /// Builds a coordinate system from axis bounds produced by axis layout.
    #[must_use]
    pub fn from_axis_bounds(screen_rect: Rect, x_bounds: AxisBounds, y_bounds: AxisBounds) -> Self {
        Self::new(
            screen_rect,
            DataDomain::new(x_bounds.min, x_bounds.max, y_bounds.min, y_bounds.max),
        )
    }

    #[must_use]
    pub fn with_x_inversed(mut self, inversed: bool) -> Self {
        self.x_inversed = inversed;
        self
    }

    #[must_use]
    pub fn with_y_inversed(mut self, inversed: bool) -> Self {
        self.y_inversed = inversed;
        self
    }

    /// Sets the physical-to-logical pixel ratio. Non-finite or non-positive
    /// ratios fall back to `1.0`.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = sanitize_device_pixel_ratio(ratio);
        self
    }

    /// Horizontal data-to-pixel scale, flipped when `x_inversed` is set.
    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        let rect = self.screen_rect;
        let (start, end) = if self.x_inversed {
            (rect.right(), rect.left)
        } else {
            (rect.left, rect.right())
        };
        LinearScale::new(self.domain.x_min, self.domain.x_max, start, end)
    }

    /// Vertical data-to-pixel scale; maps `y_min` to the bottom edge unless
    /// `y_inversed` is set.
    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        let rect = self.screen_rect;
        let (start, end) = if self.y_inversed {
            (rect.top, rect.bottom())
        } else {
            (rect.bottom(), rect.top)
        };
        LinearScale::new(self.domain.y_min, self.domain.y_max, start, end)
    }

    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    #[must_use]
    pub fn domain(&self) -> DataDomain {
        self.domain
    }

    #[must_use]
    pub fn x_inversed(&self) -> bool {
        self.x_inversed
    }

    #[must_use]
    pub fn y_inversed(&self) -> bool {
        self.y_inversed
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    #[must_use]
    pub fn data_x_to_screen_x(&self, x: f64) -> f64 {
        self.x_scale().domain_to_pixel(x)
    }

    #[must_use]
    pub fn data_y_to_screen_y(&self, y: f64) -> f64 {
        self.y_scale().domain_to_pixel(y)
    }

    #[must_use]
    pub fn screen_x_to_data_x(&self, x: f64) -> f64 {
        self.x_scale().pixel_to_domain(x)
    }

    #[must_use]
    pub fn screen_y_to_data_y(&self, y: f64) -> f64 {
        self.y_scale().pixel_to_domain(y)
    }

    #[must_use]
    pub fn data_to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(self.data_x_to_screen_x(x), self.data_y_to_screen_y(y))
    }

    #[must_use]
    pub fn screen_to_data(&self, point: Point) -> (f64, f64) {
        (
            self.screen_x_to_data_x(point.x),
            self.screen_y_to_data_y(point.y),
        )
    }

    #[must_use]
    pub fn project_point(&self, point: &DataPoint) -> Point {
        self.data_to_screen(point.x, point.y)
    }

    /// Projects a whole series into screen space, preserving order.
    #[must_use]
    pub fn project_points(&self, points: &[DataPoint]) -> Vec<Point> {
        #[cfg(feature = "parallel-projection")]
        {
            if points.len() >= PARALLEL_PROJECTION_MIN_POINTS {
                return points
                    .par_iter()
                    .map(|point| self.project_point(point))
                    .collect();
            }
        }

        points.iter().map(|point| self.project_point(point)).collect()
    }

    /// Rounds a logical coordinate to the nearest physical pixel boundary.
    #[must_use]
    pub fn snap_to_device_pixel(&self, value: f64) -> f64 {
        let ratio = sanitize_device_pixel_ratio(self.device_pixel_ratio);
        finite_or((value * ratio).round() / ratio, value)
    }

    #[must_use]
    pub fn contains_screen_point(&self, point: Point) -> bool {
        self.screen_rect.contains(point)
    }
}
