use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{CoordinateSystem, DataPoint, Point};
use crate::error::{ChartError, ChartResult};

/// Default hit radius around a series line, in logical pixels.
pub const DEFAULT_SNAP_RADIUS_PX: f64 = 24.0;

/// Candidates closer than this are considered the same position on screen.
const COINCIDENT_EPSILON_PX: f64 = 1e-9;

/// How a series is drawn, which decides how it is measured at the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeriesShape {
    /// Continuous line; measured at its interpolated Y under the pointer.
    #[default]
    Line,
    /// Filled line; measured like `Line`.
    Area,
    /// Discrete bars; measured at the nearest real sample.
    Bar,
    /// Discrete markers; measured at the nearest real sample.
    Scatter,
}

impl SeriesShape {
    #[must_use]
    pub fn interpolates(self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }
}

/// Read-only view of one series as the resolver sees it.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    pub points: &'a [DataPoint],
    pub visible: bool,
    pub shape: SeriesShape,
}

impl<'a> SeriesView<'a> {
    #[must_use]
    pub fn new(points: &'a [DataPoint]) -> Self {
        Self {
            points,
            visible: true,
            shape: SeriesShape::Line,
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: SeriesShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Hit-testing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Largest accepted distance between pointer and series, in pixels.
    #[serde(default = "default_snap_radius_px")]
    pub snap_radius_px: f64,
    /// Shared-tooltip mode: always return the nearest series, no thresholds.
    #[serde(default)]
    pub shared: bool,
}

fn default_snap_radius_px() -> f64 {
    DEFAULT_SNAP_RADIUS_PX
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            snap_radius_px: DEFAULT_SNAP_RADIUS_PX,
            shared: false,
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn shared() -> Self {
        Self {
            shared: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_snap_radius_px(mut self, snap_radius_px: f64) -> Self {
        self.snap_radius_px = snap_radius_px;
        self
    }

    /// Snap radius with non-finite or negative values treated as zero.
    #[must_use]
    pub fn effective_snap_radius_px(self) -> f64 {
        if self.snap_radius_px.is_finite() {
            self.snap_radius_px.max(0.0)
        } else {
            0.0
        }
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize resolver config json: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse resolver config json: {e}"))
        })
    }
}

/// Pointer position to resolve. Without `screen_y` only X distance counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointQuery {
    pub screen_x: f64,
    #[serde(default)]
    pub screen_y: Option<f64>,
}

impl PointQuery {
    #[must_use]
    pub fn at(screen_x: f64, screen_y: f64) -> Self {
        Self {
            screen_x,
            screen_y: Some(screen_y),
        }
    }

    #[must_use]
    pub fn x_only(screen_x: f64) -> Self {
        Self {
            screen_x,
            screen_y: None,
        }
    }
}

/// Data point selected for a pointer query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPoint<'a> {
    /// Index into the series list passed to [`PointResolver::resolve`].
    pub series_index: usize,
    pub data_point: &'a DataPoint,
    pub screen_position: Point,
}

/// Index of the sample nearest to `x`, by X only.
///
/// Queries before the first sample clamp to it, queries after the last clamp
/// to the last; equidistant neighbors resolve to the earlier one. `points`
/// must be sorted ascending by `x`.
#[must_use]
pub fn nearest_index_by_x(points: &[DataPoint], x: f64) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let upper = points.partition_point(|point| point.x < x);
    if upper == 0 {
        return Some(0);
    }
    if upper == points.len() {
        return Some(points.len() - 1);
    }
    let before = upper - 1;
    if x - points[before].x <= points[upper].x - x {
        Some(before)
    } else {
        Some(upper)
    }
}

/// Linearly interpolated Y at `x`, holding the boundary Y outside the domain.
#[must_use]
pub fn interpolate_y_at(points: &[DataPoint], x: f64) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;
    if points.len() == 1 || x <= first.x {
        return Some(first.y);
    }
    if x >= last.x {
        return Some(last.y);
    }

    let upper = points.partition_point(|point| point.x < x);
    let (a, b) = (&points[upper - 1], &points[upper]);
    let span = b.x - a.x;
    if span == 0.0 {
        return Some(b.y);
    }
    Some(a.y + (b.y - a.y) * (x - a.x) / span)
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    series_index: usize,
    point_index: usize,
    position: Point,
    distance: f64,
}

/// Maps pointer positions to the data point they designate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointResolver {
    coords: CoordinateSystem,
    config: ResolverConfig,
}

impl PointResolver {
    #[must_use]
    pub fn new(coords: CoordinateSystem, config: ResolverConfig) -> Self {
        Self { coords, config }
    }

    #[must_use]
    pub fn coords(&self) -> CoordinateSystem {
        self.coords
    }

    #[must_use]
    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Resolves a query against the visible, non-empty series.
    ///
    /// - One candidate series always resolves to its nearest-by-X point.
    /// - Several series in shared mode resolve to the series nearest the
    ///   pointer on screen.
    /// - Several series otherwise must each beat a dynamic threshold of
    ///   `min(snap radius, half the gap to the closest competing series)`;
    ///   `None` when no series qualifies.
    ///
    /// Equal distances resolve to the earliest series.
    #[must_use]
    pub fn resolve<'a>(
        &self,
        query: PointQuery,
        series: &[SeriesView<'a>],
    ) -> Option<ResolvedPoint<'a>> {
        let data_x = self.coords.screen_x_to_data_x(query.screen_x);
        let candidates = self.candidates_for(query, data_x, series);

        let winner = match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            _ if self.config.shared || query.screen_y.is_none() => candidates
                .iter()
                .copied()
                .min_by_key(|candidate| OrderedFloat(candidate.distance)),
            _ => self.nearest_within_dynamic_threshold(&candidates),
        };

        let resolved = winner.map(|candidate| {
            let points: &'a [DataPoint] = series[candidate.series_index].points;
            let data_point = &points[candidate.point_index];
            ResolvedPoint {
                series_index: candidate.series_index,
                data_point,
                screen_position: self.coords.project_point(data_point),
            }
        });
        trace!(
            candidates = candidates.len(),
            shared = self.config.shared,
            resolved_series = resolved.map(|point| point.series_index),
            "resolve pointer query"
        );
        resolved
    }

    fn candidates_for(
        &self,
        query: PointQuery,
        data_x: f64,
        series: &[SeriesView<'_>],
    ) -> SmallVec<[Candidate; 4]> {
        let mut candidates = SmallVec::new();
        for (series_index, view) in series.iter().enumerate() {
            if !view.visible {
                continue;
            }
            let Some(point_index) = nearest_index_by_x(view.points, data_x) else {
                continue;
            };

            let nearest = self.coords.project_point(&view.points[point_index]);
            let position = if view.shape.interpolates() {
                let y = interpolate_y_at(view.points, data_x)
                    .unwrap_or(view.points[point_index].y);
                Point::new(query.screen_x, self.coords.data_y_to_screen_y(y))
            } else {
                nearest
            };
            let distance = match query.screen_y {
                Some(screen_y) => position.distance_to(Point::new(query.screen_x, screen_y)),
                None => (nearest.x - query.screen_x).abs(),
            };

            candidates.push(Candidate {
                series_index,
                point_index,
                position,
                distance,
            });
        }
        candidates
    }

    fn nearest_within_dynamic_threshold(&self, candidates: &[Candidate]) -> Option<Candidate> {
        let snap_radius = self.config.effective_snap_radius_px();
        candidates
            .iter()
            .enumerate()
            .filter(|(index, candidate)| {
                let gap = candidates
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| other != index)
                    .map(|(_, other)| candidate.position.distance_to(other.position))
                    .filter(|gap| *gap > COINCIDENT_EPSILON_PX)
                    .min_by_key(|gap| OrderedFloat(*gap));
                let threshold = gap.map_or(snap_radius, |gap| snap_radius.min(gap / 2.0));
                candidate.distance < threshold
            })
            .map(|(_, candidate)| *candidate)
            .min_by_key(|candidate| OrderedFloat(candidate.distance))
    }
}
