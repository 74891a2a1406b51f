use smallvec::SmallVec;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::Path;
use super::metrics::DEFAULT_CUBIC_STEPS;

/// Patterns that would cut a path into more dashes than this are not applied.
pub const MAX_DASHES_PER_PATH: f64 = 1.0e6;

/// Validated alternating on/off lengths, starting with "on".
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    intervals: SmallVec<[f64; 4]>,
}

impl DashPattern {
    /// Accepts a non-empty, even-length array of finite, non-negative lengths
    /// whose sum is positive.
    pub fn new(intervals: &[f64]) -> ChartResult<Self> {
        if intervals.is_empty() || intervals.len() % 2 != 0 {
            return Err(ChartError::InvalidDashPattern {
                len: intervals.len(),
            });
        }
        if intervals
            .iter()
            .any(|length| !length.is_finite() || *length < 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        if intervals.iter().sum::<f64>() <= 0.0 {
            return Err(ChartError::InvalidData(
                "dash pattern must have a positive total length".to_owned(),
            ));
        }

        Ok(Self {
            intervals: SmallVec::from_slice(intervals),
        })
    }

    #[must_use]
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// Length of one full on/off cycle.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.intervals.iter().sum()
    }

    /// Re-emits the "on" stretches of `path` as separate open contours.
    ///
    /// The pattern restarts at the beginning of every contour. When the path
    /// would need more than [`MAX_DASHES_PER_PATH`] cycles (or its length is
    /// not finite) the original path is returned solid.
    #[must_use]
    pub fn apply(&self, path: &Path) -> Path {
        let contours = path.flatten(DEFAULT_CUBIC_STEPS);
        let total_length: f64 = contours
            .iter()
            .flat_map(|contour| contour.points.windows(2))
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum();
        let cycles = total_length / self.period();
        if !(cycles <= MAX_DASHES_PER_PATH) {
            debug!(
                length = total_length,
                period = self.period(),
                "dash pattern too fine for path, drawing solid path"
            );
            return path.clone();
        }

        let mut dashed = Path::new();
        for contour in &contours {
            let mut interval_index = 0usize;
            let mut remaining = self.intervals[0];
            let mut drawing = false;

            for pair in contour.points.windows(2) {
                let (start, end) = (pair[0], pair[1]);
                let segment_length = start.distance_to(end);
                let mut position = 0.0;

                while position < segment_length {
                    let available = segment_length - position;
                    let step = remaining.min(available);
                    let is_on = interval_index % 2 == 0;
                    if is_on && step > 0.0 {
                        if !drawing {
                            dashed.move_to(start.lerp(end, position / segment_length));
                            drawing = true;
                        }
                        dashed.line_to(start.lerp(end, (position + step) / segment_length));
                    }

                    position = if remaining >= available {
                        segment_length
                    } else {
                        position + step
                    };
                    remaining -= step;
                    if remaining <= 0.0 {
                        interval_index = (interval_index + 1) % self.intervals.len();
                        remaining = self.intervals[interval_index];
                        drawing = false;
                    }
                }
            }
        }

        dashed
    }
}

/// Dashes `path` with the alternating lengths in `dash_array`.
///
/// An empty, odd-length or otherwise invalid array returns the original path
/// unchanged.
#[must_use]
pub fn create_dashed_path(path: &Path, dash_array: &[f64]) -> Path {
    match DashPattern::new(dash_array) {
        Ok(pattern) => pattern.apply(path),
        Err(err) => {
            debug!(error = %err, "dash pattern rejected, drawing solid path");
            path.clone()
        }
    }
}
