use serde::{Deserialize, Serialize};

use crate::core::primitives::finite_or;

/// One-dimensional linear mapping between a data domain and a pixel range.
///
/// The range may run backwards (`range_start > range_end`), which is how
/// axis inversion and the downward-growing screen Y axis are expressed.
/// Mapping never fails: degenerate spans resolve to a fixed, finite anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain_start: f64, domain_end: f64, range_start: f64, range_end: f64) -> Self {
        Self {
            domain_start: finite_or(domain_start, 0.0),
            domain_end: finite_or(domain_end, 0.0),
            range_start: finite_or(range_start, 0.0),
            range_end: finite_or(range_end, 0.0),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the pixel range.
    ///
    /// Values outside the domain extrapolate linearly. A zero-width domain
    /// maps every value to the middle of the range.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let range_mid = (self.range_start + self.range_end) / 2.0;
        let span = self.domain_end - self.domain_start;
        if span == 0.0 || !span.is_finite() {
            return range_mid;
        }

        let normalized = (value - self.domain_start) / span;
        finite_or(
            self.range_start + normalized * (self.range_end - self.range_start),
            range_mid,
        )
    }

    /// Maps a pixel coordinate back into the domain.
    ///
    /// A zero-size pixel range maps every pixel to `domain_start`.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 || !span.is_finite() {
            return self.domain_start;
        }

        let normalized = (pixel - self.range_start) / span;
        finite_or(
            self.domain_start + normalized * (self.domain_end - self.domain_start),
            self.domain_start,
        )
    }
}
