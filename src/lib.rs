//! chart-geometry: geometry and signal-processing core for interactive charts.
//!
//! The crate turns data-space values into screen-space drawing paths and
//! turns pointer positions back into data points. Every routine is a pure,
//! synchronous function over immutable inputs, safe to call from any thread.
//!
//! - [`core`]: value types and the data/screen [`CoordinateSystem`].
//! - [`path`]: line, smooth, spline, simplified, area and dashed paths.
//! - [`polar`]: pie/donut angle math, hit-testing, wedges and label layout.
//! - [`downsample`]: LTTB downsampling for large series.
//! - [`interaction`]: pointer-to-data-point resolution.
//! - [`render`]: the frame contract handed to drawing backends.

pub mod core;
pub mod downsample;
pub mod error;
pub mod interaction;
pub mod path;
pub mod polar;
pub mod render;
pub mod telemetry;

pub use crate::core::{CoordinateSystem, DataDomain, DataPoint, Point, Rect, Size};
pub use error::{ChartError, ChartResult};
pub use interaction::{PointResolver, ResolvedPoint, ResolverConfig};
pub use path::{Path, PathCommand};
