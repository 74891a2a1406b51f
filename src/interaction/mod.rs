//! Pointer-to-data resolution for tooltips and selection.

mod resolver;

pub use resolver::{
    DEFAULT_SNAP_RADIUS_PX, PointQuery, PointResolver, ResolvedPoint, ResolverConfig,
    SeriesShape, SeriesView, interpolate_y_at, nearest_index_by_x,
};
