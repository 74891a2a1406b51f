pub mod coordinate_system;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod windowing;

pub use coordinate_system::{CoordinateSystem, DataDomain};
pub use scale::LinearScale;
pub use types::{
    AxisBounds, DataPoint, MAX_AXIS_TICKS, Point, PointMetadata, Rect, Size, Viewport,
};
pub use windowing::{points_in_x_window, x_window_range};
