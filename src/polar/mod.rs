//! Radial (pie/donut) geometry in screen space.
//!
//! Angles are in degrees. 0° points along the positive screen-X axis and
//! angles grow toward positive screen-Y, which is clockwise on screen.

mod angle;
mod arc;
mod labels;
mod layout;
mod segment;

pub use angle::{
    ANGLE_EPSILON_DEG, angle_of_point, is_angle_in_sweep, normalize_angle, normalize_angle_signed,
    point_on_circle, points_on_arc,
};
pub use arc::arc_path;
pub use labels::{
    LabelAnchor, LabelAnchorOptions, MAX_LABEL_ITERATIONS, distribute_labels, label_anchor,
};
pub use layout::{PolarLayout, PolarLayoutOptions, calculate_optimal_layout, segments_from_values};
pub use segment::{
    PolarSegment, create_segment_path, find_segment_at_point, is_point_in_segment,
    segment_centroid, segment_outer_midpoint,
};
