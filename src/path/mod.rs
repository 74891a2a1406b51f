//! Drawing-path model and the builders that turn series data into paths.
//!
//! Every builder is a pure function: identical inputs always produce
//! geometrically identical paths, and nothing is cached between calls.

mod builder;
mod dash;
mod metrics;
mod simplify;

pub use builder::{
    CatmullRomOptions, DEFAULT_AREA_BASELINE, DEFAULT_SMOOTHNESS, MAX_SEGMENTS_PER_CURVE,
    create_area_path,
    create_catmull_rom_path, create_gradient_path, create_line_path, create_simplified_path,
    create_smooth_path, polyline_path,
};
pub use dash::{DashPattern, MAX_DASHES_PER_PATH, create_dashed_path};
pub use metrics::{Contour, DEFAULT_CUBIC_STEPS};
pub use simplify::{DEFAULT_SIMPLIFY_TOLERANCE, perpendicular_distance, simplify_points};

use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect};

/// One drawing command in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// Ordered drawing commands plus their cached bounding rectangle.
///
/// Bounds cover every command point including cubic control points, so they
/// always enclose what a renderer draws.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
    bounds: Option<Rect>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            bounds: None,
        }
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.include(point);
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    /// Appends a straight segment. Without an open contour this starts one at
    /// `point` instead.
    pub fn line_to(&mut self, point: Point) -> &mut Self {
        if self.current_point().is_none() {
            return self.move_to(point);
        }
        self.include(point);
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        if self.current_point().is_none() {
            self.move_to(ctrl1);
        }
        self.include(ctrl1);
        self.include(ctrl2);
        self.include(to);
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        if self.current_point().is_some()
            && !matches!(self.commands.last(), Some(PathCommand::Close))
        {
            self.commands.push(PathCommand::Close);
        }
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Cached bounds; `Rect::EMPTY` for a path without commands.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds.unwrap_or(Rect::EMPTY)
    }

    /// Number of sub-paths (contours) started by `MoveTo`.
    #[must_use]
    pub fn contour_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo(_)))
            .count()
    }

    /// Pen position after the last command, if a contour has been started.
    #[must_use]
    pub fn current_point(&self) -> Option<Point> {
        match self.commands.last()? {
            PathCommand::MoveTo(point)
            | PathCommand::LineTo(point)
            | PathCommand::CubicTo { to: point, .. } => Some(*point),
            PathCommand::Close => self.commands.iter().rev().find_map(|command| match command {
                PathCommand::MoveTo(point) => Some(*point),
                _ => None,
            }),
        }
    }

    /// Points the outline passes through (move/line/curve end points).
    #[must_use]
    pub fn on_curve_points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                PathCommand::MoveTo(point)
                | PathCommand::LineTo(point)
                | PathCommand::CubicTo { to: point, .. } => Some(point),
                PathCommand::Close => None,
            })
            .collect()
    }

    fn include(&mut self, point: Point) {
        let point_rect = Rect::new(point.x, point.y, 0.0, 0.0);
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union(point_rect),
            None => point_rect,
        });
    }
}
