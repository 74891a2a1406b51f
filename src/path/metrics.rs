use crate::core::Point;

use super::{Path, PathCommand};

/// Straight sub-segments used per cubic when flattening.
pub const DEFAULT_CUBIC_STEPS: usize = 16;

/// One flattened sub-path.
///
/// Closed contours repeat their first vertex at the end so consumers can walk
/// `points.windows(2)` without a wraparound special case.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Contour {
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }
}

impl Path {
    /// Flattens the path into polylines, one per contour.
    #[must_use]
    pub fn flatten(&self, cubic_steps: usize) -> Vec<Contour> {
        let steps = cubic_steps.max(1);
        let mut contours = Vec::new();
        let mut current: Option<Contour> = None;

        for command in self.commands() {
            match *command {
                PathCommand::MoveTo(point) => {
                    if let Some(done) = current.take() {
                        contours.push(done);
                    }
                    current = Some(Contour {
                        points: vec![point],
                        closed: false,
                    });
                }
                PathCommand::LineTo(point) => {
                    if let Some(contour) = current.as_mut() {
                        contour.points.push(point);
                    }
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    if let Some(contour) = current.as_mut() {
                        let from = contour.points.last().copied().unwrap_or(ctrl1);
                        for step in 1..=steps {
                            let t = step as f64 / steps as f64;
                            contour.points.push(cubic_point(from, ctrl1, ctrl2, to, t));
                        }
                    }
                }
                PathCommand::Close => {
                    if let Some(mut contour) = current.take() {
                        let first = contour.points[0];
                        contour.points.push(first);
                        contour.closed = true;
                        contours.push(contour);
                    }
                }
            }
        }

        if let Some(done) = current.take() {
            contours.push(done);
        }
        contours
    }

    /// Total arc length of all contours.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.flatten(DEFAULT_CUBIC_STEPS)
            .iter()
            .map(Contour::length)
            .sum()
    }

    /// Whether `point` lies on the outline, within `tolerance` pixels.
    #[must_use]
    pub fn contains_point(&self, point: Point, tolerance: f64) -> bool {
        let tolerance = tolerance.max(0.0);
        self.flatten(DEFAULT_CUBIC_STEPS).iter().any(|contour| {
            if contour.points.len() == 1 {
                return contour.points[0].distance_to(point) <= tolerance;
            }
            contour
                .points
                .windows(2)
                .any(|pair| distance_to_segment(point, pair[0], pair[1]) <= tolerance)
        })
    }

    /// Non-zero winding fill test; open contours are closed implicitly.
    #[must_use]
    pub fn fill_contains(&self, point: Point) -> bool {
        let mut winding = 0i32;
        for contour in self.flatten(DEFAULT_CUBIC_STEPS) {
            let points = &contour.points;
            if points.len() < 2 {
                continue;
            }
            let count = points.len();
            for index in 0..count {
                let a = points[index];
                let b = points[(index + 1) % count];
                if a.y <= point.y {
                    if b.y > point.y && cross(a, b, point) > 0.0 {
                        winding += 1;
                    }
                } else if b.y <= point.y && cross(a, b, point) < 0.0 {
                    winding -= 1;
                }
            }
        }
        winding != 0
    }
}

pub(crate) fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

pub(crate) fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx * dx + dy * dy;
    if length_sq <= f64::EPSILON {
        return point.distance_to(a);
    }
    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    point.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}

fn cross(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_point_hits_endpoints() {
        let p0 = Point::new(0.0, 0.0);
        let p3 = Point::new(10.0, 5.0);
        let start = cubic_point(p0, Point::new(2.0, 8.0), Point::new(7.0, -3.0), p3, 0.0);
        let end = cubic_point(p0, Point::new(2.0, 8.0), Point::new(7.0, -3.0), p3, 1.0);
        assert_eq!(start, p0);
        assert!((end.x - p3.x).abs() <= 1e-12);
        assert!((end.y - p3.y).abs() <= 1e-12);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((distance_to_segment(Point::new(5.0, 3.0), a, b) - 3.0).abs() <= 1e-12);
        assert!((distance_to_segment(Point::new(-4.0, 3.0), a, b) - 5.0).abs() <= 1e-12);
    }

    #[test]
    fn closed_square_fill_contains_interior_only() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 0.0))
            .line_to(Point::new(10.0, 10.0))
            .line_to(Point::new(0.0, 10.0))
            .close();
        assert!(path.fill_contains(Point::new(5.0, 5.0)));
        assert!(!path.fill_contains(Point::new(15.0, 5.0)));
        assert!((path.length() - 40.0).abs() <= 1e-9);
    }
}
