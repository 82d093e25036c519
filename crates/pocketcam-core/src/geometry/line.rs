use super::{Arc, BoundingBox, Point2D, EPSILON};
use crate::error::{GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};

/// A straight boundary edge or cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point2D,
    pub end: Point2D,
}

impl LineSegment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Creates a segment, rejecting collapsed or non-finite input.
    pub fn try_new(start: Point2D, end: Point2D) -> GeometryResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GeometryError::NonFinite("line segment".to_string()));
        }
        if start.distance_to(&end) < EPSILON {
            return Err(GeometryError::DegenerateSegment {
                x: start.x,
                y: start.y,
            });
        }
        Ok(Self { start, end })
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Point2D {
        self.start + (self.end - self.start) * t
    }

    /// Unit left-hand normal of the direction of travel.
    ///
    /// Zero-length segments report a zero vector.
    pub fn normal(&self) -> Point2D {
        (self.end - self.start)
            .normalized()
            .map(|d| d.perp_left())
            .unwrap_or_default()
    }

    /// Distance from `p` to the segment: perpendicular when the foot lies on
    /// the segment, otherwise to the nearer endpoint.
    pub fn distance_to_point(&self, p: &Point2D) -> f64 {
        let d = self.end - self.start;
        let len_sq = d.dot(&d);
        if len_sq < f64::EPSILON {
            return self.start.distance_to(p);
        }
        let t = ((*p - self.start).dot(&d) / len_sq).clamp(0.0, 1.0);
        self.point_at(t).distance_to(p)
    }

    /// Bounded segment/segment intersection.
    ///
    /// Parallel and collinear segments report no intersection.
    pub fn intersect_line(&self, other: &LineSegment) -> Option<Point2D> {
        let da = self.end - self.start;
        let db = other.end - other.start;
        let len_a = da.length();
        let len_b = db.length();
        if len_a < f64::EPSILON || len_b < f64::EPSILON {
            return None;
        }

        let cross = da.cross(&db);
        if (cross / (len_a * len_b)).abs() < EPSILON {
            return None;
        }

        let w = other.start - self.start;
        let t = w.cross(&db) / cross;
        let u = w.cross(&da) / cross;

        let tol_t = EPSILON / len_a;
        let tol_u = EPSILON / len_b;
        if t >= -tol_t && t <= 1.0 + tol_t && u >= -tol_u && u <= 1.0 + tol_u {
            Some(self.point_at(t.clamp(0.0, 1.0)))
        } else {
            None
        }
    }

    /// Intersections with an arc, ordered along this segment.
    pub fn intersect_arc(&self, arc: &Arc) -> Vec<Point2D> {
        let d = self.end - self.start;
        let f = self.start - arc.center;
        let a = d.dot(&d);
        if a < f64::EPSILON || arc.radius <= 0.0 {
            return Vec::new();
        }
        let b = 2.0 * f.dot(&d);
        let c = f.dot(&f) - arc.radius * arc.radius;
        let mut disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            // Near-tangent lines still touch within tolerance.
            if disc.abs() <= 4.0 * a * EPSILON * arc.radius {
                disc = 0.0;
            } else {
                return Vec::new();
            }
        }

        let sqrt_disc = disc.sqrt();
        let candidates = if sqrt_disc < f64::EPSILON {
            vec![-b / (2.0 * a)]
        } else {
            vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)]
        };

        let tol_t = EPSILON / a.sqrt();
        let mut points: Vec<Point2D> = Vec::with_capacity(2);
        for t in candidates {
            if t < -tol_t || t > 1.0 + tol_t {
                continue;
            }
            let p = self.point_at(t.clamp(0.0, 1.0));
            if !arc.contains_angle(p.angle_from(&arc.center)) {
                continue;
            }
            if points.iter().any(|q| q.approx_eq(&p, EPSILON)) {
                continue;
            }
            points.push(p);
        }
        points
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.start.x, self.start.y, self.end.x, self.end.y)
    }

    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.end, self.start)
    }
}
