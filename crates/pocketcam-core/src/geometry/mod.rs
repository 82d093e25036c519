//! 2D geometry for boundaries and toolpaths.
//!
//! Coordinates are millimeters with Y pointing up. Angles on arcs are degrees,
//! measured counter-clockwise from the +X axis.

mod arc;
mod boundary;
mod element;
mod line;

pub use arc::{Arc, MAX_CHORDS};
pub use boundary::{BoundaryId, ClosedBoundary};
pub use element::BoundaryElement;
pub use line::LineSegment;

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Absolute tolerance for on-boundary, parallel and coincidence tests.
pub const EPSILON: f64 = 1e-4;

/// Margin added around a boundary's bounding box when it bounds a search range.
pub const DEFAULT_BBOX_MARGIN: f64 = 10.0;

/// Represents a 2D point with X and Y coordinates.
///
/// Also used as a free vector (normals, directions).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a new point with the given X and Y coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Length of this point taken as a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: &Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalized(&self) -> Option<Point2D> {
        let len = self.length();
        if len < f64::EPSILON {
            None
        } else {
            Some(Point2D::new(self.x / len, self.y / len))
        }
    }

    /// Vector rotated 90 degrees counter-clockwise.
    pub fn perp_left(&self) -> Point2D {
        Point2D::new(-self.y, self.x)
    }

    /// True when both coordinates agree within `tolerance`.
    pub fn approx_eq(&self, other: &Point2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Polar angle of `self - origin` in degrees, in `[0, 360)`.
    pub fn angle_from(&self, origin: &Point2D) -> f64 {
        (self.y - origin.y)
            .atan2(self.x - origin.x)
            .to_degrees()
            .rem_euclid(360.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lifts the point to 3D at height `z`.
    pub fn with_z(&self, z: f64) -> Point3D {
        Point3D::new(self.x, self.y, z)
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

/// A tool position: XY plus height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drops the Z coordinate.
    pub fn xy(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

/// Axis-aligned bounding box. `top` is the largest Y, `bottom` the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            top: top.max(bottom),
            bottom: top.min(bottom),
        }
    }

    /// Smallest box holding all `points`; `None` when the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bbox.include(p);
        }
        Some(bbox)
    }

    /// Grows the box so it contains `p`.
    pub fn include(&mut self, p: Point2D) {
        self.left = self.left.min(p.x);
        self.right = self.right.max(p.x);
        self.bottom = self.bottom.min(p.y);
        self.top = self.top.max(p.y);
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// Box grown by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> BoundingBox {
        BoundingBox {
            left: self.left - margin,
            right: self.right + margin,
            top: self.top + margin,
            bottom: self.bottom - margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.right - self.left) / 2.0 + self.left,
            (self.top - self.bottom) / 2.0 + self.bottom,
        )
    }

    /// Distance from the center to a corner.
    pub fn half_diagonal(&self) -> f64 {
        (self.width() / 2.0).hypot(self.height() / 2.0)
    }

    pub fn contains(&self, p: &Point2D) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}
