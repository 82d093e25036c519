use super::{BoundingBox, LineSegment, Point2D, EPSILON};
use crate::error::{GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};

/// Upper bound on the chords produced for one arc.
pub const MAX_CHORDS: usize = 1 << 16;

/// A circular arc.
///
/// The arc is traversed from `start_angle` to `end_angle` (degrees),
/// counter-clockwise unless `clockwise` is set. The swept angle is normalized
/// into `(0, 360]`; equal start and end angles that differ by a whole turn
/// describe a full circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point2D,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    #[serde(default)]
    pub clockwise: bool,
}

impl Arc {
    /// Creates a counter-clockwise arc.
    pub fn new(center: Point2D, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise: false,
        }
    }

    /// Creates a clockwise arc.
    pub fn new_clockwise(center: Point2D, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            clockwise: true,
            ..Self::new(center, radius, start_angle, end_angle)
        }
    }

    /// Creates a counter-clockwise arc, rejecting degenerate radii.
    pub fn try_new(
        center: Point2D,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> GeometryResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !center.is_finite() || !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(GeometryError::NonFinite("arc".to_string()));
        }
        Ok(Self::new(center, radius, start_angle, end_angle))
    }

    /// Full counter-clockwise circle starting at 0 degrees.
    pub fn circle(center: Point2D, radius: f64) -> Self {
        Self::new(center, radius, 0.0, 360.0)
    }

    /// Rebuilds an arc around `center` through `start` and `end`.
    ///
    /// The radius is taken from `start`; `end` only fixes the end angle. This is
    /// how offset arcs are produced, so an `end` that is not on the same radius
    /// is silently projected onto it.
    pub fn from_endpoints(center: Point2D, start: Point2D, end: Point2D, clockwise: bool) -> Self {
        Self {
            center,
            radius: center.distance_to(&start),
            start_angle: start.angle_from(&center),
            end_angle: end.angle_from(&center),
            clockwise,
        }
    }

    /// Swept angle in degrees, in `(0, 360]` (0 for a degenerate arc).
    pub fn sweep(&self) -> f64 {
        let raw = if self.clockwise {
            self.start_angle - self.end_angle
        } else {
            self.end_angle - self.start_angle
        };
        let sweep = raw.rem_euclid(360.0);
        if sweep < 1e-9 || 360.0 - sweep < 1e-9 {
            if raw.abs() > 1e-9 {
                360.0
            } else {
                0.0
            }
        } else {
            sweep
        }
    }

    pub fn is_full_circle(&self) -> bool {
        (self.sweep() - 360.0).abs() < 1e-9
    }

    /// Angle reached after travelling `fraction` of the sweep from the start.
    fn angle_at_fraction(&self, fraction: f64) -> f64 {
        let delta = self.sweep() * fraction;
        if self.clockwise {
            self.start_angle - delta
        } else {
            self.start_angle + delta
        }
    }

    /// Point reached after travelling `fraction` of the sweep (0 = start, 1 = end).
    pub fn point_at_fraction(&self, fraction: f64) -> Point2D {
        self.point_at_angle(self.angle_at_fraction(fraction))
    }

    pub fn point_at_angle(&self, angle_deg: f64) -> Point2D {
        let a = angle_deg.to_radians();
        Point2D::new(
            self.center.x + self.radius * a.cos(),
            self.center.y + self.radius * a.sin(),
        )
    }

    pub fn start(&self) -> Point2D {
        self.point_at_angle(self.start_angle)
    }

    pub fn end(&self) -> Point2D {
        self.point_at_angle(self.end_angle)
    }

    /// Whether `angle_deg` lies on the swept part of the circle.
    pub fn contains_angle(&self, angle_deg: f64) -> bool {
        let sweep = self.sweep();
        if sweep >= 360.0 {
            return true;
        }
        let offset = if self.clockwise {
            self.start_angle - angle_deg
        } else {
            angle_deg - self.start_angle
        }
        .rem_euclid(360.0);
        let tol = if self.radius > 0.0 {
            (EPSILON / self.radius).to_degrees()
        } else {
            0.0
        };
        offset <= sweep + tol || offset >= 360.0 - tol
    }

    /// Unit tangent in the direction of travel at `angle_deg`.
    fn tangent_at_angle(&self, angle_deg: f64) -> Point2D {
        let a = angle_deg.to_radians();
        let ccw = Point2D::new(-a.sin(), a.cos());
        if self.clockwise {
            -ccw
        } else {
            ccw
        }
    }

    /// Unit left-hand normal at the start; points at the center for
    /// counter-clockwise arcs.
    pub fn start_normal(&self) -> Point2D {
        self.tangent_at_angle(self.start_angle).perp_left()
    }

    pub fn end_normal(&self) -> Point2D {
        self.tangent_at_angle(self.end_angle).perp_left()
    }

    /// Radial distance `| |p - c| - r |` when `p` faces the swept part,
    /// otherwise the distance to the nearer endpoint.
    pub fn distance_to_point(&self, p: &Point2D) -> f64 {
        let d = self.center.distance_to(p);
        if d < f64::EPSILON {
            return self.radius;
        }
        if self.contains_angle(p.angle_from(&self.center)) {
            (d - self.radius).abs()
        } else {
            self.start().distance_to(p).min(self.end().distance_to(p))
        }
    }

    /// Chord approximation whose sagitta never exceeds `tolerance`.
    ///
    /// The chord count never decreases as the tolerance shrinks and is capped
    /// at [`MAX_CHORDS`], where the sagitta bound no longer holds. Degenerate
    /// arcs collapse to a single chord between their endpoints.
    pub fn linearize(&self, tolerance: f64) -> Vec<LineSegment> {
        let sweep = self.sweep();
        if self.radius <= 0.0 || sweep <= 0.0 {
            return vec![LineSegment::new(self.start(), self.end())];
        }

        let tolerance = tolerance.max(1e-9);
        let ratio = (1.0 - tolerance / self.radius).clamp(-1.0, 1.0);
        let max_step = (2.0 * ratio.acos()).to_degrees();
        let count = if max_step > 0.0 {
            ((sweep / max_step).ceil() as usize).min(MAX_CHORDS)
        } else {
            MAX_CHORDS
        };
        let min_count = if self.is_full_circle() { 3 } else { 1 };
        let count = count.max(min_count);

        let points: Vec<Point2D> = (0..=count)
            .map(|i| self.point_at_angle(self.angle_at_fraction(i as f64 / count as f64)))
            .collect();
        points
            .windows(2)
            .map(|w| LineSegment::new(w[0], w[1]))
            .collect()
    }

    /// Intersections of two arcs (circle/circle filtered by both sweeps).
    pub fn intersect_arc(&self, other: &Arc) -> Vec<Point2D> {
        if self.radius <= 0.0 || other.radius <= 0.0 {
            return Vec::new();
        }
        let delta = other.center - self.center;
        let d = delta.length();
        if d < EPSILON {
            return Vec::new();
        }
        if d > self.radius + other.radius + EPSILON
            || d < (self.radius - other.radius).abs() - EPSILON
        {
            return Vec::new();
        }

        let a = (self.radius * self.radius - other.radius * other.radius + d * d) / (2.0 * d);
        let h = (self.radius * self.radius - a * a).max(0.0).sqrt();
        let unit = delta * (1.0 / d);
        let base = self.center + unit * a;

        let candidates = if h < EPSILON {
            vec![base]
        } else {
            let offset = unit.perp_left() * h;
            vec![base + offset, base - offset]
        };

        candidates
            .into_iter()
            .filter(|p| {
                self.contains_angle(p.angle_from(&self.center))
                    && other.contains_angle(p.angle_from(&other.center))
            })
            .collect()
    }

    /// Bounding box of the swept part, including any axis extremes it passes.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new(self.start().x, self.start().y, self.end().x, self.end().y);
        for cardinal in [0.0, 90.0, 180.0, 270.0] {
            if self.contains_angle(cardinal) {
                bbox.include(self.point_at_angle(cardinal));
            }
        }
        bbox
    }
}
