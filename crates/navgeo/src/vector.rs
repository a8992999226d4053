//! Integer coordinates and displacement vectors on the ground plane.
//!
//! Conventions
//! - Components are `i32`; products are taken in `i64` so cross and dot never
//!   overflow for coordinates within `±MAX_COORD` (differences must fit in `i32`).
//! - `a.cross(b) > 0` means `b` lies counter-clockwise from `a` in the X/Z plane
//!   (the left-handed, Z-down world reads this as "to the left").
//! - Magnitudes are `f64`, computed from the exact `i64` squared sum.
//! - Conversions back to integers truncate toward zero (`as i32`). This is a
//!   known precision loss of `scale`, `rotate`, and everything built on them.

use nalgebra::{Point2, Rotation2, Vector2};
use std::ops::{Add, Neg, Sub};

/// Largest supported coordinate magnitude. Differences of two coordinates in
/// `[-MAX_COORD, MAX_COORD]` fit in `i32`.
pub const MAX_COORD: i32 = (1 << 30) - 1;

/// Position on the ground plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Both components within `±MAX_COORD`.
    #[inline]
    pub fn in_range(self) -> bool {
        (-MAX_COORD..=MAX_COORD).contains(&self.x) && (-MAX_COORD..=MAX_COORD).contains(&self.z)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance, exact up to the final `f64` conversion.
    #[inline]
    pub fn distance_squared(self, other: Coord) -> f64 {
        let dx = self.x as i64 - other.x as i64;
        let dz = self.z as i64 - other.z as i64;
        (dx * dx + dz * dz) as f64
    }

    #[inline]
    pub fn to_point(self) -> Point2<f64> {
        Point2::new(self.x as f64, self.z as f64)
    }
}

/// Midpoint of `a` and `b` (truncated).
#[inline]
pub fn mid_coord(a: Coord, b: Coord) -> Coord {
    Coord::new(
        ((a.x as i64 + b.x as i64) / 2) as i32,
        ((a.z as i64 + b.z as i64) / 2) as i32,
    )
}

/// End point of `(end - start) * ratio` placed at `start`.
#[inline]
pub fn coord_by_ratio(start: Coord, end: Coord, ratio: f64) -> Coord {
    Vector::between(start, end).scale(ratio).to_coord(start)
}

/// Point 1000 units from `start` in the direction of `end`.
#[inline]
pub fn trunc_edge(start: Coord, end: Coord) -> Coord {
    let v = Vector::between(start, end);
    v.scale(1000.0 / v.length()).to_coord(start)
}

/// Cross product `(p1 - p3) × (p2 - p3)`.
#[inline]
pub fn cross3(p1: Coord, p2: Coord, p3: Coord) -> i64 {
    Vector::between(p3, p1).cross(Vector::between(p3, p2))
}

/// Free 2D displacement. Shares its layout with `Coord` so a coordinate can be
/// read as a position vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i32,
    pub z: i32,
}

impl Vector {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Displacement from `start` to `end`.
    #[inline]
    pub fn between(start: Coord, end: Coord) -> Self {
        Self {
            x: end.x - start.x,
            z: end.z - start.z,
        }
    }

    /// Position vector of `p`.
    #[inline]
    pub fn from_coord(p: Coord) -> Self {
        Self { x: p.x, z: p.z }
    }

    /// `start` translated by this vector.
    #[inline]
    pub fn to_coord(self, start: Coord) -> Coord {
        Coord::new(start.x + self.x, start.z + self.z)
    }

    #[inline]
    pub fn dot(self, other: Vector) -> i64 {
        self.x as i64 * other.x as i64 + self.z as i64 * other.z as i64
    }

    /// Scalar cross product; positive when `other` is counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Vector) -> i64 {
        self.x as i64 * other.z as i64 - self.z as i64 * other.x as i64
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self) as f64
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.z == 0
    }

    /// Multiply by `ratio`, truncating each component toward zero.
    #[inline]
    pub fn scale(self, ratio: f64) -> Vector {
        Vector {
            x: (ratio * self.x as f64) as i32,
            z: (ratio * self.z as f64) as i32,
        }
    }

    /// Rotate counter-clockwise by `angle` radians, truncating the result.
    pub fn rotate(self, angle: f64) -> Vector {
        let r = Rotation2::new(angle) * self.to_f64();
        Vector {
            x: r.x as i32,
            z: r.y as i32,
        }
    }

    /// Unsigned angle in `[0, π]` between `self` and `other`.
    ///
    /// Rounding can push the cosine slightly outside `[-1, 1]`; the NaN from
    /// `acos` is then mapped to `0` (positive cosine) or `π` (otherwise).
    pub fn angle_between(self, other: Vector) -> f64 {
        let t = self.dot(other) as f64 / (self.length() * other.length());
        let angle = t.acos();
        if angle.is_nan() {
            if t > 0.0 {
                return 0.0;
            }
            return std::f64::consts::PI;
        }
        angle
    }

    /// Distance from `target` to the infinite line through `start` along `self`.
    pub fn distance_to_line(self, start: Coord, target: Coord) -> f64 {
        let to_target = Vector::between(start, target);
        to_target.length() * self.angle_between(to_target).sin()
    }

    #[inline]
    pub fn to_f64(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.z as f64)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.z)
    }
}

impl From<Coord> for Vector {
    #[inline]
    fn from(p: Coord) -> Self {
        Vector::from_coord(p)
    }
}
