//! Line segments: distance, translation, and segment/segment intersection.
//!
//! Intersection follows the classic two-stage test: a bounding-rectangle
//! rejection (`rects_cross`) followed by the straddle test (`segments_cross`)
//! on exact `i64` cross products. Only the final intersection point is computed
//! in floating point.

use crate::cfg::GeomCfg;
use crate::circle::Circle;
use crate::vector::{cross3, Coord, Vector};

/// Segment from `a` to `b`. Direction matters for distance and `pan`, not for
/// intersection tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: Coord,
    pub b: Coord,
}

impl Segment {
    #[inline]
    pub const fn new(a: Coord, b: Coord) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        Vector::between(self.a, self.b)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.to_vector().length()
    }

    /// Shortest distance from `p` to any point of the segment.
    ///
    /// A projection past either endpoint (beyond `cfg.eps_cmp`) falls back to
    /// the nearer endpoint.
    pub fn distance_to(&self, p: Coord, cfg: GeomCfg) -> f64 {
        let endpoint = p.distance(self.a).min(p.distance(self.b));
        let ab = self.to_vector();
        if ab.is_zero() {
            return endpoint;
        }
        let ap = Vector::between(self.a, p);
        let lab = ab.length();
        let proj = ap.dot(ab) as f64 / lab;
        if cfg.greater(proj, lab) || cfg.smaller(proj, 0.0) {
            return endpoint;
        }
        endpoint.min(ab.distance_to_line(self.a, p))
    }

    /// Parallel copy moved `dst` units to the side where the cross product with
    /// the segment direction is positive (`positive == true`) or negative.
    pub fn pan(&self, dst: i32, positive: bool) -> Segment {
        let v = self.to_vector();
        if v.is_zero() {
            return *self;
        }
        let normal = if positive {
            Vector::new(-v.z, v.x)
        } else {
            Vector::new(v.z, -v.x)
        };
        let shift = normal.scale(dst as f64 / v.length());
        Segment::new(shift.to_coord(self.a), shift.to_coord(self.b))
    }

    /// First point where the segment enters `circle`, walking from `a` to `b`.
    #[inline]
    pub fn cross_circle(&self, circle: &Circle, cfg: GeomCfg) -> Option<Coord> {
        circle.line_cross(self, cfg)
    }

    /// Intersection point with `other`, if any.
    #[inline]
    pub fn cross_coord(&self, other: &Segment) -> Option<Coord> {
        cross_coord(self.a, self.b, other.a, other.b)
    }
}

/// Bounding rectangles of `p0p1` and `q0q1` overlap (quick rejection).
#[inline]
pub fn rects_cross(p0: Coord, p1: Coord, q0: Coord, q1: Coord) -> bool {
    p0.x.min(p1.x) <= q0.x.max(q1.x)
        && q0.x.min(q1.x) <= p0.x.max(p1.x)
        && p0.z.min(p1.z) <= q0.z.max(q1.z)
        && q0.z.min(q1.z) <= p0.z.max(p1.z)
}

#[inline]
fn within_box(s0: Coord, s1: Coord, p: Coord) -> bool {
    s0.x.min(s1.x) <= p.x && p.x <= s0.x.max(s1.x) && s0.z.min(s1.z) <= p.z && p.z <= s0.z.max(s1.z)
}

/// Straddle test: `p0p1` and `q0q1` share at least one point. Touching at an
/// endpoint counts.
pub fn segments_cross(p0: Coord, p1: Coord, q0: Coord, q1: Coord) -> bool {
    // q0q1 × q0p0, q0q1 × q0p1
    let b1 = cross3(q1, p0, q0);
    let b2 = cross3(q1, p1, q0);
    // p0p1 × p0q0, p0p1 × p0q1
    let a1 = cross3(p1, q0, p0);
    let a2 = cross3(p1, q1, p0);

    if ((b1 > 0 && b2 < 0) || (b1 < 0 && b2 > 0)) && ((a1 > 0 && a2 < 0) || (a1 < 0 && a2 > 0)) {
        return true;
    }
    (b1 == 0 && within_box(q0, q1, p0))
        || (b2 == 0 && within_box(q0, q1, p1))
        || (a1 == 0 && within_box(p0, p1, q0))
        || (a2 == 0 && within_box(p0, p1, q1))
}

/// Intersection point of `p0p1` and `q0q1`. Parallel (including collinear)
/// segments report `None`.
pub fn cross_coord(p0: Coord, p1: Coord, q0: Coord, q1: Coord) -> Option<Coord> {
    let v1 = Vector::between(p0, p1);
    let v2 = Vector::between(q0, q1);
    if v1.cross(v2) == 0 {
        return None;
    }
    if !rects_cross(p0, p1, q0, q1) || !segments_cross(p0, p1, q0, q1) {
        return None;
    }
    let s1 = v1.to_f64();
    let s2 = v2.to_f64();
    let dx = (p0.x as i64 - q0.x as i64) as f64;
    let dz = (p0.z as i64 - q0.z as i64) as f64;
    let t = (s2.x * dz - s2.y * dx) / (-s2.x * s1.y + s1.x * s2.y);
    Some(Coord::new(
        p0.x + (t * s1.x) as i32,
        p0.z + (t * s1.y) as i32,
    ))
}
