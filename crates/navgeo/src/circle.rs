//! Circles: segment intersection and circle-vs-convex-polygon overlap.

use crate::cfg::GeomCfg;
use crate::rect::Rect;
use crate::segment::Segment;
use crate::vector::{Coord, Vector};

/// Circle with integer center and radius (`radius >= 0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Circle {
    pub center: Coord,
    pub radius: i32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Coord, radius: i32) -> Self {
        Self { center, radius }
    }

    #[inline]
    fn radius_squared(&self) -> f64 {
        let r = self.radius as i64;
        (r * r) as f64
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.z - self.radius,
            self.center.x + self.radius,
            self.center.z + self.radius,
        )
    }

    /// Point where the ray from the center toward `p` leaves the circle.
    /// Returns the center itself when `p == center`.
    pub fn intersect_coord(&self, p: Coord) -> Coord {
        if self.center == p {
            return self.center;
        }
        let v = Vector::between(self.center, p);
        v.scale(self.radius as f64 / v.length()).to_coord(self.center)
    }

    /// First boundary point met when walking the segment from `a` to `b`.
    ///
    /// Works on the parametrization `a + t·d` with unit `d`; a root counts when
    /// `t ∈ [0, |ab|]` up to `cfg.eps_exact`. The discriminant is compared with
    /// `cfg.eps_cmp`. A zero-length segment never intersects.
    pub fn line_cross(&self, s: &Segment, cfg: GeomCfg) -> Option<Coord> {
        let len = s.length();
        if len == 0.0 {
            return None;
        }
        let dx = (s.b.x as i64 - s.a.x as i64) as f64 / len;
        let dz = (s.b.z as i64 - s.a.z as i64) as f64 / len;
        let ex = (self.center.x as i64 - s.a.x as i64) as f64;
        let ez = (self.center.z as i64 - s.a.z as i64) as f64;

        let a = ex * dx + ez * dz;
        let disc = self.radius_squared() - (ex * ex + ez * ez) + a * a;
        if cfg.smaller(disc, 0.0) {
            return None;
        }
        let f = disc.max(0.0).sqrt();
        let on_segment = |t: f64| t > -cfg.eps_exact && t - len < cfg.eps_exact;
        let at = |t: f64| Coord::new(s.a.x + (t * dx) as i32, s.a.z + (t * dz) as i32);

        let near = a - f;
        if on_segment(near) {
            return Some(at(near));
        }
        let far = a + f;
        if on_segment(far) {
            return Some(at(far));
        }
        None
    }

    #[inline]
    pub fn intersects_segment(&self, s: &Segment, cfg: GeomCfg) -> bool {
        self.line_cross(s, cfg).is_some()
    }

    /// Circle vs convex polygon given as counter-clockwise position vectors.
    ///
    /// `true` when the shapes cross, either contains the other, or they touch;
    /// `false` only when they are disjoint.
    ///
    /// Walks the edges from the last vertex around. A vertex inside the circle
    /// or an edge whose closest point is inside the circle ends the walk early;
    /// so does an edge that has the center on its outer side. Otherwise the
    /// verdict comes from the edges next to the vertex nearest to the center.
    pub fn overlaps_convex(&self, vectors: &[Vector], cfg: GeomCfg) -> bool {
        let Some(&last) = vectors.last() else {
            return false;
        };
        let r2 = self.radius_squared();
        let center = Vector::from_coord(self.center);

        let mut vertex = last;
        let mut nearest_distance = f64::MAX;
        let mut nearest_inside = false;
        let mut nearest_vertex = None;
        let mut last_inside = false;

        for (i, &next) in vectors.iter().enumerate() {
            let axis = center - vertex;
            let distance = axis.length_squared() - r2;
            if cfg.smaller_or_equal(distance, 0.0) {
                return true;
            }

            let mut inside = false;
            let edge = next - vertex;
            let edge_len2 = edge.length_squared();
            if !cfg.equal(edge_len2, 0.0) {
                let dot = edge.dot(axis) as f64;
                if cfg.greater_or_equal(dot, 0.0) && cfg.smaller_or_equal(dot, edge_len2) {
                    let projection = vertex + edge.scale(dot / edge_len2);
                    let to_projection = projection - center;
                    if cfg.smaller_or_equal(to_projection.length_squared(), r2) {
                        return true;
                    }
                    if !is_inside_edge(edge, to_projection) {
                        return false;
                    }
                    inside = true;
                }
            }

            if cfg.smaller(distance, nearest_distance) {
                nearest_distance = distance;
                nearest_inside = inside || last_inside;
                nearest_vertex = Some(i);
            }

            vertex = next;
            last_inside = inside;
        }

        // Edge 0 starts at the last vertex; its predecessor is only known now.
        if nearest_vertex == Some(0) {
            return nearest_inside || last_inside;
        }
        nearest_inside
    }
}

/// Half-plane test on a counter-clockwise edge: `to_projection` (center →
/// closest point) points outward when the center is on the inner side.
#[inline]
fn is_inside_edge(edge: Vector, to_projection: Vector) -> bool {
    edge.cross(to_projection) <= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: i32) -> Vec<Vector> {
        vec![
            Vector::new(0, 0),
            Vector::new(side, 0),
            Vector::new(side, side),
            Vector::new(0, side),
        ]
    }

    #[test]
    fn segment_through_center_hits_near_side_first() {
        let cfg = GeomCfg::default();
        let c = Circle::new(Coord::new(0, 0), 5);
        let fwd = Segment::new(Coord::new(-10, 0), Coord::new(10, 0));
        assert_eq!(c.line_cross(&fwd, cfg), Some(Coord::new(-5, 0)));
        let back = Segment::new(Coord::new(10, 0), Coord::new(-10, 0));
        assert_eq!(c.line_cross(&back, cfg), Some(Coord::new(5, 0)));
        assert_eq!(fwd.cross_circle(&c, cfg), Some(Coord::new(-5, 0)));
    }

    #[test]
    fn segment_outside_misses() {
        let cfg = GeomCfg::default();
        let c = Circle::new(Coord::new(0, 0), 5);
        let s = Segment::new(Coord::new(10, 10), Coord::new(20, 20));
        assert_eq!(c.line_cross(&s, cfg), None);
        assert!(!c.intersects_segment(&s, cfg));
    }

    #[test]
    fn segment_starting_inside_reports_exit_point() {
        let cfg = GeomCfg::default();
        let c = Circle::new(Coord::new(0, 0), 5);
        let s = Segment::new(Coord::new(0, 0), Coord::new(0, 20));
        assert_eq!(c.line_cross(&s, cfg), Some(Coord::new(0, 5)));
    }

    #[test]
    fn zero_length_segment_never_intersects() {
        let cfg = GeomCfg::default();
        let c = Circle::new(Coord::new(0, 0), 5);
        let p = Coord::new(5, 0);
        assert_eq!(c.line_cross(&Segment::new(p, p), cfg), None);
    }

    #[test]
    fn intersect_coord_on_ray() {
        let c = Circle::new(Coord::new(10, 10), 5);
        assert_eq!(c.intersect_coord(Coord::new(30, 10)), Coord::new(15, 10));
        assert_eq!(c.intersect_coord(c.center), c.center);
        assert_eq!(c.to_rect(), Rect::new(5, 5, 15, 15));
    }

    #[test]
    fn circle_inside_polygon_overlaps() {
        let cfg = GeomCfg::default();
        let c = Circle::new(Coord::new(50, 50), 5);
        assert!(c.overlaps_convex(&square(100), cfg));
    }

    #[test]
    fn polygon_inside_circle_overlaps() {
        let cfg = GeomCfg::default();
        let c = Circle::new(Coord::new(5, 5), 100);
        assert!(c.overlaps_convex(&square(10), cfg));
    }

    #[test]
    fn circle_crossing_an_edge_overlaps() {
        let cfg = GeomCfg::default();
        let c = Circle::new(Coord::new(15, 5), 6);
        assert!(c.overlaps_convex(&square(10), cfg));
    }

    #[test]
    fn disjoint_circle_does_not_overlap() {
        let cfg = GeomCfg::default();
        assert!(!Circle::new(Coord::new(150, 50), 5).overlaps_convex(&square(100), cfg));
        // Diagonal from a corner: no edge projection lands on the circle.
        assert!(!Circle::new(Coord::new(-50, -50), 5).overlaps_convex(&square(100), cfg));
        assert!(!Circle::new(Coord::new(0, 0), 5).overlaps_convex(&[], cfg));
    }
}
