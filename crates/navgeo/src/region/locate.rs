//! Point location on polygon boundaries.
//!
//! Three strategies, all closed (boundary points are inside) and all exact on
//! `i64` cross products:
//! - `contains_ray_cast`: any simple polygon, O(n).
//! - `contains_angular`: convex polygon in either orientation, O(n).
//! - `contains_binary_search`: counter-clockwise convex polygon, O(log n).
//!
//! On well-formed convex input the three agree on every point. Vertices and
//! the query point must satisfy `Coord::in_range`; `RegionGraph::locate`
//! checks the point, `build_regions` checks the vertices.

use crate::vector::{Coord, Vector};

use super::types::Vertex;

/// Point-location strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locate {
    /// Horizontal ray crossing count.
    RayCast,
    /// Same-side test against every edge.
    #[default]
    Angular,
    /// Angular bisection around vertex 0.
    BinarySearch,
}

impl Locate {
    pub const ALL: [Locate; 3] = [Locate::RayCast, Locate::Angular, Locate::BinarySearch];

    /// Dispatch to the strategy on a counter-clockwise boundary.
    #[inline]
    pub fn contains(self, vertices: &[Vertex], p: Coord) -> bool {
        match self {
            Locate::RayCast => contains_ray_cast(vertices, p),
            Locate::Angular => contains_angular(vertices, p),
            Locate::BinarySearch => contains_binary_search(vertices, p),
        }
    }
}

/// Even-odd ray casting toward `+x`, with on-edge short-circuits.
pub fn contains_ray_cast(vertices: &[Vertex], p: Coord) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let (x, z) = (p.x as i64, p.z as i64);
    let mut inside = false;
    for i in 0..n {
        let j = if i == 0 { n - 1 } else { i - 1 };
        let (xi, zi) = (vertices[i].coord.x as i64, vertices[i].coord.z as i64);
        let (xj, zj) = (vertices[j].coord.x as i64, vertices[j].coord.z as i64);
        let (zmin, zmax) = (zi.min(zj), zi.max(zj));

        // Horizontal edge: only the on-edge case matters.
        if zi == zj {
            if z == zi && xi.min(xj) <= x && x <= xi.max(xj) {
                return true;
            }
            continue;
        }
        if z < zmin || z > zmax {
            continue;
        }
        // Sign of (x - x_t) along the edge, scaled by (zj - zi).
        let lhs = (x - xi) * (zj - zi);
        let rhs = (xj - xi) * (z - zi);
        if lhs == rhs {
            return true;
        }
        let left_of_edge = if zj > zi { lhs < rhs } else { lhs > rhs };
        if left_of_edge && z < zmax {
            inside = !inside;
        }
    }
    inside
}

/// Same-side test: no two edges may see `p` on opposite sides.
pub fn contains_angular(vertices: &[Vertex], p: Coord) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut positive = false;
    let mut negative = false;
    for i in 0..n {
        let from = vertices[i].coord;
        let edge = Vector::between(from, vertices[(i + 1) % n].coord);
        let c = edge.cross(Vector::between(from, p));
        positive |= c > 0;
        negative |= c < 0;
        if positive && negative {
            return false;
        }
    }
    true
}

/// O(log n) location on a counter-clockwise convex boundary.
///
/// 1. `p` must lie in the wedge spanned by `v0→v1` and `v0→v(n-1)`; a point on
///    either bounding ray is decided by its distance from `v0`.
/// 2. Bisect the fan around `v0` for the triangle `(v0, vs, vs+1)` holding `p`.
/// 3. `p` is inside iff it is not right of `vs→vs+1`.
pub fn contains_binary_search(vertices: &[Vertex], p: Coord) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let v0 = vertices[0].coord;
    let first = Vector::between(v0, vertices[1].coord);
    let last = Vector::between(v0, vertices[n - 1].coord);
    let to_p = Vector::between(v0, p);
    let cp1 = first.cross(to_p);
    let cp2 = last.cross(to_p);
    if cp1 < 0 || cp2 > 0 {
        return false;
    }
    if cp1 == 0 || cp2 == 0 {
        // Both are zero when v0 is a straight-angle vertex.
        return (cp1 == 0 && within_ray(vertices, to_p, 1..n))
            || (cp2 == 0 && within_ray(vertices, to_p, (1..n).rev()));
    }

    let mut s = 1;
    let mut e = n - 1;
    while e > s + 1 {
        let m = (s + e) / 2;
        if Vector::between(v0, vertices[m].coord).cross(to_p) < 0 {
            e = m;
        } else {
            s = m;
        }
    }
    let from = vertices[s].coord;
    Vector::between(from, vertices[e].coord).cross(Vector::between(from, p)) >= 0
}

/// `p` on the ray from `v0` through the first vertex of `order`: inside iff it
/// does not pass the farthest boundary vertex on that ray (collinear
/// boundary vertices extend the reach).
fn within_ray(vertices: &[Vertex], to_p: Vector, mut order: impl Iterator<Item = usize>) -> bool {
    let v0 = vertices[0].coord;
    let Some(first) = order.next() else {
        return false;
    };
    let dir = Vector::between(v0, vertices[first].coord);
    let mut reach = dir.length_squared();
    for k in order {
        let v = Vector::between(v0, vertices[k].coord);
        if dir.cross(v) != 0 || v.dot(dir) <= 0 {
            break;
        }
        reach = v.length_squared();
    }
    to_p.dot(dir) >= 0 && to_p.length_squared() <= reach
}
