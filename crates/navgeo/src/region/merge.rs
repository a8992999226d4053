//! Convexity predicate and the region merge.
//!
//! Merging splices a run of new vertices into the boundary at a shared edge.
//! The vertex ids alone do not tell which end of the run touches which shared
//! vertex, so each placement is tried with the run forward and reversed; the
//! first convex candidate wins. Only forward/reverse are tried, never other
//! rotations of the run, so each trial is O(|boundary| + |run|).

use crate::vector::{Coord, Vector};

use super::adjacency::find_shared_boundary;
use super::convex::Region;
use super::types::{Polygon, Triangle, Vertex, VertexId};

/// Turn direction of three points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Cross product of `p1→p2` and `p2→p3`.
#[inline]
pub fn turn(p1: Coord, p2: Coord, p3: Coord) -> i64 {
    Vector::between(p1, p2).cross(Vector::between(p2, p3))
}

#[inline]
pub fn orientation(p1: Coord, p2: Coord, p3: Coord) -> Orientation {
    match turn(p1, p2, p3) {
        c if c > 0 => Orientation::CounterClockwise,
        c if c < 0 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

/// Convexity of a closed vertex cycle.
///
/// All turns `e_i × e_{i+1}` must share one sign (zeros allowed, at least one
/// non-zero). Edge x/z components may each change sign at most twice around
/// the cycle, which rejects self-overlapping cycles such as a pentagram whose
/// turns all agree.
pub fn is_convex(vertices: &[Vertex]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut positive = false;
    let mut negative = false;
    for i in 0..n {
        let c = turn(
            vertices[i].coord,
            vertices[(i + 1) % n].coord,
            vertices[(i + 2) % n].coord,
        );
        positive |= c > 0;
        negative |= c < 0;
    }
    if positive == negative {
        return false;
    }
    let edges: Vec<Vector> = (0..n)
        .map(|i| Vector::between(vertices[i].coord, vertices[(i + 1) % n].coord))
        .collect();
    sign_changes(edges.iter().map(|e| e.x)) <= 2 && sign_changes(edges.iter().map(|e| e.z)) <= 2
}

/// Cyclic sign changes of a sequence, zeros skipped.
fn sign_changes(values: impl Iterator<Item = i32>) -> usize {
    let signs: Vec<i32> = values.filter(|&v| v != 0).map(i32::signum).collect();
    let n = signs.len();
    (0..n).filter(|&i| signs[i] != signs[(i + 1) % n]).count()
}

impl Region {
    /// Splice `new_vertices` into the boundary at the edge `shared_a`–`shared_b`.
    ///
    /// Returns `false` and leaves the region unchanged when no candidate is
    /// convex, when the shared ids are not adjacent on the boundary, when the
    /// run is empty, or when a run vertex is already on the boundary. A
    /// `false` means "not mergeable into one convex region", not "retry".
    pub fn try_merge(
        &mut self,
        shared_a: VertexId,
        shared_b: VertexId,
        new_vertices: &[Vertex],
    ) -> bool {
        let n = self.vertices.len();
        if new_vertices.is_empty() || new_vertices.iter().any(|v| self.has_vertex(v.id)) {
            return false;
        }
        let is_shared = |id: VertexId| id == shared_a || id == shared_b;
        let Some(index) = self.vertices.iter().position(|v| is_shared(v.id)) else {
            return false;
        };
        // Interior edge (index, index + 1) or the wrap-around edge (n - 1, 0).
        let interior = index + 1 < n && is_shared(self.vertices[index + 1].id);
        let wrap = index == 0 && is_shared(self.vertices[n - 1].id);
        if !interior && !wrap {
            return false;
        }

        let mut run = new_vertices.to_vec();
        for _ in 0..2 {
            let mut candidate = Vec::with_capacity(n + run.len());
            if interior {
                candidate.extend_from_slice(&self.vertices[..=index]);
                candidate.extend_from_slice(&run);
                candidate.extend_from_slice(&self.vertices[index + 1..]);
            } else {
                candidate.extend_from_slice(&self.vertices);
                candidate.extend_from_slice(&run);
            }
            if is_convex(&candidate) {
                self.vertices = candidate;
                self.counter_clockwise_sort();
                return true;
            }
            run.reverse();
        }
        false
    }

    /// Merge a triangle sharing exactly one boundary edge with this region.
    pub fn merge_triangle(&mut self, triangle: &Triangle) -> bool {
        let (shared, fresh): (Vec<Vertex>, Vec<Vertex>) =
            triangle.vertices.iter().partition(|v| self.has_vertex(v.id));
        if shared.len() != 2 {
            return false;
        }
        if !self.try_merge(shared[0].id, shared[1].id, &fresh) {
            return false;
        }
        self.triangles.push(triangle.clone());
        true
    }

    /// Merge a whole edge-adjacent region, taking over its triangles.
    pub fn merge_region(&mut self, other: &Region) -> bool {
        let Some(boundary) = find_shared_boundary(self, other) else {
            return false;
        };
        if !self.try_merge(boundary[0].id, boundary[1].id, &boundary[2..]) {
            return false;
        }
        self.triangles.extend(other.triangles.iter().cloned());
        true
    }
}
