//! Convex region: one or more source triangles merged into a convex polygon.
//!
//! Invariants
//! - The boundary is counter-clockwise and convex after construction and after
//!   every successful merge; a failed merge leaves the region untouched.
//! - Boundary vertex ids come from the merged triangles (checked by
//!   `check_convex`, not enforced on every call).
//! - `wt_coord` is a cached centroid; it is only refreshed by
//!   `update_wt_coord`.

use nalgebra::{Point2, Vector2};

use crate::vector::{Coord, Vector};

use super::locate::{contains_angular, Locate};
use super::merge::is_convex;
use super::types::{twice_signed_area, EdgeId, Polygon, RegionId, Triangle, TriangleId, Vertex};

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    id: RegionId,
    pub(super) vertices: Vec<Vertex>,
    pub(super) triangles: Vec<Triangle>,
    edge_ids: Vec<EdgeId>,
    wt_coord: Coord,
}

impl Region {
    /// Seed a region from a single triangle.
    pub fn new(id: RegionId, triangle: &Triangle) -> Self {
        let mut region = Self {
            id,
            vertices: triangle.vertices.to_vec(),
            triangles: vec![triangle.clone()],
            edge_ids: triangle.edge_ids.clone(),
            wt_coord: Coord::default(),
        };
        region.counter_clockwise_sort();
        region.update_wt_coord();
        region
    }

    #[inline]
    pub(crate) fn set_id(&mut self, id: RegionId) {
        self.id = id;
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.triangles.iter().map(|t| t.id)
    }

    /// Cached centroid; see `update_wt_coord`.
    #[inline]
    pub fn wt_coord(&self) -> Coord {
        self.wt_coord
    }

    /// Refresh `wt_coord` from the area centroid, truncated toward zero
    /// (vertex mean for zero area).
    pub fn update_wt_coord(&mut self) {
        self.wt_coord = match self.area_centroid() {
            Some(c) => Coord::new(c.x as i32, c.y as i32),
            None => self.center_coord(),
        };
    }

    /// Arithmetic mean of the boundary vertices (truncated).
    pub fn center_coord(&self) -> Coord {
        let n = self.vertices.len().max(1) as i64;
        let (sx, sz) = self.vertices.iter().fold((0i64, 0i64), |(sx, sz), v| {
            (sx + v.coord.x as i64, sz + v.coord.z as i64)
        });
        Coord::new((sx / n) as i32, (sz / n) as i32)
    }

    /// Area centroid by the shoelace formula; `None` for zero area.
    pub fn area_centroid(&self) -> Option<Point2<f64>> {
        let n = self.vertices.len();
        let mut twice_area = 0.0;
        let mut acc = Vector2::zeros();
        for i in 0..n {
            let p = self.vertices[i].coord.to_point();
            let q = self.vertices[(i + 1) % n].coord.to_point();
            let w = p.x * q.y - q.x * p.y;
            twice_area += w;
            acc += (p.coords + q.coords) * w;
        }
        if twice_area == 0.0 {
            return None;
        }
        Some(Point2::from(acc / (3.0 * twice_area)))
    }

    /// Twice the signed area (positive for counter-clockwise).
    #[inline]
    pub fn twice_signed_area(&self) -> i128 {
        twice_signed_area(&self.vertices)
    }

    /// Reverse the boundary if it is clockwise.
    pub fn counter_clockwise_sort(&mut self) {
        if self.twice_signed_area() < 0 {
            self.vertices.reverse();
        }
    }

    /// Source triangle containing `p`, if any.
    pub fn triangle_containing(&self, p: Coord) -> Option<TriangleId> {
        self.triangles.iter().find(|t| t.contains(p)).map(|t| t.id)
    }

    /// Containment with an explicit strategy. Single-triangle regions answer
    /// ray-cast queries from the triangle itself.
    pub fn contains_with(&self, p: Coord, strategy: Locate) -> bool {
        if strategy == Locate::RayCast && self.triangles.len() == 1 {
            return self.triangles[0].contains(p);
        }
        strategy.contains(&self.vertices, p)
    }

    /// Validity check: convex boundary, every boundary vertex taken from a
    /// merged triangle, and every triangle vertex either on the boundary or
    /// strictly inside it. Failures are logged.
    pub fn check_convex(&self) -> bool {
        if !is_convex(&self.vertices) {
            tracing::warn!(region = self.id.0, "region boundary is not convex");
            return false;
        }
        for v in &self.vertices {
            if !self.triangles.iter().any(|t| t.has_vertex(v.id)) {
                tracing::warn!(
                    region = self.id.0,
                    vertex = v.id.0,
                    "boundary vertex not found in merged triangles"
                );
                return false;
            }
        }
        for t in &self.triangles {
            for v in &t.vertices {
                if !self.has_vertex(v.id) && !self.strictly_inside(v.coord) {
                    tracing::warn!(
                        region = self.id.0,
                        triangle = t.id.0,
                        vertex = v.id.0,
                        "triangle vertex neither on the boundary nor interior"
                    );
                    return false;
                }
            }
        }
        true
    }

    fn strictly_inside(&self, p: Coord) -> bool {
        let n = self.vertices.len();
        contains_angular(&self.vertices, p)
            && (0..n).all(|i| {
                let a = self.vertices[i].coord;
                let b = self.vertices[(i + 1) % n].coord;
                Vector::between(a, b).cross(Vector::between(a, p)) != 0
            })
    }
}

impl Polygon for Region {
    type Id = RegionId;

    #[inline]
    fn id(&self) -> RegionId {
        self.id
    }
    #[inline]
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    /// Edge ids inherited from the seed triangle.
    #[inline]
    fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }
    #[inline]
    fn contains(&self, p: Coord) -> bool {
        contains_angular(&self.vertices, p)
    }
}
