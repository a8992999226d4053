//! Identifiers, vertices, source triangles, and the shared `Polygon` interface.

use std::fmt::Debug;
use std::hash::Hash;

use crate::rect::Rect;
use crate::vector::{mid_coord, Coord, Vector};

use super::locate::contains_angular;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub i32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleId(pub i32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub i64);

/// Order-independent key of the edge between two vertex ids.
#[inline]
pub fn edge_key(a: VertexId, b: VertexId) -> EdgeId {
    let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
    EdgeId(((lo as i64) << 32) | (hi as u32 as i64))
}

/// Triangulation vertex. Two regions share a vertex iff the ids match; the
/// coordinate is carried along but never used for identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub id: VertexId,
    pub coord: Coord,
}

impl Vertex {
    #[inline]
    pub const fn new(id: i32, x: i32, z: i32) -> Self {
        Self {
            id: VertexId(id),
            coord: Coord::new(x, z),
        }
    }
}

/// Capabilities shared by source triangles and merged regions.
pub trait Polygon {
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
    /// Boundary in counter-clockwise order.
    fn vertices(&self) -> &[Vertex];
    fn edge_ids(&self) -> &[EdgeId];
    fn contains(&self, p: Coord) -> bool;

    fn to_rect(&self) -> Rect {
        Rect::bounding(self.vertices().iter().map(|v| v.coord)).unwrap_or(Rect::new(0, 0, 0, 0))
    }

    /// Boundary as position vectors (counter-clockwise).
    fn vectors(&self) -> Vec<Vector> {
        self.vertices().iter().map(|v| Vector::from_coord(v.coord)).collect()
    }

    /// Midpoint of every boundary edge, starting with edge `0 → 1`.
    fn edge_mid_coords(&self) -> Vec<Coord> {
        let vs = self.vertices();
        let n = vs.len();
        (0..n)
            .map(|i| mid_coord(vs[i].coord, vs[(i + 1) % n].coord))
            .collect()
    }

    #[inline]
    fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices().iter().any(|v| v.id == id)
    }
}

/// Source triangle from the triangulation, stored counter-clockwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub id: TriangleId,
    pub vertices: [Vertex; 3],
    pub edge_ids: Vec<EdgeId>,
}

impl Triangle {
    /// Triangle with triangulation-supplied edge ids. Clockwise input is
    /// reversed so the stored order is counter-clockwise.
    pub fn new(id: TriangleId, vertices: [Vertex; 3], edge_ids: Vec<EdgeId>) -> Self {
        let mut vertices = vertices;
        if twice_signed_area(&vertices) < 0 {
            vertices.reverse();
        }
        Self {
            id,
            vertices,
            edge_ids,
        }
    }

    /// Triangle whose edge ids are derived from its vertex ids with `edge_key`.
    pub fn from_vertices(id: TriangleId, vertices: [Vertex; 3]) -> Self {
        let [a, b, c] = vertices;
        let edge_ids = vec![
            edge_key(a.id, b.id),
            edge_key(b.id, c.id),
            edge_key(c.id, a.id),
        ];
        Self::new(id, vertices, edge_ids)
    }

    /// Twice the signed area; zero for collinear vertices.
    #[inline]
    pub fn twice_signed_area(&self) -> i128 {
        twice_signed_area(&self.vertices)
    }
}

impl Polygon for Triangle {
    type Id = TriangleId;

    #[inline]
    fn id(&self) -> TriangleId {
        self.id
    }
    #[inline]
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    #[inline]
    fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }
    /// Closed containment: points on an edge count as inside.
    #[inline]
    fn contains(&self, p: Coord) -> bool {
        contains_angular(&self.vertices, p)
    }
}

/// Shoelace sum `Σ p_i × p_{i+1}` (twice the signed area, positive when CCW).
pub fn twice_signed_area(vertices: &[Vertex]) -> i128 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let a = Vector::from_coord(vertices[i].coord);
            let b = Vector::from_coord(vertices[(i + 1) % n].coord);
            a.cross(b) as i128
        })
        .sum()
}
