//! Read-only queries on a built graph.

use crate::cfg::GeomCfg;
use crate::circle::Circle;
use crate::region::{find_shared_boundary, Locate, Polygon, Region, RegionId, TriangleId, Vertex};
use crate::vector::Coord;

use super::types::RegionGraph;

impl RegionGraph {
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region_of_triangle(&self, triangle: TriangleId) -> Option<RegionId> {
        self.triangle_region.get(&triangle).copied()
    }

    /// First region containing `p` (boundary inclusive), after a bounding-box
    /// pre-filter. Shared edges belong to the lower region id.
    pub fn locate(&self, p: Coord, strategy: Locate) -> Option<RegionId> {
        if !p.in_range() {
            return None;
        }
        self.regions
            .iter()
            .find(|r| r.to_rect().contains(p) && r.contains_with(p, strategy))
            .map(|r| r.id())
    }

    /// Region and source triangle containing `p`.
    pub fn locate_triangle(&self, p: Coord, strategy: Locate) -> Option<(RegionId, TriangleId)> {
        let id = self.locate(p, strategy)?;
        let triangle = self.regions[id.0].triangle_containing(p)?;
        Some((id, triangle))
    }

    /// Regions sharing exactly one boundary edge with `id`, each with its
    /// boundary rotated to start at the shared edge.
    pub fn neighbors(&self, id: RegionId) -> Vec<(RegionId, Vec<Vertex>)> {
        let Some(this) = self.region(id) else {
            return Vec::new();
        };
        let rect = this.to_rect();
        self.regions
            .iter()
            .filter(|r| r.id() != id && rect.overlaps(&r.to_rect()))
            .filter_map(|r| find_shared_boundary(this, r).map(|b| (r.id(), b)))
            .collect()
    }

    /// Regions the circle crosses, contains, is contained in, or touches.
    pub fn regions_overlapping_circle(&self, circle: &Circle, cfg: GeomCfg) -> Vec<RegionId> {
        let rect = circle.to_rect();
        self.regions
            .iter()
            .filter(|r| rect.overlaps(&r.to_rect()))
            .filter(|r| circle.overlaps_convex(&r.vectors(), cfg))
            .map(|r| r.id())
            .collect()
    }
}
