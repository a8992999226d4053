//! Curated API surface (UNSTABLE).
//!
//! Important
//! - A convenience surface for the CLI, benches, and downstream tools that want
//!   one import path. Breaking changes are allowed and expected.
//! - Prefer these re-exports over reaching into module paths.

// Primitives
pub use crate::cfg::{GeomCfg, EPSILON, LOW_EPSILON};
pub use crate::circle::Circle;
pub use crate::raster::bresenham;
pub use crate::rect::Rect;
pub use crate::segment::{cross_coord, rects_cross, segments_cross, Segment};
pub use crate::vector::{coord_by_ratio, cross3, mid_coord, trunc_edge, Coord, Vector, MAX_COORD};
// Regions
pub use crate::region::{
    contains_angular, contains_binary_search, contains_ray_cast, edge_key, find_shared_boundary,
    is_convex, orientation, turn, EdgeId, Locate, Orientation, Polygon, Region, RegionId,
    Triangle, TriangleId, Vertex, VertexId,
};
// Builder
pub use crate::builder::{build_regions, BuildCfg, BuildError, RegionGraph};
// Samplers
pub use crate::rand::{
    draw_convex_polygon, draw_grid_mesh, GridCfg, RadialCfg, ReplayToken, VertexCount,
};
