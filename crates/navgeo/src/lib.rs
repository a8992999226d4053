//! Planar geometry kernel for navigation-mesh regions.
//!
//! Turns a triangulated ground surface (integer X/Z world coordinates) into a
//! graph of convex regions and answers point-location, containment,
//! intersection, and adjacency queries against it.
//!
//! Layout
//! - `vector`, `segment`, `circle`, `rect`, `raster`: exact integer primitives.
//! - `region`: vertices, triangles, convex regions, merge, point location,
//!   shared-boundary resolution.
//! - `builder`: arena that seeds one region per triangle and grows them.
//! - `rand`: seeded convex-polygon sampler for tests and benches.
//!
//! Threading
//! - Everything is synchronous. A built `RegionGraph` is read-only and can be
//!   queried from many threads; merging needs `&mut` and is serialized by the
//!   borrow checker rather than by locks.

pub mod api;
pub mod builder;
pub mod cfg;
pub mod circle;
pub mod rand;
pub mod raster;
pub mod rect;
pub mod region;
pub mod segment;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use builder::{build_regions, BuildCfg, BuildError, RegionGraph};
pub use cfg::GeomCfg;
pub use region::{Locate, Polygon, Region, RegionId, Triangle, TriangleId, Vertex, VertexId};
pub use vector::{Coord, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::builder::{build_regions, BuildCfg, RegionGraph};
    pub use crate::cfg::GeomCfg;
    pub use crate::circle::Circle;
    pub use crate::rect::Rect;
    pub use crate::region::{
        find_shared_boundary, is_convex, Locate, Polygon, Region, RegionId, Triangle, TriangleId,
        Vertex, VertexId,
    };
    pub use crate::segment::Segment;
    pub use crate::vector::{Coord, Vector};
}
