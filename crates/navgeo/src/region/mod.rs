//! Convex regions over a triangulated ground surface.
//!
//! Purpose
//! - Model source triangles and merged convex regions behind one `Polygon`
//!   trait, grow regions by merging edge-adjacent neighbours, and answer
//!   point-location and shared-boundary queries on them.
//!
//! Why eager orientation
//! - Boundaries are normalized to counter-clockwise when a region is created
//!   and after every merge, so every query takes `&self` and a built region
//!   can be shared across threads without interior mutability.
//!
//! Notes
//! - Vertex identity is the triangulation id; two coordinates with different
//!   ids are different vertices even if they coincide.
//! - Code cross-refs: `Region::try_merge`, `find_shared_boundary`, `Locate`.

mod adjacency;
mod convex;
mod locate;
mod merge;
mod types;

pub use adjacency::find_shared_boundary;
pub use convex::Region;
pub use locate::{contains_angular, contains_binary_search, contains_ray_cast, Locate};
pub use merge::{is_convex, orientation, turn, Orientation};
pub use types::{
    edge_key, twice_signed_area, EdgeId, Polygon, RegionId, Triangle, TriangleId, Vertex,
    VertexId,
};

#[cfg(test)]
mod tests;
