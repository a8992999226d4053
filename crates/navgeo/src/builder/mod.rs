//! Region graph: builds convex regions from a triangulation and answers
//! queries against them.
//!
//! Purpose
//! - Seed a region from every unassigned triangle, grow it greedily across
//!   shared edges while the boundary stays convex, then (optionally) merge
//!   whole adjacent regions until nothing changes.
//! - Own the regions in an arena indexed by `RegionId`; merges take `&mut`
//!   on exactly one region and `&` on the other, never aliased.
//!
//! Notes
//! - Triangle adjacency is keyed by `edge_key` of vertex ids, so the
//!   triangulation's own edge ids are carried but not trusted.
//! - The result depends on triangle order (greedy seeding); the same input
//!   always produces the same graph.
//! - Code cross-refs: `Region::merge_triangle`, `Region::merge_region`,
//!   `find_shared_boundary`.

mod build;
mod query;
mod types;

pub use build::build_regions;
pub use types::{BuildCfg, BuildError, RegionGraph};

#[cfg(test)]
mod tests;
