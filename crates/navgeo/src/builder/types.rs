use std::collections::HashMap;
use std::fmt;

use crate::region::{Region, RegionId, TriangleId, VertexId};
use crate::vector::MAX_COORD;

/// Builder configuration.
#[derive(Clone, Copy, Debug)]
pub struct BuildCfg {
    /// Run the region/region pass after growing from triangles.
    pub merge_regions: bool,
    /// Run `Region::check_convex` on every built region (failures are logged).
    pub validate: bool,
}
impl Default for BuildCfg {
    fn default() -> Self {
        Self {
            merge_regions: true,
            validate: cfg!(debug_assertions),
        }
    }
}

/// Rejected builder input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Two triangles carry the same id.
    DuplicateTriangle { triangle: TriangleId },
    /// Zero-area triangle (collinear vertices).
    DegenerateTriangle { triangle: TriangleId },
    /// A triangle uses the same vertex id twice.
    RepeatedVertex { triangle: TriangleId, vertex: VertexId },
    /// A vertex lies outside `±MAX_COORD`.
    CoordinateOutOfRange { triangle: TriangleId, vertex: VertexId },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::DuplicateTriangle { triangle } => {
                write!(f, "triangle id {} appears more than once", triangle.0)
            }
            BuildError::DegenerateTriangle { triangle } => {
                write!(f, "triangle {} has zero area (collinear vertices)", triangle.0)
            }
            BuildError::RepeatedVertex { triangle, vertex } => write!(
                f,
                "triangle {} uses vertex {} more than once",
                triangle.0, vertex.0
            ),
            BuildError::CoordinateOutOfRange { triangle, vertex } => write!(
                f,
                "triangle {} vertex {} lies outside ±{}",
                triangle.0, vertex.0, MAX_COORD
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Built regions plus the triangle → region index.
#[derive(Clone, Debug, Default)]
pub struct RegionGraph {
    pub(super) regions: Vec<Region>,
    pub(super) triangle_region: HashMap<TriangleId, RegionId>,
}
