//! JSON mesh input and region output.

use anyhow::{bail, Context, Result};
use navgeo::api::{
    EdgeId, Polygon, Region, RegionGraph, Triangle, TriangleId, Vertex, VertexId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct MeshFile {
    pub vertices: Vec<VertexDto>,
    pub triangles: Vec<TriangleDto>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct VertexDto {
    pub id: i32,
    pub x: i32,
    pub z: i32,
}

#[derive(Debug, Deserialize)]
pub struct TriangleDto {
    pub id: i32,
    pub vertices: [i32; 3],
    /// Triangulation edge ids; derived from vertex ids when absent.
    #[serde(default)]
    pub edges: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct RegionDto {
    pub id: usize,
    pub vertices: Vec<VertexDto>,
    pub triangles: Vec<i32>,
    pub centroid: [i32; 2],
}

#[derive(Debug, Serialize)]
pub struct RegionsFile {
    pub regions: Vec<RegionDto>,
}

impl MeshFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading mesh {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing mesh {}", path.display()))
    }

    /// Resolve vertex references into library triangles.
    pub fn triangles(&self) -> Result<Vec<Triangle>> {
        let by_id: HashMap<i32, Vertex> = self
            .vertices
            .iter()
            .map(|v| (v.id, Vertex::new(v.id, v.x, v.z)))
            .collect();
        let mut out = Vec::with_capacity(self.triangles.len());
        for t in &self.triangles {
            let mut vs = [Vertex::new(0, 0, 0); 3];
            for (slot, id) in vs.iter_mut().zip(t.vertices) {
                let Some(v) = by_id.get(&id) else {
                    bail!("triangle {} references unknown vertex {}", t.id, id);
                };
                *slot = *v;
            }
            let tri = match &t.edges {
                Some(edges) => Triangle::new(
                    TriangleId(t.id),
                    vs,
                    edges.iter().copied().map(EdgeId).collect(),
                ),
                None => Triangle::from_vertices(TriangleId(t.id), vs),
            };
            out.push(tri);
        }
        Ok(out)
    }
}

fn vertex_dto(v: &Vertex) -> VertexDto {
    let VertexId(id) = v.id;
    VertexDto {
        id,
        x: v.coord.x,
        z: v.coord.z,
    }
}

fn region_dto(r: &Region) -> RegionDto {
    let wt = r.wt_coord();
    RegionDto {
        id: r.id().0,
        vertices: r.vertices().iter().map(vertex_dto).collect(),
        triangles: r.triangle_ids().map(|t| t.0).collect(),
        centroid: [wt.x, wt.z],
    }
}

impl From<&RegionGraph> for RegionsFile {
    fn from(g: &RegionGraph) -> Self {
        Self {
            regions: g.regions().iter().map(region_dto).collect(),
        }
    }
}
