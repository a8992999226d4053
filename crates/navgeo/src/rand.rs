//! Seeded samplers: random convex polygons and jittered grid meshes.
//!
//! Purpose
//! - Deterministic inputs for property tests and benches. Every draw is keyed
//!   by a replay token `(seed, index)`, so a failing case can be reproduced
//!   from the two numbers alone.
//!
//! Model
//! - Convex polygons: `n` equally spaced angles with bounded angular and radial
//!   jitter, rounded to integer coordinates, then an exact integer convex hull
//!   (collinear points dropped, counter-clockwise).
//! - Grid meshes: a `(cols + 1) × (rows + 1)` lattice with per-vertex jitter
//!   below a quarter cell, each cell split along a random diagonal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::region::{Triangle, TriangleId, Vertex};
use crate::vector::{Coord, Vector};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius in world units.
    pub base_radius: f64,
    pub center: Coord,
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1000.0,
            center: Coord::default(),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a strictly convex, counter-clockwise polygon with vertex ids `0..n`.
///
/// Returns `None` when rounding collapses the hull below three vertices
/// (tiny radii).
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Vertex>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Coord> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Coord::new(
                cfg.center.x + (th.cos() * r).round() as i32,
                cfg.center.z + (th.sin() * r).round() as i32,
            )
        })
        .collect();
    let hull = convex_hull(pts);
    if hull.len() < 3 {
        return None;
    }
    Some(
        hull.into_iter()
            .enumerate()
            .map(|(i, c)| Vertex::new(i as i32, c.x, c.z))
            .collect(),
    )
}

/// Monotone-chain hull on exact cross products; counter-clockwise, collinear
/// points removed.
fn convex_hull(mut pts: Vec<Coord>) -> Vec<Coord> {
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let left_turn = |o: Coord, a: Coord, b: Coord| {
        Vector::between(o, a).cross(Vector::between(o, b)) > 0
    };
    let mut lower: Vec<Coord> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && !left_turn(lower[lower.len() - 2], lower[lower.len() - 1], p) {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Coord> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && !left_turn(upper[upper.len() - 2], upper[upper.len() - 1], p) {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Jittered grid triangulation configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub cols: usize,
    pub rows: usize,
    /// Cell edge length in world units.
    pub cell: i32,
    /// Maximum per-axis vertex displacement. Clamped below `cell / 4`.
    pub jitter: i32,
    pub origin: Coord,
}
impl Default for GridCfg {
    fn default() -> Self {
        Self {
            cols: 8,
            rows: 8,
            cell: 100,
            jitter: 10,
            origin: Coord::default(),
        }
    }
}

/// Draw a grid mesh of `2 * cols * rows` triangles with edge ids from
/// `edge_key`. Vertex ids are row-major lattice indices.
pub fn draw_grid_mesh(cfg: GridCfg, tok: ReplayToken) -> Vec<Triangle> {
    let mut rng = tok.to_std_rng();
    let cell = cfg.cell.max(4);
    let jitter = cfg.jitter.clamp(0, cell / 4 - 1);
    let stride = cfg.cols + 1;
    let lattice: Vec<Vertex> = (0..=cfg.rows)
        .flat_map(|r| (0..=cfg.cols).map(move |c| (r, c)))
        .map(|(r, c)| {
            let jx = if jitter > 0 { rng.gen_range(-jitter..=jitter) } else { 0 };
            let jz = if jitter > 0 { rng.gen_range(-jitter..=jitter) } else { 0 };
            Vertex::new(
                (r * stride + c) as i32,
                cfg.origin.x + c as i32 * cell + jx,
                cfg.origin.z + r as i32 * cell + jz,
            )
        })
        .collect();

    let mut triangles = Vec::with_capacity(2 * cfg.cols * cfg.rows);
    for r in 0..cfg.rows {
        for c in 0..cfg.cols {
            let v00 = lattice[r * stride + c];
            let v10 = lattice[r * stride + c + 1];
            let v01 = lattice[(r + 1) * stride + c];
            let v11 = lattice[(r + 1) * stride + c + 1];
            let pair = if rng.gen::<bool>() {
                [[v00, v10, v11], [v00, v11, v01]]
            } else {
                [[v00, v10, v01], [v10, v11, v01]]
            };
            for vs in pair {
                let id = TriangleId(triangles.len() as i32);
                triangles.push(Triangle::from_vertices(id, vs));
            }
        }
    }
    triangles
}
