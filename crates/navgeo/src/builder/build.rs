//! Greedy region growth over the triangle adjacency.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::region::{edge_key, EdgeId, Polygon, Region, RegionId, Triangle};

use super::types::{BuildCfg, BuildError, RegionGraph};

/// Build convex regions from `triangles`.
///
/// Every triangle ends up in exactly one region. Input is validated first;
/// the geometry itself never fails, a triangle that cannot join a neighbour
/// simply stays a region of its own.
pub fn build_regions(triangles: &[Triangle], cfg: BuildCfg) -> Result<RegionGraph, BuildError> {
    validate_input(triangles)?;
    let adjacency = edge_adjacency(triangles);

    let mut regions: Vec<Region> = Vec::new();
    let mut assigned = vec![false; triangles.len()];
    let mut triangle_merges = 0usize;
    for seed in 0..triangles.len() {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut region = Region::new(RegionId(regions.len()), &triangles[seed]);
        let mut queue: VecDeque<usize> = neighbours(&adjacency, triangles, seed).collect();
        while let Some(next) = queue.pop_front() {
            if assigned[next] {
                continue;
            }
            let t = &triangles[next];
            if region.merge_triangle(t) {
                assigned[next] = true;
                triangle_merges += 1;
                tracing::debug!(region = region.id().0, triangle = t.id.0, "merged triangle");
                queue.extend(neighbours(&adjacency, triangles, next).filter(|&i| !assigned[i]));
            } else {
                tracing::debug!(region = region.id().0, triangle = t.id.0, "triangle rejected");
            }
        }
        regions.push(region);
    }

    let seeded = regions.len();
    let region_merges = if cfg.merge_regions {
        merge_adjacent_regions(&mut regions)
    } else {
        0
    };

    let mut triangle_region = HashMap::with_capacity(triangles.len());
    let mut invalid = 0usize;
    for (i, region) in regions.iter_mut().enumerate() {
        region.set_id(RegionId(i));
        region.update_wt_coord();
        for tid in region.triangle_ids() {
            triangle_region.insert(tid, RegionId(i));
        }
        if cfg.validate && !region.check_convex() {
            invalid += 1;
        }
    }
    tracing::info!(
        triangles = triangles.len(),
        seeded,
        regions = regions.len(),
        triangle_merges,
        region_merges,
        invalid,
        "built regions"
    );
    Ok(RegionGraph {
        regions,
        triangle_region,
    })
}

fn validate_input(triangles: &[Triangle]) -> Result<(), BuildError> {
    let mut seen = HashSet::with_capacity(triangles.len());
    for t in triangles {
        if !seen.insert(t.id) {
            return Err(BuildError::DuplicateTriangle { triangle: t.id });
        }
        if let Some(v) = t.vertices.iter().find(|v| !v.coord.in_range()) {
            return Err(BuildError::CoordinateOutOfRange {
                triangle: t.id,
                vertex: v.id,
            });
        }
        let [a, b, c] = t.vertices;
        if a.id == b.id || a.id == c.id {
            return Err(BuildError::RepeatedVertex {
                triangle: t.id,
                vertex: a.id,
            });
        }
        if b.id == c.id {
            return Err(BuildError::RepeatedVertex {
                triangle: t.id,
                vertex: b.id,
            });
        }
        if t.twice_signed_area() == 0 {
            return Err(BuildError::DegenerateTriangle { triangle: t.id });
        }
    }
    Ok(())
}

/// Edge key → indices of the triangles using that edge.
fn edge_adjacency(triangles: &[Triangle]) -> HashMap<EdgeId, Vec<usize>> {
    let mut map: HashMap<EdgeId, Vec<usize>> = HashMap::with_capacity(triangles.len() * 2);
    for (i, t) in triangles.iter().enumerate() {
        for key in vertex_edge_keys(t) {
            map.entry(key).or_default().push(i);
        }
    }
    map
}

fn vertex_edge_keys(t: &Triangle) -> [EdgeId; 3] {
    let [a, b, c] = t.vertices;
    [edge_key(a.id, b.id), edge_key(b.id, c.id), edge_key(c.id, a.id)]
}

fn neighbours<'a>(
    adjacency: &'a HashMap<EdgeId, Vec<usize>>,
    triangles: &[Triangle],
    index: usize,
) -> impl Iterator<Item = usize> + 'a {
    vertex_edge_keys(&triangles[index])
        .into_iter()
        .filter_map(move |key| adjacency.get(&key))
        .flatten()
        .copied()
        .filter(move |&i| i != index)
}

/// Repeated passes merging whole regions; returns the number of merges.
///
/// Merged-away regions are dropped at the end, survivors keep their relative
/// order.
pub(super) fn merge_adjacent_regions(regions: &mut Vec<Region>) -> usize {
    let mut alive = vec![true; regions.len()];
    let mut merges = 0usize;
    loop {
        let mut changed = false;
        for i in 0..regions.len() {
            if !alive[i] {
                continue;
            }
            for j in (i + 1)..regions.len() {
                if !alive[j] || !regions[i].to_rect().overlaps(&regions[j].to_rect()) {
                    continue;
                }
                let (head, tail) = regions.split_at_mut(j);
                let (into, from) = (&mut head[i], &tail[0]);
                if into.merge_region(from) {
                    tracing::debug!(into = into.id().0, from = from.id().0, "merged regions");
                    alive[j] = false;
                    merges += 1;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    let mut keep = alive.into_iter();
    regions.retain(|_| keep.next().unwrap_or(false));
    merges
}
