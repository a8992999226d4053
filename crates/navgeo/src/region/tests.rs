use super::*;
use crate::cfg::GeomCfg;
use crate::rand::{draw_convex_polygon, draw_grid_mesh, GridCfg, RadialCfg, ReplayToken, VertexCount};
use crate::segment::Segment;
use crate::vector::Coord;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};

fn near_boundary(vs: &[Vertex], p: Coord, cfg: GeomCfg) -> bool {
    let n = vs.len();
    (0..n).any(|i| {
        let s = Segment::new(vs[i].coord, vs[(i + 1) % n].coord);
        s.distance_to(p, cfg) < 1.0
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn strategies_agree_on_convex_polygons(
        seed in any::<u64>(),
        n in 3usize..24,
        x in -1400i32..1400,
        z in -1400i32..1400,
    ) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let Some(poly) = draw_convex_polygon(cfg, ReplayToken { seed, index: n as u64 }) else {
            return Ok(());
        };
        let p = Coord::new(x, z);
        prop_assume!(!near_boundary(&poly, p, GeomCfg::default()));
        let ray = contains_ray_cast(&poly, p);
        prop_assert_eq!(ray, contains_angular(&poly, p));
        prop_assert_eq!(ray, contains_binary_search(&poly, p));
    }

    #[test]
    fn shared_boundary_is_symmetric(seed in any::<u64>(), i in 0usize..32, j in 0usize..32) {
        let mesh = draw_grid_mesh(
            GridCfg { cols: 4, rows: 4, ..GridCfg::default() },
            ReplayToken { seed, index: 0 },
        );
        let (a, b) = (&mesh[i], &mesh[j]);
        let ab = find_shared_boundary(a, b);
        let ba = find_shared_boundary(b, a);
        prop_assert_eq!(ab.is_some(), ba.is_some());
        if let (Some(ab), Some(ba)) = (ab, ba) {
            let mut x: Vec<VertexId> = ab[..2].iter().map(|v| v.id).collect();
            let mut y: Vec<VertexId> = ba[..2].iter().map(|v| v.id).collect();
            x.sort();
            y.sort();
            prop_assert_eq!(x, y);
            prop_assert!(ab[2..].iter().all(|v| !a.has_vertex(v.id)));
            prop_assert!(ba[2..].iter().all(|v| !b.has_vertex(v.id)));
        }
    }

    #[test]
    fn merge_keeps_regions_convex(
        seed in any::<u64>(),
        n in 3usize..12,
        edge in any::<prop::sample::Index>(),
        run in prop::collection::vec((-3000i32..3000, -3000i32..3000), 1..4),
    ) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let Some(poly) = draw_convex_polygon(cfg, ReplayToken { seed, index: 3 }) else {
            return Ok(());
        };
        let mut r = fan_region(&poly);
        prop_assert_eq!(r.vertices(), &poly[..]);

        let i = edge.index(poly.len());
        let (a, b) = (poly[i].id, poly[(i + 1) % poly.len()].id);
        let run: Vec<Vertex> = run
            .iter()
            .enumerate()
            .map(|(k, &(x, z))| Vertex::new(1000 + k as i32, x, z))
            .collect();
        let before = r.clone();
        if r.try_merge(a, b, &run) {
            prop_assert!(is_convex(r.vertices()));
            prop_assert!(r.twice_signed_area() > 0);
            prop_assert_eq!(r.vertices().len(), poly.len() + run.len());
            prop_assert!(poly.iter().chain(&run).all(|v| r.has_vertex(v.id)));
        } else {
            prop_assert_eq!(r, before);
        }
    }
}

/// Region grown from a fan of triangles around the first vertex.
fn fan_region(poly: &[Vertex]) -> Region {
    let mut r = Region::new(
        RegionId(0),
        &Triangle::from_vertices(TriangleId(0), [poly[0], poly[1], poly[2]]),
    );
    for k in 2..poly.len() - 1 {
        let t = Triangle::from_vertices(TriangleId(k as i32 - 1), [poly[0], poly[k], poly[k + 1]]);
        assert!(r.merge_triangle(&t));
    }
    r
}

#[test]
fn strategies_agree_on_lattice_points() {
    // Exhaustive over a small window, boundary points included.
    let mut rng = rand::rngs::StdRng::seed_from_u64(9);
    for index in 0..20 {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 10 },
            base_radius: 12.0,
            ..RadialCfg::default()
        };
        let Some(poly) = draw_convex_polygon(cfg, ReplayToken { seed: rng.gen(), index }) else {
            continue;
        };
        for x in -16..=16 {
            for z in -16..=16 {
                let p = Coord::new(x, z);
                let ray = contains_ray_cast(&poly, p);
                assert_eq!(ray, contains_angular(&poly, p), "{p:?} in {poly:?}");
                assert_eq!(ray, contains_binary_search(&poly, p), "{p:?} in {poly:?}");
            }
        }
    }
}

fn square_region() -> Region {
    let a = Vertex::new(0, 0, 0);
    let b = Vertex::new(1, 10, 0);
    let c = Vertex::new(2, 10, 10);
    let d = Vertex::new(3, 0, 10);
    let mut r = Region::new(
        RegionId(0),
        &Triangle::from_vertices(TriangleId(0), [a, b, c]),
    );
    assert!(r.merge_triangle(&Triangle::from_vertices(TriangleId(1), [a, c, d])));
    r
}

#[test]
fn centroids_agree_on_square() {
    let mut r = square_region();
    // the cached centroid still belongs to the seed triangle: (20/3, 10/3)
    assert_eq!(r.wt_coord(), Coord::new(6, 3));
    r.update_wt_coord();
    assert_eq!(r.center_coord(), Coord::new(5, 5));
    let c = r.area_centroid().unwrap();
    assert!((c.x - 5.0).abs() < 1e-12 && (c.y - 5.0).abs() < 1e-12);
    assert_eq!(r.wt_coord(), Coord::new(5, 5));
}

#[test]
fn centroids_differ_on_irregular_triangle() {
    let t = Triangle::from_vertices(
        TriangleId(7),
        [Vertex::new(0, 0, 0), Vertex::new(1, 10, 0), Vertex::new(2, 0, 30)],
    );
    let r = Region::new(RegionId(0), &t);
    let cfg = GeomCfg::default();
    let c = r.area_centroid().unwrap();
    assert!(cfg.equal(c.x, 10.0 / 3.0));
    assert!(cfg.equal(c.y, 10.0));
    assert_eq!(r.center_coord(), Coord::new(3, 10));
    assert_eq!(r.wt_coord(), Coord::new(3, 10));

    // negative centroids truncate toward zero as well
    let t = Triangle::from_vertices(
        TriangleId(8),
        [Vertex::new(0, 0, 0), Vertex::new(1, -10, 0), Vertex::new(2, 0, -10)],
    );
    let r = Region::new(RegionId(0), &t);
    assert_eq!(r.wt_coord(), Coord::new(-3, -3));
}

#[test]
fn clockwise_triangle_is_stored_counter_clockwise() {
    let t = Triangle::from_vertices(
        TriangleId(0),
        [Vertex::new(0, 0, 0), Vertex::new(1, 0, 10), Vertex::new(2, 10, 0)],
    );
    assert!(t.twice_signed_area() > 0);
    let r = Region::new(RegionId(3), &t);
    assert!(r.twice_signed_area() > 0);
    assert_eq!(r.id(), RegionId(3));
    assert!(r.check_convex());
}

#[test]
fn triangle_lookup_inside_region() {
    let r = square_region();
    assert_eq!(r.triangle_containing(Coord::new(8, 2)), Some(TriangleId(0)));
    assert_eq!(r.triangle_containing(Coord::new(2, 8)), Some(TriangleId(1)));
    // the diagonal belongs to both; the first merged triangle wins
    assert_eq!(r.triangle_containing(Coord::new(5, 5)), Some(TriangleId(0)));
    assert_eq!(r.triangle_containing(Coord::new(11, 5)), None);
    assert_eq!(r.triangle_ids().collect::<Vec<_>>(), vec![TriangleId(0), TriangleId(1)]);
}

#[test]
fn contains_with_every_strategy() {
    let r = square_region();
    for s in Locate::ALL {
        assert!(r.contains_with(Coord::new(3, 7), s), "{s:?}");
        assert!(r.contains_with(Coord::new(10, 10), s), "{s:?}");
        assert!(!r.contains_with(Coord::new(-1, 7), s), "{s:?}");
    }
    assert!(r.contains(Coord::new(3, 7)));
}

#[test]
fn edge_midpoints_and_vectors() {
    let r = square_region();
    assert_eq!(
        r.edge_mid_coords(),
        vec![
            Coord::new(5, 0),
            Coord::new(10, 5),
            Coord::new(5, 10),
            Coord::new(0, 5)
        ]
    );
    let vs = r.vectors();
    assert_eq!(vs.len(), 4);
    assert_eq!((vs[2].x, vs[2].z), (10, 10));
    assert_eq!(r.to_rect(), crate::rect::Rect::new(0, 0, 10, 10));
}

#[test]
fn region_edge_ids_come_from_seed() {
    let r = square_region();
    assert_eq!(r.edge_ids().len(), 3);
    assert!(r.edge_ids().contains(&edge_key(VertexId(0), VertexId(1))));
    assert!(!r.edge_ids().contains(&edge_key(VertexId(2), VertexId(3))));
}

#[test]
fn edge_key_is_order_independent() {
    assert_eq!(edge_key(VertexId(3), VertexId(9)), edge_key(VertexId(9), VertexId(3)));
    assert_ne!(edge_key(VertexId(3), VertexId(9)), edge_key(VertexId(3), VertexId(10)));
    assert_ne!(edge_key(VertexId(0), VertexId(1)), edge_key(VertexId(1), VertexId(2)));
}

#[test]
fn check_convex_flags_foreign_vertices() {
    let mut r = square_region();
    assert!(r.check_convex());
    // a boundary vertex that no merged triangle owns
    r.vertices[1] = Vertex::new(99, 10, 0);
    assert!(!r.check_convex());
}

#[test]
fn check_convex_flags_dropped_triangle_vertex() {
    let mut r = square_region();
    // a triangle vertex outside the boundary
    r.triangles.push(Triangle::from_vertices(
        TriangleId(5),
        [Vertex::new(0, 0, 0), Vertex::new(1, 10, 0), Vertex::new(7, 5, -5)],
    ));
    assert!(!r.check_convex());
}
