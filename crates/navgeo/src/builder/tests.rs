use super::*;
use crate::cfg::GeomCfg;
use crate::circle::Circle;
use crate::rand::{draw_grid_mesh, GridCfg, ReplayToken};
use crate::rect::Rect;
use crate::region::{Locate, Polygon, Region, RegionId, Triangle, TriangleId, Vertex, VertexId};
use crate::vector::{Coord, MAX_COORD};
use proptest::prelude::*;
use std::collections::HashSet;

fn tri(id: i32, vs: [Vertex; 3]) -> Triangle {
    Triangle::from_vertices(TriangleId(id), vs)
}

/// Two unit squares side by side plus one on top of the left one.
fn l_shape() -> Vec<Triangle> {
    let a = Vertex::new(0, 0, 0);
    let b = Vertex::new(1, 10, 0);
    let c = Vertex::new(2, 20, 0);
    let d = Vertex::new(3, 0, 10);
    let e = Vertex::new(4, 10, 10);
    let f = Vertex::new(5, 20, 10);
    let g = Vertex::new(6, 0, 20);
    let h = Vertex::new(7, 10, 20);
    vec![
        tri(0, [a, b, e]),
        tri(1, [a, e, d]),
        tri(2, [b, c, f]),
        tri(3, [b, f, e]),
        tri(4, [d, e, h]),
        tri(5, [d, h, g]),
    ]
}

/// Four triangles fanned around the centre of a square.
fn fan() -> Vec<Triangle> {
    let m = Vertex::new(4, 5, 5);
    let p = [
        Vertex::new(0, 0, 0),
        Vertex::new(1, 10, 0),
        Vertex::new(2, 10, 10),
        Vertex::new(3, 0, 10),
    ];
    (0..4)
        .map(|i| tri(i as i32, [m, p[i], p[(i + 1) % 4]]))
        .collect()
}

fn total_area(triangles: &[Triangle]) -> i128 {
    triangles.iter().map(|t| t.twice_signed_area()).sum()
}

#[test]
fn l_shape_builds_two_regions() {
    let mesh = l_shape();
    let g = build_regions(&mesh, BuildCfg::default()).unwrap();
    assert_eq!(g.len(), 2);
    let r0 = g.region(RegionId(0)).unwrap();
    let r1 = g.region(RegionId(1)).unwrap();
    assert_eq!(r0.triangles().len(), 4);
    assert_eq!(r0.to_rect(), Rect::new(0, 0, 20, 10));
    assert_eq!(r1.to_rect(), Rect::new(0, 10, 10, 20));
    assert!(r0.check_convex() && r1.check_convex());
    for t in 0..4 {
        assert_eq!(g.region_of_triangle(TriangleId(t)), Some(RegionId(0)));
    }
    assert_eq!(g.region_of_triangle(TriangleId(5)), Some(RegionId(1)));
    assert_eq!(g.region_of_triangle(TriangleId(9)), None);
    assert_eq!(r0.wt_coord(), Coord::new(10, 5));
    assert!(g.region(RegionId(2)).is_none());
}

#[test]
fn locate_points_in_l_shape() {
    let g = build_regions(&l_shape(), BuildCfg::default()).unwrap();
    for s in Locate::ALL {
        assert_eq!(g.locate(Coord::new(15, 5), s), Some(RegionId(0)), "{s:?}");
        assert_eq!(g.locate(Coord::new(5, 15), s), Some(RegionId(1)), "{s:?}");
        assert_eq!(g.locate(Coord::new(15, 15), s), None, "{s:?}");
        // shared edge resolves to the lower id
        assert_eq!(g.locate(Coord::new(5, 10), s), Some(RegionId(0)), "{s:?}");
    }
    assert_eq!(
        g.locate_triangle(Coord::new(18, 3), Locate::Angular),
        Some((RegionId(0), TriangleId(2)))
    );
    assert_eq!(g.locate_triangle(Coord::new(-1, 3), Locate::Angular), None);
}

#[test]
fn neighbors_in_l_shape() {
    let g = build_regions(&l_shape(), BuildCfg::default()).unwrap();
    let n0 = g.neighbors(RegionId(0));
    assert_eq!(n0.len(), 1);
    let (id, boundary) = &n0[0];
    assert_eq!(*id, RegionId(1));
    let shared: HashSet<VertexId> = boundary[..2].iter().map(|v| v.id).collect();
    assert_eq!(shared, HashSet::from([VertexId(3), VertexId(4)]));
    assert_eq!(boundary.len(), 4);

    let n1 = g.neighbors(RegionId(1));
    assert_eq!(n1.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![RegionId(0)]);
    assert!(g.neighbors(RegionId(7)).is_empty());
}

#[test]
fn circle_overlap_queries() {
    let g = build_regions(&l_shape(), BuildCfg::default()).unwrap();
    let cfg = GeomCfg::default();
    let near = Circle::new(Coord::new(15, 15), 6);
    assert_eq!(g.regions_overlapping_circle(&near, cfg), vec![RegionId(0), RegionId(1)]);
    let clear = Circle::new(Coord::new(15, 15), 4);
    assert!(g.regions_overlapping_circle(&clear, cfg).is_empty());
    let inside = Circle::new(Coord::new(5, 5), 2);
    assert_eq!(g.regions_overlapping_circle(&inside, cfg), vec![RegionId(0)]);
}

#[test]
fn fan_splits_into_two_halves() {
    // Greedy growth keeps the centre on both boundaries, so the halves share
    // three vertices and never merge.
    let mesh = fan();
    let g = build_regions(&mesh, BuildCfg::default()).unwrap();
    assert_eq!(g.len(), 2);
    assert_eq!(g.region_of_triangle(TriangleId(0)), Some(RegionId(0)));
    assert_eq!(g.region_of_triangle(TriangleId(3)), Some(RegionId(0)));
    assert_eq!(g.region_of_triangle(TriangleId(1)), Some(RegionId(1)));
    assert_eq!(g.region_of_triangle(TriangleId(2)), Some(RegionId(1)));
    assert!(g.neighbors(RegionId(0)).is_empty());
    assert_eq!(
        g.locate_triangle(Coord::new(8, 5), Locate::BinarySearch),
        Some((RegionId(1), TriangleId(1)))
    );
}

#[test]
fn region_pass_joins_adjacent_regions() {
    let a = Vertex::new(0, 0, 0);
    let b = Vertex::new(1, 10, 0);
    let c = Vertex::new(2, 10, 10);
    let d = Vertex::new(3, 0, 10);
    let e = Vertex::new(4, 20, 0);
    let f = Vertex::new(5, 20, 10);
    let mut left = Region::new(RegionId(0), &tri(0, [a, b, c]));
    assert!(left.merge_triangle(&tri(1, [a, c, d])));
    let mut right = Region::new(RegionId(1), &tri(2, [b, e, f]));
    assert!(right.merge_triangle(&tri(3, [b, f, c])));

    let mut regions = vec![left, right];
    assert_eq!(build::merge_adjacent_regions(&mut regions), 1);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].to_rect(), Rect::new(0, 0, 20, 10));
    assert_eq!(regions[0].triangles().len(), 4);
    assert!(regions[0].check_convex());
}

#[test]
fn input_validation() {
    let a = Vertex::new(0, 0, 0);
    let b = Vertex::new(1, 10, 0);
    let c = Vertex::new(2, 0, 10);
    let d = Vertex::new(3, 10, 10);

    let dup = vec![tri(0, [a, b, c]), tri(0, [b, d, c])];
    assert_eq!(
        build_regions(&dup, BuildCfg::default()).unwrap_err(),
        BuildError::DuplicateTriangle { triangle: TriangleId(0) }
    );

    let flat = vec![tri(0, [a, b, Vertex::new(2, 20, 0)])];
    assert_eq!(
        build_regions(&flat, BuildCfg::default()).unwrap_err(),
        BuildError::DegenerateTriangle { triangle: TriangleId(0) }
    );

    let repeated = vec![tri(4, [a, b, Vertex::new(1, 0, 10)])];
    let err = build_regions(&repeated, BuildCfg::default()).unwrap_err();
    assert_eq!(
        err,
        BuildError::RepeatedVertex {
            triangle: TriangleId(4),
            vertex: VertexId(1)
        }
    );
    assert_eq!(err.to_string(), "triangle 4 uses vertex 1 more than once");
}

#[test]
fn rejects_coordinates_outside_supported_range() {
    let wide = vec![tri(
        7,
        [
            Vertex::new(0, -2_000_000_000, 0),
            Vertex::new(1, 2_000_000_000, 0),
            Vertex::new(2, 0, 2_000_000_000),
        ],
    )];
    assert_eq!(
        build_regions(&wide, BuildCfg::default()).unwrap_err(),
        BuildError::CoordinateOutOfRange {
            triangle: TriangleId(7),
            vertex: VertexId(0)
        }
    );

    // the full range is accepted and queries at its corners stay exact
    let m = MAX_COORD;
    let big = vec![tri(
        0,
        [Vertex::new(0, -m, -m), Vertex::new(1, m, -m), Vertex::new(2, -m, m)],
    )];
    let g = build_regions(&big, BuildCfg::default()).unwrap();
    for s in Locate::ALL {
        assert_eq!(g.locate(Coord::new(0, -1), s), Some(RegionId(0)), "{s:?}");
        assert_eq!(g.locate(Coord::new(m, m), s), None, "{s:?}");
        assert_eq!(g.locate(Coord::new(-m, m), s), Some(RegionId(0)), "{s:?}");
        assert_eq!(g.locate(Coord::new(i32::MIN, 0), s), None, "{s:?}");
    }
}

#[test]
fn circle_verdict_follows_comparator_tolerance() {
    // corner (0, 0) is at squared distance 2 from the center, radius² is 1
    let g = build_regions(&l_shape(), BuildCfg::default()).unwrap();
    let graze = Circle::new(Coord::new(-1, -1), 1);
    assert!(g.regions_overlapping_circle(&graze, GeomCfg::default()).is_empty());
    assert_eq!(
        g.regions_overlapping_circle(&graze, GeomCfg::with_cmp(1.5)),
        vec![RegionId(0)]
    );
}

#[test]
fn empty_input_builds_empty_graph() {
    let g = build_regions(&[], BuildCfg::default()).unwrap();
    assert!(g.is_empty());
    assert_eq!(g.locate(Coord::new(0, 0), Locate::Angular), None);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn grid_meshes_partition_into_convex_regions(
        seed in any::<u64>(),
        cols in 1usize..7,
        rows in 1usize..7,
        merge_regions in any::<bool>(),
    ) {
        let mesh = draw_grid_mesh(
            GridCfg { cols, rows, jitter: 20, ..GridCfg::default() },
            ReplayToken { seed, index: 0 },
        );
        let cfg = BuildCfg { merge_regions, validate: false, ..BuildCfg::default() };
        let g = build_regions(&mesh, cfg).unwrap();

        let mut seen = HashSet::new();
        for (i, r) in g.regions().iter().enumerate() {
            prop_assert_eq!(r.id(), RegionId(i));
            prop_assert!(r.check_convex());
            prop_assert!(r.twice_signed_area() > 0);
            for t in r.triangle_ids() {
                prop_assert!(seen.insert(t));
                prop_assert_eq!(g.region_of_triangle(t), Some(RegionId(i)));
            }
        }
        prop_assert_eq!(seen.len(), mesh.len());
        let region_area: i128 = g.regions().iter().map(|r| r.twice_signed_area()).sum();
        prop_assert_eq!(region_area, total_area(&mesh));

        // triangle centroids locate to their own region
        for t in &mesh {
            let p = Region::new(RegionId(0), t).center_coord();
            for s in Locate::ALL {
                prop_assert_eq!(g.locate(p, s), g.region_of_triangle(t.id));
            }
        }

        // adjacency is mutual
        for r in g.regions() {
            for (other, _) in g.neighbors(r.id()) {
                prop_assert!(g.neighbors(other).iter().any(|(id, _)| *id == r.id()));
            }
        }
    }

    #[test]
    fn region_pass_never_adds_regions(seed in any::<u64>()) {
        let mesh = draw_grid_mesh(GridCfg::default(), ReplayToken { seed, index: 1 });
        let greedy = build_regions(&mesh, BuildCfg { merge_regions: false, ..BuildCfg::default() }).unwrap();
        let full = build_regions(&mesh, BuildCfg::default()).unwrap();
        prop_assert!(full.len() <= greedy.len());
    }
}
