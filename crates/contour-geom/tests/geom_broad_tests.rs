// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the broad phase (AABB hierarchy).

use std::collections::BTreeSet;

use contour_geom::math::{Prng, Vec2};
use contour_geom::shapes::regular_polygon;
use contour_geom::{update, Aabb, AllPairs, BroadPhase, Bvh, ShapeSnapshot, Transform2};

fn boxed(x: f32, y: f32) -> Aabb {
    Aabb::from_center_half_extents(Vec2::new(x, y), 1.0, 1.0)
}

fn canonical(pairs: Vec<(usize, usize)>) -> BTreeSet<(usize, usize)> {
    pairs
        .into_iter()
        .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
        .collect()
}

fn shuffled(n: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    let mut prng = Prng::from_seed_u64(seed);
    for i in (1..n).rev() {
        let j = prng.next_index(i + 1);
        order.swap(i, j);
    }
    order
}

#[test]
fn disjoint_boxes_never_pair_in_any_order() {
    // 5x5 grid, 10 units apart, boxes 2 units wide.
    #[allow(clippy::cast_precision_loss)]
    let boxes: Vec<Aabb> = (0..25)
        .map(|i| boxed((i % 5) as f32 * 10.0, (i / 5) as f32 * 10.0))
        .collect();
    let mut orders = vec![(0..25).collect::<Vec<_>>(), (0..25).rev().collect()];
    orders.extend((1..=8).map(|seed| shuffled(25, seed)));
    for order in orders {
        let mut bvh = Bvh::new();
        for &i in &order {
            bvh.insert(i, boxes[i]);
        }
        assert!(
            bvh.candidate_pairs().is_empty(),
            "order {order:?} produced pairs"
        );
    }
}

#[test]
fn identical_boxes_pair_exhaustively() {
    for n in [2_usize, 3, 7, 16, 33] {
        let mut bvh = Bvh::new();
        for i in 0..n {
            bvh.insert(i, boxed(4.0, -2.0));
        }
        let pairs = bvh.candidate_pairs();
        assert_eq!(pairs.len(), n * (n - 1) / 2);
        assert_eq!(canonical(pairs).len(), n * (n - 1) / 2, "duplicates for n={n}");
    }
}

#[test]
fn no_self_pairs() {
    let mut bvh = Bvh::new();
    for i in 0..10_usize {
        #[allow(clippy::cast_precision_loss)]
        bvh.insert(i, boxed(i as f32 * 0.5, 0.0));
    }
    assert!(bvh.candidate_pairs().iter().all(|(a, b)| a != b));
}

#[test]
fn hierarchy_matches_exhaustive_baseline() {
    let mut prng = Prng::from_seed_u64(0x5EED);
    let mut bvh = Bvh::new();
    let mut all = AllPairs::new();
    for i in 0..200_usize {
        let c = Vec2::new(prng.next_range(0.0, 400.0), prng.next_range(0.0, 300.0));
        let bb = Aabb::from_center_half_extents(
            c,
            prng.next_range(2.0, 20.0),
            prng.next_range(2.0, 20.0),
        );
        bvh.insert(i, bb);
        all.insert(i, bb);
    }
    let expected = canonical(all.candidate_pairs());
    let got = bvh.candidate_pairs();
    assert_eq!(got.len(), expected.len());
    assert_eq!(canonical(got), expected);
    assert_eq!(bvh.len(), 200);
}

#[test]
fn intersects_is_symmetric_on_edge_cases() {
    let a = boxed(0.0, 0.0);
    for other in [
        boxed(2.0, 0.0),
        boxed(2.0, 2.0),
        boxed(0.0, 2.0001),
        Aabb::from_center_half_extents(Vec2::ZERO, 0.1, 5.0),
        a,
    ] {
        assert_eq!(a.intersects(&other), other.intersects(&a));
    }
}

#[test]
fn far_apart_triangle_and_hexagon_produce_no_candidates() {
    let tri = regular_polygon(3, 30.0).expect("triangle");
    let hex = regular_polygon(6, 30.0).expect("hexagon");
    let gap = tri.bounding_radius() + hex.bounding_radius() + 1.0;
    let snaps = [
        ShapeSnapshot::new("tri", Transform2::at(Vec2::new(100.0, 100.0)), &tri),
        ShapeSnapshot::new("hex", Transform2::at(Vec2::new(100.0 + gap, 100.0)), &hex),
    ];
    let result = update(&snaps);
    assert_eq!(result.stats().candidates, 0);
    assert!(result.is_empty());
}
