// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for the per-tick collision pipeline.

use contour_geom::shapes::{rectangle, regular_polygon};
use contour_geom::{polygon_area, update, ConvexPolygon, Pair, ShapeSnapshot, Transform2, Vec2};

fn unit_square() -> ConvexPolygon {
    rectangle(1.0, 1.0).expect("square")
}

#[test]
fn offset_unit_squares_overlap_by_a_quarter() {
    let sq = unit_square();
    let snaps = [
        ShapeSnapshot::new("a", Transform2::at(Vec2::ZERO), &sq),
        ShapeSnapshot::new("b", Transform2::at(Vec2::new(0.5, 0.5)), &sq),
    ];
    let result = update(&snaps);
    assert_eq!(result.len(), 1);
    assert!(result.is_colliding("a", "b"));
    assert!(result.is_colliding("b", "a"));
    let area = result.intersection("b", "a").map(polygon_area);
    assert!(area.is_some_and(|a| (a - 0.25).abs() < 1e-5), "{area:?}");
    let stats = result.stats();
    assert_eq!((stats.candidates, stats.collisions, stats.regions), (1, 1, 1));
}

#[test]
fn each_tick_starts_from_scratch() {
    let sq = unit_square();
    let overlapping = [
        ShapeSnapshot::new(1_u64, Transform2::at(Vec2::ZERO), &sq),
        ShapeSnapshot::new(2_u64, Transform2::at(Vec2::new(0.25, 0.0)), &sq),
    ];
    let first = update(&overlapping);
    assert!(first.is_colliding(1, 2));

    let apart = [
        ShapeSnapshot::new(1_u64, Transform2::at(Vec2::ZERO), &sq),
        ShapeSnapshot::new(2_u64, Transform2::at(Vec2::new(5.0, 0.0)), &sq),
    ];
    let second = update(&apart);
    assert!(second.is_empty());
    assert!(second.intersection(1, 2).is_none());
}

#[test]
fn corner_contact_collides_without_region() {
    let sq = unit_square();
    let snaps = [
        ShapeSnapshot::new('a', Transform2::at(Vec2::ZERO), &sq),
        ShapeSnapshot::new('b', Transform2::at(Vec2::new(1.0, 1.0)), &sq),
    ];
    let result = update(&snaps);
    assert!(result.is_colliding('a', 'b'));
    assert!(result.intersection('a', 'b').is_none());
    assert_eq!(result.stats().regions, 0);
}

#[test]
fn offset_and_scale_move_the_shape() {
    let sq = unit_square();
    let shifted = unit_square()
        .with_offset(Vec2::new(10.0, 0.0))
        .expect("finite offset");
    let snaps = [
        ShapeSnapshot::new(0_u8, Transform2::at(Vec2::new(10.0, 0.0)), &sq),
        ShapeSnapshot::new(1_u8, Transform2::at(Vec2::ZERO), &shifted),
        ShapeSnapshot::new(2_u8, Transform2::new(Vec2::new(13.0, 0.0), 0.0, 4.0), &sq),
    ];
    let result = update(&snaps);
    // 0 and 1 coincide; 2 spans x in [11, 15] and reaches neither.
    assert!(result.is_colliding(0, 1));
    assert!(!result.is_colliding(0, 2));
    assert!(!result.is_colliding(1, 2));
    let area = result.intersection(0, 1).map(polygon_area);
    assert!(area.is_some_and(|a| (a - 1.0).abs() < 1e-5));
}

#[test]
fn cluster_reports_every_overlap_once() {
    let hex = regular_polygon(6, 30.0).expect("hexagon");
    let tri = regular_polygon(3, 30.0).expect("triangle");
    let snaps = [
        ShapeSnapshot::new(10_u32, Transform2::at(Vec2::new(100.0, 100.0)), &hex),
        ShapeSnapshot::new(11, Transform2::new(Vec2::new(130.0, 100.0), 30.0, 1.0), &tri),
        ShapeSnapshot::new(12, Transform2::at(Vec2::new(100.0, 140.0)), &hex),
        ShapeSnapshot::new(13, Transform2::at(Vec2::new(400.0, 400.0)), &tri),
    ];
    let result = update(&snaps);
    let pairs: Vec<Pair<u32>> = result.pairs().copied().collect();
    assert!(pairs.contains(&Pair::new(10, 11)));
    assert!(pairs.contains(&Pair::new(12, 10)));
    assert!(result.partners(13).is_empty());
    assert_eq!(result.stats().collisions, pairs.len());
    for (pair, region) in result.intersections() {
        assert!(region.len() >= 3, "{pair:?}");
        assert!(polygon_area(region) > 0.0);
    }
}

#[test]
fn empty_input_is_empty_output() {
    let result = update::<u32>(&[]);
    assert!(result.is_empty());
    assert_eq!(result.stats().shapes, 0);
}
