// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared scene builders for Contour benchmarks.

use contour_geom::math::{Prng, Vec2};
use contour_geom::shapes::regular_polygon;
use contour_geom::{Aabb, ConvexPolygon, GeomError, ShapeKind, Transform2};

/// Deterministic scene of `n` regular polygons scattered over a square whose
/// side grows with `sqrt(n)`, keeping density (and overlap rate) roughly
/// constant across sizes.
#[allow(clippy::cast_precision_loss)]
pub fn scattered_scene(n: usize, seed: u64) -> Result<Vec<(ConvexPolygon, Transform2)>, GeomError> {
    let mut prng = Prng::from_seed_u64(seed);
    let side = 120.0 * (n as f32).sqrt().max(1.0);
    (0..n)
        .map(|_| {
            let kind = ShapeKind::REGULAR[prng.next_index(ShapeKind::REGULAR.len())];
            let sides = kind.sides().unwrap_or(4);
            let poly = regular_polygon(sides, 30.0)?;
            let pos = Vec2::new(prng.next_range(0.0, side), prng.next_range(0.0, side));
            let deg = prng.next_range(0.0, 360.0);
            Ok((poly, Transform2::new(pos, deg, 1.0)))
        })
        .collect()
}

/// Broad-phase boxes for a scene, as the pipeline would compute them.
pub fn scene_boxes(scene: &[(ConvexPolygon, Transform2)]) -> Vec<Aabb> {
    scene
        .iter()
        .filter_map(|(poly, t)| poly.world_bounds(t))
        .collect()
}
