// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic random scenes: regular 3–6-gons scattered over a viewport.

use anyhow::{ensure, Result};
use contour_geom::math::{Prng, Vec2};
use contour_geom::shapes::regular;
use contour_geom::{ShapeKind, Transform2};

use crate::scene::{Scene, SceneShape};

/// Distance kept between spawned shape centres and the viewport edge.
pub const MARGIN: f32 = 50.0;

/// Parameters for [`generate_scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateParams {
    /// Number of shapes.
    pub count: usize,
    /// PRNG seed; equal seeds give equal scenes.
    pub seed: u64,
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
    /// Circumradius of every shape.
    pub radius: f32,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            count: 10,
            seed: 0,
            width: 800.0,
            height: 600.0,
            radius: 30.0,
        }
    }
}

/// Builds a scene of `count` regular polygons with random kind, rotation and
/// position in `[MARGIN, width - MARGIN) × [MARGIN, height - MARGIN)`.
///
/// Shapes are named `shape-0`, `shape-1`, … in spawn order.
pub fn generate_scene(params: &GenerateParams) -> Result<Scene> {
    ensure!(
        params.width > 2.0 * MARGIN && params.height > 2.0 * MARGIN,
        "viewport {}x{} leaves no room inside the {MARGIN} margin",
        params.width,
        params.height,
    );
    let mut prng = Prng::from_seed_u64(params.seed);
    let mut shapes = Vec::with_capacity(params.count);
    for i in 0..params.count {
        let kind = ShapeKind::REGULAR[prng.next_index(ShapeKind::REGULAR.len())];
        let polygon = regular(kind, params.radius)?;
        let position = Vec2::new(
            prng.next_range(MARGIN, params.width - MARGIN),
            prng.next_range(MARGIN, params.height - MARGIN),
        );
        let rotation = prng.next_range(0.0, 360.0);
        shapes.push(SceneShape {
            id: format!("shape-{i}"),
            transform: Some(Transform2::new(position, rotation, 1.0)),
            polygon: Some(polygon),
        });
    }
    Ok(Scene { shapes })
}
