// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Per-tick collision pipeline.
//!
//! Each call to [`update`] runs the whole chain to completion:
//!
//! 1. bound every usable shape with a translation/scale-only AABB;
//! 2. insert the boxes into a fresh [`Bvh`] and query candidate pairs;
//! 3. map both shapes of each candidate to rotated world-space polygons;
//! 4. drop candidates the separating-axis test rejects;
//! 5. record the pair and, when it has positive area, its clipped overlap.
//!
//! Broad-phase boxes deliberately ignore rotation. They are a cheap bound for
//! pruning; the exact answer always comes from the rotated polygons.
//!
//! Nothing is retained between calls: the hierarchy and any cached world
//! polygons are dropped when the tick returns.

use core::fmt::Debug;

use tracing::{debug, instrument, trace};

use crate::broad::{BroadPhase, Bvh};
use crate::clip::{compute_intersection, is_degenerate};
use crate::math::Vec2;
use crate::narrow::check_collision;
use crate::types::polygon::{is_counter_clockwise, ConvexPolygon};
use crate::types::transform::Transform2;

mod result;

pub use result::{CollisionResult, Pair, TickStats};

/// One shape as seen by a single tick.
///
/// `transform` and `polygon` are optional because the caller's storage may
/// not have populated them yet; such shapes sit the tick out.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSnapshot<'a, Id> {
    /// Caller-owned identity; must be unique within a tick.
    pub id: Id,
    /// World placement.
    pub transform: Option<Transform2>,
    /// Local-space geometry, borrowed for the tick.
    pub polygon: Option<&'a ConvexPolygon>,
}

impl<'a, Id> ShapeSnapshot<'a, Id> {
    /// Snapshot with both transform and geometry present.
    pub const fn new(id: Id, transform: Transform2, polygon: &'a ConvexPolygon) -> Self {
        Self {
            id,
            transform: Some(transform),
            polygon: Some(polygon),
        }
    }

    /// Transform and polygon, when both are present and the transform is finite.
    fn usable(&self) -> Option<(Transform2, &'a ConvexPolygon)> {
        match (self.transform, self.polygon) {
            (Some(t), Some(p)) if t.is_finite() => Some((t, p)),
            _ => None,
        }
    }
}

/// World-space vertices per snapshot index, computed on first use.
struct WorldCache<'s, 'a, Id> {
    snapshots: &'s [ShapeSnapshot<'a, Id>],
    world: Vec<Option<Vec<Vec2>>>,
}

impl<'s, 'a, Id> WorldCache<'s, 'a, Id> {
    fn new(snapshots: &'s [ShapeSnapshot<'a, Id>]) -> Self {
        Self {
            snapshots,
            world: vec![None; snapshots.len()],
        }
    }

    fn ensure(&mut self, idx: usize) {
        if self.world[idx].is_some() {
            return;
        }
        let verts = self.snapshots[idx]
            .usable()
            .map(|(t, p)| p.to_world(&t))
            .unwrap_or_default();
        self.world[idx] = Some(verts);
    }

    fn pair(&mut self, a: usize, b: usize) -> (&[Vec2], &[Vec2]) {
        self.ensure(a);
        self.ensure(b);
        let wa = self.world[a].as_deref().unwrap_or_default();
        let wb = self.world[b].as_deref().unwrap_or_default();
        (wa, wb)
    }
}

/// Overlap region of two world polygons, clipping `subject` by `clip`.
///
/// The clipper needs a counter-clockwise clip polygon; a shape authored
/// clockwise is reversed first.
fn overlap_region(subject: &[Vec2], clip: &[Vec2]) -> Vec<Vec2> {
    if is_counter_clockwise(clip) {
        compute_intersection(subject, clip)
    } else {
        let reversed: Vec<Vec2> = clip.iter().rev().copied().collect();
        compute_intersection(subject, &reversed)
    }
}

/// Runs one collision tick over `snapshots`.
///
/// Shapes lacking a transform or polygon, or whose transform is not finite,
/// are skipped and never form a pair. The call never fails.
#[instrument(level = "debug", skip_all, fields(shapes = snapshots.len()))]
pub fn update<Id>(snapshots: &[ShapeSnapshot<'_, Id>]) -> CollisionResult<Id>
where
    Id: Copy + Ord + Debug,
{
    let mut result = CollisionResult::default();
    result.stats.shapes = snapshots.len();

    let mut bvh = Bvh::with_capacity(snapshots.len());
    for (idx, snap) in snapshots.iter().enumerate() {
        let bounds = snap
            .usable()
            .and_then(|(t, poly)| poly.world_bounds(&t));
        match bounds {
            Some(aabb) => bvh.insert(idx, aabb),
            None => {
                trace!(id = ?snap.id, "skipping shape without usable transform or geometry");
                result.stats.skipped += 1;
            }
        }
    }

    let candidates = bvh.candidate_pairs();
    result.stats.candidates = candidates.len();

    let mut cache = WorldCache::new(snapshots);
    for (ia, ib) in candidates {
        let (id_a, id_b) = (snapshots[ia].id, snapshots[ib].id);
        if id_a == id_b {
            trace!(id = ?id_a, "duplicate identity in snapshot; ignoring self pair");
            continue;
        }
        let (world_a, world_b) = cache.pair(ia, ib);
        if !check_collision(world_a, world_b) {
            result.stats.sat_rejections += 1;
            continue;
        }
        let pair = Pair::new(id_a, id_b);
        let region = overlap_region(world_a, world_b);
        result.pairs.insert(pair);
        if !is_degenerate(&region, 0.0) {
            result.regions.insert(pair, region);
        }
    }
    result.stats.collisions = result.pairs.len();
    result.stats.regions = result.regions.len();

    debug!(
        candidates = result.stats.candidates,
        sat_rejections = result.stats.sat_rejections,
        collisions = result.stats.collisions,
        skipped = result.stats.skipped,
        "collision tick complete"
    );
    result
}
