// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Convex 2-D collision detection for Contour.

This crate provides:
- Planar math (`Vec2`) and geometry types (`Aabb`, `Transform2`, `ConvexPolygon`).
- A broad phase: a greedy bounding volume hierarchy (`Bvh`) plus an
  exhaustive baseline (`AllPairs`) behind one `BroadPhase` trait.
- A narrow phase: the separating-axis test for convex polygons.
- Sutherland–Hodgman clipping for exact overlap regions.
- A per-tick pipeline tying the stages together.

Design notes:
- Every tick rebuilds its spatial structure from scratch; nothing persists.
- Single-threaded and synchronous; inputs are borrowed for one tick only.
- Construction is fallible (`GeomError`); the per-tick path never fails and
  degrades to empty results instead.
"]

/// Broad-phase pruning structures.
pub mod broad;
/// Polygon clipping and region helpers.
pub mod clip;
mod error;
/// Planar vector math and PRNG.
pub mod math;
/// Separating-axis narrow phase.
pub mod narrow;
/// Per-tick orchestration of all stages.
pub mod pipeline;
/// Regular-polygon and rectangle constructors.
pub mod shapes;
/// Foundational geometric types.
pub mod types;

pub use broad::{AllPairs, BroadPhase, Bvh};
pub use clip::compute_intersection;
pub use error::GeomError;
pub use math::Vec2;
pub use narrow::check_collision;
pub use pipeline::{update, CollisionResult, Pair, ShapeSnapshot, TickStats};
pub use types::aabb::Aabb;
pub use types::polygon::{polygon_area, ConvexPolygon, ShapeKind};
pub use types::transform::Transform2;
