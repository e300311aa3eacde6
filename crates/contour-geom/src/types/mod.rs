// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types: bounding boxes, transforms, convex polygons.
//!
//! Conventions:
//! - Overlap semantics are inclusive on edges so touching shapes still reach
//!   the narrow phase.
//! - Polygons are counter-clockwise in local space; world placement is always
//!   scale, then rotation, then offset, then translation.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Convex polygons, shape tags, and area/winding helpers."]
pub mod polygon;
#[doc = "Position, rotation and uniform scale of a shape."]
pub mod transform;
