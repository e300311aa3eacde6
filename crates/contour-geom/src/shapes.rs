// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Constructors for common convex shapes.

use std::f32::consts::TAU;

use crate::error::GeomError;
use crate::math::Vec2;
use crate::types::polygon::{ConvexPolygon, ShapeKind};

/// Regular polygon with `sides` vertices on a circle of `radius`.
///
/// Vertex `i` sits at angle `i * 2π / sides`, so the result is
/// counter-clockwise with its first vertex on the positive X axis.
#[allow(clippy::cast_precision_loss)]
pub fn regular_polygon(sides: usize, radius: f32) -> Result<ConvexPolygon, GeomError> {
    if sides < 3 {
        return Err(GeomError::InvalidSides(sides));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeomError::InvalidRadius(radius));
    }
    let step = TAU / sides as f32;
    let vertices = (0..sides)
        .map(|i| {
            let (sin, cos) = (i as f32 * step).sin_cos();
            Vec2::new(radius * cos, radius * sin)
        })
        .collect();
    ConvexPolygon::new(vertices, ShapeKind::from_sides(sides))
}

/// Regular polygon for a named kind.
///
/// [`ShapeKind::Custom`] has no side count and is rejected.
pub fn regular(kind: ShapeKind, radius: f32) -> Result<ConvexPolygon, GeomError> {
    let sides = kind.sides().ok_or(GeomError::InvalidSides(0))?;
    regular_polygon(sides, radius)
}

/// Axis-aligned rectangle centred on the local origin.
pub fn rectangle(width: f32, height: f32) -> Result<ConvexPolygon, GeomError> {
    let (hx, hy) = (width * 0.5, height * 0.5);
    ConvexPolygon::new(
        vec![
            Vec2::new(-hx, -hy),
            Vec2::new(hx, -hy),
            Vec2::new(hx, hy),
            Vec2::new(-hx, hy),
        ],
        ShapeKind::Square,
    )
}
