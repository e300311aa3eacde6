// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{deg_to_rad, Vec2};

/// Placement of a shape in the world: translation, rotation, uniform scale.
///
/// Conventions:
/// - `position` in world units.
/// - `rotation_degrees` counter-clockwise, converted to radians on use.
/// - `scale` is uniform and applied first, before rotation and offset.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2 {
    position: Vec2,
    #[cfg_attr(feature = "serde", serde(default))]
    rotation_degrees: f32,
    #[cfg_attr(feature = "serde", serde(default = "unit_scale"))]
    scale: f32,
}

#[cfg(feature = "serde")]
const fn unit_scale() -> f32 {
    1.0
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2 {
    /// Identity transform (origin, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation_degrees: 0.0,
            scale: 1.0,
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(position: Vec2, rotation_degrees: f32, scale: f32) -> Self {
        Self {
            position,
            rotation_degrees,
            scale,
        }
    }

    /// Translation-only transform.
    #[must_use]
    pub const fn at(position: Vec2) -> Self {
        Self::new(position, 0.0, 1.0)
    }

    /// World position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// Uniform scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// `true` when every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation_degrees.is_finite() && self.scale.is_finite()
    }

    /// Maps a local vertex to world space: scale, rotate, add `offset`, translate.
    ///
    /// The offset is not rotated; it shifts the rotated shape relative to the
    /// transform's position.
    #[must_use]
    pub fn apply(&self, local: Vec2, offset: Vec2) -> Vec2 {
        let rotated = local
            .scale(self.scale)
            .rotate(deg_to_rad(self.rotation_degrees));
        self.position.add(&offset).add(&rotated)
    }

    /// Like [`Transform2::apply`] but without rotation.
    ///
    /// The broad phase bounds shapes with this cheaper mapping; the narrow
    /// phase always uses the rotated vertices.
    #[must_use]
    pub fn apply_unrotated(&self, local: Vec2, offset: Vec2) -> Vec2 {
        self.position.add(&offset).add(&local.scale(self.scale))
    }
}
