// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::GeomError;
use crate::math::Vec2;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Boxes are rebuilt every tick; the only in-place mutation is
///   [`Aabb::grow`] during hierarchy insertion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    /// Use [`Aabb::try_new`] for untrusted input.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y(),
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Fallible counterpart of [`Aabb::new`].
    pub fn try_new(min: Vec2, max: Vec2) -> Result<Self, GeomError> {
        // Written as negated `<=` so NaN corners are rejected too.
        if !(min.x() <= max.x() && min.y() <= max.y()) {
            return Err(GeomError::InvalidBounds {
                min: min.to_array(),
                max: max.to_array(),
            });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, hx: f32, hy: f32) -> Self {
        let he = Vec2::new(hx.abs(), hy.abs());
        Self {
            min: center.sub(&he),
            max: center.add(&he),
        }
    }

    /// Builds the minimal AABB that contains all `points`, or `None` when empty.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    /// Returns `true` if this AABB overlaps another (inclusive on edges).
    ///
    /// Symmetric: `a.intersects(&b) == b.intersects(&a)`.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        // Inclusive so touching boxes still reach the narrow phase.
        self.min.x() <= other.max.x()
            && self.max.x() >= other.min.x()
            && self.min.y() <= other.max.y()
            && self.max.y() >= other.min.y()
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Grows this box in place to also enclose `other`.
    pub fn grow(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Width along X.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x() - self.min.x()
    }

    /// Height along Y.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y() - self.min.y()
    }

    /// Perimeter `2 * (width + height)`; the insertion cost metric of the hierarchy.
    #[must_use]
    pub fn perimeter(&self) -> f32 {
        2.0 * (self.width() + self.height())
    }
}
