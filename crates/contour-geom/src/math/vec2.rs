// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::EPSILON;

/// Planar vector used for points, directions and offsets.
///
/// * Components are `f32` world (or local) units; callers must keep them finite.
/// * Value semantics: every operation returns a new vector.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 2]", into = "[f32; 2]")
)]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector (also the local origin).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Scalar (z-component) cross product `self × other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// Degenerate inputs (e.g. a zero-length polygon edge) therefore yield the
    /// zero vector rather than NaNs.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Rotates the vector 90° counter-clockwise: `(x, y) -> (-y, x)`.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Rotates the vector by `radians` counter-clockwise about the origin.
    pub fn rotate(&self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// `true` when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

/// Converts a `[x, y]` array into a `Vec2`.
///
/// # Examples
/// ```
/// use contour_geom::math::Vec2;
/// let v = Vec2::from([1.0, 2.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0]);
/// ```
impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}
