// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::error::GeomError;
use crate::math::{Vec2, EPSILON};
use crate::types::aabb::Aabb;
use crate::types::transform::Transform2;

/// Informational shape category carried alongside a polygon.
///
/// Never consulted by the collision algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ShapeKind {
    /// Regular 3-gon.
    Triangle,
    /// Regular 4-gon.
    Square,
    /// Regular 5-gon.
    Pentagon,
    /// Regular 6-gon.
    Hexagon,
    /// Arbitrary convex vertex list.
    #[default]
    Custom,
}

impl ShapeKind {
    /// Regular kinds, in side-count order.
    pub const REGULAR: [Self; 4] = [Self::Triangle, Self::Square, Self::Pentagon, Self::Hexagon];

    /// Number of sides for regular kinds; `None` for [`ShapeKind::Custom`].
    pub const fn sides(self) -> Option<usize> {
        match self {
            Self::Triangle => Some(3),
            Self::Square => Some(4),
            Self::Pentagon => Some(5),
            Self::Hexagon => Some(6),
            Self::Custom => None,
        }
    }

    /// Kind tag for a regular polygon with `sides` sides.
    pub const fn from_sides(sides: usize) -> Self {
        match sides {
            3 => Self::Triangle,
            4 => Self::Square,
            5 => Self::Pentagon,
            6 => Self::Hexagon,
            _ => Self::Custom,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Convex polygon in local space.
///
/// Invariants enforced at construction:
/// - at least three vertices;
/// - every vertex and the offset are finite.
///
/// Convexity and counter-clockwise winding are preconditions of the narrow
/// phase and the clipper. They are not enforced; see [`ConvexPolygon::is_convex`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PolygonRepr", into = "PolygonRepr")
)]
pub struct ConvexPolygon {
    vertices: Vec<Vec2>,
    offset: Vec2,
    kind: ShapeKind,
}

impl ConvexPolygon {
    /// Builds a polygon from local vertices.
    pub fn new(vertices: Vec<Vec2>, kind: ShapeKind) -> Result<Self, GeomError> {
        if vertices.len() < 3 {
            return Err(GeomError::TooFewVertices(vertices.len()));
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeomError::NonFiniteVertex { index });
        }
        Ok(Self {
            vertices,
            offset: Vec2::ZERO,
            kind,
        })
    }

    /// Replaces the local offset applied after rotation.
    pub fn with_offset(mut self, offset: Vec2) -> Result<Self, GeomError> {
        if !offset.is_finite() {
            return Err(GeomError::NonFiniteVertex {
                index: self.vertices.len(),
            });
        }
        self.offset = offset;
        Ok(self)
    }

    /// Local-space vertices.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Local offset from the owning transform's position.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Category tag.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// `true` when the vertex list really is convex.
    pub fn is_convex(&self) -> bool {
        is_convex(&self.vertices)
    }

    /// Local-space area (scale not applied).
    pub fn area(&self) -> f32 {
        polygon_area(&self.vertices)
    }

    /// Largest distance from the local origin to any vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(Vec2::length)
            .fold(0.0_f32, f32::max)
    }

    /// World-space vertices under `transform` (scale, rotate, offset, translate).
    pub fn to_world(&self, transform: &Transform2) -> Vec<Vec2> {
        self.vertices
            .iter()
            .map(|v| transform.apply(*v, self.offset))
            .collect()
    }

    /// Broad-phase bounds under `transform`, ignoring rotation.
    ///
    /// Returns `None` when the transform produces non-finite coordinates.
    pub fn world_bounds(&self, transform: &Transform2) -> Option<Aabb> {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for v in &self.vertices {
            let w = transform.apply_unrotated(*v, self.offset);
            if !w.is_finite() {
                return None;
            }
            min = min.min(&w);
            max = max.max(&w);
        }
        Aabb::try_new(min, max).ok()
    }
}

/// Signed shoelace area; positive for counter-clockwise winding.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| points[i].cross(&points[(i + 1) % n]))
        .sum();
    twice * 0.5
}

/// Absolute polygon area. Fewer than three points yields `0.0`.
pub fn polygon_area(points: &[Vec2]) -> f32 {
    signed_area(points).abs()
}

/// `true` when the points wind counter-clockwise (positive signed area).
pub fn is_counter_clockwise(points: &[Vec2]) -> bool {
    signed_area(points) > 0.0
}

/// `true` when every turn has the same orientation (collinear turns allowed).
pub fn is_convex(points: &[Vec2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f32;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = b.sub(a).cross(&c.sub(&b));
        if turn.abs() <= EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    true
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct PolygonRepr {
    vertices: Vec<Vec2>,
    #[serde(default)]
    offset: Vec2,
    #[serde(default)]
    kind: ShapeKind,
}

#[cfg(feature = "serde")]
impl TryFrom<PolygonRepr> for ConvexPolygon {
    type Error = GeomError;

    fn try_from(repr: PolygonRepr) -> Result<Self, Self::Error> {
        Self::new(repr.vertices, repr.kind)?.with_offset(repr.offset)
    }
}

#[cfg(feature = "serde")]
impl From<ConvexPolygon> for PolygonRepr {
    fn from(poly: ConvexPolygon) -> Self {
        Self {
            vertices: poly.vertices,
            offset: poly.offset,
            kind: poly.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ]
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(
            ConvexPolygon::new(vec![Vec2::ZERO, Vec2::UNIT_X], ShapeKind::Custom),
            Err(GeomError::TooFewVertices(2))
        );
        let mut verts = unit_square();
        verts[2] = Vec2::new(f32::NAN, 0.5);
        assert_eq!(
            ConvexPolygon::new(verts, ShapeKind::Square),
            Err(GeomError::NonFiniteVertex { index: 2 })
        );
    }

    #[test]
    fn area_and_winding() {
        let sq = unit_square();
        assert!((polygon_area(&sq) - 1.0).abs() < 1e-6);
        assert!(is_counter_clockwise(&sq));
        let cw: Vec<Vec2> = sq.iter().rev().copied().collect();
        assert!(!is_counter_clockwise(&cw));
        assert!((polygon_area(&cw) - 1.0).abs() < 1e-6);
        assert_eq!(polygon_area(&sq[..2]), 0.0);
    }

    #[test]
    fn convexity_check() {
        assert!(is_convex(&unit_square()));
        let dart = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(0.5, 1.0),
        ];
        assert!(!is_convex(&dart));
    }

    #[test]
    fn world_bounds_skip_rotation() {
        let poly = ConvexPolygon::new(unit_square(), ShapeKind::Square)
            .and_then(|p| p.with_offset(Vec2::new(1.0, 0.0)));
        let Ok(poly) = poly else {
            unreachable!("valid square")
        };
        let t = Transform2::new(Vec2::new(10.0, 10.0), 45.0, 2.0);
        let bb = poly.world_bounds(&t).map(|b| (b.min().to_array(), b.max().to_array()));
        assert_eq!(bb, Some(([10.0, 9.0], [12.0, 11.0])));
    }

    #[test]
    fn kind_sides_round_trip() {
        for kind in ShapeKind::REGULAR {
            assert_eq!(kind.sides().map(ShapeKind::from_sides), Some(kind));
        }
        assert_eq!(ShapeKind::from_sides(9), ShapeKind::Custom);
        assert_eq!(ShapeKind::Hexagon.to_string(), "hexagon");
    }
}
