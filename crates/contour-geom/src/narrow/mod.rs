// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Narrow phase: separating-axis test for convex polygons.
//!
//! Candidate axes are the normalised edge normals of both polygons. Two
//! convex polygons are disjoint iff their projections fail to overlap on at
//! least one of those axes. Touching projections count as overlap.
//!
//! Preconditions: both inputs are convex, world-space vertex loops. The
//! result for concave input is unspecified. A zero-length edge contributes a
//! zero axis, on which every projection is `0` and nothing separates.

use crate::math::Vec2;

/// Normalised perpendicular of every edge `(v[i], v[i+1 mod n])`.
fn edge_axes(poly: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .map(|(a, b)| b.sub(a).perpendicular().normalize())
}

/// Projection interval `(min, max)` of `poly` onto `axis`.
///
/// An empty polygon yields the inverted interval `(+inf, -inf)`.
pub fn project(poly: &[Vec2], axis: &Vec2) -> (f32, f32) {
    poly.iter()
        .map(|v| v.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
}

/// `true` when some edge normal of `a` or `b` separates the two polygons.
fn separated_on_any(a: &[Vec2], b: &[Vec2]) -> bool {
    edge_axes(a).chain(edge_axes(b)).any(|axis| {
        let (min_a, max_a) = project(a, &axis);
        let (min_b, max_b) = project(b, &axis);
        max_a < min_b || max_b < min_a
    })
}

/// Returns `true` if the convex polygons `a` and `b` overlap.
///
/// Symmetric: `check_collision(a, b) == check_collision(b, a)`. An empty
/// polygon collides with nothing.
pub fn check_collision(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    !separated_on_any(a, b)
}
