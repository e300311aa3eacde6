// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Sutherland–Hodgman polygon clipping.
//!
//! The subject is clipped successively against every edge of the clip
//! polygon. The clip polygon must be convex and counter-clockwise; the subject
//! may be any simple polygon. The output can be empty (no overlap) or
//! degenerate (fewer than three points, or zero area); callers filter with
//! [`is_degenerate`] or a minimum-area threshold.

use tracing::trace;

use crate::math::Vec2;
use crate::types::polygon::polygon_area;

/// `p` lies on the inner (left) side of the directed edge `a -> b`, or on it.
fn inside(p: &Vec2, a: &Vec2, b: &Vec2) -> bool {
    b.sub(a).cross(&p.sub(a)) >= 0.0
}

/// Intersection of the infinite lines through `cp1-cp2` and `s-e`.
///
/// Parallel lines have no intersection; the origin is returned in that case.
/// Reachable only through rounding noise on near-collinear edges.
fn line_intersection(cp1: &Vec2, cp2: &Vec2, s: &Vec2, e: &Vec2) -> Vec2 {
    let dc = cp1.sub(cp2);
    let dp = s.sub(e);
    let n1 = cp1.cross(cp2);
    let n2 = s.cross(e);
    let n3 = dc.cross(&dp);
    if n3 == 0.0 {
        trace!(?cp1, ?cp2, ?s, ?e, "parallel clip edge; emitting origin");
        return Vec2::ZERO;
    }
    Vec2::new(
        (n1 * dp.x() - n2 * dc.x()) / n3,
        (n1 * dp.y() - n2 * dc.y()) / n3,
    )
}

/// Clips `subject` against the convex, counter-clockwise `clip` polygon.
///
/// Returns the vertices of the overlap region, or an empty vector when the
/// polygons do not overlap.
pub fn compute_intersection(subject: &[Vec2], clip: &[Vec2]) -> Vec<Vec2> {
    let mut output = subject.to_vec();
    let n = clip.len();
    for (i, &cp1) in clip.iter().enumerate() {
        if output.is_empty() {
            break;
        }
        let cp2 = clip[(i + 1) % n];
        let input = std::mem::take(&mut output);
        let Some(mut s) = input.last().copied() else {
            break;
        };
        for e in input {
            if inside(&e, &cp1, &cp2) {
                if !inside(&s, &cp1, &cp2) {
                    output.push(line_intersection(&cp1, &cp2, &s, &e));
                }
                output.push(e);
            } else if inside(&s, &cp1, &cp2) {
                output.push(line_intersection(&cp1, &cp2, &s, &e));
            }
            s = e;
        }
    }
    output
}

/// `true` when `region` cannot be drawn as a polygon: fewer than three
/// vertices or an area of at most `min_area`.
pub fn is_degenerate(region: &[Vec2], min_area: f32) -> bool {
    region.len() < 3 || polygon_area(region) <= min_area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_is_left_of_edge_inclusive() {
        let (a, b) = (Vec2::ZERO, Vec2::UNIT_X);
        assert!(inside(&Vec2::new(0.5, 1.0), &a, &b));
        assert!(inside(&Vec2::new(0.5, 0.0), &a, &b));
        assert!(!inside(&Vec2::new(0.5, -1.0), &a, &b));
    }

    #[test]
    fn crossing_lines_meet() {
        let p = line_intersection(
            &Vec2::new(0.0, 0.0),
            &Vec2::new(2.0, 2.0),
            &Vec2::new(0.0, 2.0),
            &Vec2::new(2.0, 0.0),
        );
        assert!((p.x() - 1.0).abs() < 1e-6 && (p.y() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn parallel_lines_yield_origin() {
        let p = line_intersection(
            &Vec2::new(1.0, 1.0),
            &Vec2::new(3.0, 1.0),
            &Vec2::new(1.0, 2.0),
            &Vec2::new(3.0, 2.0),
        );
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn empty_inputs() {
        let tri = [Vec2::ZERO, Vec2::UNIT_X, Vec2::UNIT_Y];
        assert!(compute_intersection(&[], &tri).is_empty());
        // No clip edges means nothing is clipped away.
        assert_eq!(compute_intersection(&tri, &[]), tri.to_vec());
    }

    #[test]
    fn degeneracy() {
        let tri = [Vec2::ZERO, Vec2::UNIT_X, Vec2::UNIT_Y];
        assert!(!is_degenerate(&tri, 0.0));
        assert!(is_degenerate(&tri, 1.0));
        assert!(is_degenerate(&tri[..2], 0.0));
        let sliver = [Vec2::ZERO, Vec2::UNIT_X, Vec2::new(2.0, 0.0)];
        assert!(is_degenerate(&sliver, 0.0));
    }
}
