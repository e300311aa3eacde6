// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::BroadPhase;
use crate::types::aabb::Aabb;

/// Broad phase that tests every pair of proxies.
///
/// Serves as the correctness baseline for [`super::Bvh`] in tests and as the
/// reference point in benchmarks. Pairs come out in insertion order:
/// `(earlier, later)`.
#[derive(Debug, Clone)]
pub struct AllPairs<Id> {
    items: Vec<(Id, Aabb)>,
}

impl<Id> Default for AllPairs<Id> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<Id> AllPairs<Id> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Id: Copy> BroadPhase<Id> for AllPairs<Id> {
    fn insert(&mut self, id: Id, aabb: Aabb) {
        self.items.push((id, aabb));
    }

    fn candidate_pairs(&self) -> Vec<(Id, Id)> {
        let mut out = Vec::new();
        for (i, (a_id, a_bb)) in self.items.iter().enumerate() {
            for (b_id, b_bb) in self.items.iter().skip(i + 1) {
                if a_bb.intersects(b_bb) {
                    out.push((*a_id, *b_id));
                }
            }
        }
        out
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn reports_in_insertion_order() {
        let mut bp = AllPairs::new();
        bp.insert(7_u32, Aabb::from_center_half_extents(Vec2::ZERO, 1.0, 1.0));
        bp.insert(3, Aabb::from_center_half_extents(Vec2::new(1.5, 0.0), 1.0, 1.0));
        bp.insert(9, Aabb::from_center_half_extents(Vec2::new(50.0, 0.0), 1.0, 1.0));
        assert_eq!(bp.candidate_pairs(), vec![(7, 3)]);
        assert_eq!(bp.len(), 3);
    }
}
