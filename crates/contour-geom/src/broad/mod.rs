// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase interfaces and implementations.
//!
//! Contract shared by every implementation:
//! - Each overlapping pair of inserted boxes is reported exactly once.
//! - A proxy is never paired with itself.
//! - Overlap is inclusive on edges (touching boxes pair).
//! - Pair orientation is unspecified; `(a, b)` and `(b, a)` mean the same
//!   candidate. Callers that need a canonical form sort or normalise.
//!
//! Structures are built from scratch every tick and dropped afterwards.

use crate::types::aabb::Aabb;

#[doc = "Exhaustive O(n^2) reference implementation."]
pub mod all_pairs;
#[doc = "Greedy, insertion-built bounding volume hierarchy."]
pub mod bvh;

pub use all_pairs::AllPairs;
pub use bvh::Bvh;

/// Broad-phase interface for inserting proxies and querying overlapping pairs.
pub trait BroadPhase<Id> {
    /// Inserts a proxy with the given `id` and world-space `aabb`.
    fn insert(&mut self, id: Id, aabb: Aabb);
    /// Returns every pair of proxies whose boxes overlap.
    fn candidate_pairs(&self) -> Vec<(Id, Id)>;
    /// Number of inserted proxies.
    fn len(&self) -> usize;
    /// `true` when nothing has been inserted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
