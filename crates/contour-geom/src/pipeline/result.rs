// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::{BTreeMap, BTreeSet};

use crate::math::Vec2;
use crate::types::polygon::polygon_area;

/// Unordered pair of shape identities.
///
/// Stored canonically with the smaller identity first, so
/// `Pair::new(a, b) == Pair::new(b, a)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<Id> {
    first: Id,
    second: Id,
}

impl<Id: Ord> Pair<Id> {
    /// Builds the canonical pair for `a` and `b`.
    pub fn new(a: Id, b: Id) -> Self {
        if b < a {
            Self { first: b, second: a }
        } else {
            Self { first: a, second: b }
        }
    }
}

impl<Id: Copy + PartialEq> Pair<Id> {
    /// Smaller identity.
    pub fn first(&self) -> Id {
        self.first
    }

    /// Larger identity.
    pub fn second(&self) -> Id {
        self.second
    }

    /// `true` when `id` is one of the two members.
    pub fn contains(&self, id: Id) -> bool {
        self.first == id || self.second == id
    }

    /// The member that is not `id`, or `None` if `id` is not in the pair.
    pub fn other(&self, id: Id) -> Option<Id> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Per-tick counters describing how much work each stage did.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStats {
    /// Snapshots handed to the tick.
    pub shapes: usize,
    /// Snapshots dropped for missing or unusable transform/geometry.
    pub skipped: usize,
    /// Pairs produced by the broad phase.
    pub candidates: usize,
    /// Candidates the separating-axis test rejected.
    pub sat_rejections: usize,
    /// Pairs confirmed overlapping.
    pub collisions: usize,
    /// Collisions with a non-degenerate intersection region.
    pub regions: usize,
}

/// Outcome of one tick: overlapping pairs and their intersection regions.
///
/// Built fresh by every call to [`crate::pipeline::update`]; nothing from an
/// earlier tick survives into a later one.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult<Id> {
    pub(crate) pairs: BTreeSet<Pair<Id>>,
    pub(crate) regions: BTreeMap<Pair<Id>, Vec<Vec2>>,
    pub(crate) stats: TickStats,
}

impl<Id> Default for CollisionResult<Id> {
    fn default() -> Self {
        Self {
            pairs: BTreeSet::new(),
            regions: BTreeMap::new(),
            stats: TickStats::default(),
        }
    }
}

impl<Id: Copy + Ord> CollisionResult<Id> {
    /// Overlapping pairs in canonical order.
    pub fn pairs(&self) -> impl Iterator<Item = &Pair<Id>> + '_ {
        self.pairs.iter()
    }

    /// Number of overlapping pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when nothing overlaps.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `true` if `a` and `b` overlap (order-insensitive).
    pub fn is_colliding(&self, a: Id, b: Id) -> bool {
        self.pairs.contains(&Pair::new(a, b))
    }

    /// Intersection region of `a` and `b`, if they overlap with non-zero area.
    pub fn intersection(&self, a: Id, b: Id) -> Option<&[Vec2]> {
        self.regions.get(&Pair::new(a, b)).map(Vec::as_slice)
    }

    /// Every recorded intersection region.
    pub fn intersections(&self) -> impl Iterator<Item = (&Pair<Id>, &[Vec2])> + '_ {
        self.regions.iter().map(|(p, r)| (p, r.as_slice()))
    }

    /// Regions whose area is at least `min_area`, with that area.
    pub fn regions_above(
        &self,
        min_area: f32,
    ) -> impl Iterator<Item = (&Pair<Id>, &[Vec2], f32)> + '_ {
        self.intersections().filter_map(move |(pair, region)| {
            let area = polygon_area(region);
            (area >= min_area).then_some((pair, region, area))
        })
    }

    /// Identities overlapping `id`, ascending.
    pub fn partners(&self, id: Id) -> Vec<Id> {
        let mut out: Vec<Id> = self.pairs.iter().filter_map(|p| p.other(id)).collect();
        out.sort_unstable();
        out
    }

    /// Stage counters for this tick.
    pub fn stats(&self) -> TickStats {
        self.stats
    }
}
