// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::BroadPhase;
use crate::types::aabb::Aabb;

type NodeIndex = usize;

#[derive(Debug, Clone, Copy)]
enum Node<Id> {
    Leaf {
        aabb: Aabb,
        id: Id,
    },
    /// `aabb` always equals the union of both children's boxes.
    Internal {
        aabb: Aabb,
        left: NodeIndex,
        right: NodeIndex,
    },
}

impl<Id> Node<Id> {
    fn aabb(&self) -> &Aabb {
        match self {
            Self::Leaf { aabb, .. } | Self::Internal { aabb, .. } => aabb,
        }
    }
}

/// Binary AABB hierarchy built by greedy insertion.
///
/// Nodes live in an arena and refer to their children by index; there are no
/// parent links because every traversal is top-down.
///
/// Insertion descends from the root. A leaf is split into an internal node
/// holding the old leaf (left) and the new one (right). An internal node grows
/// its box and forwards the insert to the child whose perimeter would grow
/// least; ties go left. There is no rebalancing, so depth depends on insertion
/// order and degrades to linear in adversarial cases.
///
/// The tree is meant to be rebuilt every tick and dropped afterwards.
#[derive(Debug, Clone)]
pub struct Bvh<Id> {
    nodes: Vec<Node<Id>>,
    root: Option<NodeIndex>,
    leaves: usize,
}

impl<Id> Default for Bvh<Id> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            leaves: 0,
        }
    }
}

impl<Id: Copy> Bvh<Id> {
    /// Creates an empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty hierarchy with room for `leaves` proxies.
    #[must_use]
    pub fn with_capacity(leaves: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(leaves.saturating_mul(2)),
            root: None,
            leaves: 0,
        }
    }

    /// Box enclosing every inserted proxy, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.root.map(|r| *self.nodes[r].aabb())
    }

    /// Total node count (leaves plus internal nodes).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeIndex, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, d)) = stack.pop() {
            deepest = deepest.max(d);
            if let Node::Internal { left, right, .. } = self.nodes[idx] {
                stack.push((left, d + 1));
                stack.push((right, d + 1));
            }
        }
        deepest
    }

    fn push(&mut self, node: Node<Id>) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn perimeter_increase(node: &Aabb, incoming: &Aabb) -> f32 {
        node.union(incoming).perimeter() - node.perimeter()
    }

    fn insert_leaf(&mut self, id: Id, aabb: Aabb) {
        self.leaves += 1;
        let Some(mut current) = self.root else {
            self.root = Some(self.push(Node::Leaf { aabb, id }));
            return;
        };
        loop {
            let node = self.nodes[current];
            match node {
                Node::Leaf {
                    aabb: old_box,
                    id: old_id,
                } => {
                    let left = self.push(Node::Leaf {
                        aabb: old_box,
                        id: old_id,
                    });
                    let right = self.push(Node::Leaf { aabb, id });
                    self.nodes[current] = Node::Internal {
                        aabb: old_box.union(&aabb),
                        left,
                        right,
                    };
                    return;
                }
                Node::Internal {
                    aabb: mut grown,
                    left,
                    right,
                } => {
                    grown.grow(&aabb);
                    self.nodes[current] = Node::Internal {
                        aabb: grown,
                        left,
                        right,
                    };
                    let cost_left = Self::perimeter_increase(self.nodes[left].aabb(), &aabb);
                    let cost_right = Self::perimeter_increase(self.nodes[right].aabb(), &aabb);
                    current = if cost_left <= cost_right { left } else { right };
                }
            }
        }
    }

    /// Appends every overlapping leaf pair with one leaf under `a` and the
    /// other under `b`.
    fn collect_cross(&self, a: NodeIndex, b: NodeIndex, out: &mut Vec<(Id, Id)>) {
        let mut work = vec![(a, b)];
        while let Some((a, b)) = work.pop() {
            let (na, nb) = (&self.nodes[a], &self.nodes[b]);
            if !na.aabb().intersects(nb.aabb()) {
                continue;
            }
            match (*na, *nb) {
                (Node::Leaf { id: ia, .. }, Node::Leaf { id: ib, .. }) => out.push((ia, ib)),
                (Node::Leaf { .. }, Node::Internal { left, right, .. }) => {
                    work.push((a, right));
                    work.push((a, left));
                }
                (Node::Internal { left, right, .. }, Node::Leaf { .. }) => {
                    work.push((right, b));
                    work.push((left, b));
                }
                (
                    Node::Internal {
                        left: al,
                        right: ar,
                        ..
                    },
                    Node::Internal {
                        left: bl,
                        right: br,
                        ..
                    },
                ) => {
                    work.push((ar, br));
                    work.push((ar, bl));
                    work.push((al, br));
                    work.push((al, bl));
                }
            }
        }
    }

    fn query(&self) -> Vec<(Id, Id)> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeIndex> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            if let Node::Internal { left, right, .. } = self.nodes[idx] {
                // Pairs straddling the split, then pairs inside each side.
                self.collect_cross(left, right, &mut out);
                stack.push(right);
                stack.push(left);
            }
        }
        out
    }
}

impl<Id: Copy> BroadPhase<Id> for Bvh<Id> {
    fn insert(&mut self, id: Id, aabb: Aabb) {
        self.insert_leaf(id, aabb);
    }

    fn candidate_pairs(&self) -> Vec<(Id, Id)> {
        self.query()
    }

    fn len(&self) -> usize {
        self.leaves
    }
}
