//! The partition arena and the pass-driven generator.

use rand::Rng;

use super::split::{choose_split, split_chance};
use super::types::{NodeId, Params, PartitionNode, MAX_NODES};
use crate::rect::Rect;

/// Arena of partition nodes, grown level by level from a single root.
///
/// Nodes link parent and children by index and the arena only ever appends,
/// so ids stay stable and a child's id is always greater than its parent's.
/// After [`generate`](Self::generate) the tree is read-only.
#[derive(Clone, Debug)]
pub struct PartitionTree {
    nodes: Vec<PartitionNode>,
    params: Params,
}

impl PartitionTree {
    /// Seed a tree with a root covering `bounds`.
    ///
    /// Panics when `bounds` is invalid or `params` is out of range; both are
    /// configuration bugs in the caller, not runtime conditions.
    pub fn new(bounds: Rect, params: Params) -> Self {
        assert!(
            bounds.is_valid(),
            "partition bounds must have positive extent"
        );
        params.assert_valid();
        let root = PartitionNode {
            bounds,
            parent: NodeId(0),
            first_child: None,
        };
        Self {
            nodes: vec![root],
            params,
        }
    }

    /// Seed a tree with the default layout limits.
    pub fn with_defaults(bounds: Rect) -> Self {
        Self::new(bounds, Params::default())
    }

    /// Subdivide until no rectangle splits any further, then hand every leaf
    /// to `room` once, in node order.
    ///
    /// The random stream is consumed in a fixed order: per node in array
    /// order, the gate draw (skipped for the root, which always attempts)
    /// and then the chooser's draws, with children appended before the next
    /// node is visited. Equal seeds therefore replay to identical trees and
    /// identical callback sequences.
    pub fn generate<R: Rng>(&mut self, rng: &mut R, mut room: impl FnMut(Rect)) {
        assert!(
            self.nodes.len() == 1,
            "generate may only run once per tree"
        );
        let mut first = 0;
        let mut last = self.nodes.len();
        'passes: while first < last {
            for index in first..last {
                if self.nodes.len() + 2 > MAX_NODES {
                    break 'passes;
                }
                let bounds = self.nodes[index].bounds;
                if index != 0 && rng.gen::<f64>() >= split_chance(bounds, &self.params) {
                    continue;
                }
                if let Some((a, b)) = choose_split(bounds, &self.params, rng) {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(PartitionNode {
                        bounds: a,
                        parent: NodeId(index),
                        first_child: None,
                    });
                    self.nodes.push(PartitionNode {
                        bounds: b,
                        parent: NodeId(index),
                        first_child: None,
                    });
                    self.nodes[index].first_child = Some(child);
                }
            }
            first = last;
            last = self.nodes.len();
        }
        for node in &self.nodes {
            if node.is_leaf() {
                room(node.bounds);
            }
        }
    }

    /// The limits this tree was built with.
    #[inline]
    pub fn params(&self) -> Params {
        self.params
    }

    /// The root rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.nodes[0].bounds
    }

    #[inline]
    pub fn nodes(&self) -> &[PartitionNode] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &PartitionNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of the two children of `id`, if it has any.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        self.nodes[id.0]
            .first_child
            .map(|first| (first, NodeId(first.0 + 1)))
    }

    /// Leaf rectangles in node order.
    pub fn leaves(&self) -> impl Iterator<Item = Rect> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.is_leaf())
            .map(|node| node.bounds)
    }
}
