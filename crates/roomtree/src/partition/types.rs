//! Data types for the partition arena and split decisions.
//!
//! Kept small and explicit to make the `range`, `split`, and `tree` modules
//! easy to read.

use crate::rect::{AspectLimit, Rect};

/// Index of a node inside a [`PartitionTree`](super::PartitionTree) arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// One rectangle in the partition arena.
///
/// Children, when present, are exactly two and stored contiguously at
/// `[first_child, first_child + 1]`, both with an id greater than their
/// parent's. The root is its own parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionNode {
    pub bounds: Rect,
    pub parent: NodeId,
    pub first_child: Option<NodeId>,
}

impl PartitionNode {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}

/// How an axis of a rectangle may be divided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplitKind {
    /// Too short to divide at all.
    None,
    /// Divisible only at a narrowed fallback offset.
    Degenerate,
    /// Freely divisible anywhere inside the offset interval.
    Can,
    /// Longer than the configured maximum; division is mandatory.
    Must,
}

/// Classification of one axis: a kind plus an inclusive offset interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitRange {
    pub kind: SplitKind,
    pub lo: i32,
    pub hi: i32,
}

impl SplitRange {
    #[inline]
    pub(crate) fn new(kind: SplitKind, lo: i32, hi: i32) -> Self {
        Self { kind, lo, hi }
    }
}

/// Tunable limits for one generation run. Immutable once the tree is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Maximum tolerated long:short ratio for freshly cut children.
    pub aspect: AspectLimit,
    /// Hard minimum width of any child created by a split.
    pub min_width: i32,
    /// Hard minimum height of any child created by a split.
    pub min_height: i32,
    /// Edge length beyond which a split becomes mandatory.
    pub max_edge: i32,
    /// Floor of the split-attempt probability for the smallest rectangles.
    pub min_split_chance: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            aspect: AspectLimit::default(),
            min_width: 5,
            min_height: 5,
            max_edge: 25,
            min_split_chance: 0.1,
        }
    }
}

impl Params {
    /// Panics on out-of-range limits; invalid `Params` are configuration
    /// bugs, not runtime conditions.
    pub(crate) fn assert_valid(&self) {
        assert!(self.min_width > 0, "min_width must be positive");
        assert!(self.min_height > 0, "min_height must be positive");
        assert!(
            self.max_edge >= self.min_width.min(self.min_height),
            "max_edge must be at least the smaller minimum"
        );
        assert!(
            (0.0..=1.0).contains(&self.min_split_chance),
            "min_split_chance must lie in [0, 1]"
        );
    }
}

/// Hard ceiling on arena growth. Pathological limits stop here instead of
/// exhausting memory; realistic inputs stay orders of magnitude below it.
pub(crate) const MAX_NODES: usize = 1 << 16;
