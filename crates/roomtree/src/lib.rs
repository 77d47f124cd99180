//! Recursive room partitioning for procedurally generated level maps.
//!
//! The crate owns one algorithm: subdividing a bounded rectangle into a
//! binary tree of progressively smaller rectangles whose leaves become
//! rooms. Split direction, split offsets, and recursion depth are all driven
//! by a caller-supplied random source, so identical seeds replay to
//! byte-identical layouts.
//!
//! What goes *inside* a leaf is the caller's business: `generate` hands every
//! leaf rectangle to a callback and never looks at it again.

pub mod partition;
pub mod rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use partition::{Params, PartitionTree};
pub use rect::{AspectLimit, Rect};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::partition::{
        choose_split, classify, classify_with_aspect, split_chance, NodeId, Params, PartitionNode,
        PartitionTree, SplitKind, SplitRange,
    };
    pub use crate::rect::{AspectLimit, Rect};
}
