//! Recursive constrained-rectangle partitioning.
//!
//! Purpose
//! - Subdivide a bounded rectangle into a binary tree of rooms-to-be, driven
//!   by hard size limits, an aspect-ratio bound, and a seeded random stream.
//!
//! Why this design
//! - Axis classification and direction choice carry nearly all of the
//!   edge-case density, so they live in their own small modules (`range`,
//!   `split`), with the sixteen direction cases laid out as a data table
//!   rather than nested conditionals.
//! - The arena (`tree`) links nodes by index to keep the ownership graph
//!   acyclic and node ids stable while the array grows level by level.
//!
//! Code cross-refs: `rect::{Rect, AspectLimit}`.

mod range;
mod split;
mod tree;
mod types;

pub use range::{classify, classify_with_aspect};
pub use split::{choose_split, split_chance};
pub use tree::PartitionTree;
pub use types::{NodeId, Params, PartitionNode, SplitKind, SplitRange};
