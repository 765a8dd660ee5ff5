//! An incremental, pointer-based 2d-tree over planar points.
//!
//! Each node owns a point, the axis-aligned rectangle assigned to its subtree,
//! and two child slots partitioned on an axis that alternates with depth. The
//! rectangles drive subtree pruning in [`KdTree2D::range`] and
//! [`KdTree2D::nearest`].

#![warn(missing_docs)]

mod index;
mod node;
mod traversal;

pub use index::KdTree2D;
pub use traversal::{Points, Split, Splits};
