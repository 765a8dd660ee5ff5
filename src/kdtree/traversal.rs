//! Iterators over the stored points and splitting lines.
//!
//! These give external consumers (plotting, exporting, rebuilding) a full view
//! of the tree's contents without exposing its node structure.

use crate::geom::{Axis, AxisRect, Point};
use crate::kdtree::node::PointNode;
use crate::kdtree::KdTree2D;
use crate::r#type::CoordNum;

impl<N: CoordNum> KdTree2D<N> {
    /// Iterate over every stored point, in pre-order.
    pub fn points(&self) -> Points<'_, N> {
        Points {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Iterate over the splitting line each node contributes, in pre-order.
    ///
    /// Every node splits its rectangle along the line through its point on its
    /// active axis; a plot of all splits plus all points reproduces the
    /// recursive partition of the domain.
    pub fn splits(&self) -> Splits<'_, N> {
        Splits {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }
}

/// Pre-order iterator over the points of a [`KdTree2D`].
///
/// Created by [`KdTree2D::points`].
#[derive(Debug)]
pub struct Points<'a, N: CoordNum> {
    stack: Vec<&'a PointNode<N>>,
}

impl<N: CoordNum> Iterator for Points<'_, N> {
    type Item = Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right is pushed first so the left subtree is drained before it.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node.point)
    }
}

/// The splitting line contributed by one node of a [`KdTree2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split<N: CoordNum> {
    /// The axis the node splits on: the line is perpendicular to this axis'
    /// partition direction, i.e. vertical for [`Axis::X`].
    pub axis: Axis,
    /// The node's point; the splitting line passes through it.
    pub at: Point<N>,
    /// The rectangle the node's subtree owns; the line spans it.
    pub bounds: AxisRect<N>,
}

impl<N: CoordNum> Split<N> {
    /// The two endpoints of the splitting line segment within `bounds`.
    pub fn endpoints(&self) -> (Point<N>, Point<N>) {
        match self.axis {
            Axis::X => (
                Point::new(self.at.x(), self.bounds.min_y()),
                Point::new(self.at.x(), self.bounds.max_y()),
            ),
            Axis::Y => (
                Point::new(self.bounds.min_x(), self.at.y()),
                Point::new(self.bounds.max_x(), self.at.y()),
            ),
        }
    }
}

/// Pre-order iterator over the splitting lines of a [`KdTree2D`].
///
/// Created by [`KdTree2D::splits`].
#[derive(Debug)]
pub struct Splits<'a, N: CoordNum> {
    stack: Vec<&'a PointNode<N>>,
}

impl<N: CoordNum> Iterator for Splits<'_, N> {
    type Item = Split<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(Split {
            axis: node.axis,
            at: node.point,
            bounds: node.rect,
        })
    }
}
