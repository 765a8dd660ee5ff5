use crate::geom::{Axis, AxisRect, Point};
use crate::r#type::CoordNum;

/// A node of the 2d-tree: one stored point, the rectangle its subtree owns,
/// and the axis its children are partitioned on.
///
/// Children are exclusively owned by their parent, so the whole structure is
/// an acyclic ownership tree and drops recursively without any cycle breaking.
#[derive(Debug, Clone)]
pub(crate) struct PointNode<N: CoordNum> {
    pub(crate) point: Point<N>,
    pub(crate) rect: AxisRect<N>,
    pub(crate) axis: Axis,
    pub(crate) left: Option<Box<PointNode<N>>>,
    pub(crate) right: Option<Box<PointNode<N>>>,
}

impl<N: CoordNum> PointNode<N> {
    pub(crate) fn new(point: Point<N>, rect: AxisRect<N>, axis: Axis) -> Self {
        Self {
            point,
            rect,
            axis,
            left: None,
            right: None,
        }
    }

    /// Whether `point` routes into the left child: at or below this node's
    /// coordinate on the active axis. Insertion, containment, and pruning all
    /// share this rule, so a point stored on a splitting line is found on the
    /// same side it was inserted on.
    #[inline]
    pub(crate) fn routes_left(&self, point: &Point<N>) -> bool {
        self.axis.select(point) <= self.axis.select(&self.point)
    }

    /// The rectangle owned by the child in the given slot: this node's
    /// rectangle bisected at its point along the active axis.
    #[inline]
    pub(crate) fn child_rect(&self, left: bool) -> AxisRect<N> {
        let (low, high) = self.rect.bisect(self.axis, &self.point);
        if left {
            low
        } else {
            high
        }
    }
}
