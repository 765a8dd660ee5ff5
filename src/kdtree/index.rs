use geo_traits::{CoordTrait, RectTrait};

use crate::error::PlanarIndexError;
use crate::geom::{Axis, AxisRect, Point};
use crate::kdtree::node::PointNode;
use crate::r#type::CoordNum;

/// An incremental 2d-tree spatial index over planar points.
///
/// Points are inserted one at a time; there is no build phase, no deletion,
/// and no rebalancing, so adversarial insertion orders (e.g. pre-sorted input)
/// can produce linear depth. Every operation runs synchronously on the
/// caller's thread.
///
/// Duplicate points (by coordinate equality) are silently ignored.
#[derive(Debug, Clone)]
pub struct KdTree2D<N: CoordNum> {
    pub(crate) root: Option<Box<PointNode<N>>>,
    len: usize,
    bounds: AxisRect<N>,
}

impl<N: CoordNum> KdTree2D<N> {
    /// Construct an empty index over the unit square.
    pub fn new() -> Self {
        Self::with_bounds(AxisRect::unit())
    }

    /// Construct an empty index over an arbitrary domain rectangle.
    ///
    /// The domain becomes the root node's rectangle; it is not used to
    /// validate inserted points.
    pub fn with_bounds(bounds: AxisRect<N>) -> Self {
        Self {
            root: None,
            len: 0,
            bounds,
        }
    }

    /// The number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The domain rectangle this index was constructed with.
    #[inline]
    pub fn bounds(&self) -> AxisRect<N> {
        self.bounds
    }

    /// Insert a point.
    ///
    /// A point already present (by coordinate equality) is a silent no-op and
    /// leaves [`len`][Self::len] unchanged. Returns
    /// [`PlanarIndexError::InvalidArgument`] for a NaN coordinate, before any
    /// mutation takes place.
    pub fn insert(&mut self, point: Point<N>) -> Result<(), PlanarIndexError> {
        check_point(&point)?;

        // A single root-to-leaf walk. The rectangle and axis for a new leaf
        // are derived from the last occupied node passed on the way down; for
        // the root they are the domain rectangle and the x axis.
        let mut rect = self.bounds;
        let mut axis = Axis::X;
        let mut slot = &mut self.root;
        loop {
            match slot {
                Some(node) => {
                    if node.point == point {
                        return Ok(());
                    }
                    let left = node.routes_left(&point);
                    rect = node.child_rect(left);
                    axis = node.axis.other();
                    slot = if left { &mut node.left } else { &mut node.right };
                }
                None => {
                    *slot = Some(Box::new(PointNode::new(point, rect, axis)));
                    self.len += 1;
                    return Ok(());
                }
            }
        }
    }

    /// Insert a point supplied through [`CoordTrait`].
    pub fn insert_coord(&mut self, coord: &impl CoordTrait<T = N>) -> Result<(), PlanarIndexError> {
        self.insert(Point::from_coord(coord))
    }

    /// Whether an exact coordinate match for `point` is stored.
    pub fn contains(&self, point: Point<N>) -> Result<bool, PlanarIndexError> {
        check_point(&point)?;

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.point == point {
                return Ok(true);
            }
            current = if node.routes_left(&point) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        Ok(false)
    }

    /// Whether an exact match for a [`CoordTrait`] coordinate is stored.
    pub fn contains_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<bool, PlanarIndexError> {
        self.contains(Point::from_coord(coord))
    }

    /// Collect every stored point inside `query`, boundary included.
    ///
    /// The result order is the depth-first traversal order; callers that need
    /// a canonical order must sort. A subtree is visited only when its
    /// rectangle intersects `query`.
    pub fn range(&self, query: &AxisRect<N>) -> Vec<Point<N>> {
        let mut found = vec![];
        if let Some(root) = self.root.as_deref() {
            Self::range_into(root, query, &mut found);
        }
        found
    }

    fn range_into(node: &PointNode<N>, query: &AxisRect<N>, found: &mut Vec<Point<N>>) {
        if query.contains(&node.point) {
            found.push(node.point);
        }
        if let Some(left) = node.left.as_deref() {
            if query.intersects(&left.rect) {
                Self::range_into(left, query, found);
            }
        }
        if let Some(right) = node.right.as_deref() {
            if query.intersects(&right.rect) {
                Self::range_into(right, query, found);
            }
        }
    }

    /// Collect every stored point inside a [`RectTrait`] rectangle.
    ///
    /// Unlike [`range`][Self::range], this validates the rectangle's bounds
    /// and returns [`PlanarIndexError::InvalidArgument`] when they are NaN or
    /// inverted.
    pub fn range_rect(
        &self,
        rect: &impl RectTrait<T = N>,
    ) -> Result<Vec<Point<N>>, PlanarIndexError> {
        Ok(self.range(&AxisRect::from_rect(rect)?))
    }

    /// The stored point closest to `target` in Euclidean distance, or `None`
    /// on an empty index.
    ///
    /// Among equidistant points the first one found wins; the choice is
    /// deterministic for a given tree but callers must not depend on which
    /// point it is.
    pub fn nearest(&self, target: Point<N>) -> Result<Option<Point<N>>, PlanarIndexError> {
        check_point(&target)?;

        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return Ok(None),
        };
        let mut best = Champion {
            point: root.point,
            distance: root.point.distance_squared(&target),
        };
        Self::nearest_in(root, &target, &mut best);
        Ok(Some(best.point))
    }

    /// Best-first descent. A subtree is pruned as soon as its rectangle can no
    /// longer hold anything closer than the champion; when both children
    /// survive the check, the nearer one is searched first so its result
    /// tightens the bound applied to the farther one.
    fn nearest_in(node: &PointNode<N>, target: &Point<N>, best: &mut Champion<N>) {
        if node.rect.distance_squared_to(target) >= best.distance {
            return;
        }

        let distance = node.point.distance_squared(target);
        if distance < best.distance {
            *best = Champion {
                point: node.point,
                distance,
            };
        }

        match (node.left.as_deref(), node.right.as_deref()) {
            (Some(left), Some(right)) => {
                let (first, second) = nearer_first(left, right, target);
                Self::nearest_in(first, target, best);
                Self::nearest_in(second, target, best);
            }
            (Some(left), None) => Self::nearest_in(left, target, best),
            (None, Some(right)) => Self::nearest_in(right, target, best),
            (None, None) => {}
        }
    }

    /// The stored point closest to a [`CoordTrait`] coordinate.
    pub fn nearest_coord(
        &self,
        coord: &impl CoordTrait<T = N>,
    ) -> Result<Option<Point<N>>, PlanarIndexError> {
        self.nearest(Point::from_coord(coord))
    }
}

impl<N: CoordNum> Default for KdTree2D<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The closest candidate found so far during a nearest-neighbor search,
/// together with its squared distance to the target.
#[derive(Debug, Clone, Copy)]
struct Champion<N: CoordNum> {
    point: Point<N>,
    distance: N,
}

/// Order two sibling subtrees so the one whose rectangle is closer to `target`
/// comes first. On a tie the right subtree comes first.
pub(crate) fn nearer_first<'a, N: CoordNum>(
    left: &'a PointNode<N>,
    right: &'a PointNode<N>,
    target: &Point<N>,
) -> (&'a PointNode<N>, &'a PointNode<N>) {
    if left.rect.distance_squared_to(target) < right.rect.distance_squared_to(target) {
        (left, right)
    } else {
        (right, left)
    }
}

fn check_point<N: CoordNum>(point: &Point<N>) -> Result<(), PlanarIndexError> {
    if point.has_nan() {
        return Err(PlanarIndexError::InvalidArgument(
            "Point coordinate is NaN.".to_string(),
        ));
    }
    Ok(())
}
