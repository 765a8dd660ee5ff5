//! Planar geometry primitives shared by the tree and its callers.

use geo_traits::{CoordTrait, RectTrait};

use crate::error::PlanarIndexError;
use crate::r#type::CoordNum;

/// A 2-d point. Equality is by coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<N: CoordNum> {
    x: N,
    y: N,
}

impl<N: CoordNum> Point<N> {
    /// Construct a point from its coordinates.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// Construct a point from anything implementing [`CoordTrait`].
    pub fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        Self::new(coord.x(), coord.y())
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> N {
        let dx = abs_delta(self.x, other.x);
        let dy = abs_delta(self.y, other.y);
        dx * dx + dy * dy
    }

    /// Whether either coordinate is NaN.
    #[inline]
    pub(crate) fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl<N: CoordNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// A splitting axis. Even tree depths split on [`Axis::X`], odd depths on
/// [`Axis::Y`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children are partitioned by x coordinate.
    X,
    /// Children are partitioned by y coordinate.
    Y,
}

impl Axis {
    /// The coordinate of `point` on this axis.
    #[inline]
    pub fn select<N: CoordNum>(&self, point: &Point<N>) -> N {
        match self {
            Self::X => point.x(),
            Self::Y => point.y(),
        }
    }

    /// The perpendicular axis.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// An axis-aligned rectangle with `min_x <= max_x` and `min_y <= max_y`,
/// enforced at construction. Containment and intersection are inclusive on
/// all edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRect<N: CoordNum> {
    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<N: CoordNum> AxisRect<N> {
    /// Construct a rectangle, validating its bounds.
    ///
    /// Returns [`PlanarIndexError::InvalidArgument`] if any coordinate is NaN
    /// or a min bound exceeds the corresponding max bound.
    pub fn new(min_x: N, min_y: N, max_x: N, max_y: N) -> Result<Self, PlanarIndexError> {
        if min_x.is_nan() || min_y.is_nan() || max_x.is_nan() || max_y.is_nan() {
            return Err(PlanarIndexError::InvalidArgument(
                "Rectangle coordinate is NaN.".to_string(),
            ));
        }
        if min_x > max_x || min_y > max_y {
            return Err(PlanarIndexError::InvalidArgument(format!(
                "Rectangle bounds are inverted: ({:?}, {:?}) x ({:?}, {:?}).",
                min_x, max_x, min_y, max_y
            )));
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Construct a rectangle from anything implementing [`RectTrait`],
    /// validating its bounds.
    pub fn from_rect(rect: &impl RectTrait<T = N>) -> Result<Self, PlanarIndexError> {
        Self::new(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// The unit square, the conventional point domain.
    pub fn unit() -> Self {
        Self {
            min_x: N::zero(),
            min_y: N::zero(),
            max_x: N::one(),
            max_y: N::one(),
        }
    }

    /// The minimum x bound.
    #[inline]
    pub fn min_x(&self) -> N {
        self.min_x
    }

    /// The minimum y bound.
    #[inline]
    pub fn min_y(&self) -> N {
        self.min_y
    }

    /// The maximum x bound.
    #[inline]
    pub fn max_x(&self) -> N {
        self.max_x
    }

    /// The maximum y bound.
    #[inline]
    pub fn max_y(&self) -> N {
        self.max_y
    }

    /// Whether `point` lies in this rectangle, boundary included.
    #[inline]
    pub fn contains(&self, point: &Point<N>) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }

    /// Whether this rectangle and `other` share any point, boundaries
    /// included.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Squared Euclidean distance from `point` to the nearest point on or in
    /// this rectangle. Zero if `point` is inside.
    #[inline]
    pub fn distance_squared_to(&self, point: &Point<N>) -> N {
        let dx = clamp_delta(point.x(), self.min_x, self.max_x);
        let dy = clamp_delta(point.y(), self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Split into the two child rectangles of a node at `at` splitting on
    /// `axis`. The halves are disjoint except for the shared boundary line and
    /// their union is `self`. `at` must lie within `self`.
    pub(crate) fn bisect(&self, axis: Axis, at: &Point<N>) -> (Self, Self) {
        debug_assert!(self.contains(at));
        match axis {
            Axis::X => (
                Self {
                    max_x: at.x(),
                    ..*self
                },
                Self {
                    min_x: at.x(),
                    ..*self
                },
            ),
            Axis::Y => (
                Self {
                    max_y: at.y(),
                    ..*self
                },
                Self {
                    min_y: at.y(),
                    ..*self
                },
            ),
        }
    }
}

impl<N: CoordNum> RectTrait for AxisRect<N> {
    type T = N;
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.min_x, self.min_y)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.max_x, self.max_y)
    }
}

/// `|a - b|` without going through signed arithmetic, so unsigned coordinate
/// types don't underflow.
#[inline]
fn abs_delta<N: CoordNum>(a: N, b: N) -> N {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// 1-d distance from a value to a closed range, zero inside it.
#[inline]
fn clamp_delta<N: CoordNum>(value: N, min: N, max: N) -> N {
    if value < min {
        min - value
    } else if value > max {
        value - max
    } else {
        N::zero()
    }
}
