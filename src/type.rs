use std::fmt::Debug;

use num_traits::{Num, NumCast, ToPrimitive};

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types, so that
/// every coordinate type is known to compare cleanly under the tree's axis
/// ordering (integers trivially; floats after the NaN check at the API
/// boundary).
pub trait CoordNum:
    private::Sealed + Num + NumCast + ToPrimitive + PartialOrd + Copy + Debug + Send + Sync
{
    /// Whether this value is NaN. Integer coordinates never are.
    #[inline]
    fn is_nan(self) -> bool {
        false
    }
}

impl CoordNum for i8 {}
impl CoordNum for u8 {}
impl CoordNum for i16 {}
impl CoordNum for u16 {}
impl CoordNum for i32 {}
impl CoordNum for u32 {}

impl CoordNum for f32 {
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl CoordNum for f64 {
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
