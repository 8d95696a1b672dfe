//! Scalar element kinds.

use num_traits as nt;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{AddAssign, DivAssign, MulAssign, Neg, RemAssign, SubAssign},
    str::FromStr,
};

/// Any type that can be stored as a vector component.
///
/// This includes `bool`, which supports equality, logical operators and
/// selection but no arithmetic.
pub trait Scalar:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// The zero value of the kind (`false` for `bool`).
    const ZERO: Self;

    /// Feeds the component into the given hasher.
    fn hash_component<H: Hasher>(self, state: &mut H);
}

/// Scalars supporting arithmetic.
pub trait Number:
    Scalar
    + nt::Num
    + nt::NumCast
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
{
    const ONE: Self;
    const TWO: Self;
}

/// Numbers that can be negative.
pub trait SignedNumber: Number + Neg<Output = Self> {
    const NEG_ONE: Self;

    /// The absolute value.
    fn abs(self) -> Self;

    /// `-1`, `0` or `1` depending on the sign of the value. Both zeros and NaN
    /// give zero.
    #[inline]
    fn sign(self) -> Self {
        if self > Self::ZERO {
            Self::ONE
        } else if self < Self::ZERO {
            Self::NEG_ONE
        } else {
            Self::ZERO
        }
    }
}

/// Integer scalars, supporting bitwise operators and shifts.
pub trait Integer: Number + nt::PrimInt + Eq + Ord + Hash {}

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    SignedNumber
    + nt::Float
    + nt::FromPrimitive
    + nt::ToPrimitive
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + approx::UlpsEq
{
    const THREE: Self;
    const INFINITY: Self;

    /// Rounds to the nearest integer, with halfway cases rounded to the even
    /// neighbour.
    fn round_even(self) -> Self;
}

macro_rules! impl_scalar_for_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;

            #[inline]
            fn hash_component<H: Hasher>(self, state: &mut H) {
                self.hash(state);
            }
        }

        impl Number for $t {
            const ONE: Self = 1;
            const TWO: Self = 2;
        }

        impl Integer for $t {}
    )*};
}

macro_rules! impl_signed_int {
    ($($t:ty),*) => {$(
        impl SignedNumber for $t {
            const NEG_ONE: Self = -1;

            #[inline]
            fn abs(self) -> Self {
                self.wrapping_abs()
            }
        }
    )*};
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;

            #[inline]
            fn hash_component<H: Hasher>(self, state: &mut H) {
                // 0.0 and -0.0 compare equal and must hash equally
                let value = if self == 0.0 { 0.0 } else { self };
                value.to_bits().hash(state);
            }
        }

        impl Number for $f {
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
        }

        impl SignedNumber for $f {
            const NEG_ONE: Self = -1.0;

            #[inline]
            fn abs(self) -> Self {
                $f::abs(self)
            }
        }

        impl Float for $f {
            const THREE: Self = 3.0;
            const INFINITY: Self = $f::INFINITY;

            #[inline]
            fn round_even(self) -> Self {
                self.round_ties_even()
            }
        }
    };
}

impl_scalar_for_int!(i32, i64, u32, u64);
impl_signed_int!(i32, i64);

impl_float!(f32);
impl_float!(f64);

impl Scalar for bool {
    const ZERO: Self = false;

    #[inline]
    fn hash_component<H: Hasher>(self, state: &mut H) {
        self.hash(state);
    }
}
