//! Component-wise operators.
//!
//! Arithmetic operators act on each pair of corresponding components, or on
//! each component and a broadcast scalar. Multiplying two vectors therefore
//! gives the component-wise product, not a dot product.

use crate::{
    num::{Integer, Number, Scalar, SignedNumber},
    vector::Vector,
};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

impl_binop!(Add, add, [Number]);
impl_binop!(Sub, sub, [Number]);
impl_binop!(Mul, mul, [Number]);
impl_binop!(Div, div, [Number]);
impl_binop!(Rem, rem, [Number]);

impl_binop_assign!(AddAssign, add_assign, [Number]);
impl_binop_assign!(SubAssign, sub_assign, [Number]);
impl_binop_assign!(MulAssign, mul_assign, [Number]);
impl_binop_assign!(DivAssign, div_assign, [Number]);
impl_binop_assign!(RemAssign, rem_assign, [Number]);

impl_scalar_lhs_binop!(Add, add, f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_binop!(Sub, sub, f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_binop!(Mul, mul, f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_binop!(Div, div, f32, f64, i32, i64, u32, u64);
impl_scalar_lhs_binop!(Rem, rem, f32, f64, i32, i64, u32, u64);

impl_unary_op!(Neg, neg, [SignedNumber]);

// Logical operators for boolean vectors and bitwise operators for integer
// vectors.
impl_binop!(BitAnd, bitand, [Scalar + BitAnd<Output = T>]);
impl_binop!(BitOr, bitor, [Scalar + BitOr<Output = T>]);
impl_binop!(BitXor, bitxor, [Scalar + BitXor<Output = T>]);

impl_binop_assign!(BitAndAssign, bitand_assign, [Scalar + BitAndAssign]);
impl_binop_assign!(BitOrAssign, bitor_assign, [Scalar + BitOrAssign]);
impl_binop_assign!(BitXorAssign, bitxor_assign, [Scalar + BitXorAssign]);

impl_unary_op!(Not, not, [Scalar + Not<Output = T>]);

impl<T: Integer, const N: usize> Shl<usize> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: usize) -> Self::Output {
        self.mapped(|a| a << rhs)
    }
}

impl<T: Integer, const N: usize> Shr<usize> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: usize) -> Self::Output {
        self.mapped(|a| a >> rhs)
    }
}
