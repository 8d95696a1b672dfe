//! Component-wise functions.
//!
//! Each function applies the corresponding scalar function independently to
//! every component, or to every set of corresponding components when it takes
//! several vectors. NaN and infinite values propagate as the scalar function
//! dictates.

use crate::{
    num::{Float, Number, SignedNumber},
    vector::Vector,
};
use num_traits as nt;

/// Defines component-wise versions of unary [`num_traits::Float`] methods.
macro_rules! impl_unary_float_fns {
    ($($(#[$attr:meta])* $name:ident;)*) => {$(
        $(#[$attr])*
        #[inline]
        pub fn $name(&self) -> Self {
            self.mapped(nt::Float::$name)
        }
    )*};
}

#[inline]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: SignedNumber, const N: usize> Vector<T, N> {
    /// Computes the absolute value of each component.
    ///
    /// For integers the most negative value wraps to itself.
    #[inline]
    pub fn abs(&self) -> Self {
        self.mapped(SignedNumber::abs)
    }

    /// Returns `-1`, `0` or `1` for each component depending on its sign.
    /// Zeros and NaN give zero.
    #[inline]
    pub fn sign(&self) -> Self {
        self.mapped(SignedNumber::sign)
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Computes the component-wise minimum of this and another vector.
    ///
    /// Where the comparison is undecided because of NaN, the component of
    /// this vector is kept.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_mapped(other, partial_min)
    }

    /// Computes the component-wise maximum of this and another vector.
    ///
    /// Where the comparison is undecided because of NaN, the component of
    /// this vector is kept.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_mapped(other, partial_max)
    }

    /// Computes the minimum of each component and the given value.
    #[inline]
    pub fn component_min_scalar(&self, value: T) -> Self {
        self.mapped(|a| partial_min(a, value))
    }

    /// Computes the maximum of each component and the given value.
    #[inline]
    pub fn component_max_scalar(&self, value: T) -> Self {
        self.mapped(|a| partial_max(a, value))
    }

    /// Constrains each component to lie between the corresponding components
    /// of `min` and `max`, computed as `min(max(v, min), max)`.
    #[inline]
    pub fn component_clamp(&self, min: &Self, max: &Self) -> Self {
        self.component_max(min).component_min(max)
    }

    /// Constrains each component to lie between `min` and `max`.
    #[inline]
    pub fn component_clamp_scalar(&self, min: T, max: T) -> Self {
        self.component_max_scalar(min).component_min_scalar(max)
    }

    /// Returns zero for each component of this vector that is less than the
    /// corresponding edge component, and one otherwise.
    #[inline]
    pub fn step(&self, edge: &Self) -> Self {
        self.zip_mapped(edge, |x, edge| if x < edge { T::ZERO } else { T::ONE })
    }

    /// Returns zero for each component less than `edge`, and one otherwise.
    #[inline]
    pub fn step_scalar(&self, edge: T) -> Self {
        self.mapped(|x| if x < edge { T::ZERO } else { T::ONE })
    }

    /// Computes `self * b + c` component-wise.
    #[inline]
    pub fn fma(&self, b: &Self, c: &Self) -> Self {
        self.zip3_mapped(b, c, |a, b, c| a * b + c)
    }

    /// Computes `self * b + c` with scalar `b` and `c`.
    #[inline]
    pub fn fma_scalar(&self, b: T, c: T) -> Self {
        self.mapped(|a| a * b + c)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    impl_unary_float_fns! {
        /// Rounds each component down to the nearest integer.
        floor;
        /// Rounds each component up to the nearest integer.
        ceil;
        /// Rounds each component toward zero.
        trunc;
        /// Rounds each component to the nearest integer, with halfway cases
        /// rounded away from zero.
        round;
        sin;
        cos;
        tan;
        asin;
        acos;
        atan;
        sinh;
        cosh;
        tanh;
        asinh;
        acosh;
        atanh;
        exp;
        /// Computes the natural logarithm of each component.
        ln;
        exp2;
        log2;
        sqrt;
        /// Converts each component from degrees to radians.
        to_radians;
        /// Converts each component from radians to degrees.
        to_degrees;
    }

    /// Rounds each component to the nearest integer, with halfway cases
    /// rounded to the even neighbour.
    #[inline]
    pub fn round_even(&self) -> Self {
        self.mapped(Float::round_even)
    }

    /// Computes `v - floor(v)` for each component, which lies in `[0, 1)`
    /// also for negative components.
    #[inline]
    pub fn fract(&self) -> Self {
        self.mapped(|a| a - a.floor())
    }

    /// Computes `a - b * floor(a / b)` for each pair of components, so the
    /// result takes the sign of the divisor.
    #[inline]
    pub fn modulo(&self, divisor: &Self) -> Self {
        self.zip_mapped(divisor, |a, b| a - b * (a / b).floor())
    }

    /// Like [`Self::modulo`], but with the same divisor for every component.
    #[inline]
    pub fn modulo_scalar(&self, divisor: T) -> Self {
        self.mapped(|a| a - divisor * (a / divisor).floor())
    }

    /// Interpolates linearly between this vector at `t = 0` and `end` at
    /// `t = 1`. `t` is not restricted to `[0, 1]`.
    #[inline]
    pub fn lerp(&self, end: &Self, t: T) -> Self {
        self.zip_mapped(end, |start, end| start + (end - start) * t)
    }

    /// Like [`Self::lerp`], but with a separate interpolation parameter for
    /// each component.
    #[inline]
    pub fn lerp_componentwise(&self, end: &Self, t: &Self) -> Self {
        self.zip3_mapped(end, t, |start, end, t| start + (end - start) * t)
    }

    /// Computes the interpolation parameter for which [`Self::lerp`] between
    /// `start` and `end` gives this vector, for each component separately.
    ///
    /// Components where `start` and `end` coincide give infinity or NaN.
    #[inline]
    pub fn inv_lerp(&self, start: &Self, end: &Self) -> Self {
        self.zip3_mapped(start, end, |value, start, end| {
            (value - start) / (end - start)
        })
    }

    /// Performs smooth Hermite interpolation between zero and one for each
    /// component of this vector lying between the corresponding components of
    /// `edge0` and `edge1`.
    #[inline]
    pub fn smooth_step(&self, edge0: &Self, edge1: &Self) -> Self {
        self.zip3_mapped(edge0, edge1, |x, edge0, edge1| {
            let t = partial_min(partial_max((x - edge0) / (edge1 - edge0), T::ZERO), T::ONE);
            t * t * (T::THREE - T::TWO * t)
        })
    }

    /// Computes the four-quadrant arctangent of each component of this vector
    /// (as `y`) and the corresponding component of `x`.
    #[inline]
    pub fn atan2(&self, x: &Self) -> Self {
        self.zip_mapped(x, nt::Float::atan2)
    }

    /// Raises each component to the power of the corresponding component of
    /// `exponent`.
    #[inline]
    pub fn pow(&self, exponent: &Self) -> Self {
        self.zip_mapped(exponent, nt::Float::powf)
    }

    /// Computes `1 / sqrt(v)` for each component.
    #[inline]
    pub fn inverse_sqrt(&self) -> Self {
        self.mapped(|a| a.sqrt().recip())
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn clamping_double3_to_scalar_bounds_works() {
        assert_eq!(
            Double3::new(-1.0, 5.0, 10.0).component_clamp_scalar(0.0, 8.0),
            Double3::new(0.0, 5.0, 8.0)
        );
    }

    #[test]
    fn clamping_to_vector_bounds_works() {
        let v = Int3::new(-5, 5, 50);
        let min = Int3::new(0, 6, 0);
        let max = Int3::new(10, 10, 10);
        assert_eq!(v.component_clamp(&min, &max), Int3::new(0, 6, 10));
    }

    #[test]
    fn component_min_and_max_work() {
        let a = Int4::new(1, 5, -3, 7);
        let b = Int4::new(2, 4, -4, 7);
        assert_eq!(a.component_min(&b), Int4::new(1, 4, -4, 7));
        assert_eq!(a.component_max(&b), Int4::new(2, 5, -3, 7));
        assert_eq!(a.component_min_scalar(2), Int4::new(1, 2, -3, 2));
        assert_eq!(a.component_max_scalar(2), Int4::new(2, 5, 2, 7));
    }

    #[test]
    fn abs_and_sign_work() {
        let v = Float4::new(-2.0, 0.0, 3.5, -0.0);
        assert_eq!(v.abs(), Float4::new(2.0, 0.0, 3.5, 0.0));
        assert_eq!(v.sign(), Float4::new(-1.0, 0.0, 1.0, 0.0));
        assert_eq!(Int3::new(-4, 0, 9).sign(), Int3::new(-1, 0, 1));
        assert_eq!(Int2::new(i32::MIN, -1).abs(), Int2::new(i32::MIN, 1));
    }

    #[test]
    fn rounding_functions_work() {
        let v = Double4::new(-1.5, -0.5, 0.5, 2.5);
        assert_eq!(v.floor(), Double4::new(-2.0, -1.0, 0.0, 2.0));
        assert_eq!(v.ceil(), Double4::new(-1.0, -0.0, 1.0, 3.0));
        assert_eq!(v.trunc(), Double4::new(-1.0, -0.0, 0.0, 2.0));
        assert_eq!(v.round(), Double4::new(-2.0, -1.0, 1.0, 3.0));
        assert_eq!(v.round_even(), Double4::new(-2.0, -0.0, 0.0, 2.0));
    }

    #[test]
    fn fract_is_nonnegative_for_negative_components() {
        assert_eq!(
            Double3::new(1.25, -1.25, 3.0).fract(),
            Double3::new(0.25, 0.75, 0.0)
        );
    }

    #[test]
    fn modulo_takes_sign_of_divisor() {
        let a = Double4::new(5.5, -5.5, 5.5, -5.5);
        let b = Double4::new(2.0, 2.0, -2.0, -2.0);
        assert_eq!(a.modulo(&b), Double4::new(1.5, 0.5, -0.5, -1.5));
        assert_eq!(
            Double2::new(7.0, -1.0).modulo_scalar(3.0),
            Double2::new(1.0, 2.0)
        );
    }

    #[test]
    fn modulo_by_zero_gives_nan() {
        assert!(Float2::new(1.0, 0.0).modulo_scalar(0.0).x().is_nan());
    }

    #[test]
    fn lerp_and_inv_lerp_are_inverses() {
        let start = Double3::new(0.0, 10.0, -2.0);
        let end = Double3::new(4.0, 20.0, 2.0);
        let mid = start.lerp(&end, 0.25);
        assert_eq!(mid, Double3::new(1.0, 12.5, -1.0));
        assert_eq!(mid.inv_lerp(&start, &end), Double3::same(0.25));
        assert_eq!(start.lerp(&end, 2.0), Double3::new(8.0, 30.0, 6.0));
    }

    #[test]
    fn lerp_with_vector_parameter_works() {
        let start = Float2::new(0.0, 0.0);
        let end = Float2::new(10.0, 10.0);
        assert_eq!(
            start.lerp_componentwise(&end, &Float2::new(0.1, 0.5)),
            Float2::new(1.0, 5.0)
        );
    }

    #[test]
    fn inv_lerp_with_equal_edges_gives_nan() {
        let edge = Double2::same(1.0);
        assert!(Double2::same(1.0).inv_lerp(&edge, &edge).x().is_nan());
    }

    #[test]
    fn step_works() {
        let edge = Float3::same(1.0);
        assert_eq!(
            Float3::new(0.5, 1.0, 1.5).step(&edge),
            Float3::new(0.0, 1.0, 1.0)
        );
        assert_eq!(Int2::new(-1, 3).step_scalar(0), Int2::new(0, 1));
    }

    #[test]
    fn smooth_step_works() {
        let v = Double4::new(-1.0, 0.0, 0.5, 2.0);
        let edge0 = Double4::zeros();
        let edge1 = Double4::same(1.0);
        assert_eq!(
            v.smooth_step(&edge0, &edge1),
            Double4::new(0.0, 0.0, 0.5, 1.0)
        );
        assert_abs_diff_eq!(
            Double2::same(0.25).smooth_step(&Double2::zeros(), &Double2::same(1.0)),
            Double2::same(0.15625),
            epsilon = 1e-12
        );
    }

    #[test]
    fn fma_works() {
        let a = Int3::new(1, 2, 3);
        assert_eq!(
            a.fma(&Int3::new(2, 2, 2), &Int3::new(1, 0, -1)),
            Int3::new(3, 4, 5)
        );
        assert_eq!(Double2::new(1.0, 2.0).fma_scalar(3.0, 0.5), Double2::new(3.5, 6.5));
    }

    #[test]
    fn trigonometric_functions_work() {
        let angles = Double3::new(0.0, FRAC_PI_2, PI);
        assert_abs_diff_eq!(angles.sin(), Double3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(angles.cos(), Double3::new(1.0, 0.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            Double2::new(1.0, 0.0).asin(),
            Double2::new(FRAC_PI_2, 0.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Double2::new(1.0, -1.0).atan2(&Double2::new(1.0, -1.0)),
            Double2::new(FRAC_PI_4, -3.0 * FRAC_PI_4),
            epsilon = 1e-12
        );
    }

    #[test]
    fn out_of_domain_inputs_give_nan() {
        assert!(Double2::new(2.0, 0.0).asin().x().is_nan());
        assert!(Double2::new(-1.0, 1.0).sqrt().x().is_nan());
        assert!(Double2::new(-1.0, 1.0).ln().x().is_nan());
        assert!(Double2::new(0.5, 1.0).acosh().x().is_nan());
    }

    #[test]
    fn exponential_and_logarithm_functions_work() {
        let v = Double3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(v.exp().ln(), v, epsilon = 1e-12);
        assert_abs_diff_eq!(v.exp2(), Double3::new(2.0, 4.0, 8.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            Double2::new(8.0, 0.5).log2(),
            Double2::new(3.0, -1.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Double2::new(2.0, 9.0).pow(&Double2::new(3.0, 0.5)),
            Double2::new(8.0, 3.0),
            epsilon = 1e-12
        );
        assert_eq!(Double2::zeros().ln(), Double2::same(f64::NEG_INFINITY));
    }

    #[test]
    fn sqrt_and_inverse_sqrt_work() {
        let v = Float2::new(4.0, 0.25);
        assert_eq!(v.sqrt(), Float2::new(2.0, 0.5));
        assert_eq!(v.inverse_sqrt(), Float2::new(0.5, 2.0));
        assert_eq!(Float2::zeros().inverse_sqrt(), Float2::same(f32::INFINITY));
    }

    #[test]
    fn angle_conversion_works() {
        let degrees = Double2::new(180.0, -90.0);
        assert_abs_diff_eq!(degrees.to_radians(), Double2::new(PI, -FRAC_PI_2), epsilon = 1e-12);
        assert_abs_diff_eq!(degrees.to_radians().to_degrees(), degrees, epsilon = 1e-12);
    }

    #[test]
    fn hyperbolic_functions_work() {
        let v = Double2::new(0.0, 1.0);
        assert_abs_diff_eq!(v.sinh().asinh(), v, epsilon = 1e-12);
        assert_abs_diff_eq!(v.tanh().atanh(), v, epsilon = 1e-12);
        assert_eq!(v.cosh().x(), 1.0);
    }
}
