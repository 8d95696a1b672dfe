//! Component-wise comparisons producing boolean vectors, and operations on
//! boolean vectors.

use crate::{
    num::{Float, Scalar},
    vector::Vector,
};

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Whether each component is less than the corresponding component of
    /// `other`.
    #[inline]
    pub fn less_than(&self, other: &Self) -> Vector<bool, N> {
        self.zip_mapped(other, |a, b| a < b)
    }

    /// Whether each component is less than or equal to the corresponding
    /// component of `other`.
    #[inline]
    pub fn less_than_equal(&self, other: &Self) -> Vector<bool, N> {
        self.zip_mapped(other, |a, b| a <= b)
    }

    /// Whether each component is greater than the corresponding component of
    /// `other`.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> Vector<bool, N> {
        self.zip_mapped(other, |a, b| a > b)
    }

    /// Whether each component is greater than or equal to the corresponding
    /// component of `other`.
    #[inline]
    pub fn greater_than_equal(&self, other: &Self) -> Vector<bool, N> {
        self.zip_mapped(other, |a, b| a >= b)
    }

    /// Whether each component equals the corresponding component of `other`.
    #[inline]
    pub fn equal(&self, other: &Self) -> Vector<bool, N> {
        self.zip_mapped(other, |a, b| a == b)
    }

    /// Whether each component differs from the corresponding component of
    /// `other`. NaN differs from everything, including itself.
    #[inline]
    pub fn not_equal(&self, other: &Self) -> Vector<bool, N> {
        self.zip_mapped(other, |a, b| a != b)
    }

    /// Selects each component from `other` where the corresponding component
    /// of `mask` is `true`, and from this vector otherwise.
    #[inline]
    pub fn mix(&self, other: &Self, mask: &Vector<bool, N>) -> Self {
        mask.select(self, other)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Whether each component is NaN.
    #[inline]
    pub fn is_nan(&self) -> Vector<bool, N> {
        self.mapped(|a| a.is_nan())
    }

    /// Whether each component is positive or negative infinity.
    #[inline]
    pub fn is_infinite(&self) -> Vector<bool, N> {
        self.mapped(|a| a.is_infinite())
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Whether any component is `true`.
    #[inline]
    pub fn any(&self) -> bool {
        self.iter().any(|&b| b)
    }

    /// Whether all components are `true`.
    #[inline]
    pub fn all(&self) -> bool {
        self.iter().all(|&b| b)
    }

    /// Whether no component is `true`.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Picks each component from `if_true` where this mask is `true`, and from
    /// `if_false` otherwise.
    #[inline]
    pub fn select<T: Scalar>(
        &self,
        if_false: &Vector<T, N>,
        if_true: &Vector<T, N>,
    ) -> Vector<T, N> {
        self.zip3_mapped(if_false, if_true, |take_true, if_false, if_true| {
            if take_true { if_true } else { if_false }
        })
    }
}
