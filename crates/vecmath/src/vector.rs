//! Vectors.

use crate::{
    error::VectorError,
    num::{Number, Scalar},
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use num_traits as nt;
use std::{
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice,
};

/// A vector with `N` components of scalar kind `T`.
///
/// The components are stored contiguously in declaration order, so the type
/// has the same layout as `[T; N]`. Which operations are available depends on
/// the bounds `T` satisfies: every [`Scalar`] gets component access,
/// swizzling, comparison and text conversion, [`Number`]s get arithmetic and
/// [`Float`](crate::Float)s get the geometric and transcendental functions.
///
/// Equality and ordering are component-wise and lexicographic, with component
/// 0 most significant.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// A 2-dimensional vector.
pub type Vector2<T = f32> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vector3<T = f32> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vector4<T = f32> = Vector<T, 4>;

pub type Float2 = Vector<f32, 2>;
pub type Float3 = Vector<f32, 3>;
pub type Float4 = Vector<f32, 4>;

pub type Double2 = Vector<f64, 2>;
pub type Double3 = Vector<f64, 3>;
pub type Double4 = Vector<f64, 4>;

pub type Int2 = Vector<i32, 2>;
pub type Int3 = Vector<i32, 3>;
pub type Int4 = Vector<i32, 4>;

pub type UInt2 = Vector<u32, 2>;
pub type UInt3 = Vector<u32, 3>;
pub type UInt4 = Vector<u32, 4>;

pub type Bool2 = Vector<bool, 2>;
pub type Bool3 = Vector<bool, 3>;
pub type Bool4 = Vector<bool, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The number of components.
    pub const DIM: usize = N;

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Creates a new vector with all components set to the zero value of the
    /// kind (`false` for booleans).
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector from a slice that must hold exactly `N` values.
    ///
    /// # Errors
    /// Returns [`VectorError::LengthMismatch`] if the slice has the wrong
    /// length.
    pub fn from_slice(values: &[T]) -> Result<Self, VectorError> {
        if values.len() != N {
            return Err(VectorError::LengthMismatch {
                expected: N,
                found: values.len(),
            });
        }
        let mut components = [T::ZERO; N];
        components.copy_from_slice(values);
        Ok(Self::from_array(components))
    }

    /// The components as an array.
    #[inline]
    pub const fn components(&self) -> &[T; N] {
        &self.components
    }

    /// A mutable reference to the array of components.
    #[inline]
    pub const fn components_mut(&mut self) -> &mut [T; N] {
        &mut self.components
    }

    /// Consumes the vector and returns its array of components.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.components
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Returns the component at the given index.
    ///
    /// This is the bounds-checked fallback for when the index is only known at
    /// runtime. Prefer the named accessors when possible.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfBounds`] if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, VectorError> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds { index, len: N })
    }

    /// Sets the component at the given index.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfBounds`] if `index >= N`, in which
    /// case the vector is left unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        let component = self
            .components
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfBounds { index, len: N })?;
        *component = value;
        Ok(())
    }

    /// Copies the components into a vector of a different dimension.
    ///
    /// Components beyond the end of this vector are set to the zero value of
    /// the kind, and components of this vector beyond `M` are discarded.
    #[inline]
    pub fn resized<const M: usize>(&self) -> Vector<T, M> {
        let mut components = [T::ZERO; M];
        let shared = N.min(M);
        components[..shared].copy_from_slice(&self.components[..shared]);
        Vector::from_array(components)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped<U: Scalar>(&self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::from_array(self.components.map(f))
    }

    /// Returns a vector with the given closure applied to each pair of
    /// corresponding components in this and another vector.
    #[inline]
    pub fn zip_mapped<U: Scalar, V: Scalar>(
        &self,
        other: &Vector<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector::from_array(std::array::from_fn(|i| {
            f(self.components[i], other.components[i])
        }))
    }

    /// Like [`Self::zip_mapped`], but over three vectors.
    #[inline]
    pub fn zip3_mapped<U: Scalar, V: Scalar, W: Scalar>(
        &self,
        second: &Vector<U, N>,
        third: &Vector<V, N>,
        mut f: impl FnMut(T, U, V) -> W,
    ) -> Vector<W, N> {
        Vector::from_array(std::array::from_fn(|i| {
            f(self.components[i], second.components[i], third.components[i])
        }))
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Converts each component to the scalar kind `U`, returning [`None`] if
    /// any component is not representable in `U`.
    ///
    /// Floating-point to integer conversion truncates toward zero.
    pub fn cast<U: Number>(&self) -> Option<Vector<U, N>> {
        let mut components = [U::ZERO; N];
        for (converted, &component) in components.iter_mut().zip(&self.components) {
            *converted = nt::cast(component)?;
        }
        Some(Vector::from_array(components))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> T {
        self.components
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
            .unwrap_or(T::ZERO)
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> T {
        self.components
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(T::ZERO)
    }

    /// Computes the sum of the components.
    #[inline]
    pub fn component_sum(&self) -> T {
        self.components.iter().fold(T::ZERO, |sum, &c| sum + c)
    }

    /// Computes the product of the components.
    #[inline]
    pub fn component_product(&self) -> T {
        self.components.iter().fold(T::ONE, |product, &c| product * c)
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector<T, 3> {
        let [x, y] = self.components;
        Vector::from_array([x, y, z])
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.components;
        Vector::from_array([x, y, z, w])
    }

    /// Drops the z-component.
    #[inline]
    pub const fn truncated(&self) -> Vector<T, 2> {
        let [x, y, _] = self.components;
        Vector::from_array([x, y])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Drops the w-component.
    #[inline]
    pub const fn truncated(&self) -> Vector<T, 3> {
        let [x, y, z, _] = self.components;
        Vector::from_array([x, y, z])
    }
}

impl<T: Number> Vector<T, 2> {
    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }
}

impl<T: Number> Vector<T, 3> {
    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::from_array(components)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

macro_rules! impl_widening_from {
    ($($from:ty => $to:ty),* $(,)?) => {$(
        impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
            #[inline]
            fn from(vector: Vector<$from, N>) -> Self {
                vector.mapped(<$to>::from)
            }
        }
    )*};
}

impl_widening_from!(
    f32 => f64,
    i32 => i64,
    i32 => f64,
    u32 => u64,
    u32 => i64,
    u32 => f64,
);

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for &component in &self.components {
            component.hash_component(state);
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Vector");
        for component in &self.components {
            tuple.field(component);
        }
        tuple.finish()
    }
}

// SAFETY: `Vector` is a transparent wrapper around `[T; N]`.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}

// SAFETY: `Vector` is a transparent wrapper around `[T; N]`, which has no
// padding when `T` has none.
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "arbitrary")]
impl<'a, T, const N: usize> arbitrary::Arbitrary<'a> for Vector<T, N>
where
    T: Scalar + arbitrary::Arbitrary<'a>,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::from_array(u.arbitrary()?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[T; N] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}
