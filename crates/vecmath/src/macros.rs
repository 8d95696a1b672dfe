//! Utility macros.

/// Implements a component-wise binary operator between two vectors and between
/// a vector and a broadcast scalar, for both owned and borrowed operands.
macro_rules! impl_binop {
    ($op:ident, $method:ident, [$($bound:tt)+]) => {
        impl<'a, T: $($bound)+, const N: usize> ::std::ops::$op<&'a Vector<T, N>> for &'a Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: &'a Vector<T, N>) -> Self::Output {
                self.zip_mapped(rhs, |a, b| ::std::ops::$op::$method(a, b))
            }
        }

        impl<T: $($bound)+, const N: usize> ::std::ops::$op<Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, T: $($bound)+, const N: usize> ::std::ops::$op<&'a Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: &'a Vector<T, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T: $($bound)+, const N: usize> ::std::ops::$op<Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }

        impl<T: $($bound)+, const N: usize> ::std::ops::$op<T> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.mapped(|a| ::std::ops::$op::$method(a, rhs))
            }
        }

        impl<T: $($bound)+, const N: usize> ::std::ops::$op<T> for Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }
    };
}

/// Implements a component-wise binary operator with a scalar of the concrete
/// type `$t` on the left-hand side.
macro_rules! impl_scalar_lhs_binop {
    ($op:ident, $method:ident, $($t:ty),*) => {$(
        impl<const N: usize> ::std::ops::$op<&Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: &Vector<$t, N>) -> Self::Output {
                rhs.mapped(|b| ::std::ops::$op::$method(self, b))
            }
        }

        impl<const N: usize> ::std::ops::$op<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: Vector<$t, N>) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }
    )*};
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($bound:tt)+]) => {
        impl<T: $($bound)+, const N: usize> ::std::ops::$op for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self) -> Self::Output {
                self.mapped(::std::ops::$op::$method)
            }
        }

        impl<T: $($bound)+, const N: usize> ::std::ops::$op for Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, [$($bound:tt)+]) => {
        impl<T: $($bound)+, const N: usize> ::std::ops::$op<&Vector<T, N>> for Vector<T, N> {
            #[inline]
            fn $method(&mut self, rhs: &Vector<T, N>) {
                for (a, &b) in self.components_mut().iter_mut().zip(rhs) {
                    ::std::ops::$op::$method(a, b);
                }
            }
        }

        impl<T: $($bound)+, const N: usize> ::std::ops::$op<Vector<T, N>> for Vector<T, N> {
            #[inline]
            fn $method(&mut self, rhs: Vector<T, N>) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }

        impl<T: $($bound)+, const N: usize> ::std::ops::$op<T> for Vector<T, N> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                for a in self.components_mut() {
                    ::std::ops::$op::$method(a, rhs);
                }
            }
        }
    };
}
