//! Geometric functions.

use crate::{
    num::{Float, Number},
    vector::Vector,
};

impl<T: Number, const N: usize> Vector<T, N> {
    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.iter()
            .zip(other)
            .fold(T::ZERO, |sum, (&a, &b)| sum + a * b)
    }

    /// Computes the squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Computes the squared distance between this point and another.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (self - other).length_squared()
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = *self.components();
        let [bx, by, bz] = *other.components();
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Computes the distance between this point and another.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (self - other).length()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector has no direction, and normalizing it gives NaN
    /// components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.length()
    }

    /// Orients this normal to face away from the surface the `incident` vector
    /// hits, as judged by the reference normal: returns the normal if
    /// `reference · incident < 0` and its negation otherwise.
    #[inline]
    pub fn face_forward(&self, incident: &Self, reference: &Self) -> Self {
        if reference.dot(incident) < T::ZERO {
            *self
        } else {
            -self
        }
    }

    /// Reflects this incident vector about the plane with the given normal,
    /// which should be normalized.
    #[inline]
    pub fn reflect(&self, normal: &Self) -> Self {
        self - normal * (T::TWO * normal.dot(self))
    }

    /// Refracts this incident vector through the surface with the given
    /// normal, where `eta` is the ratio of refractive indices. Both vectors
    /// should be normalized.
    ///
    /// Under total internal reflection the zero vector is returned.
    #[inline]
    pub fn refract(&self, normal: &Self, eta: T) -> Self {
        let d = normal.dot(self);
        let k = T::ONE - eta * eta * (T::ONE - d * d);
        if k < T::ZERO {
            Self::zeros()
        } else {
            self * eta - normal * (eta * d + k.sqrt())
        }
    }

    /// Returns the vector scaled down to `max_length` if it is longer,
    /// otherwise returns it unchanged.
    #[inline]
    pub fn clamp_length(&self, max_length: T) -> Self {
        if self.length_squared() > max_length * max_length {
            self * (max_length / self.length())
        } else {
            *self
        }
    }

    /// Moves this point a distance of at most `max_delta` toward the target,
    /// landing exactly on the target if it is within reach.
    #[inline]
    pub fn move_towards(&self, target: &Self, max_delta: T) -> Self {
        let delta = target - self;
        let distance_squared = delta.length_squared();
        if distance_squared <= max_delta * max_delta {
            *target
        } else {
            self + delta * (max_delta / distance_squared.sqrt())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn float2_length_and_normalization_work() {
        let v = Float2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_abs_diff_eq!(v.normalized(), Float2::new(0.6, 0.8), epsilon = 1e-6);
    }

    #[test]
    fn cross_of_double3_unit_axes_gives_third_axis() {
        assert_eq!(
            Double3::new(1.0, 0.0, 0.0).cross(&Double3::new(0.0, 1.0, 0.0)),
            Double3::new(0.0, 0.0, 1.0)
        );
        assert_eq!(Int3::unit_y().cross(&Int3::unit_z()), Int3::unit_x());
        assert_eq!(Int3::unit_y().cross(&Int3::unit_x()), -Int3::unit_z());
    }

    #[test]
    fn dot_product_works_for_all_numeric_kinds() {
        assert_eq!(Int3::new(1, 2, 3).dot(&Int3::new(4, -5, 6)), 12);
        assert_eq!(UInt2::new(2, 3).dot(&UInt2::new(4, 5)), 23);
        assert_eq!(Double4::same(0.5).dot(&Double4::same(2.0)), 4.0);
    }

    #[test]
    fn distance_works() {
        let a = Double3::new(1.0, 2.0, 3.0);
        let b = Double3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(Int2::new(1, 1).distance_squared(&Int2::new(-1, 2)), 5);
    }

    #[test]
    fn normalizing_zero_vector_gives_nan() {
        let n = Float3::zeros().normalized();
        assert!(n.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn face_forward_flips_normal_facing_the_incident_direction() {
        let n = Double2::new(0.0, 1.0);
        let down = Double2::new(0.0, -1.0);
        let up = Double2::new(0.0, 1.0);
        assert_eq!(n.face_forward(&down, &n), n);
        assert_eq!(n.face_forward(&up, &n), -n);
    }

    #[test]
    fn reflecting_off_horizontal_plane_flips_vertical_component() {
        let incident = Double3::new(1.0, -1.0, 0.5);
        let normal = Double3::unit_y();
        assert_eq!(incident.reflect(&normal), Double3::new(1.0, 1.0, 0.5));
    }

    #[test]
    fn refraction_with_unit_eta_passes_straight_through() {
        let incident = Double2::new(1.0, -1.0).normalized();
        let normal = Double2::unit_y();
        assert_abs_diff_eq!(incident.refract(&normal, 1.0), incident, epsilon = 1e-12);
    }

    #[test]
    fn refraction_bends_toward_normal_when_entering_denser_medium() {
        let incident = Double2::new(1.0, -1.0).normalized();
        let normal = Double2::unit_y();
        let refracted = incident.refract(&normal, 1.0 / 1.5);
        assert_abs_diff_eq!(refracted.length(), 1.0, epsilon = 1e-12);
        assert!(refracted.x() < incident.x());
        assert!(refracted.y() < 0.0);
    }

    #[test]
    fn total_internal_reflection_gives_zero_vector() {
        let incident = Float3::new(1.0, -0.1, 0.0).normalized();
        let normal = Float3::unit_y();
        assert_eq!(incident.refract(&normal, 1.5), Float3::zeros());
    }

    #[test]
    fn clamp_length_only_shortens_long_vectors() {
        let v = Double2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.clamp_length(2.5), Double2::new(1.5, 2.0), epsilon = 1e-12);
        assert_eq!(v.clamp_length(5.0), v);
        assert_eq!(v.clamp_length(10.0), v);
    }

    #[test]
    fn move_towards_reaches_target_within_max_delta() {
        let current = Double3::new(1.0, 1.0, 1.0);
        let target = Double3::new(1.0, 4.0, 5.0);
        assert_eq!(current.move_towards(&target, 5.0), target);
        assert_eq!(current.move_towards(&target, 100.0), target);
    }

    #[test]
    fn move_towards_takes_step_of_max_delta_toward_distant_target() {
        let current = Double3::new(1.0, 1.0, 1.0);
        let target = Double3::new(1.0, 4.0, 5.0);
        assert_abs_diff_eq!(
            current.move_towards(&target, 2.5),
            Double3::new(1.0, 2.5, 3.0),
            epsilon = 1e-12
        );
    }

    prop_compose! {
        fn double3_strategy(max_abs_component: f64)(
            x in -max_abs_component..max_abs_component,
            y in -max_abs_component..max_abs_component,
            z in -max_abs_component..max_abs_component,
        ) -> Double3 {
            Double3::new(x, y, z)
        }
    }

    proptest! {
        #[test]
        fn length_is_nonnegative_and_zero_only_for_zero_vector(v in double3_strategy(1e3)) {
            prop_assert!(v.length() >= 0.0);
            prop_assert_eq!(v.length() == 0.0, v == Double3::zeros());
        }
    }

    proptest! {
        #[test]
        fn dot_and_distance_are_commutative(a in double3_strategy(1e3), b in double3_strategy(1e3)) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
            prop_assert_eq!(a.distance(&b), b.distance(&a));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_anticommutative(a in double3_strategy(1e3), b in double3_strategy(1e3)) {
            prop_assert_eq!(a.cross(&b), -b.cross(&a));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_orthogonal_to_operands(a in double3_strategy(10.0), b in double3_strategy(10.0)) {
            let c = a.cross(&b);
            prop_assert!(a.dot(&c).abs() < 1e-9);
            prop_assert!(b.dot(&c).abs() < 1e-9);
        }
    }

    proptest! {
        #[test]
        fn normalized_vector_has_unit_length(v in double3_strategy(1e3)) {
            prop_assume!(v.length() > 1e-6);
            prop_assert!((v.normalized().length() - 1.0).abs() < 1e-9);
        }
    }
}
