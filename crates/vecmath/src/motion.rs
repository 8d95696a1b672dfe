//! Gradual motion toward a target.

use crate::{num::Float, vector::Vector};
use num_traits as nt;

/// Smallest smoothing time used by the smooth damping functions.
const MIN_SMOOTH_TIME: f64 = 1e-4;

impl<T: Float, const N: usize> Vector<T, N> {
    /// Moves this value toward the target with a critically damped spring,
    /// so that it approaches the target smoothly without overshooting.
    ///
    /// `velocity` is the rate of change returned by the previous call (zero
    /// initially), `smooth_time` is roughly the time it takes to reach the
    /// target and `delta_time` is the time step. Each component is damped
    /// independently. A time step that is not positive leaves both the value
    /// and the velocity unchanged.
    ///
    /// # Returns
    /// The new value and the new velocity.
    #[inline]
    pub fn smooth_damp(
        &self,
        target: &Self,
        velocity: &Self,
        smooth_time: T,
        delta_time: T,
    ) -> (Self, Self) {
        self.smooth_damp_with_max_speed(target, velocity, smooth_time, T::INFINITY, delta_time)
    }

    /// Like [`Self::smooth_damp`], but limits the speed of each component to
    /// `max_speed`.
    pub fn smooth_damp_with_max_speed(
        &self,
        target: &Self,
        velocity: &Self,
        smooth_time: T,
        max_speed: T,
        delta_time: T,
    ) -> (Self, Self) {
        if delta_time <= T::ZERO {
            return (*self, *velocity);
        }

        let spring = DampedSpring::new(smooth_time, max_speed, delta_time);

        let mut value = *self;
        let mut new_velocity = *velocity;

        for i in 0..N {
            let (component, component_velocity) = spring.step(self[i], target[i], velocity[i]);
            value[i] = component;
            new_velocity[i] = component_velocity;
        }

        (value, new_velocity)
    }
}

/// The per-step coefficients of a critically damped spring.
#[derive(Clone, Copy, Debug)]
struct DampedSpring<F> {
    omega: F,
    decay: F,
    max_change: F,
    delta_time: F,
}

impl<F: Float> DampedSpring<F> {
    fn new(smooth_time: F, max_speed: F, delta_time: F) -> Self {
        let min_smooth_time: F = nt::cast(MIN_SMOOTH_TIME).unwrap_or(F::ZERO);
        let smooth_time = if smooth_time > min_smooth_time {
            smooth_time
        } else {
            min_smooth_time
        };

        let omega = F::TWO / smooth_time;
        let x = omega * delta_time;

        // Polynomial approximation of exp(-x)
        let c2: F = nt::cast(0.48).unwrap_or(F::ZERO);
        let c3: F = nt::cast(0.235).unwrap_or(F::ZERO);
        let decay = F::ONE / (F::ONE + x + c2 * x * x + c3 * x * x * x);

        Self {
            omega,
            decay,
            max_change: max_speed * smooth_time,
            delta_time,
        }
    }

    fn step(&self, current: F, target: F, velocity: F) -> (F, F) {
        let original_target = target;

        let mut change = current - target;
        if change > self.max_change {
            change = self.max_change;
        } else if change < -self.max_change {
            change = -self.max_change;
        }
        let target = current - change;

        let temp = (velocity + self.omega * change) * self.delta_time;
        let mut velocity = (velocity - self.omega * temp) * self.decay;
        let mut output = target + (change + temp) * self.decay;

        // Stop at the original target rather than overshooting it
        if (original_target - current > F::ZERO) == (output > original_target) {
            output = original_target;
            velocity = (output - original_target) / self.delta_time;
        }

        (output, velocity)
    }
}
