//! Pairwise distance constraints solved with Baumgarte-stabilized impulses.

use crate::float::Float;
use crate::vec::Vec;
use crate::particle::Particle;

/// A constraint between two particles, addressed by index into the world's
/// particle storage.
///
/// A closed set of variants: plain Euclidean distance, and distance under a
/// periodic wrap on one axis (ring topology). Caller-supplied behavior hooks
/// in at the edge-handler slot instead.
pub enum Constraint<V: Vec> {
    Distance(DistanceConstraint<V>),
    WrappedDistance(WrappedDistanceConstraint<V>),
}

impl<V: Vec> Constraint<V> {
    /// Solve one relaxation iteration, mutating particle velocities.
    pub fn solve(&self, particles: &mut [Particle<V>], dt: V::Scalar) {
        match self {
            Constraint::Distance(c) => c.solve(particles, dt),
            Constraint::WrappedDistance(c) => c.solve(particles, dt),
        }
    }

    /// The two particle indices this constraint joins.
    pub fn endpoints(&self) -> (usize, usize) {
        match self {
            Constraint::Distance(c) => (c.a, c.b),
            Constraint::WrappedDistance(c) => (c.a, c.b),
        }
    }
}

/// Remaps one axis of a separation into `(-circumference/2, circumference/2]`,
/// turning that axis into a ring.
///
/// Owned by each wrapped constraint; pass a copy wherever the same ring is
/// meant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisWrap<F: Float> {
    pub axis: usize,
    pub circumference: F,
}

impl<F: Float> AxisWrap<F> {
    pub fn new(axis: usize, circumference: F) -> Self {
        debug_assert!(circumference > F::zero(), "circumference must be positive");
        AxisWrap { axis, circumference }
    }

    /// Shortest signed offset around the ring, in `(-C/2, C/2]`.
    ///
    /// Idempotent: `wrap(wrap(x)) == wrap(x)`.
    pub fn wrap(&self, x: F) -> F {
        let c = self.circumference;
        let r = x.rem_euclid(c);
        if r > c * F::half() { r - c } else { r }
    }
}

/// Keeps two particles at the Euclidean distance captured at construction.
pub struct DistanceConstraint<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub rest_length: V::Scalar,
    /// Fraction of the positional error fed to the solver, in (0, 1].
    pub strength: V::Scalar,
    /// Baumgarte bias factor, in (0, 1]. Converts a fraction of positional
    /// error into a velocity correction instead of a position snap.
    pub bias_factor: V::Scalar,
}

impl<V: Vec> DistanceConstraint<V> {
    /// Join particles `a` and `b` at `rest_length`, with default
    /// strength/bias tuned for the default world iteration count.
    pub fn new(a: usize, b: usize, rest_length: V::Scalar) -> Self {
        DistanceConstraint {
            a,
            b,
            rest_length,
            strength: V::Scalar::from_f32(0.2),
            bias_factor: V::Scalar::from_f32(0.3),
        }
    }

    /// Join `a` and `b` at their current separation.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<V>]) -> Self {
        let rest_length = particles[a].position.distance(particles[b].position);
        Self::new(a, b, rest_length)
    }

    pub fn with_strength(mut self, strength: V::Scalar) -> Self {
        debug_assert!(
            strength > V::Scalar::zero() && !(strength > V::Scalar::one()),
            "strength must be in (0.0, 1.0]"
        );
        self.strength = strength;
        self
    }

    pub fn with_bias_factor(mut self, bias_factor: V::Scalar) -> Self {
        debug_assert!(
            bias_factor > V::Scalar::zero() && !(bias_factor > V::Scalar::one()),
            "bias_factor must be in (0.0, 1.0]"
        );
        self.bias_factor = bias_factor;
        self
    }

    pub fn solve(&self, particles: &mut [Particle<V>], dt: V::Scalar) {
        let delta = particles[self.a].position - particles[self.b].position;
        solve_pair(
            particles,
            self.a,
            self.b,
            delta,
            self.rest_length,
            self.strength,
            self.bias_factor,
            dt,
        );
    }
}

/// Like [`DistanceConstraint`], but separation on one designated axis is
/// measured around a ring (e.g. a closed loop of particles).
pub struct WrappedDistanceConstraint<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub wrap: AxisWrap<V::Scalar>,
    pub rest_length: V::Scalar,
    pub strength: V::Scalar,
    pub bias_factor: V::Scalar,
}

impl<V: Vec> WrappedDistanceConstraint<V> {
    pub fn new(a: usize, b: usize, wrap: AxisWrap<V::Scalar>, rest_length: V::Scalar) -> Self {
        WrappedDistanceConstraint {
            a,
            b,
            wrap,
            rest_length,
            strength: V::Scalar::from_f32(0.2),
            bias_factor: V::Scalar::from_f32(0.3),
        }
    }

    /// Join `a` and `b` at their current wrapped separation, so a pair
    /// straddling the seam captures the short way around.
    pub fn from_particles(
        a: usize,
        b: usize,
        wrap: AxisWrap<V::Scalar>,
        particles: &[Particle<V>],
    ) -> Self {
        let rest_length =
            Self::separation(wrap, particles[a].position, particles[b].position).length();
        Self::new(a, b, wrap, rest_length)
    }

    pub fn with_strength(mut self, strength: V::Scalar) -> Self {
        debug_assert!(
            strength > V::Scalar::zero() && !(strength > V::Scalar::one()),
            "strength must be in (0.0, 1.0]"
        );
        self.strength = strength;
        self
    }

    pub fn with_bias_factor(mut self, bias_factor: V::Scalar) -> Self {
        debug_assert!(
            bias_factor > V::Scalar::zero() && !(bias_factor > V::Scalar::one()),
            "bias_factor must be in (0.0, 1.0]"
        );
        self.bias_factor = bias_factor;
        self
    }

    /// Raw component-wise difference with the ring axis remapped.
    fn separation(wrap: AxisWrap<V::Scalar>, a: V, b: V) -> V {
        let mut delta = a - b;
        delta.set_component(wrap.axis, wrap.wrap(delta.component(wrap.axis)));
        delta
    }

    pub fn solve(&self, particles: &mut [Particle<V>], dt: V::Scalar) {
        let delta = Self::separation(
            self.wrap,
            particles[self.a].position,
            particles[self.b].position,
        );
        solve_pair(
            particles,
            self.a,
            self.b,
            delta,
            self.rest_length,
            self.strength,
            self.bias_factor,
            dt,
        );
    }
}

/// Shared impulse solve for both separation flavors.
///
/// When both particles are pinned the inverse-mass sum is zero and the call
/// is a no-op. When the particles coincide, `normalize` returns the zero
/// vector and the computed impulse vanishes — a degenerate fallback, not an
/// error.
#[allow(clippy::too_many_arguments)]
fn solve_pair<V: Vec>(
    particles: &mut [Particle<V>],
    a: usize,
    b: usize,
    delta: V,
    rest_length: V::Scalar,
    strength: V::Scalar,
    bias_factor: V::Scalar,
    dt: V::Scalar,
) {
    let w = particles[a].inverse_mass + particles[b].inverse_mass;
    if !(w > V::Scalar::zero()) {
        return;
    }

    let distance = delta.length();
    let offset = (rest_length - distance) * strength;
    let axis = delta.normalize();

    let relative_velocity = particles[a].velocity - particles[b].velocity;
    let velocity_along_axis = relative_velocity.dot(axis);
    let bias = -(bias_factor / dt) * offset;
    let lambda = -(velocity_along_axis + bias) / w;

    let impulse = axis.scale(lambda);
    particles[a].apply_impulse(impulse);
    particles[b].apply_impulse(-impulse);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_stays_in_half_open_range() {
        let wrap = AxisWrap::new(0, 1.0f64);
        for i in -200..200 {
            let x = i as f64 * 0.173;
            let w = wrap.wrap(x);
            assert!(w > -0.5 && w <= 0.5, "wrap({}) = {} out of range", x, w);
        }
    }

    #[test]
    fn wrap_is_idempotent() {
        let wrap = AxisWrap::new(0, 1.0f64);
        for i in -200..200 {
            let x = i as f64 * 0.097;
            let once = wrap.wrap(x);
            assert_eq!(wrap.wrap(once), once, "wrap not idempotent at {}", x);
        }
    }

    #[test]
    fn wrap_upper_bound_is_closed() {
        let wrap = AxisWrap::new(0, 1.0f64);
        assert_eq!(wrap.wrap(0.5), 0.5);
        assert_eq!(wrap.wrap(-0.5), 0.5);
    }

    #[test]
    fn wrap_takes_short_way_around() {
        let wrap = AxisWrap::new(0, 1.0f64);
        // 0.95 -> 0.05 is 0.1 the short way, not 0.9
        let d = wrap.wrap(0.05 - 0.95);
        assert!((d - 0.1).abs() < 1e-12, "got {}", d);
    }
}
