//! Point masses with semi-implicit Euler integration.

use crate::float::Float;
use crate::vec::Vec;

/// A point mass: position, linear velocity, and a per-step force accumulator.
///
/// `inverse_mass == 0` marks the particle as pinned — infinitely massive and
/// unmoved by forces and impulses. Forces accumulate between integration
/// steps; [`Particle::integrate_velocity`] consumes and clears the
/// accumulator, so it must run exactly once per sub-step after all forces for
/// that sub-step are applied, or forces leak across steps.
#[derive(Clone, Debug)]
pub struct Particle<V: Vec> {
    pub inverse_mass: V::Scalar,
    pub position: V,
    pub velocity: V,
    pub force_accumulator: V,
}

impl<V: Vec> Particle<V> {
    /// Particle at `position` with unit mass.
    pub fn new(position: V) -> Self {
        Particle {
            inverse_mass: V::Scalar::one(),
            position,
            velocity: V::zero(),
            force_accumulator: V::zero(),
        }
    }

    /// Immovable particle at `position`.
    pub fn pinned(position: V) -> Self {
        Particle {
            inverse_mass: V::Scalar::zero(),
            position,
            velocity: V::zero(),
            force_accumulator: V::zero(),
        }
    }

    /// Particle at `position` with the given mass. A near-zero mass pins it.
    pub fn from_mass(position: V, mass: V::Scalar) -> Self {
        let mut p = Particle::new(position);
        p.set_mass(mass);
        p
    }

    /// Replace the mass. A near-zero mass pins the particle.
    pub fn set_mass(&mut self, mass: V::Scalar) {
        self.inverse_mass = if mass.is_near_zero(V::Scalar::from_f32(1e-10)) {
            V::Scalar::zero()
        } else {
            V::Scalar::one() / mass
        };
    }

    /// Make the particle immovable.
    pub fn pin(&mut self) {
        self.inverse_mass = V::Scalar::zero();
    }

    /// Restore mobility with the given mass.
    pub fn unpin(&mut self, mass: V::Scalar) {
        self.set_mass(mass);
    }

    pub fn is_pinned(&self) -> bool {
        !(self.inverse_mass > V::Scalar::zero())
    }

    /// Add a force for the current sub-step. Additive and order-independent.
    pub fn apply_force(&mut self, force: V) {
        self.force_accumulator = self.force_accumulator + force;
    }

    /// Change velocity by `impulse * inverse_mass`. No effect when pinned.
    pub fn apply_impulse(&mut self, impulse: V) {
        self.velocity = self.velocity + impulse.scale(self.inverse_mass);
    }

    /// Turn accumulated force into a velocity change and clear the accumulator.
    pub fn integrate_velocity(&mut self, dt: V::Scalar) {
        let acceleration = self.force_accumulator.scale(self.inverse_mass);
        self.velocity = self.velocity + acceleration.scale(dt);
        self.force_accumulator = V::zero();
    }

    /// Advance position along the current velocity.
    ///
    /// Velocity must be integrated first (semi-implicit Euler); the world
    /// loop preserves that ordering.
    pub fn integrate_position(&mut self, dt: V::Scalar) {
        self.position = self.position + self.velocity.scale(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn forces_accumulate_and_clear() {
        let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::zero());
        p.apply_force(Vec2::new(1.0, 0.0));
        p.apply_force(Vec2::new(2.0, 0.0));
        p.integrate_velocity(1.0);
        assert!((p.velocity.x - 3.0).abs() < 1e-6);
        assert_eq!(p.force_accumulator, Vec2::zero());
        // a second integration without new forces changes nothing
        p.integrate_velocity(1.0);
        assert!((p.velocity.x - 3.0).abs() < 1e-6);
    }

    #[test]
    fn impulse_scales_by_inverse_mass() {
        let mut p: Particle<Vec2<f32>> = Particle::from_mass(Vec2::zero(), 2.0);
        p.apply_impulse(Vec2::new(4.0, 0.0));
        assert!((p.velocity.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn pinned_ignores_forces_and_impulses() {
        let mut p: Particle<Vec2<f32>> = Particle::pinned(Vec2::new(5.0, 5.0));
        p.apply_force(Vec2::new(1000.0, 1000.0));
        p.apply_impulse(Vec2::new(1000.0, 1000.0));
        p.integrate_velocity(1.0 / 60.0);
        p.integrate_position(1.0 / 60.0);
        assert_eq!(p.position, Vec2::new(5.0, 5.0));
        assert_eq!(p.velocity, Vec2::zero());
    }
}
