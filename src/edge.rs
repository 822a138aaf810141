//! Domain-edge policies applied after position integration.

use crate::particle::Particle;
use crate::vec::Vec;
use alloc::boxed::Box;

/// What happens to a particle that leaves the simulation domain.
///
/// Invoked once per particle per sub-step, after position integration. The
/// `Custom` variant is the per-particle post-integration hook: it may
/// restrict its policy to specific axes or do something else entirely.
pub enum EdgeHandler<V: Vec> {
    /// Open domain, nothing happens.
    Open,
    /// Clamp to the bound and bounce the violating velocity component.
    Reflect(ReflectEdges<V>),
    /// Ring domain: translate to the opposite side, keeping the overshoot.
    Wrap(WrapEdges<V>),
    /// Caller-supplied policy.
    Custom(Box<dyn FnMut(&mut Particle<V>)>),
}

impl<V: Vec> EdgeHandler<V> {
    pub fn handle(&mut self, particle: &mut Particle<V>) {
        match self {
            EdgeHandler::Open => {}
            EdgeHandler::Reflect(edges) => edges.handle(particle),
            EdgeHandler::Wrap(edges) => edges.handle(particle),
            EdgeHandler::Custom(f) => f(particle),
        }
    }
}

impl<V: Vec> Default for EdgeHandler<V> {
    fn default() -> Self {
        EdgeHandler::Open
    }
}

/// Reflecting box: each axis independently clamps position to the violated
/// bound and scales that velocity component by `-restitution`.
pub struct ReflectEdges<V: Vec> {
    pub min: V,
    pub max: V,
    pub restitution: V::Scalar,
}

impl<V: Vec> ReflectEdges<V> {
    pub fn new(min: V, max: V, restitution: V::Scalar) -> Self {
        ReflectEdges { min, max, restitution }
    }

    fn handle(&self, particle: &mut Particle<V>) {
        for axis in 0..V::DIM {
            let lo = self.min.component(axis);
            let hi = self.max.component(axis);
            let x = particle.position.component(axis);
            if x > hi {
                particle.position.set_component(axis, hi);
                let v = particle.velocity.component(axis);
                particle.velocity.set_component(axis, -self.restitution * v);
            } else if x < lo {
                particle.position.set_component(axis, lo);
                let v = particle.velocity.component(axis);
                particle.velocity.set_component(axis, -self.restitution * v);
            }
        }
    }
}

/// Periodic box: each axis independently translates an escaped particle by
/// the domain extent, so overshoot past one bound reappears past the other.
/// Velocity is untouched.
pub struct WrapEdges<V: Vec> {
    pub min: V,
    pub max: V,
}

impl<V: Vec> WrapEdges<V> {
    pub fn new(min: V, max: V) -> Self {
        WrapEdges { min, max }
    }

    fn handle(&self, particle: &mut Particle<V>) {
        for axis in 0..V::DIM {
            let lo = self.min.component(axis);
            let hi = self.max.component(axis);
            let extent = hi - lo;
            let x = particle.position.component(axis);
            if x > hi {
                particle.position.set_component(axis, x - extent);
            } else if x < lo {
                particle.position.set_component(axis, x + extent);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn open_domain_leaves_particle_alone() {
        let mut handler: EdgeHandler<Vec2<f32>> = EdgeHandler::Open;
        let mut p = Particle::new(Vec2::new(1000.0, -1000.0));
        p.velocity = Vec2::new(3.0, -3.0);
        handler.handle(&mut p);
        assert_eq!(p.position, Vec2::new(1000.0, -1000.0));
        assert_eq!(p.velocity, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn custom_handler_can_restrict_to_one_axis() {
        // wrap x only, leave y open
        let mut handler: EdgeHandler<Vec2<f32>> = EdgeHandler::Custom(Box::new(|p| {
            if p.position.x > 1.0 {
                p.position.x -= 1.0;
            }
            if p.position.x < 0.0 {
                p.position.x += 1.0;
            }
        }));
        let mut p = Particle::new(Vec2::new(1.25, 9.0));
        handler.handle(&mut p);
        assert!((p.position.x - 0.25).abs() < 1e-6);
        assert_eq!(p.position.y, 9.0);
    }
}
