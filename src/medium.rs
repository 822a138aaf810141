//! Force-field helpers: response curves and a drag/buoyancy medium.
//!
//! A [`Medium`] turns a density profile over position into a per-particle
//! force, intended for the world's force-callback slot:
//!
//! ```
//! use tether::medium::{LogisticMap, Medium};
//! use tether::vec::Vec2;
//! use tether::world::World;
//!
//! let density = LogisticMap::new(-1.0f32, 1.0, 2.0, 0.0, 1.0);
//! let medium = Medium::with_profile(move |p: Vec2<f32>| density.map(p.y), Vec2::new(0.0, -9.5));
//! let mut world: World<Vec2<f32>> = World::new();
//! world.set_force_callback(move |p| medium.force(p));
//! ```

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;
use alloc::boxed::Box;

/// Straight-line response curve mapping an input range onto an output range.
#[derive(Copy, Clone, Debug)]
pub struct LinearMap<F: Float> {
    input_min: F,
    output_min: F,
    slope: F,
}

impl<F: Float> LinearMap<F> {
    pub fn new(input_min: F, input_max: F, output_min: F, output_max: F) -> Self {
        LinearMap {
            input_min,
            output_min,
            slope: (output_max - output_min) / (input_max - input_min),
        }
    }

    pub fn map(&self, value: F) -> F {
        self.output_min + self.slope * (value - self.input_min)
    }
}

/// S-shaped response curve: eases between the output bounds across the input
/// range, crossing the midpoint halfway.
///
/// The exponent is scaled so the curve covers ~99% of its swing inside the
/// input range.
#[derive(Copy, Clone, Debug)]
pub struct LogisticMap<F: Float> {
    output_min: F,
    output_range: F,
    slope: F,
    mid_point: F,
    exponent: F,
}

impl<F: Float> LogisticMap<F> {
    pub fn new(input_min: F, input_max: F, output_min: F, output_max: F, slope: F) -> Self {
        let input_range = input_max - input_min;
        LogisticMap {
            output_min,
            output_range: output_max - output_min,
            slope,
            mid_point: input_min + input_range * F::half(),
            exponent: F::from_f32(-9.2) / input_range,
        }
    }

    pub fn map(&self, value: F) -> F {
        self.output_min
            + self.output_range
                / (F::one() + (self.slope * self.exponent * (value - self.mid_point)).exp())
    }
}

/// A fluid-like medium: drag opposing motion plus buoyancy opposing gravity,
/// both proportional to the local density.
pub struct Medium<V: Vec> {
    density: Box<dyn Fn(V) -> V::Scalar>,
    pub area: V::Scalar,
    pub drag_coefficient: V::Scalar,
    pub gravity: V,
}

impl<V: Vec> Medium<V> {
    /// Medium with the same density everywhere.
    pub fn uniform(density: V::Scalar, gravity: V) -> Self
    where
        V::Scalar: 'static,
    {
        Self::with_profile(move |_| density, gravity)
    }

    /// Medium whose density varies over position (e.g. a logistic profile
    /// over height for a water surface).
    pub fn with_profile<D>(profile: D, gravity: V) -> Self
    where
        D: Fn(V) -> V::Scalar + 'static,
    {
        Medium {
            density: Box::new(profile),
            area: V::Scalar::one(),
            drag_coefficient: V::Scalar::one(),
            gravity,
        }
    }

    pub fn with_area(mut self, area: V::Scalar) -> Self {
        self.area = area;
        self
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: V::Scalar) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn density_at(&self, position: V) -> V::Scalar {
        (self.density)(position)
    }

    /// Total force the medium exerts on the particle at its current state.
    pub fn force(&self, particle: &Particle<V>) -> V {
        let density = self.density_at(particle.position);
        self.drag(density, particle.velocity) + self.buoyancy(density)
    }

    fn drag(&self, density: V::Scalar, velocity: V) -> V {
        let direction = velocity.normalize();
        let magnitude = V::Scalar::half()
            * density
            * velocity.length_sq()
            * (self.area / V::Scalar::pi()).sqrt()
            * self.drag_coefficient;
        direction.scale(-magnitude)
    }

    fn buoyancy(&self, density: V::Scalar) -> V {
        (-self.gravity).scale(self.area * density)
    }
}
