//! Configuration owned by the world.

use crate::error::WorldError;
use crate::float::Float;
use crate::vec::Vec;

/// Fixed-step loop configuration.
///
/// # Builder Pattern
/// ```
/// use tether::config::WorldConfig;
/// use tether::vec::Vec2;
///
/// let config: WorldConfig<Vec2<f32>> = WorldConfig::new()
///     .with_step_size(0.02)
///     .with_iteration_count(4)
///     .with_gravity(Vec2::new(0.0, -9.81))
///     .with_damping(0.3);
/// ```
#[derive(Clone, Debug)]
pub struct WorldConfig<V: Vec> {
    /// Duration of one fixed sub-step, in seconds. Must be positive.
    /// Default: 0.01.
    pub step_size: V::Scalar,
    /// Constraint relaxation iterations per sub-step. Must be at least 1.
    /// Default: 10.
    pub iteration_count: usize,
    /// Linear damping coefficient: each sub-step applies the force
    /// `-damping * velocity`. Default: 0 (no damping).
    pub damping: V::Scalar,
    /// Uniform scale on the sub-step duration, for slow-motion or
    /// fast-forward without touching the iteration count or physical
    /// constants. Must be positive. Default: 1.
    pub time_stretch: V::Scalar,
    /// Gravity acceleration vector. Default: zero.
    pub gravity: V,
}

impl<V: Vec> WorldConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            step_size: V::Scalar::from_f32(0.01),
            iteration_count: 10,
            damping: V::Scalar::zero(),
            time_stretch: V::Scalar::one(),
            gravity: V::zero(),
        }
    }

    pub fn with_step_size(mut self, step_size: V::Scalar) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_iteration_count(mut self, iteration_count: usize) -> Self {
        self.iteration_count = iteration_count;
        self
    }

    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_time_stretch(mut self, time_stretch: V::Scalar) -> Self {
        self.time_stretch = time_stretch;
        self
    }

    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Reject values the stepping loop cannot recover from mid-execution.
    pub fn validate(&self) -> Result<(), WorldError> {
        if !(self.step_size > V::Scalar::zero()) {
            return Err(WorldError::InvalidStepSize);
        }
        if self.iteration_count < 1 {
            return Err(WorldError::InvalidIterationCount);
        }
        if !(self.time_stretch > V::Scalar::zero()) {
            return Err(WorldError::InvalidTimeStretch);
        }
        Ok(())
    }
}

impl<V: Vec> Default for WorldConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
