//! Fixed-step simulation loop over particle and constraint storage.

use crate::config::WorldConfig;
use crate::constraint::Constraint;
use crate::edge::EdgeHandler;
use crate::error::WorldError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;

/// Per-particle force hook, run once per particle per sub-step before
/// velocity integration.
pub type ForceCallback<V> = Box<dyn FnMut(&Particle<V>) -> V>;

/// Global hook run once per sub-step after velocity integration, for effects
/// that need the whole particle set (capture shared state to reach it).
pub type PostForceCallback = Box<dyn FnMut()>;

/// Owns the simulation configuration and the particle/constraint storage,
/// and advances the simulation in fixed sub-steps.
///
/// Particles and constraints live in contiguous storage addressed by the
/// stable indices returned at registration; constraints refer to particles
/// by index. Each `set_*` registration call replaces the previous one, and
/// each callback slot holds a single subscriber.
///
/// `step(dt)` accumulates wall-clock time and runs zero or more fixed
/// sub-steps; splitting a frame's dt across multiple calls reaches the same
/// sub-step sequence as one combined call. Everything runs synchronously on
/// the caller's thread: a far-behind accumulator means one call can run many
/// sub-steps before returning, which is what [`World::is_death_spiralling`]
/// exists to surface.
pub struct World<V: Vec> {
    particles: AllocVec<Particle<V>>,
    constraints: AllocVec<Constraint<V>>,
    config: WorldConfig<V>,
    edge_handler: EdgeHandler<V>,
    force_callback: Option<ForceCallback<V>>,
    post_force_callback: Option<PostForceCallback>,
    dt_accumulator: V::Scalar,
    prev_dt: V::Scalar,
    is_death_spiralling: bool,
}

impl<V: Vec> World<V> {
    /// Empty world with the default configuration.
    pub fn new() -> Self {
        World {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
            config: WorldConfig::new(),
            edge_handler: EdgeHandler::Open,
            force_callback: None,
            post_force_callback: None,
            dt_accumulator: V::Scalar::zero(),
            prev_dt: V::Scalar::zero(),
            is_death_spiralling: false,
        }
    }

    /// Empty world with a validated configuration.
    pub fn with_config(config: WorldConfig<V>) -> Result<Self, WorldError> {
        config.validate()?;
        let mut world = World::new();
        world.config = config;
        Ok(world)
    }

    /// Replace the configuration, rejecting values the stepping loop cannot
    /// recover from.
    pub fn set_config(&mut self, config: WorldConfig<V>) -> Result<(), WorldError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &WorldConfig<V> {
        &self.config
    }

    // ----------------------------------------------------------------------
    // Registration
    // ----------------------------------------------------------------------

    /// Append a particle, returning its stable index.
    pub fn add_particle(&mut self, particle: Particle<V>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Replace the particle storage. Indices held by existing constraints
    /// must remain in bounds; shrinking the set below a registered
    /// constraint's endpoints is a caller error.
    pub fn set_particles<I: IntoIterator<Item = Particle<V>>>(&mut self, particles: I) {
        self.particles = particles.into_iter().collect();
    }

    /// Append a constraint after checking its endpoints against the current
    /// particle storage.
    pub fn add_constraint(&mut self, constraint: Constraint<V>) -> Result<usize, WorldError> {
        self.check_constraint(&constraint)?;
        let idx = self.constraints.len();
        self.constraints.push(constraint);
        Ok(idx)
    }

    /// Replace the constraint storage. The registration order is the solve
    /// order, so it determines the Gauss-Seidel trajectory.
    pub fn set_constraints(
        &mut self,
        constraints: AllocVec<Constraint<V>>,
    ) -> Result<(), WorldError> {
        for constraint in &constraints {
            self.check_constraint(constraint)?;
        }
        self.constraints = constraints;
        Ok(())
    }

    fn check_constraint(&self, constraint: &Constraint<V>) -> Result<(), WorldError> {
        let (a, b) = constraint.endpoints();
        let count = self.particles.len();
        if a >= count {
            return Err(WorldError::ParticleOutOfBounds { index: a, count });
        }
        if b >= count {
            return Err(WorldError::ParticleOutOfBounds { index: b, count });
        }
        if a == b {
            return Err(WorldError::SelfConstraint { index: a });
        }
        Ok(())
    }

    /// Remove a constraint by index. The last constraint takes its slot.
    pub fn remove_constraint(&mut self, index: usize) -> Constraint<V> {
        self.constraints.swap_remove(index)
    }

    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }

    // ----------------------------------------------------------------------
    // Extension slots (single subscriber each; setting replaces)
    // ----------------------------------------------------------------------

    /// Per-particle force hook. The returned vector is added to the
    /// particle's force accumulator each sub-step.
    pub fn set_force_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Particle<V>) -> V + 'static,
    {
        self.force_callback = Some(Box::new(callback));
    }

    pub fn clear_force_callback(&mut self) {
        self.force_callback = None;
    }

    /// Global hook run after the force phase of each sub-step.
    pub fn set_post_force_callback<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.post_force_callback = Some(Box::new(callback));
    }

    pub fn clear_post_force_callback(&mut self) {
        self.post_force_callback = None;
    }

    /// Edge policy applied to every particle after position integration.
    pub fn set_edge_handler(&mut self, handler: EdgeHandler<V>) {
        self.edge_handler = handler;
    }

    // ----------------------------------------------------------------------
    // Stepping
    // ----------------------------------------------------------------------

    /// Advance the simulation by a wall-clock delta, in seconds.
    ///
    /// The delta lands in an accumulator; one fixed sub-step runs for every
    /// whole `step_size * time_stretch` it covers. Also refreshes the
    /// death-spiral flag by comparing this call's dt against the previous
    /// call's.
    pub fn step(&mut self, dt: V::Scalar) {
        let step = self.config.step_size * self.config.time_stretch;
        self.dt_accumulator = self.dt_accumulator + dt;
        while self.dt_accumulator >= step {
            self.sub_step(step);
            self.dt_accumulator = self.dt_accumulator - step;
        }

        let diff = dt - self.prev_dt;
        self.prev_dt = dt;
        self.is_death_spiralling = diff > step;
    }

    fn sub_step(&mut self, step: V::Scalar) {
        let gravity = self.config.gravity;
        let damping = self.config.damping;

        // Gravity scales with mass so every particle accelerates equally;
        // damping opposes the current velocity.
        for p in self.particles.iter_mut() {
            if p.inverse_mass > V::Scalar::zero() {
                p.apply_force(gravity.scale(V::Scalar::one() / p.inverse_mass));
                let drag = p.velocity.scale(-damping);
                p.apply_force(drag);
            }
        }

        if let Some(callback) = self.force_callback.as_mut() {
            for p in self.particles.iter_mut() {
                let force = callback(&*p);
                p.apply_force(force);
            }
        }

        for p in self.particles.iter_mut() {
            p.integrate_velocity(step);
        }

        if let Some(callback) = self.post_force_callback.as_mut() {
            callback();
        }

        let iteration_dt = step / V::Scalar::from_f32(self.config.iteration_count as f32);
        for _ in 0..self.config.iteration_count {
            for constraint in self.constraints.iter() {
                constraint.solve(&mut self.particles, iteration_dt);
            }
        }

        let edge_handler = &mut self.edge_handler;
        for p in self.particles.iter_mut() {
            p.integrate_position(step);
            edge_handler.handle(p);
        }
    }

    // ----------------------------------------------------------------------
    // Observability
    // ----------------------------------------------------------------------

    pub fn particles(&self) -> &[Particle<V>] {
        &self.particles
    }

    pub fn constraints(&self) -> &[Constraint<V>] {
        &self.constraints
    }

    pub fn particle(&self, index: usize) -> &Particle<V> {
        &self.particles[index]
    }

    /// Mutable particle access, e.g. for forwarding input as impulses.
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<V> {
        &mut self.particles[index]
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Wall-clock time not yet consumed by sub-steps.
    pub fn dt_accumulator(&self) -> V::Scalar {
        self.dt_accumulator
    }

    /// Advisory flag: the last external dt grew by more than one sub-step
    /// over the call before it, i.e. the simulation is falling behind real
    /// time. Stepping behavior is unaffected; reacting (raising the step
    /// size, capping dt, skipping frames) is the caller's job.
    pub fn is_death_spiralling(&self) -> bool {
        self.is_death_spiralling
    }

    /// Index of the particle closest to `point`, for mapping pointer input
    /// to a particle. None when no particles are registered.
    pub fn nearest_particle(&self, point: V) -> Option<usize> {
        if self.particles.is_empty() {
            return None;
        }
        let mut nearest_idx = 0;
        let mut nearest_dist_sq = self.particles[0].position.distance_sq(point);
        for (i, p) in self.particles.iter().enumerate().skip(1) {
            let d = p.position.distance_sq(point);
            if d < nearest_dist_sq {
                nearest_dist_sq = d;
                nearest_idx = i;
            }
        }
        Some(nearest_idx)
    }
}

impl<V: Vec> Default for World<V> {
    fn default() -> Self {
        Self::new()
    }
}
