//! Deterministic fixed-timestep particle physics for embedded and desktop targets.
//!
//! `tether` simulates point masses joined by impulse-based distance
//! constraints, advanced by a fixed-step loop that decomposes variable frame
//! deltas into reproducible sub-steps. Designed for small interactive
//! installations (LED strips, displays) as much as desktop simulations: the
//! caller feeds wall-clock deltas in and reads particle positions out.
//!
//! # Features
//!
//! - **Semi-implicit Euler**: velocity integrated before position, per particle
//! - **Baumgarte-stabilized constraints**: distance rods, plain or wrapped
//!   onto a ring axis for closed loops
//! - **Fixed sub-stepping**: dt accumulation, time stretch, and a
//!   death-spiral advisory flag
//! - **Edge policies**: reflect, wrap, or caller-supplied per-particle hooks
//! - **Force fields**: drag/buoyancy media over density profiles
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod edge;
pub mod medium;
pub mod config;
pub mod world;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Scalar1, Vec2, Vec3};
pub use particle::Particle;
pub use constraint::{AxisWrap, Constraint, DistanceConstraint, WrappedDistanceConstraint};
pub use edge::{EdgeHandler, ReflectEdges, WrapEdges};
pub use medium::{LinearMap, LogisticMap, Medium};
pub use config::WorldConfig;
pub use world::World;
pub use error::WorldError;
