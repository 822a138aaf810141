//! Error types for configuration and registration.

use core::fmt;

/// Errors raised at the configuration and registration boundary.
///
/// Degenerate numeric situations inside a step (coincident particles, fully
/// pinned pairs) are policy no-ops, not errors; only malformed configuration
/// and registration are rejected, because the stepping loop has no mid-loop
/// recovery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Step size must be positive.
    InvalidStepSize,
    /// At least one constraint iteration per sub-step is required.
    InvalidIterationCount,
    /// Time stretch must be positive.
    InvalidTimeStretch,
    /// Constraint endpoint index is outside the registered particle storage.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A constraint's two endpoints must be distinct particles.
    SelfConstraint { index: usize },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::InvalidStepSize => write!(f, "step size must be positive"),
            WorldError::InvalidIterationCount => {
                write!(f, "iteration count must be at least 1")
            }
            WorldError::InvalidTimeStretch => write!(f, "time stretch must be positive"),
            WorldError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            WorldError::SelfConstraint { index } => {
                write!(f, "constraint joins particle {} to itself", index)
            }
        }
    }
}
