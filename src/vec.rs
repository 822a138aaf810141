//! Vector types and traits for the simulation core.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types used in the simulation.
///
/// Abstracts over dimensionality (1D, 2D, 3D) so the particle, constraint,
/// and world code is generic over the vector type. Per-axis access is part
/// of the trait because the wrapped constraint and the edge handlers work
/// one axis at a time.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Number of components.
    const DIM: usize;

    /// Zero vector.
    fn zero() -> Self;

    /// Vector with all components set to the same value.
    fn splat(value: Self::Scalar) -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar (scalar broadcast of `*`).
    fn scale(self, s: Self::Scalar) -> Self;

    /// Component-wise multiplication.
    fn component_mul(self, other: Self) -> Self;

    /// Component-wise division.
    fn component_div(self, other: Self) -> Self;

    /// Component-wise truncating remainder.
    fn component_rem(self, other: Self) -> Self;

    /// Read one component. `axis` must be below [`Self::DIM`].
    fn component(self, axis: usize) -> Self::Scalar;

    /// Overwrite one component. `axis` must be below [`Self::DIM`].
    fn set_component(&mut self, axis: usize, value: Self::Scalar);

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length.
    ///
    /// Returns the input unchanged when the length is exactly zero, so the
    /// degenerate case never divides by zero.
    fn normalize(self) -> Self {
        let len = self.length();
        if len > Self::Scalar::zero() {
            self.scale(Self::Scalar::one() / len)
        } else {
            self
        }
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// Squared distance between two points.
    fn distance_sq(self, other: Self) -> Self::Scalar {
        (self - other).length_sq()
    }

    /// Linear interpolation between self and other.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }
}

// --------------------------------------------------------------------------
// Scalar1<F> — 1D wrapper
// --------------------------------------------------------------------------

/// 1D "vector" — a scalar value implementing the Vec trait.
///
/// Useful for one-dimensional domains (a string of particles on a line or a
/// ring). Converts to its scalar via `From`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scalar1<F: Float>(pub F);

impl<F: Float> From<F> for Scalar1<F> {
    fn from(v: F) -> Self { Scalar1(v) }
}

impl From<Scalar1<f32>> for f32 {
    fn from(v: Scalar1<f32>) -> f32 { v.0 }
}

impl From<Scalar1<f64>> for f64 {
    fn from(v: Scalar1<f64>) -> f64 { v.0 }
}

impl<F: Float> Add for Scalar1<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Scalar1(self.0 + rhs.0) }
}

impl<F: Float> Sub for Scalar1<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Scalar1(self.0 - rhs.0) }
}

impl<F: Float> Neg for Scalar1<F> {
    type Output = Self;
    fn neg(self) -> Self { Scalar1(-self.0) }
}

impl<F: Float> Vec for Scalar1<F> {
    type Scalar = F;
    const DIM: usize = 1;
    fn zero() -> Self { Scalar1(F::zero()) }
    fn splat(value: F) -> Self { Scalar1(value) }
    fn dot(self, other: Self) -> F { self.0 * other.0 }
    fn scale(self, s: F) -> Self { Scalar1(self.0 * s) }
    fn component_mul(self, other: Self) -> Self { Scalar1(self.0 * other.0) }
    fn component_div(self, other: Self) -> Self { Scalar1(self.0 / other.0) }
    fn component_rem(self, other: Self) -> Self { Scalar1(self.0.rem(other.0)) }
    fn component(self, axis: usize) -> F {
        match axis {
            0 => self.0,
            _ => panic!("axis {} out of bounds for Scalar1", axis),
        }
    }
    fn set_component(&mut self, axis: usize, value: F) {
        match axis {
            0 => self.0 = value,
            _ => panic!("axis {} out of bounds for Scalar1", axis),
        }
    }
}

// --------------------------------------------------------------------------
// Vec2<F> — 2D vector
// --------------------------------------------------------------------------

/// 2D vector for planar simulations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    const DIM: usize = 2;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn splat(value: F) -> Self { Vec2 { x: value, y: value } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }
    fn component_div(self, other: Self) -> Self {
        Vec2 { x: self.x / other.x, y: self.y / other.y }
    }
    fn component_rem(self, other: Self) -> Self {
        Vec2 { x: self.x.rem(other.x), y: self.y.rem(other.y) }
    }
    fn component(self, axis: usize) -> F {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("axis {} out of bounds for Vec2", axis),
        }
    }
    fn set_component(&mut self, axis: usize, value: F) {
        match axis {
            0 => self.x = value,
            1 => self.y = value,
            _ => panic!("axis {} out of bounds for Vec2", axis),
        }
    }
}

// --------------------------------------------------------------------------
// Vec3<F> — 3D vector
// --------------------------------------------------------------------------

/// 3D vector for spatial simulations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

impl<F: Float> From<(F, F, F)> for Vec3<F> {
    fn from((x, y, z): (F, F, F)) -> Self { Vec3 { x, y, z } }
}

// Mixed construction from a lower-dimensional vector plus a scalar; the
// component counts must sum to the target dimension, checked by the type.
impl<F: Float> From<(Vec2<F>, F)> for Vec3<F> {
    fn from((xy, z): (Vec2<F>, F)) -> Self { Vec3 { x: xy.x, y: xy.y, z } }
}

impl<F: Float> From<(F, Vec2<F>)> for Vec3<F> {
    fn from((x, yz): (F, Vec2<F>)) -> Self { Vec3 { x, y: yz.x, z: yz.y } }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    const DIM: usize = 3;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn splat(value: F) -> Self { Vec3 { x: value, y: value, z: value } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
    fn component_mul(self, other: Self) -> Self {
        Vec3 { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z }
    }
    fn component_div(self, other: Self) -> Self {
        Vec3 { x: self.x / other.x, y: self.y / other.y, z: self.z / other.z }
    }
    fn component_rem(self, other: Self) -> Self {
        Vec3 {
            x: self.x.rem(other.x),
            y: self.y.rem(other.y),
            z: self.z.rem(other.z),
        }
    }
    fn component(self, axis: usize) -> F {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {} out of bounds for Vec3", axis),
        }
    }
    fn set_component(&mut self, axis: usize, value: F) {
        match axis {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => panic!("axis {} out of bounds for Vec3", axis),
        }
    }
}
