//! Two-dimensional value vector used for hinge positions.

use crate::error::MechanismError;
use crate::float::Float;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// 2D vector. Every operation returns a new value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vector2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vector2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vector2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by `k`.
    pub fn scale(self, k: F) -> Self {
        Vector2 { x: self.x * k, y: self.y * k }
    }

    /// Divide both components by `k`.
    ///
    /// Fails with [`MechanismError::DivisionByZero`] when `k` is zero; callers
    /// on the hot path check the divisor themselves.
    pub fn divide(self, k: F) -> Result<Self, MechanismError> {
        if k == F::zero() {
            return Err(MechanismError::DivisionByZero);
        }
        Ok(Vector2 { x: self.x / k, y: self.y / k })
    }

    /// Raise each component to the power `p`.
    pub fn power(self, p: F) -> Self {
        Vector2 { x: self.x.powf(p), y: self.y.powf(p) }
    }

    /// Exact component-wise equality, no tolerance.
    pub fn equals(self, other: Self) -> bool {
        self == other
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm.
    pub fn magnitude(self) -> F {
        self.dot(self).sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).magnitude()
    }

    /// Round each component to `digits` decimal places.
    pub fn round_to(self, digits: i32) -> Self {
        Vector2 { x: self.x.round_to(digits), y: self.y.round_to(digits) }
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }
}

impl<F: Float> Add for Vector2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vector2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vector2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vector2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vector2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vector2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vector2<F> {
    type Output = Self;
    fn mul(self, k: F) -> Self { self.scale(k) }
}

impl<F: Float> fmt::Display for Vector2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<F: Float> From<(F, F)> for Vector2<F> {
    fn from((x, y): (F, F)) -> Self { Vector2 { x, y } }
}
