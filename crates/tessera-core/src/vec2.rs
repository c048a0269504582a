//! The [`Vec2`] value type and its algebra.
//!
//! Every operation here is a pure function of its arguments. Nothing reads
//! shared state, so any of them may be called from inside a parallel loop
//! body under any execution policy without synchronization.
//!
//! The floating-point operation order of each function is part of its
//! contract: downstream physics relies on results being bit-reproducible
//! across backends for identical inputs. In particular:
//!
//! - equality is exact, with no tolerance;
//! - `v / r` computes one reciprocal and multiplies both components by it;
//! - [`length2`] never takes a square root.
//!
//! All operations except [`length`] are `const fn`, so the same definition
//! serves compile-time evaluation and run-time evaluation on every backend.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector of IEEE-754 doubles.
///
/// Plain value type: copied on assignment, compared component-wise, and
/// laid out as two packed `f64`s so a slice of `Vec2` can be handed to a
/// device buffer unchanged. `Vec2::default()` is `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Create a vector from its components.
#[inline]
#[must_use]
pub const fn make(x: f64, y: f64) -> Vec2 {
    Vec2 { x, y }
}

/// Unary plus: returns `v` unchanged.
#[inline]
#[must_use]
pub const fn plus(v: Vec2) -> Vec2 {
    v
}

/// Dot product, `x1*x2 + y1*y2`.
#[inline]
#[must_use]
pub const fn dot(v1: Vec2, v2: Vec2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Scalar 2D cross product, `x1*y2 - y1*x2`.
///
/// Positive when `v2` lies counter-clockwise of `v1`.
#[inline]
#[must_use]
pub const fn cross(v1: Vec2, v2: Vec2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Euclidean length, `sqrt(dot(v, v))`.
#[inline]
#[must_use]
pub fn length(v: Vec2) -> f64 {
    length2(v).sqrt()
}

/// Squared length, `dot(v, v)`.
#[inline]
#[must_use]
pub const fn length2(v: Vec2) -> f64 {
    dot(v, v)
}

/// Rotate 90 degrees counter-clockwise: `(-y, x)`.
#[inline]
#[must_use]
pub const fn rotate_ccw(v: Vec2) -> Vec2 {
    Vec2 { x: -v.y, y: v.x }
}

/// Rotate 90 degrees clockwise: `(y, -x)`.
#[inline]
#[must_use]
pub const fn rotate_cw(v: Vec2) -> Vec2 {
    Vec2 { x: v.y, y: -v.x }
}

/// Project `v` onto the subspace perpendicular to `u`: `v - dot(v, u) * u`.
///
/// `u` must be a unit vector. This is not checked; a non-unit `u` yields a
/// finite vector that is not orthogonal to `u`.
#[inline]
#[must_use]
pub const fn project(v: Vec2, u: Vec2) -> Vec2 {
    let d = dot(v, u);
    Vec2 {
        x: v.x - u.x * d,
        y: v.y - u.y * d,
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, r: f64) -> Self {
        Self {
            x: self.x * r,
            y: self.y * r,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        v * self
    }
}

/// Divide by a scalar through its reciprocal.
///
/// `1 / r` is computed once and both components are multiplied by it. This
/// is not equivalent to two independent divisions and must not be changed
/// to them. Dividing by zero yields infinities or NaN.
impl Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, r: f64) -> Self {
        let rinv = 1.0 / r;
        Self {
            x: self.x * rinv,
            y: self.y * rinv,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, r: f64) {
        self.x *= r;
        self.y *= r;
    }
}

/// In-place division divides each component directly.
///
/// Unlike `v / r` there is no shared reciprocal, so `v /= r` and
/// `v = v / r` can differ in the last bit.
impl DivAssign<f64> for Vec2 {
    #[inline]
    fn div_assign(&mut self, r: f64) {
        self.x /= r;
        self.y /= r;
    }
}

/// Left-to-right sum starting from [`Vec2::ZERO`].
impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}
