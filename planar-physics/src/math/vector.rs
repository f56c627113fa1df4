// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Two-dimensional vector value type
//!
//! `Vector2` is a plain `Copy` value with no identity. Arithmetic is exposed
//! both as operators and as named methods so physics code can read like the
//! formulas it implements.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 2D vector with double-precision components
///
/// # Examples
///
/// ```
/// use planar_physics::math::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v + Vector2::ZERO, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vector2 {
    /// The zero vector
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Dot product
    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared Euclidean length
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Multiply every component by `scalar`
    pub fn scale(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Rotate counterclockwise by `angle` radians about the origin
    pub fn rotate(self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Exact counterclockwise quarter turn, `(-y, x)`
    pub fn perpendicular(self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    /// Unit vector in the same direction
    ///
    /// The zero vector has no direction; the result is NaN in that case.
    pub fn unit(self) -> Vector2 {
        self.scale(1.0 / self.magnitude())
    }

    /// Vector projection of `self` onto `axis`
    ///
    /// Yields NaN components when `axis` is the zero vector.
    pub fn project_onto(self, axis: Vector2) -> Vector2 {
        axis.scale(axis.dot(self) / axis.dot(axis))
    }

    /// Project the offset `self - l1` onto the line direction `l2 - l1`
    pub fn project_to_line(self, l1: Vector2, l2: Vector2) -> Vector2 {
        (self - l1).project_onto(l2 - l1)
    }

    /// Unsigned angle between two vectors in `[0, pi]`
    pub fn angle_between(self, other: Vector2) -> f64 {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        // Rounding can push cos slightly outside [-1, 1]
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Reflect `self` through the line perpendicular to `line`
    ///
    /// This is the reflection used for bouncing off a surface whose normal
    /// is `line`: the component along `line` is inverted.
    pub fn reflect_across_line(self, line: Vector2) -> Vector2 {
        self - self.project_onto(line).scale(2.0)
    }

    /// Component-wise comparison within an absolute tolerance
    pub fn approx_eq(self, other: Vector2, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        self.scale(scalar)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        v.scale(self)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
