//! 3D vector value type
//!
//! `Vector` stores three `f64` coordinates. Magnitude and argument are derived
//! from them and can be assigned, in which case the coordinates are rewritten.
//! Axis rotations mutate the vector in place while the arithmetic operators
//! always produce a new vector.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math_utils::{clamp, lerp};
use crate::status::{type_mismatch, Status, VectorError, VectorResult};

/// A 3D vector with f64 components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Creates a new 3D vector
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates the null vector
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the magnitude (Euclidean length) of the vector
    ///
    /// # Examples
    /// ```
    /// use vector_core::Vector;
    /// assert_eq!(Vector::new(3.0, 0.0, 4.0).mag(), 5.0);
    /// ```
    #[inline]
    pub fn mag(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Rescales the vector so that its magnitude becomes `mag`.
    ///
    /// The direction is kept. A null vector has no direction, so it is
    /// rejected with [`VectorError::ZeroMagnitude`] and left untouched.
    ///
    /// # Examples
    /// ```
    /// use vector_core::{Vector, VectorError};
    /// let mut v = Vector::new(3.0, 0.0, 4.0);
    /// v.set_mag(10.0).unwrap();
    /// assert_eq!(v, Vector::new(6.0, 0.0, 8.0));
    ///
    /// let mut null = Vector::zero();
    /// assert_eq!(null.set_mag(1.0), Err(VectorError::ZeroMagnitude));
    /// ```
    pub fn set_mag(&mut self, mag: f64) -> Status {
        let old_mag = self.mag();
        if old_mag == 0.0 {
            log::debug!("rejecting magnitude {} for null vector", mag);
            return Err(VectorError::ZeroMagnitude);
        }

        self.x = self.x / old_mag * mag;
        self.y = self.y / old_mag * mag;
        self.z = self.z / old_mag * mag;
        Ok(())
    }

    /// Returns the angle, in radians, of the projection on the XY plane.
    ///
    /// Measured from the positive X axis, in (-PI, PI]. The null projection
    /// has an argument of 0.
    #[inline]
    pub fn argument(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Turns the vector in the XY plane so that its argument becomes `theta`.
    ///
    /// This is an absolute angle, unlike [`Vector::around_z`] which turns by a
    /// delta. The planar radius and `z` are kept.
    pub fn set_argument(&mut self, theta: f64) {
        let radius = self.x.hypot(self.y);
        let (sin, cos) = theta.sin_cos();
        self.x = radius * cos;
        self.y = radius * sin;
    }

    /// Turn around the X axis. Give the angle as radians.
    pub fn around_x(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let (y, z) = (self.y, self.z);
        self.y = y * cos - z * sin;
        self.z = y * sin + z * cos;
    }

    /// Turn around the Y axis. Give the angle as radians.
    ///
    /// The magnitude is only preserved at multiples of PI / 2.
    pub fn around_y(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let (x, z) = (self.x, self.z);
        self.x = x * cos + z * sin;
        self.z = x * sin + z * cos;
    }

    /// Turn around the Z axis. Give the angle as radians.
    pub fn around_z(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * cos + y * sin;
        self.y = -x * sin + y * cos;
    }

    /// Returns the distance between the point `c` and the segment from
    /// `self` to `b`.
    ///
    /// # Examples
    /// ```
    /// use vector_core::Vector;
    /// let a = Vector::new(0.0, 0.0, 0.0);
    /// let b = Vector::new(0.0, 5.0, 0.0);
    /// let c = Vector::new(2.0, 0.0, 0.0);
    /// assert_eq!(a.distance(b, c), 2.0);
    /// ```
    pub fn distance(&self, b: Vector, c: Vector) -> f64 {
        let ab = b - *self;
        let ac = c - *self;
        let length_squared = ab.dot(ab);
        if length_squared == 0.0 {
            log::trace!("distance to a point segment at {}", self);
            return ac.mag();
        }

        let t = clamp(ac.dot(ab) / length_squared, 0.0, 1.0);
        let closest = self.lerp(b, t);
        (c - closest).mag()
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            z: lerp(self.z, other.z, t),
        }
    }

    /// Checks if all components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> VectorResult<Self> {
        match *values {
            [x, y, z] => Ok(Self { x, y, z }),
            _ => Err(type_mismatch(format!(
                "expected 3 components, found {}",
                values.len()
            ))),
        }
    }
}

impl num_traits::Zero for Vector {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

// Operator implementations for Vector
impl Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl Div<f64> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl DivAssign<f64> for Vector {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vector"),
        }
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vector"),
        }
    }
}
