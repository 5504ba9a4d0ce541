//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians from the positive x axis.
    #[inline]
    pub fn from_angle(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` turns
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> F {
        self.x.hypot(self.y)
    }

    /// Unit-length copy, or `None` for a zero vector.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::zero() && mag.is_finite() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Rotated 90 degrees counter-clockwise (the left-hand normal).
    #[inline]
    pub fn perp_left(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotated 90 degrees clockwise (the right-hand normal).
    #[inline]
    pub fn perp_right(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Angle from the positive x axis, in `(-pi, pi]`.
    #[inline]
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }

    /// Quadrant index counter-clockwise from the positive x axis:
    /// 0 = NE, 1 = NW, 2 = SW, 3 = SE. Axis directions belong to the
    /// quadrant they open.
    #[inline]
    pub fn quadrant(self) -> u8 {
        match (self.x >= F::zero(), self.y >= F::zero()) {
            (true, true) => 0,
            (false, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
