//! World-space vector type.
//!
//! The grid lies on the XZ plane: [`Vec3::RIGHT`] is the direction of
//! increasing grid `x`, [`Vec3::FORWARD`] the direction of increasing grid
//! `y`. The Y component is carried through untouched so callers can keep
//! their own height values.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 3D world-space position or direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Grid `x` axis.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// Grid `y` axis.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids the sqrt).
    #[inline]
    pub fn distance_squared(self, other: Vec3) -> f32 {
        let d = self - other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// Length of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.distance(Self::ZERO)
    }

    /// Move from `self` toward `target` by at most `max_step`, never
    /// overshooting.
    pub fn move_towards(self, target: Vec3, max_step: f32) -> Vec3 {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_step || dist == 0.0 {
            target
        } else {
            self + delta * (max_step / dist)
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance_squared(a), 25.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a + Vec3::RIGHT, Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(a - Vec3::FORWARD * 3.0, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn move_towards_stops_at_target() {
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 0.0, 2.0);
        assert_eq!(a.move_towards(b, 0.5), Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(a.move_towards(b, 5.0), b);
        assert_eq!(b.move_towards(b, 1.0), b);
    }
}
