//! Angles with an explicit unit.
//!
//! Builders across the crate take `impl Into<Angle>`; an `f32` converts as
//! degrees, so `Matrix4::rotate(axis, 90.0_f32)` is a quarter turn while
//! `Matrix4::rotate(axis, Angle::radians(FRAC_PI_2))` spells out radians.

use serde::{Deserialize, Serialize};

/// A planar angle, stored in radians.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize,
)]
#[serde(from = "f32", into = "f32")]
pub struct Angle {
    radians: f32,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Angle from a value in degrees.
    #[inline]
    #[must_use]
    pub fn degrees(degrees: f32) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Angle from a value in radians.
    #[inline]
    #[must_use]
    pub const fn radians(radians: f32) -> Self {
        Self { radians }
    }

    /// Value in radians.
    #[inline]
    #[must_use]
    pub const fn as_radians(self) -> f32 {
        self.radians
    }

    /// Value in degrees.
    #[inline]
    #[must_use]
    pub fn as_degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    /// Half of this angle, as used by quaternion constructors.
    #[inline]
    #[must_use]
    pub fn half(self) -> Self {
        Self {
            radians: self.radians * 0.5,
        }
    }
}

/// Plain numbers are read as degrees.
impl From<f32> for Angle {
    #[inline]
    fn from(degrees: f32) -> Self {
        Self::degrees(degrees)
    }
}

/// Serialized form is degrees, matching the `From<f32>` convention.
impl From<Angle> for f32 {
    #[inline]
    fn from(angle: Angle) -> Self {
        angle.as_degrees()
    }
}

/// `(sin, cos)` of an angle.
#[inline]
#[must_use]
pub fn sincos(angle: impl Into<Angle>) -> (f32, f32) {
    angle.into().as_radians().sin_cos()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn bare_numbers_are_degrees() {
        let a = Angle::from(180.0_f32);
        assert!((a.as_radians() - PI).abs() < 1e-6);
    }

    #[test]
    fn sincos_accepts_either_unit() {
        let (s, c) = sincos(90.0_f32);
        assert!((s - 1.0).abs() < 1e-6);
        assert!(c.abs() < 1e-6);

        let (s, c) = sincos(Angle::radians(FRAC_PI_2));
        assert!((s - 1.0).abs() < 1e-6);
        assert!(c.abs() < 1e-6);
    }

    #[test]
    fn serializes_in_degrees() {
        let json = serde_json::to_string(&Angle::degrees(45.0)).unwrap();
        let value: f32 = json.parse().unwrap();
        assert!((value - 45.0).abs() < 1e-4);
    }
}
