//! Rotation quaternions.
//!
//! Components are packed `(x, y, z, w)` with `w` the real part. Only
//! unit-norm quaternions are rotations; the rotation constructors normalize
//! their inputs, raw [`Quaternion::new`] does not, so intermediate values in
//! interpolation math may be general 4-vectors.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::angle::{sincos, Angle};
use super::matrix::Matrix4;
use super::vector::{lerp, Vector3, Vector4};

/// Above this cosine the two slerp endpoints are treated as identical and
/// interpolated linearly.
const SLERP_LINEAR_THRESHOLD: f32 = 1.0 - 1e-6;

/// A quaternion `x·i + y·j + z·k + w`.
#[repr(C)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Quaternion {
    /// i component.
    pub x: f32,
    /// j component.
    pub y: f32,
    /// k component.
    pub z: f32,
    /// Real part.
    pub w: f32,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Pack raw components. No normalization is applied.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Pack a vector part with a real part of 1.
    #[inline]
    #[must_use]
    pub const fn from_vector(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Right-handed rotation of `angle` about `axis`.
    ///
    /// The axis is normalized first. A zero axis yields a pure-real
    /// quaternion `(0, 0, 0, cos(angle/2))`.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, angle: impl Into<Angle>) -> Self {
        let (sin, cos) = sincos(angle.into().half());
        let axis = axis.normalized() * sin;
        Self::new(axis.x, axis.y, axis.z, cos)
    }

    /// Rotation from Tait-Bryan angles: `roll` about X, then `pitch` about
    /// Y, then `yaw` about Z (`yaw ∘ pitch ∘ roll`).
    #[must_use]
    pub fn from_euler(
        yaw: impl Into<Angle>,
        pitch: impl Into<Angle>,
        roll: impl Into<Angle>,
    ) -> Self {
        let (siy, coy) = sincos(yaw.into().half());
        let (sip, cop) = sincos(pitch.into().half());
        let (sir, cor) = sincos(roll.into().half());
        Self::new(
            coy * sir * cop - siy * cor * sip,
            coy * cor * sip + siy * sir * cop,
            siy * cor * cop - coy * sir * sip,
            coy * cor * cop + siy * sir * sip,
        )
    }

    /// Four-dimensional dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Norm of the quaternion.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit quaternion in the same direction; zero is returned unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            self
        }
    }

    /// Conjugate; the inverse rotation for unit quaternions.
    #[inline]
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Matrix `L(q)` such that `L(q) * p == q * p` with quaternions read as
    /// `(x, y, z, w)` column vectors.
    #[must_use]
    pub fn left_matrix(self) -> Matrix4 {
        let Self { x, y, z, w } = self;
        Matrix4::from_rows([
            [w, -z, y, x],
            [z, w, -x, y],
            [-y, x, w, z],
            [-x, -y, -z, w],
        ])
    }

    /// Homogeneous rotation matrix.
    ///
    /// Uses the unit-quaternion formula without normalizing; a non-unit
    /// input produces a matrix that is not orthonormal.
    #[must_use]
    pub fn to_matrix(self) -> Matrix4 {
        let Self { x, y, z, w } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Matrix4::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy), 0.0],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx), 0.0],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotate a vector by this (unit) quaternion.
    #[must_use]
    pub fn rotate(self, v: Vector3) -> Vector3 {
        let u = Vector3::new(self.x, self.y, self.z);
        let s = self.w;
        u * (2.0 * u.dot(v)) + v * (s * s - u.dot(u)) + u.cross(v) * (2.0 * s)
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Both endpoints are normalized. `t = 0` yields `self`, `t = 1` yields
    /// `other` (possibly negated, which is the same rotation). Nearly
    /// identical endpoints fall back to a normalized lerp, since the arc
    /// construction divides by `sin(theta)`.
    #[must_use]
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let q0 = self.normalized();
        let mut q1 = other.normalized();
        let mut dot = q0.dot(q1);
        if dot < 0.0 {
            q1 = -q1;
            dot = -dot;
        }

        if dot > SLERP_LINEAR_THRESHOLD {
            return lerp(q0, q1, t).normalized();
        }

        let theta = dot.clamp(-1.0, 1.0).acos() * t;
        // Unit quaternion orthogonal to q0 in the q0/q1 plane.
        let ortho = (q1 - q0 * dot).normalized();
        q0 * theta.cos() + ortho * theta.sin()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

impl From<Vector4> for Quaternion {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Vector4 {
    fn from(q: Quaternion) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
