//! Vector, quaternion and matrix algebra for the camera pipeline.
//!
//! Everything here is a `Copy` value type with total operations: degenerate
//! inputs (zero-length vectors, nearly identical slerp endpoints) produce a
//! defined result rather than NaNs or panics.

/// Angles with an explicit degrees/radians unit.
pub mod angle;
/// 4×4 homogeneous transform matrices and their builders.
pub mod matrix;
/// Rotation quaternions.
pub mod quaternion;
/// Fixed-size vectors and generic linear interpolation.
pub mod vector;

pub use angle::{sincos, Angle};
pub use matrix::{Matrix4, ScaleFactors};
pub use quaternion::Quaternion;
pub use vector::{lerp, Vector2, Vector3, Vector4};
