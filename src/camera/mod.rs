//! Camera system for interactive 3D viewing.
//!
//! Provides a quaternion virtual trackball with rotation, panning and zoom,
//! plus the uniform blocks a shading program consumes each frame.

/// Uniform buffer layouts for camera and model matrices.
pub mod uniform;

mod trackball;

pub use trackball::Trackball;
pub use uniform::{CameraUniform, ModelUniform};
