//! Keyframed model animation.
//!
//! [`KeyFrames`] samples a single value track; [`TransformKeyFrames`] bundles
//! translation, rotation and scale tracks into a model matrix.

mod keyframes;

pub use keyframes::{Interpolator, KeyFrames, TransformKeyFrames};
