//! Keyframe tracks.
//!
//! A track stores `(time, value)` pairs sorted by time and an interpolation
//! function. Sampling before the first key or after the last one holds the
//! boundary value; in between, the two bracketing keys are interpolated.

use std::ops::{Add, Mul, Sub};

use crate::error::QuatcamError;
use crate::math::{lerp, Matrix4, Quaternion, Vector3};

/// Interpolation between two keyed values at a fraction in `[0, 1]`.
pub type Interpolator<T> = fn(T, T, f32) -> T;

/// Values keyed by time and interpolated between keys.
#[derive(Debug, Clone)]
pub struct KeyFrames<T> {
    times: Vec<f32>,
    values: Vec<T>,
    interpolate: Interpolator<T>,
}

impl<T: Copy> KeyFrames<T> {
    /// Track from `(time, value)` pairs in any order.
    ///
    /// Fails with [`QuatcamError::EmptyKeyFrames`] when `keys` is empty.
    pub fn new(
        keys: impl IntoIterator<Item = (f32, T)>,
        interpolate: Interpolator<T>,
    ) -> Result<Self, QuatcamError> {
        let mut keys: Vec<(f32, T)> = keys.into_iter().collect();
        if keys.is_empty() {
            return Err(QuatcamError::EmptyKeyFrames);
        }
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (times, values) = keys.into_iter().unzip();
        Ok(Self {
            times,
            values,
            interpolate,
        })
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; construction rejects empty tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the first and last key.
    #[must_use]
    pub fn time_range(&self) -> (f32, f32) {
        (self.times[0], self.times[self.times.len() - 1])
    }

    /// Sample the track at `time`. A NaN time yields the first key.
    #[must_use]
    pub fn value(&self, time: f32) -> T {
        let last = self.times.len() - 1;
        if time.is_nan() || time <= self.times[0] {
            return self.values[0];
        }
        if time >= self.times[last] {
            return self.values[last];
        }

        // times[index - 1] < time <= times[index], so the span is non-empty.
        let index = self.times.partition_point(|&t| t < time);
        let (t0, t1) = (self.times[index - 1], self.times[index]);
        let fraction = (time - t0) / (t1 - t0);
        (self.interpolate)(self.values[index - 1], self.values[index], fraction)
    }
}

impl<T> KeyFrames<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    /// Track interpolated with [`lerp`].
    pub fn linear(
        keys: impl IntoIterator<Item = (f32, T)>,
    ) -> Result<Self, QuatcamError> {
        Self::new(keys, lerp::<T>)
    }
}

impl KeyFrames<Quaternion> {
    /// Rotation track interpolated with [`Quaternion::slerp`].
    pub fn spherical(
        keys: impl IntoIterator<Item = (f32, Quaternion)>,
    ) -> Result<Self, QuatcamError> {
        Self::new(keys, Quaternion::slerp)
    }
}

/// Translation, rotation and uniform-scale tracks combined into a model
/// matrix.
#[derive(Debug, Clone)]
pub struct TransformKeyFrames {
    translation: KeyFrames<Vector3>,
    rotation: KeyFrames<Quaternion>,
    scale: KeyFrames<f32>,
    period: Option<f32>,
}

impl TransformKeyFrames {
    /// Combine three keyed tracks. Translation and scale are lerped,
    /// rotation is slerped.
    pub fn new(
        translation: impl IntoIterator<Item = (f32, Vector3)>,
        rotation: impl IntoIterator<Item = (f32, Quaternion)>,
        scale: impl IntoIterator<Item = (f32, f32)>,
    ) -> Result<Self, QuatcamError> {
        Ok(Self {
            translation: KeyFrames::linear(translation)?,
            rotation: KeyFrames::spherical(rotation)?,
            scale: KeyFrames::linear(scale)?,
            period: None,
        })
    }

    /// Loop the animation: sample times are taken modulo `period`.
    /// Non-positive periods disable looping.
    #[must_use]
    pub fn looping(mut self, period: f32) -> Self {
        self.period = (period > 0.0).then_some(period);
        self
    }

    /// Model matrix `translate * rotate * scale` at `time`.
    #[must_use]
    pub fn value(&self, time: f32) -> Matrix4 {
        let time = match self.period {
            Some(period) => time.rem_euclid(period),
            None => time,
        };
        Matrix4::translate(self.translation.value(time))
            * self.rotation.value(time).to_matrix()
            * Matrix4::scale(self.scale.value(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn empty_track_is_rejected() {
        let keys: Vec<(f32, f32)> = Vec::new();
        assert!(matches!(
            KeyFrames::linear(keys),
            Err(QuatcamError::EmptyKeyFrames)
        ));
    }

    #[test]
    fn holds_boundary_values() {
        let track = KeyFrames::linear([(1.0, 10.0_f32), (3.0, 30.0)]).unwrap();
        assert_eq!(track.value(-5.0), 10.0);
        assert_eq!(track.value(1.0), 10.0);
        assert_eq!(track.value(3.0), 30.0);
        assert_eq!(track.value(99.0), 30.0);
    }

    #[test]
    fn interpolates_between_bracketing_keys() {
        let track =
            KeyFrames::linear([(0.0, 1.0_f32), (2.0, 3.0), (4.0, 11.0)]).unwrap();
        assert!((track.value(1.0) - 2.0).abs() < EPS);
        assert!((track.value(2.0) - 3.0).abs() < EPS);
        assert!((track.value(3.0) - 7.0).abs() < EPS);
    }

    #[test]
    fn unsorted_keys_are_sorted() {
        let track =
            KeyFrames::linear([(4.0, 40.0_f32), (0.0, 0.0), (2.0, 20.0)]).unwrap();
        assert_eq!(track.len(), 3);
        assert_eq!(track.time_range(), (0.0, 4.0));
        assert!((track.value(3.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn single_key_is_constant() {
        let track = KeyFrames::linear([(2.0, Vector3::X)]).unwrap();
        assert_eq!(track.value(0.0), Vector3::X);
        assert_eq!(track.value(5.0), Vector3::X);
    }

    #[test]
    fn custom_interpolator_is_used() {
        fn step(a: f32, _b: f32, _t: f32) -> f32 {
            a
        }
        let track = KeyFrames::new([(0.0, 1.0_f32), (1.0, 2.0)], step).unwrap();
        assert_eq!(track.value(0.9), 1.0);
    }

    #[test]
    fn rotation_track_slerps() {
        let track = KeyFrames::spherical([
            (0.0, Quaternion::IDENTITY),
            (1.0, Quaternion::from_axis_angle(Vector3::Y, 90.0_f32)),
        ])
        .unwrap();
        let mid = track.value(0.5);
        let expected = Quaternion::from_axis_angle(Vector3::Y, 45.0_f32);
        assert!((mid.dot(expected).abs() - 1.0).abs() < EPS);
    }

    #[test]
    fn transform_composes_translate_rotate_scale() {
        let anim = TransformKeyFrames::new(
            [(0.0, Vector3::ZERO), (2.0, Vector3::new(4.0, 0.0, 0.0))],
            [
                (0.0, Quaternion::IDENTITY),
                (2.0, Quaternion::from_axis_angle(Vector3::Z, 120.0_f32)),
            ],
            [(0.0, 1.0), (2.0, 3.0)],
        )
        .unwrap();

        let m = anim.value(1.0);
        // Scale 2, turn 60 degrees about Z, then move to x = 2.
        let p = m.transform_point(Vector3::X);
        let expected = Vector3::new(3.0, 3.0_f32.sqrt(), 0.0);
        assert!((p - expected).length() < 1e-4);
    }

    #[test]
    fn non_finite_times_do_not_panic() {
        let track =
            KeyFrames::linear([(0.0, 1.0_f32), (1.0, 2.0), (2.0, 4.0)]).unwrap();
        assert_eq!(track.value(f32::NAN), 1.0);
        assert_eq!(track.value(f32::NEG_INFINITY), 1.0);
        assert_eq!(track.value(f32::INFINITY), 4.0);

        let anim = TransformKeyFrames::new(
            [(0.0, Vector3::ZERO), (4.0, Vector3::new(8.0, 0.0, 0.0))],
            [(0.0, Quaternion::IDENTITY)],
            [(0.0, 1.0)],
        )
        .unwrap()
        .looping(4.0);
        assert_eq!(anim.value(f32::INFINITY).translation(), Vector3::ZERO);
    }

    #[test]
    fn looping_wraps_time() {
        let anim = TransformKeyFrames::new(
            [(0.0, Vector3::ZERO), (10.0, Vector3::new(10.0, 0.0, 0.0))],
            [(0.0, Quaternion::IDENTITY)],
            [(0.0, 1.0)],
        )
        .unwrap()
        .looping(10.0);
        let a = anim.value(3.0).translation();
        let b = anim.value(13.0).translation();
        let c = anim.value(-7.0).translation();
        assert!((a - b).length() < EPS);
        assert!((a - c).length() < EPS);
        assert!((a.x - 3.0).abs() < EPS);
    }
}
