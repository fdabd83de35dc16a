//! The trackball's complete interactive vocabulary.
//!
//! Every camera change, whether from a mouse gesture, a key press or a
//! replay script, is a `TrackballCommand` applied to a
//! [`Trackball`](crate::camera::Trackball).

use serde::{Deserialize, Serialize};

use crate::camera::Trackball;
use crate::math::{Angle, Vector2, Vector3};

/// Direction of a keyboard orbit step, as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitDirection {
    /// Turn the scene's front towards the left.
    Left,
    /// Turn the scene's front towards the right.
    Right,
    /// Tilt the scene's front upwards.
    Up,
    /// Tilt the scene's front downwards.
    Down,
}

impl OrbitDirection {
    /// View-space axis and signed unit angle of this step.
    fn axis_and_sign(self) -> (Vector3, f32) {
        match self {
            Self::Left => (Vector3::Y, -1.0),
            Self::Right => (Vector3::Y, 1.0),
            Self::Up => (Vector3::X, -1.0),
            Self::Down => (Vector3::X, 1.0),
        }
    }
}

/// A single mutation of trackball state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackballCommand {
    /// Rotate by dragging between two positions (bottom-left origin).
    Drag {
        /// Previous pointer position.
        from: Vector2,
        /// Current pointer position.
        to: Vector2,
        /// Window size in pixels.
        window: Vector2,
    },
    /// Pan by dragging between two positions.
    Pan {
        /// Previous pointer position.
        from: Vector2,
        /// Current pointer position.
        to: Vector2,
    },
    /// Zoom by a scroll amount relative to a reference size.
    Zoom {
        /// Scroll amount (positive = closer).
        delta: f32,
        /// Reference size, usually the window height.
        size: f32,
    },
    /// Rotate one keyboard step.
    Orbit {
        /// Step direction.
        direction: OrbitDirection,
    },
    /// Restore the initial camera.
    Reset,
}

impl TrackballCommand {
    /// Apply this command to `trackball`.
    pub fn apply(self, trackball: &mut Trackball) {
        match self {
            Self::Drag { from, to, window } => trackball.drag(from, to, window),
            Self::Pan { from, to } => trackball.pan(from, to),
            Self::Zoom { delta, size } => trackball.zoom(delta, size),
            Self::Orbit { direction } => {
                let (axis, sign) = direction.axis_and_sign();
                let step = trackball.options().orbit_step;
                trackball.orbit(axis, Angle::degrees(sign * step));
            }
            Self::Reset => trackball.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_directions_match_drag_directions() {
        let mut tb = Trackball::new();
        TrackballCommand::Orbit {
            direction: OrbitDirection::Right,
        }
        .apply(&mut tb);
        assert!(tb.orientation().rotate(Vector3::Z).x > 0.0);

        let mut tb = Trackball::new();
        TrackballCommand::Orbit {
            direction: OrbitDirection::Up,
        }
        .apply(&mut tb);
        assert!(tb.orientation().rotate(Vector3::Z).y > 0.0);
    }

    #[test]
    fn opposite_orbits_cancel() {
        let mut tb = Trackball::new();
        for direction in [OrbitDirection::Left, OrbitDirection::Right] {
            TrackballCommand::Orbit { direction }.apply(&mut tb);
        }
        let front = tb.orientation().rotate(Vector3::Z);
        assert!((front - Vector3::Z).length() < 1e-5);
    }

    #[test]
    fn orbit_step_uses_options() {
        let mut tb = Trackball::new();
        TrackballCommand::Orbit {
            direction: OrbitDirection::Down,
        }
        .apply(&mut tb);
        let front = tb.orientation().rotate(Vector3::Z);
        let step = tb.options().orbit_step.to_radians();
        assert!((front.dot(Vector3::Z) - step.cos()).abs() < 1e-5);
    }

    #[test]
    fn reset_command_resets() {
        let mut tb = Trackball::new();
        TrackballCommand::Zoom {
            delta: 2.0,
            size: 100.0,
        }
        .apply(&mut tb);
        TrackballCommand::Reset.apply(&mut tb);
        assert_eq!(tb.distance(), 3.0);
    }
}
