use crate::math::{Angle, Matrix4, Quaternion, Vector2, Vector3};
use crate::options::TrackballOptions;

/// Quaternion virtual trackball.
///
/// Holds the camera orientation, its distance to the trackball center and a
/// screen-space pan offset. Pointer drags rotate the scene as if it were a
/// ball under the cursor; increments are composed in view space, so a drag
/// always turns the scene the way the pointer moves no matter how it is
/// already oriented.
///
/// The trackball is plain owned data. One render loop owns it, feeds it input
/// once per event and reads the matrices once per frame.
///
/// # Example
///
/// ```
/// use quatcam::camera::Trackball;
/// use quatcam::math::Vector2;
///
/// let mut trackball = Trackball::new();
/// let window = Vector2::new(640.0, 480.0);
/// trackball.drag(Vector2::new(320.0, 240.0), Vector2::new(360.0, 250.0), window);
/// trackball.zoom(1.0, window.y);
///
/// let view = trackball.view_matrix();
/// let projection = trackball.projection_matrix(window);
/// # let _ = projection * view;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trackball {
    orientation: Quaternion,
    distance: f32,
    pan: Vector2,
    initial_orientation: Quaternion,
    initial_distance: f32,
    options: TrackballOptions,
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new()
    }
}

impl Trackball {
    /// Trackball with default options: no rotation, distance 3.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&TrackballOptions::default())
    }

    /// Trackball placed and tuned by `options`.
    #[must_use]
    pub fn from_options(options: &TrackballOptions) -> Self {
        let orientation = Quaternion::from_euler(
            Angle::degrees(options.yaw),
            Angle::degrees(options.pitch),
            Angle::degrees(options.roll),
        );
        let distance = clamp_distance(options.distance, options);
        Self {
            orientation,
            distance,
            pan: Vector2::ZERO,
            initial_orientation: orientation,
            initial_distance: distance,
            options: options.clone(),
        }
    }

    /// Current orientation (unit quaternion).
    #[must_use]
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Current distance from the camera to the trackball center.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Accumulated pan offset in view space.
    #[must_use]
    pub fn pan_offset(&self) -> Vector2 {
        self.pan
    }

    /// Options this trackball was built with.
    #[must_use]
    pub fn options(&self) -> &TrackballOptions {
        &self.options
    }

    /// Replace the tuning options without disturbing the current state.
    ///
    /// The distance is re-clamped to the new limits.
    pub fn set_options(&mut self, options: TrackballOptions) {
        self.distance = clamp_distance(self.distance, &options);
        self.options = options;
    }

    /// Rotate by a pointer drag from `old` to `new`.
    ///
    /// Positions are window pixels with the origin at the bottom-left;
    /// `window` is the window size. Both points are projected onto the
    /// virtual ball and the rotation taking one to the other is prepended
    /// to the orientation. Dragging onto the same point does nothing.
    pub fn drag(&mut self, old: Vector2, new: Vector2, window: Vector2) {
        if window.x <= 0.0 || window.y <= 0.0 {
            log::trace!("ignoring drag in empty window {window:?}");
            return;
        }

        let old = self.project_to_ball(to_unit_square(old, window)).normalized();
        let new = self.project_to_ball(to_unit_square(new, window)).normalized();

        let axis = old.cross(new);
        if axis.length_squared() == 0.0 {
            return;
        }
        let angle = old.dot(new).clamp(-1.0, 1.0).acos();

        let increment = Quaternion::from_axis_angle(axis, Angle::radians(angle));
        self.orientation = (increment * self.orientation).normalized();
    }

    /// Move towards (`delta > 0`) or away from the center.
    ///
    /// The distance falls off exponentially in `delta / size`, where `size`
    /// is usually the window height, and never drops below
    /// `min_distance` or grows past `max_distance`.
    pub fn zoom(&mut self, delta: f32, size: f32) {
        if size <= 0.0 || !delta.is_finite() {
            return;
        }
        let factor = (-self.options.zoom_speed * delta / size).exp();
        self.distance = clamp_distance(self.distance * factor, &self.options);
    }

    /// Slide the view by a pointer drag from `old` to `new`.
    ///
    /// The offset scales with the current distance so the scene tracks the
    /// pointer at any zoom level.
    pub fn pan(&mut self, old: Vector2, new: Vector2) {
        self.pan += (new - old) * (self.options.pan_speed * self.distance);
    }

    /// Rotate by `angle` about a view-space `axis`, as the keyboard does.
    pub fn orbit(&mut self, axis: Vector3, angle: impl Into<Angle>) {
        let increment = Quaternion::from_axis_angle(axis, angle);
        self.orientation = (increment * self.orientation).normalized();
    }

    /// Restore the initial orientation and distance and clear the pan.
    pub fn reset(&mut self) {
        log::debug!("trackball reset");
        self.orientation = self.initial_orientation;
        self.distance = self.initial_distance;
        self.pan = Vector2::ZERO;
    }

    /// Rotation-only matrix of the current orientation.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        self.orientation.to_matrix()
    }

    /// World-to-view transform: rotate, then push back along -z by the
    /// distance and offset by the pan.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::translate(self.pan.extend(-self.distance)) * self.matrix()
    }

    /// Perspective projection for a window of the given size.
    ///
    /// The clipping planes follow the distance so depth precision stays
    /// usable when zoomed far in or out.
    #[must_use]
    pub fn projection_matrix(&self, window: Vector2) -> Matrix4 {
        let aspect = if window.x > 0.0 && window.y > 0.0 {
            window.x / window.y
        } else {
            1.0
        };
        Matrix4::perspective(
            Angle::degrees(self.options.fovy),
            aspect,
            self.distance * self.options.near_ratio,
            self.distance * self.options.far_ratio,
        )
    }

    /// Camera position in world space (translation of the inverse view).
    #[must_use]
    pub fn camera_position(&self) -> Vector3 {
        let eye_offset = self.pan.extend(-self.distance);
        self.orientation.conjugate().rotate(-eye_offset)
    }

    /// Lift a point of the `[-1, 1]²` square onto the virtual ball: a
    /// hemisphere near the center, a hyperbolic sheet further out. The two
    /// meet at `|p| = r / √2` with equal height, so there is no seam.
    fn project_to_ball(&self, p: Vector2) -> Vector3 {
        let r2 = self.options.ball_radius * self.options.ball_radius;
        let p2 = p.length_squared();
        let z = if 2.0 * p2 <= r2 {
            (r2 - p2).sqrt()
        } else {
            r2 / (2.0 * p2.sqrt())
        };
        p.extend(z)
    }
}

/// Keep a distance within the configured limits; the floor wins if they
/// cross.
fn clamp_distance(distance: f32, options: &TrackballOptions) -> f32 {
    distance.min(options.max_distance).max(options.min_distance)
}

/// Window pixels to `[-1, 1]²` with the origin at the window center.
fn to_unit_square(pos: Vector2, window: Vector2) -> Vector2 {
    Vector2::new(
        (2.0 * pos.x - window.x) / window.x,
        (2.0 * pos.y - window.y) / window.y,
    )
}
