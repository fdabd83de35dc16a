use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Trackball", inline)]
#[serde(default)]
/// Initial placement, projection and sensitivity of the trackball camera.
///
/// Angles are in degrees.
pub struct TrackballOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Initial distance from the camera to the trackball center.
    #[schemars(title = "Distance", range(min = 0.001, max = 1000.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Initial rotation about Z.
    #[schemars(skip)]
    pub yaw: f32,
    /// Initial rotation about Y.
    #[schemars(skip)]
    pub pitch: f32,
    /// Initial rotation about X.
    #[schemars(skip)]
    pub roll: f32,
    /// Radius of the virtual ball in normalized window units.
    #[schemars(title = "Ball Radius", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub ball_radius: f32,
    /// Zoom sensitivity: scroll units per window-size of exponential falloff.
    #[schemars(title = "Zoom Speed", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub zoom_speed: f32,
    /// Pan distance per pixel, per unit of camera distance.
    #[schemars(title = "Pan Speed", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub pan_speed: f32,
    /// Closest the camera may get to the center.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the camera may get from the center.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Near plane as a fraction of the current distance.
    #[schemars(skip)]
    pub near_ratio: f32,
    /// Far plane as a multiple of the current distance.
    #[schemars(skip)]
    pub far_ratio: f32,
    /// Keyboard orbit step in degrees.
    #[schemars(title = "Orbit Step", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub orbit_step: f32,
}

impl Default for TrackballOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0,
            distance: 3.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            ball_radius: 0.8,
            zoom_speed: 50.0,
            pan_speed: 0.001,
            min_distance: 0.001,
            max_distance: 1.0e4,
            near_ratio: 0.01,
            far_ratio: 35.0,
            orbit_step: 5.0,
        }
    }
}
