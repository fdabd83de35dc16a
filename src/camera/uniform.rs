use crate::camera::trackball::Trackball;
use crate::math::{Matrix4, Vector2};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-frame camera block: view and projection matrices plus the world-space
/// camera position used for specular lighting.
pub struct CameraUniform {
    /// World-to-view transform.
    pub view: [[f32; 4]; 4],
    /// View-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// Camera position in world space.
    pub w_camera_position: [f32; 3],
    /// Padding for 16-byte alignment.
    pub(crate) _pad: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-draw model block: the model matrix and its normal matrix.
pub struct ModelUniform {
    /// Object-to-world transform.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model's upper 3×3, as a 4×4.
    pub normal_matrix: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Camera block with identity matrices at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Matrix4::IDENTITY.to_cols_array_2d(),
            projection: Matrix4::IDENTITY.to_cols_array_2d(),
            w_camera_position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Refresh every field from the trackball for a window of the given
    /// size.
    pub fn update(&mut self, trackball: &Trackball, window: Vector2) {
        self.view = trackball.view_matrix().to_cols_array_2d();
        self.projection = trackball.projection_matrix(window).to_cols_array_2d();
        self.w_camera_position = trackball.camera_position().to_array();
    }
}

impl Default for ModelUniform {
    fn default() -> Self {
        Self::new(&Matrix4::IDENTITY)
    }
}

impl ModelUniform {
    /// Model block for `model`, deriving its normal matrix.
    #[must_use]
    pub fn new(model: &Matrix4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.normal_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn camera_block_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 144);
        let block = CameraUniform::new();
        let bytes: &[u8] = bytemuck::bytes_of(&block);
        assert_eq!(bytes.len(), 144);
    }

    #[test]
    fn camera_block_tracks_trackball() {
        let mut trackball = Trackball::new();
        trackball.zoom(-1.0, 600.0);
        let window = Vector2::new(800.0, 600.0);
        let mut block = CameraUniform::new();
        block.update(&trackball, window);
        assert_eq!(block.view, trackball.view_matrix().to_cols_array_2d());
        assert_eq!(
            block.projection,
            trackball.projection_matrix(window).to_cols_array_2d()
        );
        let position = Vector3::from(block.w_camera_position);
        assert!((position - Vector3::new(0.0, 0.0, trackball.distance())).length() < 1e-5);
    }

    #[test]
    fn model_block_derives_normal_matrix() {
        let model = Matrix4::translate(Vector3::new(1.0, 2.0, 3.0))
            * Matrix4::scale(2.0_f32);
        let block = ModelUniform::new(&model);
        assert_eq!(block.model, model.to_cols_array_2d());
        assert_eq!(block.normal_matrix[0][0], 0.5);
        assert_eq!(block.normal_matrix[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
