//! 4×4 homogeneous transform matrices.
//!
//! Storage is column-major (`cols[c][r]`), the layout GPU uniform buffers
//! expect. Builders are written row by row through [`Matrix4::from_rows`] so
//! they read like the textbook formulas. Matrices act on column vectors and
//! compose right to left: `projection * view * model * point`.

use std::ops::{Mul, MulAssign};

use serde::{Deserialize, Serialize};

use super::angle::{sincos, Angle};
use super::vector::{Vector3, Vector4};

/// Determinants below this magnitude make a matrix singular.
const SINGULAR_EPSILON: f32 = 1e-12;

/// A 4×4 `f32` matrix.
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
pub struct Matrix4 {
    cols: [[f32; 4]; 4],
}

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Build from column arrays.
    #[inline]
    #[must_use]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Build from row arrays.
    #[must_use]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { cols: rows }.transpose()
    }

    /// Column arrays, ready for a uniform buffer.
    #[inline]
    #[must_use]
    pub const fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.cols
    }

    /// Row arrays.
    #[must_use]
    pub const fn to_rows_array_2d(&self) -> [[f32; 4]; 4] {
        self.transpose().cols
    }

    /// Column `i`.
    #[inline]
    #[must_use]
    pub fn col(&self, i: usize) -> Vector4 {
        Vector4::from(self.cols[i])
    }

    /// Row `i`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> Vector4 {
        Vector4::new(
            self.cols[0][i],
            self.cols[1][i],
            self.cols[2][i],
            self.cols[3][i],
        )
    }

    /// Transposed matrix.
    #[must_use]
    pub const fn transpose(&self) -> Self {
        let c = &self.cols;
        Self {
            cols: [
                [c[0][0], c[1][0], c[2][0], c[3][0]],
                [c[0][1], c[1][1], c[2][1], c[3][1]],
                [c[0][2], c[1][2], c[2][2], c[3][2]],
                [c[0][3], c[1][3], c[2][3], c[3][3]],
            ],
        }
    }

    /// Translation by `offset`: a [`Vector3`], `[f32; 3]` or 3-tuple.
    #[must_use]
    pub fn translate(offset: impl Into<Vector3>) -> Self {
        let Vector3 { x, y, z } = offset.into();
        Self::from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Axis-aligned scale. See [`ScaleFactors`] for the accepted forms.
    #[must_use]
    pub fn scale(factors: impl Into<ScaleFactors>) -> Self {
        let ScaleFactors(Vector3 { x, y, z }) = factors.into();
        Self::from_rows([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation of `angle` about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized first.
    #[must_use]
    pub fn rotate(axis: Vector3, angle: impl Into<Angle>) -> Self {
        let Vector3 { x, y, z } = axis.normalized();
        let (s, c) = sincos(angle);
        let nc = 1.0 - c;
        Self::from_rows([
            [x * x * nc + c, x * y * nc - z * s, x * z * nc + y * s, 0.0],
            [y * x * nc + z * s, y * y * nc + c, y * z * nc - x * s, 0.0],
            [x * z * nc - y * s, y * z * nc + x * s, z * z * nc + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// OpenGL orthographic projection onto the `[-1, 1]` clip cube.
    #[must_use]
    pub fn ortho(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = far - near;
        Self::from_rows([
            [2.0 / dx, 0.0, 0.0, -(right + left) / dx],
            [0.0, 2.0 / dy, 0.0, -(top + bottom) / dy],
            [0.0, 0.0, -2.0 / dz, -(far + near) / dz],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// OpenGL perspective frustum. `zmin`/`zmax` are positive distances to
    /// the near and far planes along -z.
    #[must_use]
    pub fn frustum(
        xmin: f32,
        xmax: f32,
        ymin: f32,
        ymax: f32,
        zmin: f32,
        zmax: f32,
    ) -> Self {
        let a = (xmax + xmin) / (xmax - xmin);
        let b = (ymax + ymin) / (ymax - ymin);
        let c = -(zmax + zmin) / (zmax - zmin);
        let d = -2.0 * zmax * zmin / (zmax - zmin);
        let sx = 2.0 * zmin / (xmax - xmin);
        let sy = 2.0 * zmin / (ymax - ymin);
        Self::from_rows([
            [sx, 0.0, a, 0.0],
            [0.0, sy, b, 0.0],
            [0.0, 0.0, c, d],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Symmetric perspective projection mapping `[near, far]` along -z onto
    /// clip z `[-1, 1]`.
    #[must_use]
    pub fn perspective(
        fovy: impl Into<Angle>,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let scale = 1.0 / (fovy.into().as_radians() * 0.5).tan();
        let sx = scale / aspect;
        let zz = (far + near) / (near - far);
        let zw = 2.0 * far * near / (near - far);
        Self::from_rows([
            [sx, 0.0, 0.0, 0.0],
            [0.0, scale, 0.0, 0.0],
            [0.0, 0.0, zz, zw],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// View matrix placing the camera at `eye` looking towards `target`.
    ///
    /// `up` must not be parallel to `target - eye`; the basis is undefined in
    /// that case.
    #[must_use]
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let forward = (target - eye).normalized();
        let right = forward.cross(up.normalized()).normalized();
        let up = right.cross(forward);
        let rotation = Self::from_rows([
            [right.x, right.y, right.z, 0.0],
            [up.x, up.y, up.z, 0.0],
            [-forward.x, -forward.y, -forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        rotation * Self::translate(-eye)
    }

    /// Translation part (the last column).
    #[inline]
    #[must_use]
    pub fn translation(&self) -> Vector3 {
        self.col(3).truncate()
    }

    /// Transform a point (`w = 1`), ignoring any projective row.
    #[must_use]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        (*self * point.extend(1.0)).truncate()
    }

    /// Transform a direction (`w = 0`).
    #[must_use]
    pub fn transform_vector(&self, vector: Vector3) -> Vector3 {
        (*self * vector.extend(0.0)).truncate()
    }

    /// Transform a point and apply the perspective divide.
    #[must_use]
    pub fn project_point(&self, point: Vector3) -> Vector3 {
        let clip = *self * point.extend(1.0);
        if clip.w == 0.0 {
            clip.truncate()
        } else {
            clip.truncate() / clip.w
        }
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        glam::Mat4::from(*self).determinant()
    }

    /// Inverse, or `None` when the matrix is singular or not finite.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let m = glam::Mat4::from(*self);
        let det = m.determinant();
        (det.is_finite() && det.abs() > SINGULAR_EPSILON)
            .then(|| m.inverse().into())
    }

    /// Matrix for transforming surface normals: the inverse-transpose of the
    /// upper-left 3×3 block, embedded in a 4×4 with no translation.
    ///
    /// For a singular block (e.g. a zero scale keyframe) the cofactor matrix
    /// is returned unscaled; it still points normals the right way wherever
    /// the block has rank two.
    #[must_use]
    pub fn normal_matrix(&self) -> Self {
        let r0 = self.row(0).truncate();
        let r1 = self.row(1).truncate();
        let r2 = self.row(2).truncate();

        // Rows of the cofactor matrix, which is inverse-transpose times det.
        let c0 = r1.cross(r2);
        let c1 = r2.cross(r0);
        let c2 = r0.cross(r1);
        let det = r0.dot(c0);
        let inv_det = if det.abs() > SINGULAR_EPSILON {
            1.0 / det
        } else {
            1.0
        };

        let (c0, c1, c2) = (c0 * inv_det, c1 * inv_det, c2 * inv_det);
        Self::from_rows([
            [c0.x, c0.y, c0.z, 0.0],
            [c1.x, c1.y, c1.z, 0.0],
            [c2.x, c2.y, c2.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Element-wise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

/// Per-axis factors for [`Matrix4::scale`].
///
/// Converts from a single `f32` (uniform), an `(x, y)` pair whose z takes
/// the x factor, an `(x, y, z)` tuple, an `[f32; 3]` or a [`Vector3`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors(pub Vector3);

impl From<f32> for ScaleFactors {
    fn from(factor: f32) -> Self {
        Self(Vector3::new(factor, factor, factor))
    }
}

impl From<(f32, f32)> for ScaleFactors {
    fn from((x, y): (f32, f32)) -> Self {
        Self(Vector3::new(x, y, x))
    }
}

impl From<(f32, f32, f32)> for ScaleFactors {
    fn from(xyz: (f32, f32, f32)) -> Self {
        Self(xyz.into())
    }
}

impl From<[f32; 3]> for ScaleFactors {
    fn from(xyz: [f32; 3]) -> Self {
        Self(xyz.into())
    }
}

impl From<Vector3> for ScaleFactors {
    fn from(v: Vector3) -> Self {
        Self(v)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            *col = (self * rhs.col(c)).to_array();
        }
        Self { cols }
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        self.col(0) * v.x + self.col(1) * v.y + self.col(2) * v.z + self.col(3) * v.w
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        Self::from_cols_array_2d(&m.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx_vec(a: Vector3, b: Vector3) -> bool {
        (a - b).length() < EPS
    }

    fn ndc_z(m: &Matrix4, z: f32) -> f32 {
        m.project_point(Vector3::new(0.0, 0.0, z)).z
    }

    #[test]
    fn rows_and_cols_are_transposes() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m.row(0), Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.col(0), Vector4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m.transpose().row(0), m.col(0));
        assert_eq!(m.to_cols_array_2d()[3], [4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn translate_moves_points_not_vectors() {
        let t = Matrix4::translate(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_point(Vector3::ZERO), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_vector(Vector3::X), Vector3::X);
        assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn scale_variants() {
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(
            Matrix4::scale(2.0_f32).transform_point(p),
            Vector3::new(2.0, 2.0, 2.0)
        );
        assert_eq!(
            Matrix4::scale((2.0_f32, 3.0_f32)).transform_point(p),
            Vector3::new(2.0, 3.0, 2.0)
        );
        assert_eq!(
            Matrix4::scale(Vector3::new(1.0, 2.0, 3.0)).transform_point(p),
            Vector3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn composition_applies_right_to_left() {
        let t = Matrix4::translate(Vector3::X);
        let s = Matrix4::scale(2.0_f32);
        assert_eq!((t * s).transform_point(Vector3::X), Vector3::new(3.0, 0.0, 0.0));
        assert_eq!((s * t).transform_point(Vector3::X), Vector3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_quarter_turns() {
        let rz = Matrix4::rotate(Vector3::Z, 90.0_f32);
        assert!(approx_vec(rz.transform_vector(Vector3::X), Vector3::Y));
        let rx = Matrix4::rotate(Vector3::new(3.0, 0.0, 0.0), 90.0_f32);
        assert!(approx_vec(rx.transform_vector(Vector3::Y), Vector3::Z));
        let ry = Matrix4::rotate(Vector3::Y, Angle::radians(std::f32::consts::FRAC_PI_2));
        assert!(approx_vec(ry.transform_vector(Vector3::Z), Vector3::X));
    }

    #[test]
    fn rotate_matches_glam() {
        let axis = Vector3::new(0.3, -0.4, 0.8);
        let ours = Matrix4::rotate(axis, 73.0_f32);
        let theirs = glam::Mat4::from_axis_angle(
            glam::Vec3::from(axis.normalized()),
            73.0_f32.to_radians(),
        );
        assert!(ours.abs_diff_eq(&Matrix4::from(theirs), EPS));
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_bounds() {
        let p = Matrix4::perspective(60.0_f32, 1.0, 0.1, 100.0);
        assert!((ndc_z(&p, -0.1) + 1.0).abs() < 1e-4);
        assert!((ndc_z(&p, -100.0) - 1.0).abs() < 1e-4);
        let clip = p * Vector4::new(0.0, 0.0, -0.1, 1.0);
        assert!((clip.w - 0.1).abs() < EPS);
    }

    #[test]
    fn perspective_matches_glam_gl_convention() {
        let ours = Matrix4::perspective(35.0_f32, 1.6, 0.03, 105.0);
        let theirs =
            glam::Mat4::perspective_rh_gl(35.0_f32.to_radians(), 1.6, 0.03, 105.0);
        assert!(ours.abs_diff_eq(&Matrix4::from(theirs), 1e-4));
    }

    #[test]
    fn frustum_matches_symmetric_perspective() {
        let near = 0.5;
        let half_h = near * (30.0_f32.to_radians()).tan();
        let half_w = half_h * 2.0;
        let f = Matrix4::frustum(-half_w, half_w, -half_h, half_h, near, 50.0);
        let p = Matrix4::perspective(60.0_f32, 2.0, near, 50.0);
        assert!(f.abs_diff_eq(&p, 1e-4));
        assert!((ndc_z(&f, -near) + 1.0).abs() < 1e-4);
        assert!((ndc_z(&f, -50.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn ortho_matches_glam() {
        let ours = Matrix4::ortho(-2.0, 3.0, -1.0, 4.0, 0.5, 20.0);
        let theirs = glam::Mat4::orthographic_rh_gl(-2.0, 3.0, -1.0, 4.0, 0.5, 20.0);
        assert!(ours.abs_diff_eq(&Matrix4::from(theirs), EPS));
        let corner = ours.project_point(Vector3::new(3.0, 4.0, -20.0));
        assert!(approx_vec(corner, Vector3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn look_at_rows_are_orthonormal() {
        let view = Matrix4::look_at(
            Vector3::new(4.0, 3.0, 5.0),
            Vector3::new(-1.0, 0.5, 0.0),
            Vector3::new(0.0, 1.0, 0.2),
        );
        let rows: Vec<Vector3> = (0..3).map(|i| view.row(i).truncate()).collect();
        for (i, a) in rows.iter().enumerate() {
            assert!((a.length() - 1.0).abs() < EPS);
            for b in &rows[i + 1..] {
                assert!(a.dot(*b).abs() < EPS);
            }
        }
    }

    #[test]
    fn look_at_places_target_on_negative_z() {
        let eye = Vector3::new(0.0, 2.0, 5.0);
        let target = Vector3::new(0.0, 2.0, 0.0);
        let view = Matrix4::look_at(eye, target, Vector3::Y);
        assert!(approx_vec(view.transform_point(eye), Vector3::ZERO));
        assert!(approx_vec(
            view.transform_point(target),
            Vector3::new(0.0, 0.0, -5.0)
        ));
        let theirs = glam::Mat4::look_at_rh(eye.into(), target.into(), glam::Vec3::Y);
        assert!(view.abs_diff_eq(&Matrix4::from(theirs), EPS));
    }

    #[test]
    fn inverse_round_trips() {
        let m = Matrix4::translate(Vector3::new(1.0, -2.0, 3.0))
            * Matrix4::rotate(Vector3::new(1.0, 1.0, 0.0), 40.0_f32)
            * Matrix4::scale(Vector3::new(2.0, 0.5, 3.0));
        let inv = m.inverse().unwrap();
        assert!((m * inv).abs_diff_eq(&Matrix4::IDENTITY, 1e-5));
        let factored = Matrix4::scale(Vector3::new(0.5, 2.0, 1.0 / 3.0))
            * Matrix4::rotate(Vector3::new(1.0, 1.0, 0.0), -40.0_f32)
            * Matrix4::translate(Vector3::new(-1.0, 2.0, -3.0));
        assert!(inv.abs_diff_eq(&factored, 1e-4));
    }

    #[test]
    fn non_finite_matrix_has_no_inverse() {
        let mut cols = Matrix4::IDENTITY.to_cols_array_2d();
        cols[3][0] = f32::NAN;
        assert!(Matrix4::from_cols(cols).inverse().is_none());
    }

    #[test]
    fn builders_accept_arrays_tuples_and_scalars() {
        let p = Vector3::new(1.0, 1.0, 1.0);
        let expected = Matrix4::translate(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Matrix4::translate([1.0_f32, 2.0, 3.0]), expected);
        assert_eq!(Matrix4::translate((1.0_f32, 2.0_f32, 3.0_f32)), expected);

        let full = Matrix4::scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(Matrix4::scale([2.0_f32, 3.0, 4.0]), full);
        assert_eq!(Matrix4::scale((2.0_f32, 3.0_f32, 4.0_f32)), full);
        assert_eq!(
            Matrix4::scale(3.0_f32).transform_point(p),
            Vector3::new(3.0, 3.0, 3.0)
        );
        assert_eq!(
            Matrix4::scale((0.5_f32, 4.0_f32)).transform_point(p),
            Vector3::new(0.5, 4.0, 0.5)
        );
    }

    #[test]
    fn inverse_of_projection() {
        let p = Matrix4::perspective(45.0_f32, 1.5, 0.1, 10.0);
        let inv = p.inverse().unwrap();
        assert!((p * inv).abs_diff_eq(&Matrix4::IDENTITY, 1e-4));
    }

    #[test]
    fn determinant_of_transforms() {
        let m = Matrix4::translate(Vector3::new(4.0, 0.5, -1.0))
            * Matrix4::rotate(Vector3::new(0.0, 1.0, 1.0), 70.0_f32)
            * Matrix4::scale(Vector3::new(2.0, 3.0, 0.5));
        assert!((m.determinant() - 3.0).abs() < 1e-4);
        let p = Matrix4::perspective(60.0_f32, 1.0, 0.1, 100.0);
        let theirs = glam::Mat4::from(p).determinant();
        assert!((p.determinant() - theirs).abs() < 1e-4 * theirs.abs().max(1.0));
        assert_eq!(Matrix4::scale(Vector3::new(1.0, 0.0, 1.0)).determinant(), 0.0);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(Matrix4::scale(Vector3::new(1.0, 0.0, 1.0)).inverse().is_none());
    }

    #[test]
    fn normal_matrix_of_rotation_is_rotation() {
        let r = Matrix4::rotate(Vector3::new(0.2, 0.9, -0.1), 57.0_f32);
        let m = Matrix4::translate(Vector3::new(5.0, 0.0, 0.0)) * r;
        assert!(m.normal_matrix().abs_diff_eq(&r, EPS));
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular_under_scale() {
        let m = Matrix4::scale(Vector3::new(4.0, 1.0, 1.0));
        // Plane x = y has normal (1, -1, 0) and tangent (1, 1, 0).
        let tangent = m.transform_vector(Vector3::new(1.0, 1.0, 0.0));
        let normal = m.normal_matrix().transform_vector(Vector3::new(1.0, -1.0, 0.0));
        assert!(tangent.dot(normal).abs() < EPS);
        let expected = glam::Mat4::from(m).inverse().transpose();
        assert!(m.normal_matrix().abs_diff_eq(&Matrix4::from(expected), EPS));
    }

    #[test]
    fn normal_matrix_of_singular_scale_is_finite() {
        let n = Matrix4::scale(0.0_f32).normal_matrix();
        assert!(n.to_cols_array_2d().iter().flatten().all(|v| v.is_finite()));
    }
}
