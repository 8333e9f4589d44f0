//! Model, view and projection transforms
//!
//! All three matrices are rebuilt from scratch every frame; nothing here keeps
//! state between frames. Matrices are column-major `glam::Mat4`, multiplied as
//! `projection * view * model * vertex`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

/// Axis the cube spins around. Not unit length; normalized before use.
pub const ROTATION_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);

/// Viewport information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport covering a `width` x `height` drawable from the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Get the aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Projection {
    pub const FOV_DEGREES: f32 = 45.0;
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 100.0;

    /// Create a perspective projection.
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// The viewer's projection for a viewport: 45°, near 0.1, far 100.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::perspective(Self::FOV_DEGREES, viewport.aspect(), Self::NEAR, Self::FAR)
    }

    /// Right-handed projection with a [0, 1] depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

/// Rotation by `degrees` around `axis` using Rodrigues' formula.
///
/// `R = I + sin(θ) K + (1 - cos(θ)) K²` where `K` is the cross-product matrix
/// of the unit axis. `axis` must be non-zero.
pub fn axis_angle_rotation(axis: Vec3, degrees: f32) -> Mat4 {
    let k = axis.normalize();
    let (sin, cos) = degrees.to_radians().sin_cos();

    let cross = Mat3::from_cols(
        Vec3::new(0.0, k.z, -k.y),
        Vec3::new(-k.z, 0.0, k.x),
        Vec3::new(k.y, -k.x, 0.0),
    );

    let rotation = Mat3::IDENTITY + cross * sin + (cross * cross) * (1.0 - cos);
    Mat4::from_mat3(rotation)
}

/// Model matrix for a cube rotated `rotation_degrees` about [`ROTATION_AXIS`].
pub fn model_matrix(rotation_degrees: f32) -> Mat4 {
    axis_angle_rotation(ROTATION_AXIS, rotation_degrees)
}

/// View matrix for a camera `distance` units up the +Z axis looking at the origin.
pub fn view_matrix(distance: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -distance))
}

/// Uniform block read by the gradient shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }

    /// The product the vertex shader applies.
    pub fn model_view_projection(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
            * Mat4::from_cols_array_2d(&self.view)
            * Mat4::from_cols_array_2d(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        assert!(a.abs_diff_eq(b, EPS), "\n{a:?}\n!=\n{b:?}");
    }

    #[test]
    fn test_model_identity_at_zero() {
        assert_mat_eq(model_matrix(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_rodrigues_matches_glam() {
        let axis = ROTATION_AXIS.normalize();
        for degrees in [0.0_f32, 15.0, 90.0, 123.4, 180.0, 271.0, 359.9] {
            let expected = Mat4::from_axis_angle(axis, degrees.to_radians());
            assert_mat_eq(model_matrix(degrees), expected);
        }
    }

    #[test]
    fn test_axis_is_normalized() {
        // scaling the axis must not scale the result
        let a = axis_angle_rotation(Vec3::new(0.5, 1.0, 0.0), 40.0);
        let b = axis_angle_rotation(Vec3::new(5.0, 10.0, 0.0), 40.0);
        assert_mat_eq(a, b);
        assert!((a.determinant() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_half_turn_twice_round_trips() {
        let half = model_matrix(180.0);
        let p = Vec3::new(0.3, -1.0, 0.8);
        let once = half.transform_point3(p);
        assert!((once - p).length() > 0.1);
        let twice = half.transform_point3(once);
        assert!((twice - p).length() < EPS);
    }

    #[test]
    fn test_full_turn_is_identity() {
        assert_mat_eq(model_matrix(360.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_axis_is_fixed_point() {
        let axis = ROTATION_AXIS.normalize();
        let rotated = model_matrix(77.0).transform_vector3(axis);
        assert!((rotated - axis).length() < EPS);
    }

    #[test]
    fn test_view_is_pure_translation() {
        let view = view_matrix(5.0);
        assert_eq!(view.w_axis, Vec4::new(0.0, 0.0, -5.0, 1.0));
        assert_eq!(view.x_axis, Vec4::X);
        assert_eq!(view.y_axis, Vec4::Y);
        assert_eq!(view.z_axis, Vec4::Z);
    }

    #[test]
    fn test_projection_closed_form() {
        let projection = Projection::for_viewport(Viewport::from_size(800, 800)).matrix();

        let (near, far) = (0.1_f32, 100.0_f32);
        let f = 1.0 / (45.0_f32.to_radians() / 2.0).tan();
        let m = projection.to_cols_array_2d();

        assert!((m[0][0] - f).abs() < EPS);
        assert!((m[1][1] - f).abs() < EPS);
        assert!((m[2][2] - far / (near - far)).abs() < EPS);
        assert!((m[2][3] + 1.0).abs() < EPS);
        assert!((m[3][2] - near * far / (near - far)).abs() < EPS);
        assert_eq!(m[3][3], 0.0);
        assert_eq!(m[0][1], 0.0);
        assert_eq!(m[1][0], 0.0);
    }

    #[test]
    fn test_projection_aspect() {
        let wide = Projection::for_viewport(Viewport::from_size(1024, 768)).matrix();
        let m = wide.to_cols_array_2d();
        assert!((m[0][0] * 1024.0 / 768.0 - m[1][1]).abs() < EPS);
    }

    #[test]
    fn test_origin_lands_inside_clip_volume() {
        let uniform = TransformUniform::new(
            model_matrix(30.0),
            view_matrix(5.0),
            Projection::for_viewport(Viewport::from_size(1024, 768)).matrix(),
        );
        let clip = uniform.model_view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < EPS && ndc.y.abs() < EPS);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 192);
    }
}
