//! Spinning cube state

use crate::renderer::transform;
use glam::Mat4;

/// Rotation state of the cube.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cube {
    /// Rotation in degrees, normally in `[0, 360)`.
    pub rotation: f32,
    /// Whether the cube is currently spinning.
    pub rotating: bool,
}

impl Cube {
    /// Spin rate in degrees per second.
    pub const ROTATION_SPEED: f32 = 50.0;

    /// Create a cube at rest with no rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start spinning.
    pub fn start(&mut self) {
        self.rotating = true;
    }

    /// Stop spinning, keeping the current angle.
    pub fn stop(&mut self) {
        self.rotating = false;
    }

    /// Advance the rotation by `dt` seconds.
    ///
    /// Wraps with a single subtraction of 360, so a step of a full turn or more
    /// leaves the angle above 360 until later frames bring it back.
    pub fn update(&mut self, dt: f32) {
        if self.rotating {
            self.rotation += Self::ROTATION_SPEED * dt;
            if self.rotation >= 360.0 {
                self.rotation -= 360.0;
            }
        }
    }

    /// Model matrix for the current rotation.
    pub fn model_matrix(&self) -> Mat4 {
        transform::model_matrix(self.rotation)
    }
}
