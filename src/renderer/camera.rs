//! Zoom camera
//!
//! A camera that sits on the +Z axis looking at the origin. Zoom requests move
//! a target distance in fixed steps; the actual distance eases toward it.

use crate::renderer::transform;
use glam::Mat4;

/// Camera with smoothed zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    distance: f32,
    target_distance: f32,
}

impl Camera {
    /// Closest allowed target distance.
    pub const MIN_DISTANCE: f32 = 2.0;
    /// Farthest allowed target distance.
    pub const MAX_DISTANCE: f32 = 15.0;
    /// Change of target distance per zoom step.
    pub const ZOOM_SPEED: f32 = 3.0;
    /// Smoothing rate in 1/s. The time constant is `1 / SMOOTHING`.
    pub const SMOOTHING: f32 = 8.0;
    /// Distance at startup.
    pub const INITIAL_DISTANCE: f32 = 5.0;

    /// Create a camera resting at [`Camera::INITIAL_DISTANCE`].
    pub fn new() -> Self {
        Self::at_distance(Self::INITIAL_DISTANCE)
    }

    /// Create a camera resting at `distance`, clamped into the zoom range.
    pub fn at_distance(distance: f32) -> Self {
        let distance = distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
        Self {
            distance,
            target_distance: distance,
        }
    }

    /// Current distance from the origin.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Distance the camera is easing toward.
    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Move the target one step closer, stopping at [`Camera::MIN_DISTANCE`].
    pub fn zoom_in(&mut self) {
        self.target_distance = (self.target_distance - Self::ZOOM_SPEED).max(Self::MIN_DISTANCE);
    }

    /// Move the target one step away, stopping at [`Camera::MAX_DISTANCE`].
    pub fn zoom_out(&mut self) {
        self.target_distance = (self.target_distance + Self::ZOOM_SPEED).min(Self::MAX_DISTANCE);
    }

    /// Ease the distance toward the target.
    ///
    /// Explicit Euler step of first-order smoothing. The distance itself is not
    /// clamped, so a frame longer than `1 / SMOOTHING` seconds overshoots the
    /// target and one longer than `2 / SMOOTHING` diverges.
    pub fn update(&mut self, dt: f32) {
        self.distance += (self.target_distance - self.distance) * Self::SMOOTHING * dt;
    }

    /// View matrix for the current distance.
    pub fn view_matrix(&self) -> Mat4 {
        transform::view_matrix(self.distance)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let camera = Camera::new();
        assert_eq!(camera.distance(), 5.0);
        assert_eq!(camera.target_distance(), 5.0);
    }

    #[test]
    fn test_zoom_steps() {
        let mut camera = Camera::new();
        camera.zoom_in();
        assert_eq!(camera.target_distance(), 2.0);
        camera.zoom_out();
        camera.zoom_out();
        assert_eq!(camera.target_distance(), 8.0);
        // zooming never touches the current distance
        assert_eq!(camera.distance(), 5.0);
    }

    #[test]
    fn test_zoom_in_idempotent_at_min() {
        let mut camera = Camera::at_distance(Camera::MIN_DISTANCE);
        for _ in 0..5 {
            camera.zoom_in();
            assert_eq!(camera.target_distance(), Camera::MIN_DISTANCE);
        }
    }

    #[test]
    fn test_zoom_out_idempotent_at_max() {
        let mut camera = Camera::new();
        for _ in 0..10 {
            camera.zoom_out();
        }
        assert_eq!(camera.target_distance(), Camera::MAX_DISTANCE);
        camera.zoom_out();
        assert_eq!(camera.target_distance(), Camera::MAX_DISTANCE);
    }

    #[test]
    fn test_target_stays_in_range() {
        let mut camera = Camera::new();
        // 0 = in, 1 = out
        let pattern = [0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1];
        for step in pattern {
            if step == 0 {
                camera.zoom_in();
            } else {
                camera.zoom_out();
            }
            let t = camera.target_distance();
            assert!((Camera::MIN_DISTANCE..=Camera::MAX_DISTANCE).contains(&t));
        }
    }

    #[test]
    fn test_update_converges() {
        let mut camera = Camera::new();
        camera.zoom_out();
        camera.zoom_out();
        assert_eq!(camera.target_distance(), 11.0);

        for _ in 0..600 {
            camera.update(1.0 / 60.0);
        }
        assert!((camera.distance() - 11.0).abs() < 1e-3);
    }

    #[test]
    fn test_update_single_step() {
        let mut camera = Camera::new();
        camera.zoom_in();
        camera.update(0.1);
        // 5 + (2 - 5) * 8 * 0.1
        assert!((camera.distance() - 2.6).abs() < 1e-5);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut camera = Camera::new();
        camera.zoom_out();
        camera.update(0.0);
        assert_eq!(camera.distance(), 5.0);
    }

    #[test]
    fn test_large_dt_overshoots() {
        let mut camera = Camera::new();
        camera.zoom_out();
        camera.update(0.2);
        // 5 + 3 * 1.6, past the target of 8
        assert!((camera.distance() - 9.8).abs() < 1e-5);
        assert!(camera.distance() > camera.target_distance());
    }

    #[test]
    fn test_view_matrix_translates() {
        let camera = Camera::new();
        let p = camera.view_matrix().transform_point3(glam::Vec3::ZERO);
        assert!((p - glam::Vec3::new(0.0, 0.0, -5.0)).length() < 1e-6);
    }
}
