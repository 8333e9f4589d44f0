//! Keyboard control
//!
//! Maps key presses onto the camera and cube.

use crate::renderer::camera::Camera;
use crate::renderer::cube::Cube;
use crate::window::event::{Event, Key};

/// Something a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartRotation,
    StopRotation,
    ZoomIn,
    ZoomOut,
    Exit,
}

impl Action {
    /// The action bound to `key`.
    pub fn for_key(key: Key) -> Self {
        match key {
            Key::R => Action::StartRotation,
            Key::T => Action::StopRotation,
            Key::Plus | Key::Equals | Key::NumpadAdd => Action::ZoomIn,
            Key::Minus | Key::NumpadSubtract => Action::ZoomOut,
            Key::Escape => Action::Exit,
        }
    }
}

/// Applies key presses to a camera and cube.
#[derive(Debug, Default)]
pub struct KeyboardControl {
    exit_requested: bool,
}

impl KeyboardControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle unhandled key presses, marking them handled.
    ///
    /// Returns `true` once Escape has been pressed or the window asked to
    /// close. The rest of the batch is still applied.
    pub fn handle_events(
        &mut self,
        camera: &mut Camera,
        cube: &mut Cube,
        events: &mut [Event],
    ) -> bool {
        for event in events.iter_mut() {
            if event.is_handled() {
                continue;
            }

            match event {
                Event::KeyPress { key, .. } => {
                    let action = Action::for_key(*key);
                    tracing::debug!(?key, ?action, "key pressed");
                    self.apply(action, camera, cube);
                    event.set_handled();
                }
                Event::Quit => self.apply(Action::Exit, camera, cube),
                Event::Resize { .. } => {}
            }
        }
        self.exit_requested
    }

    fn apply(&mut self, action: Action, camera: &mut Camera, cube: &mut Cube) {
        match action {
            Action::StartRotation => cube.start(),
            Action::StopRotation => cube.stop(),
            Action::ZoomIn => camera.zoom_in(),
            Action::ZoomOut => camera.zoom_out(),
            Action::Exit => self.exit_requested = true,
        }
    }
}
