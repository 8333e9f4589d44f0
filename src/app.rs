//! The viewer application
//!
//! [`ViewerState`] is everything the frame loop mutates. It is handed to the
//! window's render loop by value and comes back when the window closes.

use crate::context::WgpuContext;
use crate::core::ClearState;
use crate::renderer::{
    Camera, Cube, CubeMesh, GradientMaterial, KeyboardControl, Projection, TransformUniform,
    Viewport,
};
use crate::window::{screen_target, Event, FrameInput, FrameOutput, Window, WindowSettings};
use anyhow::Context as _;

/// Background color behind the cube.
pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.15, 1.0];

struct GpuResources {
    mesh: CubeMesh,
    material: GradientMaterial,
}

impl GpuResources {
    fn new(ctx: &WgpuContext, format: wgpu::TextureFormat) -> anyhow::Result<Self> {
        let material =
            GradientMaterial::new(ctx, format).context("failed to create cube material")?;
        let mesh = CubeMesh::new(ctx);
        tracing::debug!(vertices = mesh.vertex_count(), "cube mesh uploaded");
        Ok(Self { mesh, material })
    }
}

/// Per-process viewer state: animation, input mapping and GPU resources.
pub struct ViewerState {
    pub camera: Camera,
    pub cube: Cube,
    control: KeyboardControl,
    viewport: Viewport,
    gpu: Option<GpuResources>,
    init_error: Option<anyhow::Error>,
}

impl ViewerState {
    /// Fresh state for a drawable of the given size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: Camera::new(),
            cube: Cube::new(),
            control: KeyboardControl::new(),
            viewport,
            gpu: None,
            init_error: None,
        }
    }

    /// Current drawable size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply queued input. Returns `true` if the user asked to quit.
    pub fn handle_events(&mut self, events: &mut [Event]) -> bool {
        for event in events.iter() {
            if let Event::Resize { width, height } = *event {
                // a minimized window reports 0x0; keep the last real size
                if width > 0 && height > 0 {
                    self.viewport = Viewport::from_size(width, height);
                }
            }
        }
        self.control
            .handle_events(&mut self.camera, &mut self.cube, events)
    }

    /// Advance the animations by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.camera.update(dt);
        self.cube.update(dt);
    }

    /// This frame's model, view and projection matrices.
    pub fn transforms(&self) -> TransformUniform {
        TransformUniform::new(
            self.cube.model_matrix(),
            self.camera.view_matrix(),
            Projection::for_viewport(self.viewport).matrix(),
        )
    }

    /// One iteration of the frame loop: input, update, draw.
    pub fn frame(&mut self, mut frame: FrameInput<'_>) -> FrameOutput {
        if self.gpu.is_none() {
            match GpuResources::new(frame.ctx, frame.surface_format) {
                Ok(gpu) => {
                    self.gpu = Some(gpu);
                    self.viewport = frame.viewport;
                }
                Err(err) => {
                    tracing::error!("{err:#}");
                    self.init_error = Some(err);
                    return FrameOutput::exit();
                }
            }
        }

        let exit = self.handle_events(&mut frame.events);
        self.update(frame.delta_time as f32);
        let transforms = self.transforms();

        let Some(gpu) = &self.gpu else {
            return FrameOutput::exit();
        };
        gpu.material.update_uniforms(frame.ctx, &transforms);

        let target = screen_target(&frame);
        let mut encoder = frame.ctx.create_encoder(Some("cube encoder"));
        {
            let mut pass = target
                .begin_render_pass(&mut encoder, ClearState::color_and_depth(CLEAR_COLOR, 1.0));
            gpu.material.bind(&mut pass);
            gpu.mesh.draw(&mut pass);
        }
        frame.ctx.submit([encoder.finish()]);

        if exit {
            tracing::info!("exit requested");
            FrameOutput::exit()
        } else {
            FrameOutput::new()
        }
    }

    /// Error raised while creating GPU resources on the first frame, if any.
    pub fn take_init_error(&mut self) -> Option<anyhow::Error> {
        self.init_error.take()
    }
}

/// Open the viewer window and run until it is closed.
pub fn run(settings: WindowSettings) -> anyhow::Result<()> {
    let viewport = Viewport::from_size(settings.size.0, settings.size.1);
    let window = Window::new(settings);

    let mut state = window
        .render_loop(ViewerState::new(viewport), |state, frame| state.frame(frame))
        .context("failed to start the viewer")?;

    match state.take_init_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Key;
    use glam::Vec4;

    fn state() -> ViewerState {
        ViewerState::new(Viewport::from_size(1024, 768))
    }

    #[test]
    fn test_resize_updates_projection() {
        let mut state = state();
        let before = state.transforms().projection;

        let mut events = vec![Event::Resize {
            width: 500,
            height: 1000,
        }];
        state.handle_events(&mut events);

        assert_eq!(state.viewport(), Viewport::from_size(500, 1000));
        let after = state.transforms().projection;
        assert_ne!(before[0][0], after[0][0]);
        assert!((after[0][0] - after[1][1] * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_resize_ignored() {
        let mut state = state();
        let mut events = vec![Event::Resize {
            width: 0,
            height: 0,
        }];
        state.handle_events(&mut events);
        assert_eq!(state.viewport(), Viewport::from_size(1024, 768));
    }

    #[test]
    fn test_zoom_moves_view() {
        let mut state = state();
        let mut events = vec![Event::key_press(Key::Plus)];
        assert!(!state.handle_events(&mut events));

        for _ in 0..120 {
            state.update(1.0 / 60.0);
        }
        let view = glam::Mat4::from_cols_array_2d(&state.transforms().view);
        let z = view.w_axis.z;
        assert!((z + 2.0).abs() < 1e-3, "camera at {}", -z);
    }

    #[test]
    fn test_spin_changes_model() {
        let mut state = state();
        assert_eq!(
            glam::Mat4::from_cols_array_2d(&state.transforms().model),
            glam::Mat4::IDENTITY
        );

        let mut events = vec![Event::key_press(Key::R)];
        state.handle_events(&mut events);
        state.update(0.5);

        let model = glam::Mat4::from_cols_array_2d(&state.transforms().model);
        let moved = model * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((moved - Vec4::new(1.0, 0.0, 0.0, 1.0)).length() > 0.1);
    }

    #[test]
    fn test_escape_quits() {
        let mut state = state();
        let mut events = vec![Event::key_press(Key::Escape)];
        assert!(state.handle_events(&mut events));
    }
}
