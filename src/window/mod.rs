//! Window management module
//!
//! Wraps winit window creation, the wgpu surface and the event loop, and hands
//! the application one [`FrameInput`] per redraw.

pub mod event;
pub mod frame_io;
pub mod settings;

pub use event::{Event, Key};
pub use frame_io::{FrameInput, FrameOutput, Viewport};
pub use settings::WindowSettings;

use crate::context::WgpuContext;
use crate::core::texture::DepthTexture;
use crate::core::RenderTarget;
use crate::error::ViewerError;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// A window with GPU rendering context.
pub struct Window {
    settings: WindowSettings,
}

impl Window {
    /// Create a new window with the given settings. Nothing is opened until
    /// [`Window::render_loop`] runs.
    pub fn new(settings: WindowSettings) -> Self {
        Self { settings }
    }

    /// Run the render loop with a callback.
    ///
    /// The callback receives a `FrameInput` and should return a `FrameOutput`.
    /// Returns the final state once the window closes, or the error that
    /// stopped the window or GPU context from coming up.
    pub fn render_loop<F, S>(self, state_init: S, callback: F) -> Result<S, ViewerError>
    where
        F: FnMut(&mut S, FrameInput<'_>) -> FrameOutput + 'static,
        S: 'static,
    {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            settings: self.settings,
            state: state_init,
            callback,
            graphics: None,
            init_error: None,
            events: Vec::new(),
            clock: FrameClock::new(),
        };

        event_loop.run_app(&mut app)?;

        match app.init_error {
            Some(err) => Err(err),
            None => Ok(app.state),
        }
    }
}

struct Graphics {
    window: Arc<winit::window::Window>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    ctx: WgpuContext,
    depth_texture: DepthTexture,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, settings: &WindowSettings) -> Result<Self, ViewerError> {
        let window_attrs = winit::window::WindowAttributes::default()
            .with_title(&settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(settings.size.0, settings.size.1))
            .with_resizable(settings.resizable);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: settings.backends,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let (adapter, ctx) = WgpuContext::request_blocking(&instance, Some(&surface))?;

        let caps = surface.get_capabilities(&adapter);
        // Plain UNORM output keeps colors as written, like a default GL framebuffer.
        let format = caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or_else(|| ViewerError::UnsupportedSurface(adapter.get_info().name))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: settings.present_mode(),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&ctx.device, &config);
        tracing::debug!(?format, width = config.width, height = config.height, "surface configured");

        let depth_texture =
            DepthTexture::new(&ctx, config.width, config.height, Some("depth texture"));

        Ok(Self {
            window,
            surface,
            config,
            ctx,
            depth_texture,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.ctx.device, &self.config);
            self.depth_texture.resize(&self.ctx, width, height);
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::from_size(self.config.width, self.config.height)
    }
}

/// Measures the time between rendered frames.
#[derive(Debug)]
struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    fn restart(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Seconds since the previous tick. Only call this for a frame that is
    /// actually rendered, so time from skipped redraws carries over.
    fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta = (now - self.last_frame).as_secs_f64();
        self.last_frame = now;
        delta
    }
}

struct App<S, F> {
    settings: WindowSettings,
    state: S,
    callback: F,
    graphics: Option<Graphics>,
    init_error: Option<ViewerError>,
    events: Vec<Event>,
    clock: FrameClock,
}

impl<S, F> ApplicationHandler for App<S, F>
where
    F: FnMut(&mut S, FrameInput<'_>) -> FrameOutput + 'static,
    S: 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() || self.init_error.is_some() {
            return;
        }

        match Graphics::new(event_loop, &self.settings) {
            Ok(graphics) => {
                self.graphics = Some(graphics);
                self.clock.restart();
            }
            Err(err) => {
                tracing::error!("initialization failed: {err}");
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(graphics) = &mut self.graphics else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                // Handled by the next frame, after the rest of its batch.
                self.events.push(Event::Quit);
                graphics.window.request_redraw();
            }
            WindowEvent::Resized(size) => {
                graphics.resize(size.width, size.height);
                self.events.push(Event::Resize {
                    width: size.width,
                    height: size.height,
                });
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                let Some(key) = Key::from_winit(&key_event.logical_key, key_event.location)
                else {
                    return;
                };
                if key_event.state == ElementState::Pressed {
                    self.events.push(Event::key_press(key));
                }
            }
            WindowEvent::RedrawRequested => {
                let surface_texture = match graphics.surface.get_current_texture() {
                    Ok(texture) => texture,
                    Err(err) => {
                        if matches!(err, wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) {
                            graphics
                                .surface
                                .configure(&graphics.ctx.device, &graphics.config);
                        } else {
                            tracing::error!("Surface error: {:?}", err);
                        }
                        // No frame to run the quit through.
                        if self.events.contains(&Event::Quit) {
                            event_loop.exit();
                        }
                        return;
                    }
                };
                let delta_time = self.clock.tick();

                let view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let frame_input = FrameInput {
                    events: std::mem::take(&mut self.events),
                    delta_time,
                    viewport: graphics.viewport(),
                    ctx: &graphics.ctx,
                    surface_view: &view,
                    depth_texture: &graphics.depth_texture,
                    surface_format: graphics.config.format,
                };

                let output = (self.callback)(&mut self.state, frame_input);

                graphics.window.pre_present_notify();
                surface_texture.present();

                if output.exit {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

/// Create a render target from frame input.
pub fn screen_target<'a>(input: &'a FrameInput<'a>) -> RenderTarget<'a> {
    RenderTarget::from_surface(input.surface_view, Some(input.depth_texture))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_frame_clock_carries_skipped_time() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        assert!(clock.tick() >= 0.010);

        // A redraw that could not acquire a frame does not tick, so the next
        // rendered frame sees both intervals.
        thread::sleep(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(10));
        assert!(clock.tick() >= 0.020);
    }

    #[test]
    fn test_frame_clock_restart() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(20));
        clock.restart();
        assert!(clock.tick() < 0.020);
    }
}
