//! Cube Viewer
//!
//! A small wgpu viewer that draws a rotating, zoomable gradient cube.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **context** - Core wgpu wrapper (Device, Queue) and adapter selection
//! 2. **core** - GPU primitives (vertex layout, buffers, depth texture, pipeline)
//! 3. **renderer** - Camera and cube state, transform math, cube mesh and material
//! 4. **window** - Window management with winit (feature = "window")
//! 5. **app** - The viewer's frame loop state (feature = "window")

pub mod context;
pub mod core;
pub mod error;
pub mod renderer;

#[cfg(feature = "window")]
pub mod window;

#[cfg(feature = "window")]
pub mod app;

pub use context::WgpuContext;
pub use error::ViewerError;

pub use crate::core::{
    ClearState, DepthState, DepthTexture, PipelineBuilder, RawUniformBuffer, RenderTarget,
    VertexBuffer, VertexPC,
};

pub use renderer::{
    Camera, Cube, CubeMesh, GradientMaterial, Projection, TransformUniform, Viewport,
    CUBE_VERTICES,
};

#[cfg(feature = "window")]
pub use renderer::{Action, KeyboardControl};

#[cfg(feature = "window")]
pub use window::{screen_target, Event, FrameInput, FrameOutput, Key, Window, WindowSettings};

#[cfg(feature = "window")]
pub use app::{run, ViewerState};

// Re-export glam for convenience
pub use glam;
