//! Initialization errors
//!
//! Every failure the viewer can hit happens before the first frame is drawn.

use thiserror::Error;

/// Errors raised while bringing up the window and GPU context.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The winit event loop could not be created or run.
    #[cfg(feature = "window")]
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[cfg(feature = "window")]
    #[error("window creation failed: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    /// No presentable surface could be created for the window.
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No adapter matched the requested backends and surface.
    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to open a device.
    #[error("device creation failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface reports no usable texture formats for this adapter.
    #[error("surface is not supported by adapter {0:?}")]
    UnsupportedSurface(String),
}
