//! WgpuContext - Device and Queue wrapper
//!
//! Owns the device and queue the viewer renders with, and knows how to pick an
//! adapter for a given surface.

use crate::error::ViewerError;
use std::sync::Arc;

/// Core wgpu context containing device and queue.
#[derive(Clone)]
pub struct WgpuContext {
    /// The wgpu device for creating GPU resources.
    pub device: Arc<wgpu::Device>,
    /// The wgpu queue for submitting commands.
    pub queue: Arc<wgpu::Queue>,
}

impl WgpuContext {
    /// Create a new context from existing device and queue.
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        }
    }

    /// Pick an adapter able to present to `compatible_surface` and open a device on it.
    ///
    /// The adapter is returned alongside the context because surface
    /// configuration needs its capabilities.
    pub async fn request(
        instance: &wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<(wgpu::Adapter, Self), ViewerError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await?;

        log_adapter_info(&adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("cube viewer device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        install_device_error_handlers(&device);

        Ok((adapter, Self::new(device, queue)))
    }

    /// Blocking variant of [`WgpuContext::request`].
    pub fn request_blocking(
        instance: &wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<(wgpu::Adapter, Self), ViewerError> {
        pollster::block_on(Self::request(instance, compatible_surface))
    }

    /// Submit command buffers to the queue.
    pub fn submit<I: IntoIterator<Item = wgpu::CommandBuffer>>(&self, command_buffers: I) {
        self.queue.submit(command_buffers);
    }

    /// Create a command encoder.
    pub fn create_encoder(&self, label: Option<&str>) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label })
    }
}

impl std::fmt::Debug for WgpuContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WgpuContext").finish()
    }
}

/// Route validation errors and device loss to the log instead of wgpu's
/// default handler, which panics.
fn install_device_error_handlers(device: &wgpu::Device) {
    device.on_uncaptured_error(Arc::new(log_uncaptured_error));
    device.set_device_lost_callback(|reason, message| {
        tracing::error!(?reason, "GPU device lost: {message}");
    });
}

fn log_uncaptured_error(error: wgpu::Error) {
    tracing::error!("uncaptured GPU error: {error}");
}

fn log_adapter_info(info: &wgpu::AdapterInfo) {
    tracing::info!(
        adapter = %info.name,
        backend = ?info.backend,
        device_type = ?info.device_type,
        "using GPU adapter"
    );
    if !info.driver.is_empty() || !info.driver_info.is_empty() {
        tracing::info!(driver = %info.driver, driver_info = %info.driver_info, "graphics driver");
    }
}
