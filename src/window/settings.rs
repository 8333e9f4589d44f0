//! Window settings
//!
//! Configuration for window creation.

/// Settings for creating a window.
#[derive(Debug, Clone)]
pub struct WindowSettings {
    /// Window title.
    pub title: String,
    /// Initial window size (width, height) in logical pixels.
    pub size: (u32, u32),
    /// Whether the window is resizable.
    pub resizable: bool,
    /// Whether to enable vsync.
    pub vsync: bool,
    /// Graphics backends the adapter may come from.
    pub backends: wgpu::Backends,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "3D Cube".to_string(),
            size: (1024, 768),
            resizable: true,
            vsync: true,
            // WGPU_BACKEND=gl pins the OpenGL backend
            backends: wgpu::Backends::from_env().unwrap_or(wgpu::Backends::all()),
        }
    }
}

impl WindowSettings {
    /// Create new window settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set whether the window is resizable.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set whether to enable vsync.
    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Restrict adapter selection to `backends`.
    pub fn backends(mut self, backends: wgpu::Backends) -> Self {
        self.backends = backends;
        self
    }

    pub(crate) fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WindowSettings::default();
        assert_eq!(settings.title, "3D Cube");
        assert_eq!(settings.size, (1024, 768));
        assert!(settings.resizable);
        assert!(settings.vsync);
    }

    #[test]
    fn test_builder() {
        let settings = WindowSettings::new()
            .title("cube")
            .size(640, 480)
            .resizable(false)
            .vsync(false)
            .backends(wgpu::Backends::GL);
        assert_eq!(settings.title, "cube");
        assert_eq!(settings.size, (640, 480));
        assert!(!settings.resizable);
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoNoVsync);
        assert_eq!(settings.backends, wgpu::Backends::GL);
    }
}
