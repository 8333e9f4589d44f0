//! Core rendering abstractions
//!
//! Thin wrappers over the wgpu primitives the viewer touches.

pub mod buffer;
pub mod pipeline;
pub mod render_states;
pub mod render_target;
pub mod texture;
pub mod vertex;

pub use buffer::{RawUniformBuffer, VertexBuffer};
pub use pipeline::PipelineBuilder;
pub use render_states::{ClearState, DepthState};
pub use render_target::RenderTarget;
pub use texture::DepthTexture;
pub use vertex::VertexPC;
