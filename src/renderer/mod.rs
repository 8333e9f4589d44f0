//! Scene state and drawing
//!
//! The camera and cube animation state, the transform math built from them,
//! and the GPU-side mesh and material that draw the cube.

pub mod camera;
#[cfg(feature = "window")]
pub mod control;
pub mod cube;
pub mod material;
pub mod mesh;
pub mod transform;

pub use camera::Camera;
#[cfg(feature = "window")]
pub use control::{Action, KeyboardControl};
pub use cube::Cube;
pub use material::GradientMaterial;
pub use mesh::{CubeMesh, CUBE_VERTICES};
pub use transform::{Projection, TransformUniform, Viewport};
