//! The cube mesh
//!
//! 36 unindexed vertices: six faces of two counter-clockwise triangles each.
//! Every face blends between two fixed colors.

use crate::context::WgpuContext;
use crate::core::buffer::VertexBuffer;
use crate::core::vertex::VertexPC;

const fn v(position: [f32; 3], color: [f32; 3]) -> VertexPC {
    VertexPC::new(position, color)
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
const PURPLE: [f32; 3] = [0.5, 0.0, 0.5];
const ORANGE: [f32; 3] = [1.0, 0.5, 0.0];
const PINK: [f32; 3] = [1.0, 0.4, 0.7];
const TEAL: [f32; 3] = [0.0, 0.5, 0.5];
const LIME: [f32; 3] = [0.5, 1.0, 0.0];

/// Vertex data for the unit-radius cube (corners at ±1).
#[rustfmt::skip]
pub static CUBE_VERTICES: [VertexPC; 36] = [
    // front (+Z): red -> yellow
    v([-1.0, -1.0,  1.0], RED),
    v([ 1.0, -1.0,  1.0], YELLOW),
    v([ 1.0,  1.0,  1.0], YELLOW),
    v([ 1.0,  1.0,  1.0], YELLOW),
    v([-1.0,  1.0,  1.0], RED),
    v([-1.0, -1.0,  1.0], RED),
    // back (-Z): blue -> cyan
    v([-1.0, -1.0, -1.0], BLUE),
    v([-1.0,  1.0, -1.0], BLUE),
    v([ 1.0,  1.0, -1.0], CYAN),
    v([ 1.0,  1.0, -1.0], CYAN),
    v([ 1.0, -1.0, -1.0], CYAN),
    v([-1.0, -1.0, -1.0], BLUE),
    // top (+Y): green -> yellow
    v([-1.0,  1.0, -1.0], GREEN),
    v([-1.0,  1.0,  1.0], GREEN),
    v([ 1.0,  1.0,  1.0], YELLOW),
    v([ 1.0,  1.0,  1.0], YELLOW),
    v([ 1.0,  1.0, -1.0], YELLOW),
    v([-1.0,  1.0, -1.0], GREEN),
    // bottom (-Y): magenta -> purple
    v([-1.0, -1.0, -1.0], MAGENTA),
    v([ 1.0, -1.0, -1.0], PURPLE),
    v([ 1.0, -1.0,  1.0], PURPLE),
    v([ 1.0, -1.0,  1.0], PURPLE),
    v([-1.0, -1.0,  1.0], MAGENTA),
    v([-1.0, -1.0, -1.0], MAGENTA),
    // right (+X): orange -> pink
    v([ 1.0, -1.0, -1.0], ORANGE),
    v([ 1.0,  1.0, -1.0], ORANGE),
    v([ 1.0,  1.0,  1.0], PINK),
    v([ 1.0,  1.0,  1.0], PINK),
    v([ 1.0, -1.0,  1.0], PINK),
    v([ 1.0, -1.0, -1.0], ORANGE),
    // left (-X): teal -> lime
    v([-1.0, -1.0, -1.0], TEAL),
    v([-1.0, -1.0,  1.0], TEAL),
    v([-1.0,  1.0,  1.0], LIME),
    v([-1.0,  1.0,  1.0], LIME),
    v([-1.0,  1.0, -1.0], LIME),
    v([-1.0, -1.0, -1.0], TEAL),
];

/// The cube's vertex buffer on the GPU.
pub struct CubeMesh {
    vertices: VertexBuffer,
}

impl CubeMesh {
    /// Upload [`CUBE_VERTICES`].
    pub fn new(ctx: &WgpuContext) -> Self {
        Self {
            vertices: VertexBuffer::new(ctx, &CUBE_VERTICES, Some("cube vertices")),
        }
    }

    /// Number of vertices drawn.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.count()
    }

    /// Record the draw. The caller binds the pipeline and uniforms.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertices.slice());
        pass.draw(0..self.vertices.count(), 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn faces() -> impl Iterator<Item = &'static [VertexPC]> {
        CUBE_VERTICES.chunks(6)
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(CUBE_VERTICES.len(), 36);
        assert_eq!(std::mem::size_of_val(&CUBE_VERTICES), 36 * 6 * 4);
    }

    #[test]
    fn test_corners_on_unit_cube() {
        for vertex in &CUBE_VERTICES {
            for c in vertex.position {
                assert!(c == 1.0 || c == -1.0);
            }
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        for triangle in CUBE_VERTICES.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| Vec3::from(triangle[i].position));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {:?} winds inward",
                triangle
            );
        }
    }

    #[test]
    fn test_faces_are_planar_and_distinct() {
        let mut normals = Vec::new();
        for face in faces() {
            let a = Vec3::from(face[0].position);
            let normal = (Vec3::from(face[1].position) - a)
                .cross(Vec3::from(face[2].position) - a)
                .normalize();
            for vertex in face {
                assert_eq!(Vec3::from(vertex.position).dot(normal), 1.0);
            }
            assert!(!normals.contains(&normal));
            normals.push(normal);
        }
        assert_eq!(normals.len(), 6);
    }

    #[test]
    fn test_each_face_is_two_tone() {
        for face in faces() {
            let mut colors: Vec<[f32; 3]> = Vec::new();
            for vertex in face {
                if !colors.contains(&vertex.color) {
                    colors.push(vertex.color);
                }
            }
            assert_eq!(colors.len(), 2, "face {:?}", face);
        }
    }
}
