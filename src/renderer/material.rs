//! Gradient material
//!
//! Unlit material that draws the cube with its per-vertex colors.

use crate::context::WgpuContext;
use crate::core::buffer::RawUniformBuffer;
use crate::core::pipeline::PipelineBuilder;
use crate::core::render_states::DepthState;
use crate::core::vertex::VertexPC;
use crate::renderer::transform::TransformUniform;

/// WGSL source of the gradient shader.
pub const GRADIENT_SHADER: &str = include_str!("../shaders/gradient.wgsl");

/// Pipeline plus the transform uniform it reads.
///
/// The bind group is resolved once here; per frame only the uniform contents
/// change.
pub struct GradientMaterial {
    pipeline: wgpu::RenderPipeline,
    transform_buffer: RawUniformBuffer,
    transform_bind_group: wgpu::BindGroup,
}

impl GradientMaterial {
    /// Create a new gradient material rendering into `format`.
    pub fn new(ctx: &WgpuContext, format: wgpu::TextureFormat) -> anyhow::Result<Self> {
        let transform_bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("transform bind group layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let pipeline = PipelineBuilder::new(ctx)
            .label("gradient material pipeline")
            .shader(GRADIENT_SHADER)
            .vertex_layout(VertexPC::layout())
            .bind_group_layout(&transform_bind_group_layout)
            .color_format(format)
            .depth(DepthState::read_write())
            .build()?;

        let transform_buffer =
            RawUniformBuffer::for_type::<TransformUniform>(ctx, Some("transform uniform"));

        let transform_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("transform bind group"),
            layout: &transform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.buffer().as_entire_binding(),
            }],
        });

        Ok(Self {
            pipeline,
            transform_buffer,
            transform_bind_group,
        })
    }

    /// Upload this frame's transforms.
    pub fn update_uniforms(&self, ctx: &WgpuContext, transforms: &TransformUniform) {
        self.transform_buffer.write(ctx, transforms);
    }

    /// Bind the pipeline and transform uniform on `pass`.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.transform_bind_group, &[]);
    }
}
