use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::geometry::{GeometryBuffer, Quad, QuadVertex};
use super::shader::{ShaderProgram, FILL_BINDING, FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Single-quad renderer with a uniform fill color.
///
/// All GPU objects are created in [`QuadRenderer::new`] and live for the session.
/// The only per-draw upload is the 16-byte fill uniform.
pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    fill_ubo: wgpu::Buffer,
    geometry: GeometryBuffer,
}

impl QuadRenderer {
    /// Builds the pipeline from a linked `program` and uploads `quad`.
    pub fn new(ctx: &RenderCtx<'_>, program: &ShaderProgram, quad: &Quad) -> Self {
        let modules = program.create_modules(ctx.device);

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("quadclick fill bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: FILL_BINDING,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(fill_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("quadclick pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quadclick quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &modules.vertex,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &modules.fragment,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let fill_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadclick fill ubo"),
            size: std::mem::size_of::<FillUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadclick fill bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: FILL_BINDING,
                resource: fill_ubo.as_entire_binding(),
            }],
        });

        let geometry = GeometryBuffer::upload(ctx.device, quad);

        log::info!("quad pipeline ready (format {:?})", ctx.surface_format);

        Self {
            pipeline,
            bind_group,
            fill_ubo,
            geometry,
        }
    }

    /// Records one draw of the quad with `fill` into `target`.
    ///
    /// The target is expected to be cleared already; this pass loads it.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, fill: Color) {
        debug_assert!(fill.is_normalized(), "fill out of range: {fill:?}");
        let u = FillUniform {
            color: fill.to_array(),
        };
        ctx.queue.write_buffer(&self.fill_ubo, 0, bytemuck::bytes_of(&u));

        let mut rpass = target.pass("quadclick quad pass", None);
        ctx.cover_target(&mut rpass);
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.geometry.buffer().slice(..));
        rpass.draw(0..self.geometry.vertex_count(), 0..1);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FillUniform {
    color: [f32; 4],
}

/// `FillUniform` is a `vec4<f32>`, so its size is a non-zero constant.
fn fill_ubo_min_binding_size() -> std::num::NonZeroU64 {
    const SIZE: std::num::NonZeroU64 =
        match std::num::NonZeroU64::new(std::mem::size_of::<FillUniform>() as u64) {
            Some(n) => n,
            None => panic!("FillUniform must not be zero-sized"),
        };
    SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_uniform_matches_wgsl_vec4() {
        assert_eq!(std::mem::size_of::<FillUniform>(), 16);
        assert_eq!(fill_ubo_min_binding_size().get(), 16);
    }

    #[test]
    fn fill_uniform_bytes_follow_rgba_order() {
        let u = FillUniform {
            color: Color::new(0.0, 0.8, 0.8, 1.0).to_array(),
        };
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats, &[0.0, 0.8, 0.8, 1.0]);
    }
}
