use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{NdcBox, Vec2};

use super::shader::POSITION_LOCATION;

/// A static quad in NDC, stored in triangle-strip order:
/// top-left, top-right, bottom-left, bottom-right.
///
/// Vertices are fixed at construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    vertices: [Vec2; 4],
}

impl Quad {
    /// Builds the strip from the quad's NDC edges.
    pub const fn from_edges(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            vertices: [
                Vec2::new(left, top),
                Vec2::new(right, top),
                Vec2::new(left, bottom),
                Vec2::new(right, bottom),
            ],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2; 4] {
        &self.vertices
    }

    /// Axis-aligned NDC box covered by the quad.
    pub fn extent(&self) -> NdcBox {
        let [first, rest @ ..] = self.vertices;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        NdcBox::new(min, max)
    }

    fn to_gpu(self) -> [QuadVertex; 4] {
        self.vertices.map(|v| QuadVertex { pos: [v.x, v.y] })
    }
}

impl Default for Quad {
    /// The demo rectangle: X in `[-0.6, 0.4]`, Y in `[-0.5, 0.5]`.
    fn default() -> Self {
        Self::from_edges(-0.6, 0.4, -0.5, 0.5)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // NDC
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![POSITION_LOCATION => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Device-side copy of a [`Quad`].
///
/// Created once; the buffer has no `COPY_DST` usage and is never rewritten.
pub struct GeometryBuffer {
    vbo: wgpu::Buffer,
    vertex_count: u32,
}

impl GeometryBuffer {
    pub fn upload(device: &wgpu::Device, quad: &Quad) -> Self {
        let vertices = quad.to_gpu();
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadclick quad vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("uploaded quad geometry: {:?}", quad.vertices());

        Self {
            vbo,
            vertex_count: vertices.len() as u32,
        }
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.vbo
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quad_strip_order() {
        let q = Quad::default();
        assert_eq!(
            q.vertices(),
            &[
                Vec2::new(-0.6, 0.5),
                Vec2::new(0.4, 0.5),
                Vec2::new(-0.6, -0.5),
                Vec2::new(0.4, -0.5),
            ]
        );
    }

    #[test]
    fn extent_spans_vertices() {
        let e = Quad::default().extent();
        assert_eq!(e.min, Vec2::new(-0.6, -0.5));
        assert_eq!(e.max, Vec2::new(0.4, 0.5));
    }

    #[test]
    fn gpu_layout_is_tightly_packed() {
        let raw = Quad::default().to_gpu();
        let bytes: &[u8] = bytemuck::cast_slice(&raw);
        assert_eq!(bytes.len(), 4 * 2 * std::mem::size_of::<f32>());
        assert_eq!(QuadVertex::layout().array_stride, 8);
        assert_eq!(raw[1].pos, [0.4, 0.5]);
    }
}
