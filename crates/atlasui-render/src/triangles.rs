//! The output triangle list handed to the host each frame.

use atlasui_core::Rect;
use glam::{Vec2, Vec4};

/// One output vertex, laid out for direct upload as a vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    /// Position in GUI screen space; the view matrix is applied on the GPU.
    pub position: [f32; 2],
    /// Atlas-global texture coordinate.
    pub uv: [f32; 2],
    /// 0 samples only alpha (font glyphs), 1 samples full RGBA.
    pub intensity: f32,
    /// Straight-alpha RGBA in `[0, 1]`.
    pub color: [f32; 4],
    /// Clip rectangle in host space, or all zeros for none.
    pub clip_rect: [f32; 4],
}

impl UiVertex {
    /// Vertex attributes matching `shaders/ui.wgsl`.
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2,
        2 => Float32,
        3 => Float32x4,
        4 => Float32x4
    ];

    /// Buffer layout for the UI pipeline.
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A resizable triangle list with per-vertex setters.
///
/// Every three consecutive vertices form one triangle. The buffer is rebuilt
/// from scratch each frame; [`TriangleBuffer::set_len`] only reallocates when
/// it grows past its capacity.
#[derive(Debug, Clone, Default)]
pub struct TriangleBuffer {
    vertices: Vec<UiVertex>,
}

impl TriangleBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Resizes to exactly `len` vertices. New vertices are zeroed.
    pub fn set_len(&mut self, len: usize) {
        self.vertices.resize(len, UiVertex::default());
    }

    pub fn set_position(&mut self, i: usize, position: Vec2) {
        self.vertices[i].position = position.to_array();
    }

    pub fn set_picture(&mut self, i: usize, uv: Vec2, intensity: f32) {
        let v = &mut self.vertices[i];
        v.uv = uv.to_array();
        v.intensity = intensity;
    }

    pub fn set_color(&mut self, i: usize, color: Vec4) {
        self.vertices[i].color = color.to_array();
    }

    pub fn set_clip_rect(&mut self, i: usize, clip: Rect) {
        self.vertices[i].clip_rect = clip.to_array();
    }

    /// The vertices, ready for upload.
    pub fn vertices(&self) -> &[UiVertex] {
        &self.vertices
    }
}
