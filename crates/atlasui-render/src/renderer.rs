//! wgpu pass that draws the UI triangle list.

use atlasui_core::{Atlas, Result};
use glam::{Affine2, Mat4, UVec2, Vec4};
use wgpu::util::DeviceExt;

use crate::error::{RenderError, RenderResult};
use crate::target::TriangleTarget;
use crate::triangles::UiVertex;

/// GPU representation of the UI uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiUniforms {
    pub transform: [[f32; 4]; 4],
    pub viewport: [f32; 4],
    pub color_mask: [f32; 4],
}

impl UiUniforms {
    /// Uniforms for a `viewport`-sized target drawing through `view`.
    pub fn new(view: Affine2, viewport: UVec2, color_mask: Vec4) -> Self {
        let size = viewport.as_vec2();
        Self {
            transform: (host_projection(size.x, size.y) * affine_to_mat4(view)).to_cols_array_2d(),
            viewport: [size.x, size.y, 0.0, 0.0],
            color_mask: color_mask.to_array(),
        }
    }
}

impl Default for UiUniforms {
    fn default() -> Self {
        Self::new(Affine2::IDENTITY, UVec2::ONE, Vec4::ONE)
    }
}

/// Orthographic projection from host space (origin bottom-left, y up,
/// `width` x `height` pixels) to normalized device coordinates.
pub fn host_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, 0.0, height, -1.0, 1.0)
}

/// Embeds a 2D affine transform in a 4x4 matrix acting on the xy plane.
pub fn affine_to_mat4(a: Affine2) -> Mat4 {
    let m = a.matrix2;
    let t = a.translation;
    Mat4::from_cols(
        Vec4::new(m.x_axis.x, m.x_axis.y, 0.0, 0.0),
        Vec4::new(m.y_axis.x, m.y_axis.y, 0.0, 0.0),
        Vec4::Z,
        Vec4::new(t.x, t.y, 0.0, 1.0),
    )
}

struct AtlasTexture {
    bind_group: wgpu::BindGroup,
    revision: u64,
}

/// UI render resources: pipeline, uniforms, atlas texture, vertex buffer.
pub struct UiRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    atlas: Option<AtlasTexture>,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    vertex_count: u32,
    color_mask: Vec4,
}

impl UiRenderer {
    /// Creates the UI pipeline targeting `output_format`.
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("UI Bind Group Layout"),
            entries: &[
                // Uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Atlas texture
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                // Sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("UI Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/ui.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("UI Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("UI Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[UiVertex::buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: output_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("UI Uniform Buffer"),
            contents: bytemuck::cast_slice(&[UiUniforms::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("UI Atlas Sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            pipeline,
            bind_group_layout,
            uniform_buffer,
            sampler,
            atlas: None,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_count: 0,
            color_mask: Vec4::ONE,
        }
    }

    /// Sets the color every UI fragment is multiplied by.
    pub fn set_color_mask(&mut self, color_mask: Vec4) {
        self.color_mask = color_mask;
    }

    /// Revision of the last uploaded atlas, if any.
    pub fn atlas_revision(&self) -> Option<u64> {
        self.atlas.as_ref().map(|a| a.revision)
    }

    /// Uploads the atlas pixels into a fresh texture.
    pub fn upload_atlas(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, atlas: &Atlas) {
        let image = atlas.image();
        let size = wgpu::Extent3d {
            width: image.width().max(1),
            height: image.height().max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("UI Atlas Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        if !image.is_empty() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                image.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * image.width()),
                    rows_per_image: Some(image.height()),
                },
                size,
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("UI Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        log::debug!(
            "uploaded UI atlas {}x{} (revision {})",
            image.width(),
            image.height(),
            atlas.revision()
        );
        self.atlas = Some(AtlasTexture {
            bind_group,
            revision: atlas.revision(),
        });
    }

    /// Copies this frame's vertices and uniforms to the GPU.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[UiVertex],
        view: Affine2,
        viewport: UVec2,
    ) {
        let uniforms = UiUniforms::new(view, viewport, self.color_mask);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        if vertices.len() > self.vertex_capacity || self.vertex_buffer.is_none() {
            let capacity = vertices.len().next_power_of_two().max(1024);
            log::debug!("growing UI vertex buffer to {capacity} vertices");
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("UI Vertex Buffer"),
                size: (capacity * std::mem::size_of::<UiVertex>()) as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = capacity;
        }

        if let Some(buffer) = &self.vertex_buffer {
            if !vertices.is_empty() {
                queue.write_buffer(buffer, 0, bytemuck::cast_slice(vertices));
            }
        }
        self.vertex_count = u32::try_from(vertices.len()).unwrap_or(u32::MAX);
    }

    /// Records the single UI draw call into `render_pass`.
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        let (Some(atlas), Some(buffer)) = (&self.atlas, &self.vertex_buffer) else {
            return;
        };
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &atlas.bind_group, &[]);
        render_pass.set_vertex_buffer(0, buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }

    /// Borrows the renderer as a [`TriangleTarget`] for one frame.
    pub fn target<'a>(
        &'a mut self,
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        viewport: UVec2,
    ) -> WgpuTarget<'a> {
        WgpuTarget {
            renderer: self,
            device,
            queue,
            viewport,
        }
    }
}

/// [`TriangleTarget`] that uploads into a [`UiRenderer`].
///
/// Drawing happens later, inside the host's render pass, with
/// [`UiRenderer::render`].
pub struct WgpuTarget<'a> {
    renderer: &'a mut UiRenderer,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    viewport: UVec2,
}

impl TriangleTarget for WgpuTarget<'_> {
    fn draw_triangles(
        &mut self,
        vertices: &[UiVertex],
        atlas: &Atlas,
        view: Affine2,
        color_mask: Vec4,
    ) -> Result<()> {
        if self.renderer.atlas_revision() != Some(atlas.revision()) {
            self.renderer.upload_atlas(self.device, self.queue, atlas);
        }
        self.renderer.set_color_mask(color_mask);
        self.renderer
            .prepare(self.device, self.queue, vertices, view, self.viewport);
        Ok(())
    }
}

/// Creates a device without a surface, for offscreen rendering and tests.
pub async fn request_headless_device() -> RenderResult<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .map_err(|_| RenderError::AdapterCreationFailed)?;

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("atlasui device (headless)"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: Default::default(),
            experimental_features: Default::default(),
        })
        .await?;

    Ok((device, queue))
}
