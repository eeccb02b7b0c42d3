//! Translation of GUI draw data into the host triangle list.
//!
//! The GUI library emits indexed geometry per command list, one texture and
//! one clip rectangle per command. The host draws a flat, non-indexed
//! triangle list with a single atlas texture, so each index is expanded into
//! a full vertex carrying its own atlas coordinates, color, and clip rect.

use atlasui_core::{
    project_rect, Atlas, DrawCmd, DrawData, IndexSize, IndexView, Rect, Result, TextureId,
    VertexLayout, VertexView,
};
use glam::{Affine2, Vec2};

use crate::triangles::TriangleBuffer;

/// Everything needed to translate one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    /// This frame's draw data.
    pub draw_data: &'a DrawData,
    /// Vertex layout reported by the GUI library.
    pub layout: VertexLayout,
    /// Index width reported by the GUI library.
    pub index_size: IndexSize,
    /// Atlas holding every texture the draw data references.
    pub atlas: &'a Atlas,
    /// The alpha-only font texture, drawn with intensity 0.
    pub font_texture: Option<TextureId>,
    /// GUI-to-host view matrix, applied to clip rectangles.
    pub view: Affine2,
}

/// Expands draw data into a reusable [`TriangleBuffer`].
#[derive(Debug, Default)]
pub struct FrameTranslator {
    triangles: TriangleBuffer,
}

impl FrameTranslator {
    /// Creates a translator with an empty output buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Output of the most recent [`FrameTranslator::translate`].
    pub fn triangles(&self) -> &TriangleBuffer {
        &self.triangles
    }

    /// Translates a frame and returns the number of vertices written.
    ///
    /// Callback commands are invoked in order and produce no vertices. The
    /// output buffer only grows when a frame needs more vertices than the
    /// last one, and is truncated to the exact count at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex layout or a buffer length is
    /// inconsistent with the reported layout.
    ///
    /// # Panics
    ///
    /// Panics if a command references a texture missing from the atlas or an
    /// index/vertex outside its list's buffers.
    pub fn translate(&mut self, frame: &FrameInput<'_>) -> Result<usize> {
        frame.layout.validate()?;
        let atlas_size = frame.atlas.size();
        let mut total = 0;

        for list in &frame.draw_data.lists {
            let vertices = VertexView::new(&list.vtx_buffer, frame.layout)?;
            let indices = IndexView::new(&list.idx_buffer, frame.index_size)?;

            for cmd in &list.commands {
                let (count, idx_offset, vtx_offset, clip_rect, texture_id) = match cmd {
                    DrawCmd::Callback(callback) => {
                        callback(list);
                        continue;
                    }
                    DrawCmd::Elements {
                        count,
                        idx_offset,
                        vtx_offset,
                        clip_rect,
                        texture_id,
                    } => (*count, *idx_offset, *vtx_offset, *clip_rect, *texture_id),
                };

                let start = total;
                total += count;
                if self.triangles.len() < total {
                    self.triangles.set_len(total);
                }

                let clip = resolve_clip_rect(&frame.view, clip_rect);
                let Some(sub_rect) = frame.atlas.frame(texture_id) else {
                    panic!("texture {texture_id} is not in the atlas");
                };
                let intensity = if frame.font_texture == Some(texture_id) {
                    0.0
                } else {
                    1.0
                };

                for i in 0..count {
                    let index = indices.get(idx_offset + i) as usize + vtx_offset;
                    let vertex = vertices.get(index);
                    let out = start + i;
                    self.triangles.set_position(out, vertex.pos);
                    self.triangles
                        .set_picture(out, atlas_uv(sub_rect, vertex.uv, atlas_size), intensity);
                    self.triangles.set_color(out, vertex.col.to_vec4());
                    self.triangles.set_clip_rect(out, clip);
                }
            }
        }

        self.triangles.set_len(total);
        log::trace!(
            "translated {} command lists into {total} vertices",
            frame.draw_data.lists.len()
        );
        Ok(total)
    }
}

/// Maps a GUI clip rectangle into host space.
///
/// The all-zero rectangle means "no clipping" and is returned untouched.
pub fn resolve_clip_rect(view: &Affine2, clip_rect: [f32; 4]) -> Rect {
    let rect = Rect::from_array(clip_rect);
    if rect.is_zero() {
        return rect;
    }
    project_rect(view, rect.norm())
}

/// Rescales a texture coordinate local to `sub_rect` into atlas space.
pub fn atlas_uv(sub_rect: Rect, uv: Vec2, atlas_size: Vec2) -> Vec2 {
    (uv * sub_rect.size() + sub_rect.min) / atlas_size
}
