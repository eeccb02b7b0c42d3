//! Per-frame draw data produced by the GUI library, plus typed views that
//! decode vertices and indices out of its raw buffers.
//!
//! The vertex layout is owned by the GUI library and may change between
//! versions, so it is described at runtime by [`VertexLayout`] rather than
//! assumed. All byte-offset arithmetic lives in [`VertexView`] and
//! [`IndexView`].

use std::fmt;
use std::mem::{offset_of, size_of};
use std::rc::Rc;

use glam::Vec2;

use crate::color::Rgba8;
use crate::error::{Result, UiError};

/// Identifies one sub-image of the shared atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TextureId(pub u32);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Byte layout of one vertex in a GUI vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Size of one vertex in bytes.
    pub stride: usize,
    /// Offset of the `[f32; 2]` position.
    pub pos_offset: usize,
    /// Offset of the `[f32; 2]` texture coordinate.
    pub uv_offset: usize,
    /// Offset of the packed `u32` color.
    pub col_offset: usize,
}

impl VertexLayout {
    /// Checks that every attribute fits inside the stride.
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            return Err(UiError::InvalidVertexLayout("zero stride".into()));
        }
        let fields = [
            ("position", self.pos_offset, size_of::<[f32; 2]>()),
            ("uv", self.uv_offset, size_of::<[f32; 2]>()),
            ("color", self.col_offset, size_of::<u32>()),
        ];
        for (name, offset, size) in fields {
            if offset + size > self.stride {
                return Err(UiError::InvalidVertexLayout(format!(
                    "{name} at offset {offset} overruns stride {}",
                    self.stride
                )));
            }
        }
        Ok(())
    }
}

/// The GUI library's default vertex: position, uv, packed ABGR color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub col: u32,
}

impl DrawVert {
    /// Layout of [`DrawVert`] in a vertex buffer.
    pub const LAYOUT: VertexLayout = VertexLayout {
        stride: size_of::<Self>(),
        pos_offset: offset_of!(Self, pos),
        uv_offset: offset_of!(Self, uv),
        col_offset: offset_of!(Self, col),
    };
}

/// Width of one entry in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexSize {
    #[default]
    U16,
    U32,
}

impl IndexSize {
    /// Maps a byte width reported by the GUI library.
    pub fn from_bytes(size: usize) -> Result<Self> {
        match size {
            2 => Ok(Self::U16),
            4 => Ok(Self::U32),
            other => Err(UiError::UnsupportedIndexSize(other)),
        }
    }

    /// Byte width of one index.
    pub const fn bytes(self) -> usize {
        match self {
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

/// One decoded GUI vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuiVertex {
    pub pos: Vec2,
    pub uv: Vec2,
    pub col: Rgba8,
}

/// Decodes vertices from a raw vertex buffer using a runtime layout.
#[derive(Debug, Clone, Copy)]
pub struct VertexView<'a> {
    bytes: &'a [u8],
    layout: VertexLayout,
}

impl<'a> VertexView<'a> {
    /// Wraps `bytes`, checking the layout and that the buffer holds a whole
    /// number of vertices.
    pub fn new(bytes: &'a [u8], layout: VertexLayout) -> Result<Self> {
        layout.validate()?;
        if bytes.len() % layout.stride != 0 {
            return Err(UiError::BufferSizeMismatch {
                len: bytes.len(),
                element_size: layout.stride,
            });
        }
        Ok(Self { bytes, layout })
    }

    /// Number of vertices in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.layout.stride
    }

    /// Whether the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decodes vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Draw data that references a
    /// missing vertex is a broken contract with the GUI library.
    pub fn get(&self, index: usize) -> GuiVertex {
        let len = self.len();
        assert!(index < len, "vertex index {index} out of range ({len} vertices)");
        let base = index * self.layout.stride;
        let vertex = &self.bytes[base..base + self.layout.stride];
        let pos: [f32; 2] = read(vertex, self.layout.pos_offset);
        let uv: [f32; 2] = read(vertex, self.layout.uv_offset);
        let col: u32 = read(vertex, self.layout.col_offset);
        GuiVertex {
            pos: Vec2::from(pos),
            uv: Vec2::from(uv),
            col: Rgba8::from_packed_abgr(col),
        }
    }
}

/// Decodes indices from a raw index buffer.
#[derive(Debug, Clone, Copy)]
pub struct IndexView<'a> {
    bytes: &'a [u8],
    size: IndexSize,
}

impl<'a> IndexView<'a> {
    /// Wraps `bytes`, checking that it holds a whole number of indices.
    pub fn new(bytes: &'a [u8], size: IndexSize) -> Result<Self> {
        if bytes.len() % size.bytes() != 0 {
            return Err(UiError::BufferSizeMismatch {
                len: bytes.len(),
                element_size: size.bytes(),
            });
        }
        Ok(Self { bytes, size })
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.size.bytes()
    }

    /// Whether the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn get(&self, i: usize) -> u32 {
        let len = self.len();
        assert!(i < len, "index {i} out of range ({len} indices)");
        match self.size {
            IndexSize::U16 => u32::from(read::<u16>(self.bytes, i * 2)),
            IndexSize::U32 => read::<u32>(self.bytes, i * 4),
        }
    }
}

fn read<T: bytemuck::Pod>(bytes: &[u8], offset: usize) -> T {
    bytemuck::pod_read_unaligned(&bytes[offset..offset + size_of::<T>()])
}

/// Callback run in place of a draw command. Receives the list it belongs to.
pub type UserCallback = Rc<dyn Fn(&DrawList)>;

/// One entry of a command list.
#[derive(Clone)]
pub enum DrawCmd {
    /// Draw `count` indices starting at `idx_offset`, with `vtx_offset`
    /// added to each index, using one texture and one clip rectangle.
    Elements {
        count: usize,
        idx_offset: usize,
        vtx_offset: usize,
        /// `[x1, y1, x2, y2]` in GUI screen space; all zero means no clipping.
        clip_rect: [f32; 4],
        texture_id: TextureId,
    },
    /// Run a user callback instead of drawing.
    Callback(UserCallback),
}

impl DrawCmd {
    /// Index count contributed to the output, zero for callbacks.
    pub fn elem_count(&self) -> usize {
        match self {
            Self::Elements { count, .. } => *count,
            Self::Callback(_) => 0,
        }
    }
}

impl fmt::Debug for DrawCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elements {
                count,
                idx_offset,
                vtx_offset,
                clip_rect,
                texture_id,
            } => f
                .debug_struct("Elements")
                .field("count", count)
                .field("idx_offset", idx_offset)
                .field("vtx_offset", vtx_offset)
                .field("clip_rect", clip_rect)
                .field("texture_id", texture_id)
                .finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// A command list: shared vertex and index buffers plus the commands that
/// draw ranges of them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vtx_buffer: Vec<u8>,
    pub idx_buffer: Vec<u8>,
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    /// Builds a list from default-layout vertices and 16-bit indices.
    pub fn from_parts(vertices: &[DrawVert], indices: &[u16], commands: Vec<DrawCmd>) -> Self {
        Self {
            vtx_buffer: bytemuck::cast_slice(vertices).to_vec(),
            idx_buffer: bytemuck::cast_slice(indices).to_vec(),
            commands,
        }
    }

    /// Sum of element counts over all commands.
    pub fn elem_count(&self) -> usize {
        self.commands.iter().map(DrawCmd::elem_count).sum()
    }
}

/// Everything the GUI library wants drawn this frame.
#[derive(Debug, Clone, Default)]
pub struct DrawData {
    pub lists: Vec<DrawList>,
    pub display_pos: Vec2,
    pub display_size: Vec2,
}

impl DrawData {
    /// Total output vertex count for the frame.
    pub fn total_elem_count(&self) -> usize {
        self.lists.iter().map(DrawList::elem_count).sum()
    }
}
