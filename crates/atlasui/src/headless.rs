//! In-process stand-ins for the GUI library, the host window and the host
//! draw call.
//!
//! These let a [`crate::UiSession`] run without a window, a GPU or a real GUI
//! library. Every piece of state they receive is kept in public fields so
//! integration tests and tools can inspect or script it.

use std::collections::HashSet;

use atlasui_core::{
    Atlas, Button, DrawData, DrawVert, GuiKey, IndexSize, MouseCursor, Rect, Result,
    StandardCursor, TextureId, VertexLayout,
};
use atlasui_render::{TriangleTarget, UiVertex};
use glam::{Affine2, Vec2, Vec4};

use crate::gui::{BackendFlags, ClipboardBackend, FontTexture, GuiContext, Modifiers};
use crate::host::LocalClipboard;

/// Side of the generated square font texture.
const FONT_TEXTURE_SIZE: u32 = 8;

/// A scripted GUI context that records the IO it is given.
///
/// `render` returns whatever was last put in [`HeadlessGui::draw_data`].
pub struct HeadlessGui {
    pub display_size: Vec2,
    pub delta_time: f32,
    pub mouse_wheel: Vec2,
    pub mouse_pos: Vec2,
    pub mouse_down: [bool; 5],
    pub input_text: String,
    pub modifiers: Modifiers,
    pub keys_down: [bool; GuiKey::COUNT],
    pub backend_flags: BackendFlags,
    pub clipboard: Option<Box<dyn ClipboardBackend>>,
    pub want_capture_mouse: bool,
    pub want_capture_keyboard: bool,
    pub mouse_cursor: MouseCursor,
    pub draw_data: DrawData,
    pub frames: usize,
    pub default_font_added: bool,
    pub font_texture_id: Option<TextureId>,
}

impl Default for HeadlessGui {
    fn default() -> Self {
        Self {
            display_size: Vec2::ZERO,
            delta_time: 0.0,
            mouse_wheel: Vec2::ZERO,
            mouse_pos: Vec2::ZERO,
            mouse_down: [false; 5],
            input_text: String::new(),
            modifiers: Modifiers::default(),
            keys_down: [false; GuiKey::COUNT],
            backend_flags: BackendFlags::empty(),
            clipboard: None,
            want_capture_mouse: false,
            want_capture_keyboard: false,
            mouse_cursor: MouseCursor::default(),
            draw_data: DrawData::default(),
            frames: 0,
            default_font_added: false,
            font_texture_id: None,
        }
    }
}

impl HeadlessGui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is currently held down.
    pub fn key_down(&self, key: GuiKey) -> bool {
        self.keys_down[key.table_index()]
    }

    /// Number of keys currently held down.
    pub fn keys_held(&self) -> usize {
        self.keys_down.iter().filter(|down| **down).count()
    }
}

impl GuiContext for HeadlessGui {
    fn new_frame(&mut self) {
        self.frames += 1;
    }

    fn render(&mut self) -> &DrawData {
        &self.draw_data
    }

    fn vertex_layout(&self) -> VertexLayout {
        DrawVert::LAYOUT
    }

    fn index_size(&self) -> Result<IndexSize> {
        IndexSize::from_bytes(std::mem::size_of::<u16>())
    }

    fn set_display_size(&mut self, size: Vec2) {
        self.display_size = size;
    }

    fn set_delta_time(&mut self, seconds: f32) {
        self.delta_time = seconds;
    }

    fn add_mouse_wheel_delta(&mut self, delta: Vec2) {
        self.mouse_wheel += delta;
    }

    fn set_mouse_pos(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
    }

    fn set_mouse_button_down(&mut self, button: usize, down: bool) {
        if let Some(slot) = self.mouse_down.get_mut(button) {
            *slot = down;
        }
    }

    fn add_input_characters_utf8(&mut self, text: &str) {
        self.input_text.push_str(text);
    }

    fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    fn set_key_down(&mut self, key: GuiKey, down: bool) {
        self.keys_down[key.table_index()] = down;
    }

    fn set_backend_flags(&mut self, flags: BackendFlags) {
        self.backend_flags = flags;
    }

    fn set_clipboard_backend(&mut self, clipboard: Box<dyn ClipboardBackend>) {
        self.clipboard = Some(clipboard);
    }

    fn want_capture_mouse(&self) -> bool {
        self.want_capture_mouse
    }

    fn want_capture_keyboard(&self) -> bool {
        self.want_capture_keyboard
    }

    fn mouse_cursor(&self) -> MouseCursor {
        self.mouse_cursor
    }

    fn add_default_font(&mut self) {
        self.default_font_added = true;
    }

    fn font_texture(&mut self) -> FontTexture {
        // checkerboard coverage, enough to tell glyph texels from background
        let size = FONT_TEXTURE_SIZE;
        let alpha = (0..size * size)
            .map(|i| if (i % size + i / size) % 2 == 0 { 0xff } else { 0x00 })
            .collect();
        FontTexture {
            width: size,
            height: size,
            alpha,
        }
    }

    fn set_font_texture_id(&mut self, id: TextureId) {
        self.font_texture_id = Some(id);
    }
}

/// A host window whose state is set directly.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    pub bounds: Rect,
    pub mouse_position: Vec2,
    pub mouse_scroll: Vec2,
    pub pressed: HashSet<Button>,
    pub just_pressed: HashSet<Button>,
    pub just_released: HashSet<Button>,
    pub repeated: HashSet<Button>,
    pub typed: String,
    pub cursor: Option<StandardCursor>,
    pub clipboard: LocalClipboard,
}

impl HeadlessHost {
    /// Creates a host window of the given size with its origin at zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(Vec2::ZERO, Vec2::new(width, height)),
            mouse_position: Vec2::ZERO,
            mouse_scroll: Vec2::ZERO,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            repeated: HashSet::new(),
            typed: String::new(),
            cursor: None,
            clipboard: LocalClipboard::new(),
        }
    }

    /// Marks `button` as going down this frame.
    pub fn press(&mut self, button: Button) {
        self.pressed.insert(button);
        self.just_pressed.insert(button);
    }

    /// Marks `button` as going up this frame.
    pub fn release(&mut self, button: Button) {
        self.pressed.remove(&button);
        self.just_released.insert(button);
    }

    /// Clears per-frame edges, scroll and typed text.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.repeated.clear();
        self.mouse_scroll = Vec2::ZERO;
        self.typed.clear();
    }
}

impl crate::host::HostWindow for HeadlessHost {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    fn mouse_scroll(&self) -> Vec2 {
        self.mouse_scroll
    }

    fn pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(&button)
    }

    fn just_released(&self, button: Button) -> bool {
        self.just_released.contains(&button)
    }

    fn repeated(&self, button: Button) -> bool {
        self.repeated.contains(&button)
    }

    fn typed(&self) -> String {
        self.typed.clone()
    }

    fn set_cursor(&mut self, cursor: StandardCursor) {
        self.cursor = Some(cursor);
    }

    fn clipboard(&self) -> Box<dyn ClipboardBackend> {
        Box::new(self.clipboard.clone())
    }
}

/// A draw target that keeps a copy of the last frame it was given.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub vertices: Vec<UiVertex>,
    pub view: Option<Affine2>,
    pub color_mask: Option<Vec4>,
    pub atlas_size: Vec2,
    pub draws: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TriangleTarget for RecordingTarget {
    fn draw_triangles(
        &mut self,
        vertices: &[UiVertex],
        atlas: &Atlas,
        view: Affine2,
        color_mask: Vec4,
    ) -> Result<()> {
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        self.view = Some(view);
        self.color_mask = Some(color_mask);
        self.atlas_size = atlas.size();
        self.draws += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_texture_matches_dimensions() {
        let mut gui = HeadlessGui::new();
        let font = gui.font_texture();
        assert_eq!(font.alpha.len(), (font.width * font.height) as usize);
        assert_eq!(font.alpha[0], 0xff);
        assert_eq!(font.alpha[1], 0x00);
    }

    #[test]
    fn test_out_of_range_mouse_button_ignored() {
        let mut gui = HeadlessGui::new();
        gui.set_mouse_button_down(9, true);
        assert_eq!(gui.mouse_down, [false; 5]);
    }

    #[test]
    fn test_host_press_release() {
        let mut host = HeadlessHost::new(100.0, 50.0);
        host.press(Button::KEY_A);
        assert!(host.pressed.contains(&Button::KEY_A));
        host.end_frame();
        assert!(host.just_pressed.is_empty());
        host.release(Button::KEY_A);
        assert!(host.pressed.is_empty());
        assert!(host.just_released.contains(&Button::KEY_A));
    }
}
