//! The immediate-mode GUI library, as seen by the session.

use atlasui_core::{
    DrawData, GuiKey, IndexSize, MouseCursor, Result, TextureId, VertexLayout,
};
use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Capabilities the backend advertises to the GUI library.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BackendFlags: u32 {
        /// The backend applies the GUI's requested mouse cursor.
        const HAS_MOUSE_CURSORS = 1 << 1;
        /// The backend honours GUI requests to move the mouse.
        const HAS_SET_MOUSE_POS = 1 << 2;
    }
}

/// Modifier key state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

/// Alpha-only font texture produced by the GUI library's font atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTexture {
    pub width: u32,
    pub height: u32,
    /// One coverage byte per pixel, row-major.
    pub alpha: Vec<u8>,
}

/// Clipboard access the GUI library calls into for copy and paste.
pub trait ClipboardBackend {
    /// Current clipboard text, if any.
    fn get(&mut self) -> Option<String>;
    /// Replaces the clipboard text.
    fn set(&mut self, value: &str);
}

/// One GUI library context.
///
/// Implementations wrap the library's context, IO state and draw data.
/// Dropping the implementation destroys the context.
pub trait GuiContext {
    /// Starts a GUI frame. IO must be set up before this is called.
    fn new_frame(&mut self);

    /// Finishes the frame and returns what to draw.
    fn render(&mut self) -> &DrawData;

    /// Vertex layout of this library version's draw data.
    fn vertex_layout(&self) -> VertexLayout;

    /// Index width of this library version's draw data.
    fn index_size(&self) -> Result<IndexSize>;

    fn set_display_size(&mut self, size: Vec2);
    fn set_delta_time(&mut self, seconds: f32);
    fn add_mouse_wheel_delta(&mut self, delta: Vec2);
    fn set_mouse_pos(&mut self, pos: Vec2);
    fn set_mouse_button_down(&mut self, button: usize, down: bool);
    fn add_input_characters_utf8(&mut self, text: &str);
    fn set_modifiers(&mut self, modifiers: Modifiers);
    fn set_key_down(&mut self, key: GuiKey, down: bool);
    fn set_backend_flags(&mut self, flags: BackendFlags);
    fn set_clipboard_backend(&mut self, clipboard: Box<dyn ClipboardBackend>);

    /// Whether the GUI is using the mouse this frame.
    fn want_capture_mouse(&self) -> bool;

    /// Whether the GUI is using the keyboard this frame.
    fn want_capture_keyboard(&self) -> bool;

    /// Cursor shape the GUI wants shown.
    fn mouse_cursor(&self) -> MouseCursor;

    /// Adds the library's built-in font to its font atlas.
    fn add_default_font(&mut self);

    /// Rasterized font atlas as alpha coverage.
    fn font_texture(&mut self) -> FontTexture;

    /// Tells the library which texture id its font atlas was given.
    fn set_font_texture_id(&mut self, id: TextureId);
}
