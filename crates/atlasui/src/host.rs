//! The host window, as seen by the session.
//!
//! Host coordinates have their origin at the bottom-left of the window with
//! y pointing up.

use std::cell::RefCell;
use std::rc::Rc;

use atlasui_core::{Button, Rect, StandardCursor};
use glam::Vec2;

use crate::gui::ClipboardBackend;

/// Input and window state supplied by the host engine.
pub trait HostWindow {
    /// Window bounds in host coordinates.
    fn bounds(&self) -> Rect;

    /// Pointer position in host coordinates.
    fn mouse_position(&self) -> Vec2;

    /// Scroll accumulated since the previous frame.
    fn mouse_scroll(&self) -> Vec2;

    /// Whether `button` is held.
    fn pressed(&self, button: Button) -> bool;

    /// Whether `button` went down this frame.
    fn just_pressed(&self, button: Button) -> bool;

    /// Whether `button` went up this frame.
    fn just_released(&self, button: Button) -> bool;

    /// Whether `button` auto-repeated this frame.
    fn repeated(&self, button: Button) -> bool;

    /// Text typed since the previous frame.
    fn typed(&self) -> String;

    /// Shows `cursor` over the window.
    fn set_cursor(&mut self, cursor: StandardCursor);

    /// A clipboard handle the GUI library can keep.
    fn clipboard(&self) -> Box<dyn ClipboardBackend>;
}

/// In-process clipboard shared between clones.
#[derive(Debug, Clone, Default)]
pub struct LocalClipboard {
    text: Rc<RefCell<Option<String>>>,
}

impl LocalClipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for LocalClipboard {
    fn get(&mut self) -> Option<String> {
        self.text.borrow().clone()
    }

    fn set(&mut self, value: &str) {
        *self.text.borrow_mut() = Some(value.to_owned());
    }
}
