//! A [`HostWindow`] fed by winit window events.

use std::collections::HashSet;
use std::sync::Arc;

use atlasui_core::{Action, Button, Rect, StandardCursor};
use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorIcon, Window};

use crate::gui::ClipboardBackend;
use crate::host::{HostWindow, LocalClipboard};

/// Pixel scroll deltas are divided by this to get line units.
const PIXELS_PER_LINE: f32 = 20.0;

/// Window state accumulated from winit events between frames.
///
/// Feed every [`WindowEvent`] to [`WinitHost::handle_event`] and call
/// [`WinitHost::end_frame`] once the frame is drawn.
#[derive(Debug, Default)]
pub struct WinitHost {
    size: Vec2,
    /// Pointer in window pixels, top-left origin.
    cursor_pixels: Vec2,
    scroll: Vec2,
    pressed: HashSet<Button>,
    just_pressed: HashSet<Button>,
    just_released: HashSet<Button>,
    repeated: HashSet<Button>,
    typed: String,
    cursor: Option<StandardCursor>,
    clipboard: LocalClipboard,
    window: Option<Arc<Window>>,
}

impl WinitHost {
    /// Creates a host for a window of the given inner size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Vec2::new(width as f32, height as f32),
            ..Self::default()
        }
    }

    /// Creates a host that tracks `window` and applies cursor changes to it.
    pub fn for_window(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        let mut host = Self::new(size.width, size.height);
        host.window = Some(window);
        host
    }

    /// Folds one window event into the host state.
    ///
    /// Returns the key or mouse button transition the event carried, if any,
    /// so it can be passed on to [`crate::UiSession::handle_button`].
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<(Button, Action)> {
        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vec2::new(pos.x as f32, pos.y as f32) / PIXELS_PER_LINE
                    }
                };
                self.scroll(lines);
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = mouse_button(*button)?;
                Some(self.button_state(button, *state, false))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Some(text) = &event.text {
                        self.type_text(text);
                    }
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let button = keycode_to_button(code);
                if button == Button::KEY_UNKNOWN {
                    log::trace!("no host button for {code:?}");
                    return None;
                }
                Some(self.button_state(button, event.state, event.repeat))
            }
            WindowEvent::Focused(false) => {
                // releases won't arrive while unfocused
                for button in std::mem::take(&mut self.pressed) {
                    self.just_released.insert(button);
                }
                None
            }
            _ => None,
        }
    }

    fn button_state(&mut self, button: Button, state: ElementState, repeat: bool) -> (Button, Action) {
        match state {
            ElementState::Pressed if repeat => {
                self.repeated.insert(button);
                (button, Action::Repeat)
            }
            ElementState::Pressed => {
                self.press(button);
                (button, Action::Press)
            }
            ElementState::Released => {
                self.release(button);
                (button, Action::Release)
            }
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Vec2::new(width as f32, height as f32);
    }

    /// Records the pointer at window pixel `(x, y)`, top-left origin.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor_pixels = Vec2::new(x, y);
    }

    /// Adds `lines` of scroll to this frame's total.
    pub fn scroll(&mut self, lines: Vec2) {
        self.scroll += lines;
    }

    pub fn press(&mut self, button: Button) {
        if self.pressed.insert(button) {
            self.just_pressed.insert(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        if self.pressed.remove(&button) {
            self.just_released.insert(button);
        }
    }

    /// Appends typed text, skipping control characters.
    pub fn type_text(&mut self, text: &str) {
        self.typed.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Clears per-frame edges, scroll and typed text.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.repeated.clear();
        self.scroll = Vec2::ZERO;
        self.typed.clear();
    }

    /// Cursor most recently requested by the GUI.
    pub fn cursor(&self) -> Option<StandardCursor> {
        self.cursor
    }

    /// The clipboard shared with the GUI.
    pub fn local_clipboard(&self) -> &LocalClipboard {
        &self.clipboard
    }
}

impl HostWindow for WinitHost {
    fn bounds(&self) -> Rect {
        Rect::new(Vec2::ZERO, self.size)
    }

    fn mouse_position(&self) -> Vec2 {
        Vec2::new(self.cursor_pixels.x, self.size.y - self.cursor_pixels.y)
    }

    fn mouse_scroll(&self) -> Vec2 {
        self.scroll
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
        if self.cursor == Some(cursor) {
            return;
        }
        self.cursor = Some(cursor);
        if let Some(window) = &self.window {
            window.set_cursor(cursor_icon(cursor));
        }
    }

    fn clipboard(&self) -> Box<dyn ClipboardBackend> {
        Box::new(self.clipboard.clone())
    }
}

/// winit cursor icon for a host cursor.
pub fn cursor_icon(cursor: StandardCursor) -> CursorIcon {
    match cursor {
        StandardCursor::Arrow => CursorIcon::Default,
        StandardCursor::IBeam => CursorIcon::Text,
        StandardCursor::Crosshair => CursorIcon::Crosshair,
        StandardCursor::Hand => CursorIcon::Pointer,
        StandardCursor::HResize => CursorIcon::EwResize,
        StandardCursor::VResize => CursorIcon::NsResize,
    }
}

/// Host button number for a winit mouse button.
pub fn mouse_button(button: MouseButton) -> Option<Button> {
    let index = match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
        MouseButton::Back => 3,
        MouseButton::Forward => 4,
        MouseButton::Other(n) if n < 8 => i32::from(n),
        MouseButton::Other(_) => return None,
    };
    Some(Button(index))
}

/// Host button for a physical key, or [`Button::KEY_UNKNOWN`].
#[allow(clippy::too_many_lines)]
pub fn keycode_to_button(code: KeyCode) -> Button {
    match code {
        KeyCode::Space => Button::KEY_SPACE,
        KeyCode::Quote => Button::KEY_APOSTROPHE,
        KeyCode::Comma => Button::KEY_COMMA,
        KeyCode::Minus => Button::KEY_MINUS,
        KeyCode::Period => Button::KEY_PERIOD,
        KeyCode::Slash => Button::KEY_SLASH,
        KeyCode::Digit0 => Button::KEY_0,
        KeyCode::Digit1 => Button::KEY_1,
        KeyCode::Digit2 => Button::KEY_2,
        KeyCode::Digit3 => Button::KEY_3,
        KeyCode::Digit4 => Button::KEY_4,
        KeyCode::Digit5 => Button::KEY_5,
        KeyCode::Digit6 => Button::KEY_6,
        KeyCode::Digit7 => Button::KEY_7,
        KeyCode::Digit8 => Button::KEY_8,
        KeyCode::Digit9 => Button::KEY_9,
        KeyCode::Semicolon => Button::KEY_SEMICOLON,
        KeyCode::Equal => Button::KEY_EQUAL,
        KeyCode::KeyA => Button::KEY_A,
        KeyCode::KeyB => Button::KEY_B,
        KeyCode::KeyC => Button::KEY_C,
        KeyCode::KeyD => Button::KEY_D,
        KeyCode::KeyE => Button::KEY_E,
        KeyCode::KeyF => Button::KEY_F,
        KeyCode::KeyG => Button::KEY_G,
        KeyCode::KeyH => Button::KEY_H,
        KeyCode::KeyI => Button::KEY_I,
        KeyCode::KeyJ => Button::KEY_J,
        KeyCode::KeyK => Button::KEY_K,
        KeyCode::KeyL => Button::KEY_L,
        KeyCode::KeyM => Button::KEY_M,
        KeyCode::KeyN => Button::KEY_N,
        KeyCode::KeyO => Button::KEY_O,
        KeyCode::KeyP => Button::KEY_P,
        KeyCode::KeyQ => Button::KEY_Q,
        KeyCode::KeyR => Button::KEY_R,
        KeyCode::KeyS => Button::KEY_S,
        KeyCode::KeyT => Button::KEY_T,
        KeyCode::KeyU => Button::KEY_U,
        KeyCode::KeyV => Button::KEY_V,
        KeyCode::KeyW => Button::KEY_W,
        KeyCode::KeyX => Button::KEY_X,
        KeyCode::KeyY => Button::KEY_Y,
        KeyCode::KeyZ => Button::KEY_Z,
        KeyCode::BracketLeft => Button::KEY_LEFT_BRACKET,
        KeyCode::Backslash => Button::KEY_BACKSLASH,
        KeyCode::BracketRight => Button::KEY_RIGHT_BRACKET,
        KeyCode::Backquote => Button::KEY_GRAVE_ACCENT,
        KeyCode::Escape => Button::KEY_ESCAPE,
        KeyCode::Enter => Button::KEY_ENTER,
        KeyCode::Tab => Button::KEY_TAB,
        KeyCode::Backspace => Button::KEY_BACKSPACE,
        KeyCode::Insert => Button::KEY_INSERT,
        KeyCode::Delete => Button::KEY_DELETE,
        KeyCode::ArrowRight => Button::KEY_RIGHT,
        KeyCode::ArrowLeft => Button::KEY_LEFT,
        KeyCode::ArrowDown => Button::KEY_DOWN,
        KeyCode::ArrowUp => Button::KEY_UP,
        KeyCode::PageUp => Button::KEY_PAGE_UP,
        KeyCode::PageDown => Button::KEY_PAGE_DOWN,
        KeyCode::Home => Button::KEY_HOME,
        KeyCode::End => Button::KEY_END,
        KeyCode::CapsLock => Button::KEY_CAPS_LOCK,
        KeyCode::ScrollLock => Button::KEY_SCROLL_LOCK,
        KeyCode::NumLock => Button::KEY_NUM_LOCK,
        KeyCode::PrintScreen => Button::KEY_PRINT_SCREEN,
        KeyCode::Pause => Button::KEY_PAUSE,
        KeyCode::F1 => Button::KEY_F1,
        KeyCode::F2 => Button::KEY_F2,
        KeyCode::F3 => Button::KEY_F3,
        KeyCode::F4 => Button::KEY_F4,
        KeyCode::F5 => Button::KEY_F5,
        KeyCode::F6 => Button::KEY_F6,
        KeyCode::F7 => Button::KEY_F7,
        KeyCode::F8 => Button::KEY_F8,
        KeyCode::F9 => Button::KEY_F9,
        KeyCode::F10 => Button::KEY_F10,
        KeyCode::F11 => Button::KEY_F11,
        KeyCode::F12 => Button::KEY_F12,
        KeyCode::Numpad0 => Button::KEY_KP_0,
        KeyCode::Numpad1 => Button::KEY_KP_1,
        KeyCode::Numpad2 => Button::KEY_KP_2,
        KeyCode::Numpad3 => Button::KEY_KP_3,
        KeyCode::Numpad4 => Button::KEY_KP_4,
        KeyCode::Numpad5 => Button::KEY_KP_5,
        KeyCode::Numpad6 => Button::KEY_KP_6,
        KeyCode::Numpad7 => Button::KEY_KP_7,
        KeyCode::Numpad8 => Button::KEY_KP_8,
        KeyCode::Numpad9 => Button::KEY_KP_9,
        KeyCode::NumpadDecimal => Button::KEY_KP_DECIMAL,
        KeyCode::NumpadDivide => Button::KEY_KP_DIVIDE,
        KeyCode::NumpadMultiply => Button::KEY_KP_MULTIPLY,
        KeyCode::NumpadSubtract => Button::KEY_KP_SUBTRACT,
        KeyCode::NumpadAdd => Button::KEY_KP_ADD,
        KeyCode::NumpadEnter => Button::KEY_KP_ENTER,
        KeyCode::NumpadEqual => Button::KEY_KP_EQUAL,
        KeyCode::ShiftLeft => Button::KEY_LEFT_SHIFT,
        KeyCode::ControlLeft => Button::KEY_LEFT_CONTROL,
        KeyCode::AltLeft => Button::KEY_LEFT_ALT,
        KeyCode::SuperLeft => Button::KEY_LEFT_SUPER,
        KeyCode::ShiftRight => Button::KEY_RIGHT_SHIFT,
        KeyCode::ControlRight => Button::KEY_RIGHT_CONTROL,
        KeyCode::AltRight => Button::KEY_RIGHT_ALT,
        KeyCode::SuperRight => Button::KEY_RIGHT_SUPER,
        KeyCode::ContextMenu => Button::KEY_MENU,
        _ => Button::KEY_UNKNOWN,
    }
}
