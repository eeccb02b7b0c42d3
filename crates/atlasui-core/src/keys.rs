//! Host buttons, GUI named keys, and the table between them.
//!
//! Host buttons use GLFW numbering (mouse buttons 0-7, printable keys at
//! their ASCII code, function keys from 256). Every named host key has an
//! explicit entry in [`gui_key`]; anything else goes through
//! [`translate_key`], which applies [`FALLBACK_KEY_OFFSET`] and reports keys
//! it cannot place.

/// A host mouse button or keyboard key, GLFW-numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Button(pub i32);

/// Button press state change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Press,
    Release,
    Repeat,
}

impl Button {
    pub const MOUSE_BUTTON_1: Self = Self(0);
    pub const MOUSE_BUTTON_2: Self = Self(1);
    pub const MOUSE_BUTTON_3: Self = Self(2);
    pub const MOUSE_BUTTON_4: Self = Self(3);
    pub const MOUSE_BUTTON_5: Self = Self(4);
    pub const MOUSE_BUTTON_6: Self = Self(5);
    pub const MOUSE_BUTTON_7: Self = Self(6);
    pub const MOUSE_BUTTON_8: Self = Self(7);
    pub const MOUSE_LEFT: Self = Self::MOUSE_BUTTON_1;
    pub const MOUSE_RIGHT: Self = Self::MOUSE_BUTTON_2;
    pub const MOUSE_MIDDLE: Self = Self::MOUSE_BUTTON_3;

    pub const KEY_UNKNOWN: Self = Self(-1);
    pub const KEY_SPACE: Self = Self(32);
    pub const KEY_APOSTROPHE: Self = Self(39);
    pub const KEY_COMMA: Self = Self(44);
    pub const KEY_MINUS: Self = Self(45);
    pub const KEY_PERIOD: Self = Self(46);
    pub const KEY_SLASH: Self = Self(47);
    pub const KEY_0: Self = Self(48);
    pub const KEY_1: Self = Self(49);
    pub const KEY_2: Self = Self(50);
    pub const KEY_3: Self = Self(51);
    pub const KEY_4: Self = Self(52);
    pub const KEY_5: Self = Self(53);
    pub const KEY_6: Self = Self(54);
    pub const KEY_7: Self = Self(55);
    pub const KEY_8: Self = Self(56);
    pub const KEY_9: Self = Self(57);
    pub const KEY_SEMICOLON: Self = Self(59);
    pub const KEY_EQUAL: Self = Self(61);
    pub const KEY_A: Self = Self(65);
    pub const KEY_B: Self = Self(66);
    pub const KEY_C: Self = Self(67);
    pub const KEY_D: Self = Self(68);
    pub const KEY_E: Self = Self(69);
    pub const KEY_F: Self = Self(70);
    pub const KEY_G: Self = Self(71);
    pub const KEY_H: Self = Self(72);
    pub const KEY_I: Self = Self(73);
    pub const KEY_J: Self = Self(74);
    pub const KEY_K: Self = Self(75);
    pub const KEY_L: Self = Self(76);
    pub const KEY_M: Self = Self(77);
    pub const KEY_N: Self = Self(78);
    pub const KEY_O: Self = Self(79);
    pub const KEY_P: Self = Self(80);
    pub const KEY_Q: Self = Self(81);
    pub const KEY_R: Self = Self(82);
    pub const KEY_S: Self = Self(83);
    pub const KEY_T: Self = Self(84);
    pub const KEY_U: Self = Self(85);
    pub const KEY_V: Self = Self(86);
    pub const KEY_W: Self = Self(87);
    pub const KEY_X: Self = Self(88);
    pub const KEY_Y: Self = Self(89);
    pub const KEY_Z: Self = Self(90);
    pub const KEY_LEFT_BRACKET: Self = Self(91);
    pub const KEY_BACKSLASH: Self = Self(92);
    pub const KEY_RIGHT_BRACKET: Self = Self(93);
    pub const KEY_GRAVE_ACCENT: Self = Self(96);
    pub const KEY_ESCAPE: Self = Self(256);
    pub const KEY_ENTER: Self = Self(257);
    pub const KEY_TAB: Self = Self(258);
    pub const KEY_BACKSPACE: Self = Self(259);
    pub const KEY_INSERT: Self = Self(260);
    pub const KEY_DELETE: Self = Self(261);
    pub const KEY_RIGHT: Self = Self(262);
    pub const KEY_LEFT: Self = Self(263);
    pub const KEY_DOWN: Self = Self(264);
    pub const KEY_UP: Self = Self(265);
    pub const KEY_PAGE_UP: Self = Self(266);
    pub const KEY_PAGE_DOWN: Self = Self(267);
    pub const KEY_HOME: Self = Self(268);
    pub const KEY_END: Self = Self(269);
    pub const KEY_CAPS_LOCK: Self = Self(280);
    pub const KEY_SCROLL_LOCK: Self = Self(281);
    pub const KEY_NUM_LOCK: Self = Self(282);
    pub const KEY_PRINT_SCREEN: Self = Self(283);
    pub const KEY_PAUSE: Self = Self(284);
    pub const KEY_F1: Self = Self(290);
    pub const KEY_F2: Self = Self(291);
    pub const KEY_F3: Self = Self(292);
    pub const KEY_F4: Self = Self(293);
    pub const KEY_F5: Self = Self(294);
    pub const KEY_F6: Self = Self(295);
    pub const KEY_F7: Self = Self(296);
    pub const KEY_F8: Self = Self(297);
    pub const KEY_F9: Self = Self(298);
    pub const KEY_F10: Self = Self(299);
    pub const KEY_F11: Self = Self(300);
    pub const KEY_F12: Self = Self(301);
    pub const KEY_KP_0: Self = Self(320);
    pub const KEY_KP_1: Self = Self(321);
    pub const KEY_KP_2: Self = Self(322);
    pub const KEY_KP_3: Self = Self(323);
    pub const KEY_KP_4: Self = Self(324);
    pub const KEY_KP_5: Self = Self(325);
    pub const KEY_KP_6: Self = Self(326);
    pub const KEY_KP_7: Self = Self(327);
    pub const KEY_KP_8: Self = Self(328);
    pub const KEY_KP_9: Self = Self(329);
    pub const KEY_KP_DECIMAL: Self = Self(330);
    pub const KEY_KP_DIVIDE: Self = Self(331);
    pub const KEY_KP_MULTIPLY: Self = Self(332);
    pub const KEY_KP_SUBTRACT: Self = Self(333);
    pub const KEY_KP_ADD: Self = Self(334);
    pub const KEY_KP_ENTER: Self = Self(335);
    pub const KEY_KP_EQUAL: Self = Self(336);
    pub const KEY_LEFT_SHIFT: Self = Self(340);
    pub const KEY_LEFT_CONTROL: Self = Self(341);
    pub const KEY_LEFT_ALT: Self = Self(342);
    pub const KEY_LEFT_SUPER: Self = Self(343);
    pub const KEY_RIGHT_SHIFT: Self = Self(344);
    pub const KEY_RIGHT_CONTROL: Self = Self(345);
    pub const KEY_RIGHT_ALT: Self = Self(346);
    pub const KEY_RIGHT_SUPER: Self = Self(347);
    pub const KEY_MENU: Self = Self(348);
}

impl Button {
    /// Whether this is one of the eight mouse buttons.
    pub fn is_mouse_button(self) -> bool {
        (0..8).contains(&self.0)
    }

    /// Whether this is a keyboard key (including unknown keys).
    pub fn is_keyboard_button(self) -> bool {
        !self.is_mouse_button()
    }
}

/// The GUI library's named keys. Values match its key enumeration, which
/// starts named keys at [`GuiKey::NAMED_KEY_BEGIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum GuiKey {
    Tab = 512,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,
    LeftCtrl,
    LeftShift,
    LeftAlt,
    LeftSuper,
    RightCtrl,
    RightShift,
    RightAlt,
    RightSuper,
    Menu,
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadDecimal,
    KeypadDivide,
    KeypadMultiply,
    KeypadSubtract,
    KeypadAdd,
    KeypadEnter,
    KeypadEqual,
}

impl GuiKey {
    /// First named key value.
    pub const NAMED_KEY_BEGIN: u16 = 512;
    /// Number of named keys, and the length of a key-state table.
    pub const COUNT: usize = Self::KeypadEqual as usize - Self::NAMED_KEY_BEGIN as usize + 1;

    /// Every named key in enumeration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Tab,
        Self::LeftArrow,
        Self::RightArrow,
        Self::UpArrow,
        Self::DownArrow,
        Self::PageUp,
        Self::PageDown,
        Self::Home,
        Self::End,
        Self::Insert,
        Self::Delete,
        Self::Backspace,
        Self::Space,
        Self::Enter,
        Self::Escape,
        Self::LeftCtrl,
        Self::LeftShift,
        Self::LeftAlt,
        Self::LeftSuper,
        Self::RightCtrl,
        Self::RightShift,
        Self::RightAlt,
        Self::RightSuper,
        Self::Menu,
        Self::Key0,
        Self::Key1,
        Self::Key2,
        Self::Key3,
        Self::Key4,
        Self::Key5,
        Self::Key6,
        Self::Key7,
        Self::Key8,
        Self::Key9,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
        Self::Apostrophe,
        Self::Comma,
        Self::Minus,
        Self::Period,
        Self::Slash,
        Self::Semicolon,
        Self::Equal,
        Self::LeftBracket,
        Self::Backslash,
        Self::RightBracket,
        Self::GraveAccent,
        Self::CapsLock,
        Self::ScrollLock,
        Self::NumLock,
        Self::PrintScreen,
        Self::Pause,
        Self::Keypad0,
        Self::Keypad1,
        Self::Keypad2,
        Self::Keypad3,
        Self::Keypad4,
        Self::Keypad5,
        Self::Keypad6,
        Self::Keypad7,
        Self::Keypad8,
        Self::Keypad9,
        Self::KeypadDecimal,
        Self::KeypadDivide,
        Self::KeypadMultiply,
        Self::KeypadSubtract,
        Self::KeypadAdd,
        Self::KeypadEnter,
        Self::KeypadEqual,
    ];

    /// Position of this key in a key-state table.
    pub const fn table_index(self) -> usize {
        (self as u16 - Self::NAMED_KEY_BEGIN) as usize
    }

    /// Inverse of [`GuiKey::table_index`].
    pub fn from_table_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Offset added to an unlisted host key code to get a key-state table index.
///
/// Only lines up for a handful of codes. Used as a last resort, never for
/// keys listed in [`gui_key`].
pub const FALLBACK_KEY_OFFSET: i32 = 8;

/// Outcome of mapping a host key to a GUI key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTranslation {
    /// Listed in the explicit table.
    Named(GuiKey),
    /// Not listed; placed by [`FALLBACK_KEY_OFFSET`].
    Offset(GuiKey),
    /// Not listed and the offset lands outside the key table.
    Unmapped(Button),
}

impl KeyTranslation {
    /// The GUI key to update, if any.
    pub fn key(self) -> Option<GuiKey> {
        match self {
            Self::Named(key) | Self::Offset(key) => Some(key),
            Self::Unmapped(_) => None,
        }
    }
}

/// Explicit host key to GUI key table.
#[allow(clippy::too_many_lines)]
pub fn gui_key(button: Button) -> Option<GuiKey> {
    match button {
        Button::KEY_TAB => Some(GuiKey::Tab),
        Button::KEY_LEFT => Some(GuiKey::LeftArrow),
        Button::KEY_RIGHT => Some(GuiKey::RightArrow),
        Button::KEY_UP => Some(GuiKey::UpArrow),
        Button::KEY_DOWN => Some(GuiKey::DownArrow),
        Button::KEY_PAGE_UP => Some(GuiKey::PageUp),
        Button::KEY_PAGE_DOWN => Some(GuiKey::PageDown),
        Button::KEY_HOME => Some(GuiKey::Home),
        Button::KEY_END => Some(GuiKey::End),
        Button::KEY_INSERT => Some(GuiKey::Insert),
        Button::KEY_DELETE => Some(GuiKey::Delete),
        Button::KEY_BACKSPACE => Some(GuiKey::Backspace),
        Button::KEY_SPACE => Some(GuiKey::Space),
        Button::KEY_ENTER => Some(GuiKey::Enter),
        Button::KEY_ESCAPE => Some(GuiKey::Escape),
        Button::KEY_LEFT_CONTROL => Some(GuiKey::LeftCtrl),
        Button::KEY_LEFT_SHIFT => Some(GuiKey::LeftShift),
        Button::KEY_LEFT_ALT => Some(GuiKey::LeftAlt),
        Button::KEY_LEFT_SUPER => Some(GuiKey::LeftSuper),
        Button::KEY_RIGHT_CONTROL => Some(GuiKey::RightCtrl),
        Button::KEY_RIGHT_SHIFT => Some(GuiKey::RightShift),
        Button::KEY_RIGHT_ALT => Some(GuiKey::RightAlt),
        Button::KEY_RIGHT_SUPER => Some(GuiKey::RightSuper),
        Button::KEY_MENU => Some(GuiKey::Menu),
        Button::KEY_APOSTROPHE => Some(GuiKey::Apostrophe),
        Button::KEY_COMMA => Some(GuiKey::Comma),
        Button::KEY_MINUS => Some(GuiKey::Minus),
        Button::KEY_PERIOD => Some(GuiKey::Period),
        Button::KEY_SLASH => Some(GuiKey::Slash),
        Button::KEY_SEMICOLON => Some(GuiKey::Semicolon),
        Button::KEY_EQUAL => Some(GuiKey::Equal),
        Button::KEY_LEFT_BRACKET => Some(GuiKey::LeftBracket),
        Button::KEY_BACKSLASH => Some(GuiKey::Backslash),
        Button::KEY_RIGHT_BRACKET => Some(GuiKey::RightBracket),
        Button::KEY_GRAVE_ACCENT => Some(GuiKey::GraveAccent),
        Button::KEY_CAPS_LOCK => Some(GuiKey::CapsLock),
        Button::KEY_SCROLL_LOCK => Some(GuiKey::ScrollLock),
        Button::KEY_NUM_LOCK => Some(GuiKey::NumLock),
        Button::KEY_PRINT_SCREEN => Some(GuiKey::PrintScreen),
        Button::KEY_PAUSE => Some(GuiKey::Pause),
        Button::KEY_KP_DECIMAL => Some(GuiKey::KeypadDecimal),
        Button::KEY_KP_DIVIDE => Some(GuiKey::KeypadDivide),
        Button::KEY_KP_MULTIPLY => Some(GuiKey::KeypadMultiply),
        Button::KEY_KP_SUBTRACT => Some(GuiKey::KeypadSubtract),
        Button::KEY_KP_ADD => Some(GuiKey::KeypadAdd),
        Button::KEY_KP_ENTER => Some(GuiKey::KeypadEnter),
        Button::KEY_KP_EQUAL => Some(GuiKey::KeypadEqual),
        // contiguous ranges
        Button(code @ 48..=57) => offset_key(GuiKey::Key0, code - 48),
        Button(code @ 65..=90) => offset_key(GuiKey::A, code - 65),
        Button(code @ 290..=301) => offset_key(GuiKey::F1, code - 290),
        Button(code @ 320..=329) => offset_key(GuiKey::Keypad0, code - 320),
        _ => None,
    }
}

fn offset_key(first: GuiKey, delta: i32) -> Option<GuiKey> {
    let index = first.table_index() + usize::try_from(delta).ok()?;
    GuiKey::from_table_index(index)
}

/// Maps a host key, falling back to [`FALLBACK_KEY_OFFSET`] for keys the
/// table does not list.
pub fn translate_key(button: Button) -> KeyTranslation {
    if let Some(key) = gui_key(button) {
        return KeyTranslation::Named(key);
    }
    if button.0 < 0 {
        return KeyTranslation::Unmapped(button);
    }
    usize::try_from(button.0 + FALLBACK_KEY_OFFSET)
        .ok()
        .and_then(GuiKey::from_table_index)
        .map_or(KeyTranslation::Unmapped(button), KeyTranslation::Offset)
}
