//! Forwarding host input into the GUI library.

use atlasui_core::{translate_key, Action, Button, CursorMap, KeyTranslation};
use glam::Affine2;

use crate::gui::{GuiContext, Modifiers};
use crate::host::HostWindow;

/// Modifier state from the host, treating left and right variants alike.
pub fn modifiers<H: HostWindow + ?Sized>(host: &H) -> Modifiers {
    let either = |left, right| host.pressed(left) || host.pressed(right);
    Modifiers {
        ctrl: either(Button::KEY_LEFT_CONTROL, Button::KEY_RIGHT_CONTROL),
        shift: either(Button::KEY_LEFT_SHIFT, Button::KEY_RIGHT_SHIFT),
        alt: either(Button::KEY_LEFT_ALT, Button::KEY_RIGHT_ALT),
        super_key: either(Button::KEY_LEFT_SUPER, Button::KEY_RIGHT_SUPER),
    }
}

/// Copies this frame's host input into the GUI and applies the cursor the
/// GUI asked for. Must run before [`GuiContext::new_frame`].
pub fn prepare_io<G, H>(gui: &mut G, host: &mut H, view: &Affine2, cursors: &CursorMap)
where
    G: GuiContext + ?Sized,
    H: HostWindow + ?Sized,
{
    gui.set_display_size(host.bounds().size());
    gui.add_mouse_wheel_delta(host.mouse_scroll());

    // host space back into GUI space
    let mouse = view.inverse().transform_point2(host.mouse_position());
    gui.set_mouse_pos(mouse);

    gui.set_mouse_button_down(0, host.pressed(Button::MOUSE_LEFT));
    gui.set_mouse_button_down(1, host.pressed(Button::MOUSE_RIGHT));
    gui.set_mouse_button_down(2, host.pressed(Button::MOUSE_MIDDLE));

    let typed = host.typed();
    if !typed.is_empty() {
        gui.add_input_characters_utf8(&typed);
    }
    gui.set_modifiers(modifiers(host));

    host.set_cursor(cursors.resolve(gui.mouse_cursor()));
}

/// Forwards one host key event. Mouse buttons are ignored.
///
/// Returns how the key was translated so callers can react to unmapped keys.
pub fn forward_key<G: GuiContext + ?Sized>(
    gui: &mut G,
    button: Button,
    action: Action,
) -> Option<KeyTranslation> {
    if button.is_mouse_button() {
        return None;
    }

    let translation = translate_key(button);
    match translation {
        KeyTranslation::Named(_) => {}
        KeyTranslation::Offset(key) => {
            log::debug!("host key {} has no named mapping, using offset key {key:?}", button.0);
        }
        KeyTranslation::Unmapped(_) => {
            log::warn!("host key {} cannot be mapped to a GUI key; dropped", button.0);
        }
    }

    if let Some(key) = translation.key() {
        match action {
            Action::Press | Action::Repeat => gui.set_key_down(key, true),
            Action::Release => gui.set_key_down(key, false),
        }
    }
    Some(translation)
}

/// Whether the GUI is consuming the device `button` belongs to.
pub fn gui_wants<G: GuiContext + ?Sized>(gui: &G, button: Button) -> bool {
    if button.is_mouse_button() {
        gui.want_capture_mouse()
    } else {
        gui.want_capture_keyboard()
    }
}
