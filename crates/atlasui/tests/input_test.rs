//! Key forwarding and input gating, using the headless collaborators.

use atlasui::*;
use proptest::prelude::*;

fn session(host: &HeadlessHost) -> UiSession<HeadlessGui> {
    let config = UiConfig::default().with_flags(UiFlags::NO_DEFAULT_FONT);
    UiSession::new(HeadlessGui::new(), host, Atlas::new(64, 64), config).unwrap()
}

#[test]
fn test_named_key_press_and_release() {
    let host = HeadlessHost::new(640.0, 480.0);
    let mut session = session(&host);

    let translation = session.handle_button(Button::KEY_ENTER, Action::Press);
    assert_eq!(translation, Some(KeyTranslation::Named(GuiKey::Enter)));
    assert!(session.gui().key_down(GuiKey::Enter));
    assert_eq!(session.gui().keys_held(), 1);

    session.handle_button(Button::KEY_ENTER, Action::Repeat);
    assert!(session.gui().key_down(GuiKey::Enter));

    session.handle_button(Button::KEY_ENTER, Action::Release);
    assert!(!session.gui().key_down(GuiKey::Enter));
    assert_eq!(session.gui().keys_held(), 0);
}

#[test]
fn test_unnamed_key_uses_offset() {
    let host = HeadlessHost::new(640.0, 480.0);
    let mut session = session(&host);

    let translation = session.handle_button(Button(33), Action::Press);
    let key = GuiKey::ALL[33 + FALLBACK_KEY_OFFSET as usize];
    assert_eq!(translation, Some(KeyTranslation::Offset(key)));
    assert!(session.gui().key_down(key));
}

#[test]
fn test_unmapped_key_dropped() {
    let host = HeadlessHost::new(640.0, 480.0);
    let mut session = session(&host);

    for button in [Button(302), Button::KEY_UNKNOWN, Button(-20)] {
        let translation = session.handle_button(button, Action::Press);
        assert!(matches!(translation, Some(KeyTranslation::Unmapped(_))));
    }
    assert_eq!(session.gui().keys_held(), 0);
}

#[test]
fn test_mouse_buttons_not_forwarded_as_keys() {
    let host = HeadlessHost::new(640.0, 480.0);
    let mut session = session(&host);

    for n in 0..8 {
        assert_eq!(session.handle_button(Button(n), Action::Press), None);
    }
    assert_eq!(session.gui().keys_held(), 0);
}

#[test]
fn test_scroll_hidden_while_gui_wants_mouse() {
    let mut host = HeadlessHost::new(640.0, 480.0);
    let mut session = session(&host);
    host.mouse_scroll = Vec2::new(1.0, -3.0);

    assert_eq!(session.mouse_scroll(&host), Vec2::new(1.0, -3.0));
    session.gui_mut().want_capture_mouse = true;
    assert_eq!(session.mouse_scroll(&host), Vec2::ZERO);
}

#[test]
fn test_button_queries_gated_by_device() {
    let mut host = HeadlessHost::new(640.0, 480.0);
    let mut session = session(&host);
    host.press(Button::MOUSE_LEFT);
    host.press(Button::KEY_W);
    host.repeated.insert(Button::KEY_W);

    assert!(session.just_pressed(&host, Button::MOUSE_LEFT));
    assert!(session.pressed(&host, Button::KEY_W));
    assert!(session.repeated(&host, Button::KEY_W));

    session.gui_mut().want_capture_mouse = true;
    assert!(!session.just_pressed(&host, Button::MOUSE_LEFT));
    assert!(!session.pressed(&host, Button::MOUSE_LEFT));
    assert!(session.pressed(&host, Button::KEY_W));

    session.gui_mut().want_capture_keyboard = true;
    assert!(!session.pressed(&host, Button::KEY_W));
    assert!(!session.repeated(&host, Button::KEY_W));

    session.gui_mut().want_capture_mouse = false;
    session.gui_mut().want_capture_keyboard = false;
    host.end_frame();
    host.release(Button::KEY_W);
    assert!(session.just_released(&host, Button::KEY_W));
    assert!(!session.just_pressed(&host, Button::MOUSE_LEFT));
}

#[test]
fn test_modifier_queries() {
    let mut host = HeadlessHost::new(640.0, 480.0);
    let session = session(&host);
    assert!(!session.key_ctrl(&host));

    host.press(Button::KEY_RIGHT_CONTROL);
    host.press(Button::KEY_LEFT_ALT);
    host.press(Button::KEY_RIGHT_SUPER);
    assert!(session.key_ctrl(&host));
    assert!(!session.key_shift(&host));
    assert!(session.key_alt(&host));
    assert!(session.key_super(&host));
}

proptest! {
    #[test]
    fn prop_named_key_sets_exactly_that_key(code in -1i32..400) {
        let host = HeadlessHost::new(640.0, 480.0);
        let mut session = session(&host);
        let button = Button(code);
        prop_assume!(!button.is_mouse_button());

        match session.handle_button(button, Action::Press) {
            Some(KeyTranslation::Named(key) | KeyTranslation::Offset(key)) => {
                prop_assert!(session.gui().key_down(key));
                prop_assert_eq!(session.gui().keys_held(), 1);
            }
            Some(KeyTranslation::Unmapped(_)) => {
                prop_assert_eq!(session.gui().keys_held(), 0);
            }
            None => prop_assert!(false, "keyboard button {} not forwarded", code),
        }
    }

    #[test]
    fn prop_named_keys_agree_with_table(code in 0i32..400) {
        let button = Button(code);
        if let Some(key) = gui_key(button) {
            prop_assert_eq!(translate_key(button), KeyTranslation::Named(key));
        }
    }
}
