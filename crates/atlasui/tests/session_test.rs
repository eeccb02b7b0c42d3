//! Session lifecycle and frame flow, using the headless collaborators.

use atlasui::*;

fn quad_list(texture_id: TextureId) -> DrawList {
    let col = Rgba8::new(255, 0, 0, 255).to_packed_abgr();
    let vertices = [
        DrawVert { pos: [0.0, 0.0], uv: [0.0, 0.0], col },
        DrawVert { pos: [10.0, 0.0], uv: [1.0, 0.0], col },
        DrawVert { pos: [10.0, 10.0], uv: [1.0, 1.0], col },
        DrawVert { pos: [0.0, 10.0], uv: [0.0, 1.0], col },
    ];
    let indices = [0u16, 1, 2, 0, 2, 3];
    DrawList::from_parts(
        &vertices,
        &indices,
        vec![DrawCmd::Elements {
            count: 6,
            idx_offset: 0,
            vtx_offset: 0,
            clip_rect: [0.0; 4],
            texture_id,
        }],
    )
}

fn session(host: &HeadlessHost) -> UiSession<HeadlessGui> {
    UiSession::new(
        HeadlessGui::new(),
        host,
        Atlas::new(256, 256),
        UiConfig::default(),
    )
    .expect("session creation failed")
}

#[test]
fn test_new_session_sets_up_io() {
    let host = HeadlessHost::new(800.0, 600.0);
    let session = session(&host);
    let gui = session.gui();

    assert_eq!(gui.display_size, Vec2::new(800.0, 600.0));
    assert!(gui.backend_flags.contains(BackendFlags::HAS_MOUSE_CURSORS));
    assert!(gui.backend_flags.contains(BackendFlags::HAS_SET_MOUSE_POS));
    assert!(gui.clipboard.is_some());
}

#[test]
fn test_default_font_loaded_into_atlas() {
    let host = HeadlessHost::new(800.0, 600.0);
    let session = session(&host);

    assert!(session.gui().default_font_added);
    let font = session.font_texture().expect("font not loaded");
    assert_eq!(session.gui().font_texture_id, Some(font));
    assert!(session.atlas().contains(font));
    assert_eq!(session.atlas().frame(font).map(|r| r.size()), Some(Vec2::splat(8.0)));
}

#[test]
fn test_no_default_font_flag() {
    let host = HeadlessHost::new(800.0, 600.0);
    let config = UiConfig::default().with_flags(UiFlags::NO_DEFAULT_FONT);
    let mut session =
        UiSession::new(HeadlessGui::new(), &host, Atlas::new(256, 256), config).unwrap();

    assert!(!session.gui().default_font_added);
    assert_eq!(session.font_texture(), None);
    assert!(session.atlas().is_empty());

    let id = session.load_default_font().unwrap();
    assert_eq!(session.font_texture(), Some(id));
}

#[test]
fn test_font_too_large_for_atlas() {
    let host = HeadlessHost::new(800.0, 600.0);
    let result = UiSession::new(
        HeadlessGui::new(),
        &host,
        Atlas::new(4, 4),
        UiConfig::default(),
    );
    assert!(matches!(result, Err(UiError::AtlasFull { .. })));
}

#[test]
fn test_begin_forwards_input() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);

    host.mouse_position = Vec2::new(100.0, 500.0);
    host.mouse_scroll = Vec2::new(0.0, 2.0);
    host.press(Button::MOUSE_LEFT);
    host.press(Button::MOUSE_MIDDLE);
    host.press(Button::KEY_RIGHT_SHIFT);
    host.press(Button::KEY_LEFT_CONTROL);
    host.typed = "hé".to_owned();

    session.begin(&mut host);
    let gui = session.gui();

    assert_eq!(gui.frames, 1);
    // host y is measured from the bottom
    assert_eq!(gui.mouse_pos, Vec2::new(100.0, 100.0));
    assert_eq!(gui.mouse_wheel, Vec2::new(0.0, 2.0));
    assert_eq!(gui.mouse_down, [true, false, true, false, false]);
    assert_eq!(gui.input_text, "hé");
    assert_eq!(
        gui.modifiers,
        Modifiers {
            ctrl: true,
            shift: true,
            alt: false,
            super_key: false,
        }
    );
    assert!((gui.delta_time - 1.0 / 60.0).abs() < 1e-6);
}

#[test]
fn test_begin_applies_cursor() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);

    session.gui_mut().mouse_cursor = MouseCursor::TextInput;
    session.begin(&mut host);
    assert_eq!(host.cursor, Some(StandardCursor::IBeam));

    // unmapped shapes fall back to the arrow
    session.gui_mut().mouse_cursor = MouseCursor::ResizeNWSE;
    session.begin(&mut host);
    assert_eq!(host.cursor, Some(StandardCursor::Arrow));

    session
        .cursors_mut()
        .insert(MouseCursor::ResizeNWSE, StandardCursor::Crosshair);
    session.begin(&mut host);
    assert_eq!(host.cursor, Some(StandardCursor::Crosshair));
}

#[test]
fn test_begin_tracks_resize() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);

    host.bounds = Rect::new(Vec2::ZERO, Vec2::new(1024.0, 768.0));
    host.mouse_position = Vec2::new(0.0, 768.0);
    session.begin(&mut host);

    assert_eq!(session.gui().display_size, Vec2::new(1024.0, 768.0));
    assert_eq!(session.gui().mouse_pos, Vec2::ZERO);
    assert_eq!(session.view_matrix(), ui_view_matrix(host.bounds));
}

#[test]
fn test_clipboard_shared_with_host() {
    let host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);

    let clipboard = session.gui_mut().clipboard.as_mut().unwrap();
    clipboard.set("from gui");
    let mut host_side = host.clipboard.clone();
    assert_eq!(host_side.get().as_deref(), Some("from gui"));
}

#[test]
fn test_draw_hands_triangles_to_target() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);
    let font = session.font_texture().unwrap();

    session.begin(&mut host);
    session.gui_mut().draw_data = DrawData {
        lists: vec![quad_list(font), quad_list(font)],
        ..DrawData::default()
    };

    let mut target = RecordingTarget::new();
    let count = session.draw(&host, &mut target).unwrap();

    assert_eq!(count, session.gui().draw_data.total_elem_count());
    assert_eq!(count, 12);
    assert_eq!(target.draws, 1);
    assert_eq!(target.vertices.len(), 12);
    assert_eq!(target.vertices, session.triangles().vertices());
    assert_eq!(target.view, Some(session.view_matrix()));
    assert_eq!(target.atlas_size, Vec2::splat(256.0));

    // font texture samples coverage only
    assert!(target.vertices.iter().all(|v| v.intensity == 0.0));
    assert_eq!(target.vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_configured_color_mask_reaches_target() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mask = Vec4::new(1.0, 0.0, 0.0, 0.5);
    let config = UiConfig::default().with_color_mask(mask);
    let mut session =
        UiSession::new(HeadlessGui::new(), &host, Atlas::new(256, 256), config).unwrap();
    let mut target = RecordingTarget::new();

    session.begin(&mut host);
    session.draw(&host, &mut target).unwrap();
    assert_eq!(target.color_mask, Some(mask));

    let mut plain = self::session(&host);
    let mut target = RecordingTarget::new();
    plain.begin(&mut host);
    plain.draw(&host, &mut target).unwrap();
    assert_eq!(target.color_mask, Some(Vec4::ONE));
}

#[test]
fn test_draw_shrinks_with_fewer_commands() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);
    let font = session.font_texture().unwrap();
    let mut target = RecordingTarget::new();

    session.gui_mut().draw_data.lists = vec![quad_list(font), quad_list(font)];
    session.begin(&mut host);
    assert_eq!(session.draw(&host, &mut target).unwrap(), 12);

    session.gui_mut().draw_data.lists = vec![quad_list(font)];
    session.begin(&mut host);
    assert_eq!(session.draw(&host, &mut target).unwrap(), 6);
    assert_eq!(target.vertices.len(), 6);

    session.gui_mut().draw_data.lists.clear();
    session.begin(&mut host);
    assert_eq!(session.draw(&host, &mut target).unwrap(), 0);
    assert!(target.vertices.is_empty());
}

#[test]
fn test_application_texture_samples_rgba() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);
    let picture = session
        .atlas_mut()
        .add_alpha(2, 2, &[255; 4])
        .unwrap();

    session.gui_mut().draw_data.lists = vec![quad_list(picture)];
    session.begin(&mut host);
    let mut target = RecordingTarget::new();
    session.draw(&host, &mut target).unwrap();

    assert!(target.vertices.iter().all(|v| v.intensity == 1.0));
}

#[test]
#[should_panic(expected = "not in the atlas")]
fn test_unknown_texture_panics() {
    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = session(&host);

    session.gui_mut().draw_data.lists = vec![quad_list(TextureId(99))];
    session.begin(&mut host);
    let _ = session.draw(&host, &mut RecordingTarget::new());
}
