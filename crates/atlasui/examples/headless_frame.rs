//! Runs a few UI frames without a window and prints what would be drawn.
//!
//! Run with `RUST_LOG=debug cargo run --example headless_frame` to see the
//! session's logging.

use atlasui::*;

fn window_list(texture_id: TextureId, x: f32, y: f32) -> DrawList {
    let col = Rgba8::new(40, 120, 200, 230).to_packed_abgr();
    let corners = [[x, y], [x + 200.0, y], [x + 200.0, y + 120.0], [x, y + 120.0]];
    let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let vertices: Vec<DrawVert> = corners
        .iter()
        .zip(uvs)
        .map(|(&pos, uv)| DrawVert { pos, uv, col })
        .collect();

    DrawList::from_parts(
        &vertices,
        &[0, 1, 2, 0, 2, 3],
        vec![DrawCmd::Elements {
            count: 6,
            idx_offset: 0,
            vtx_offset: 0,
            clip_rect: [x, y, x + 200.0, y + 120.0],
            texture_id,
        }],
    )
}

fn main() -> Result<()> {
    init_logging();

    let mut host = HeadlessHost::new(800.0, 600.0);
    let mut session = UiSession::new(
        HeadlessGui::new(),
        &host,
        Atlas::new(512, 512),
        UiConfig::default(),
    )?;
    let font = session
        .font_texture()
        .ok_or_else(|| UiError::Render("font texture missing".into()))?;
    let mut target = RecordingTarget::new();

    for frame in 0..3u8 {
        host.mouse_position = Vec2::new(120.0, 480.0);
        host.mouse_scroll = Vec2::new(0.0, f32::from(frame));

        session.begin(&mut host);
        let offset = f32::from(frame) * 30.0;
        session.gui_mut().draw_data.lists = (0..=frame)
            .map(|i| window_list(font, 20.0 + offset, 20.0 + f32::from(i) * 140.0))
            .collect();

        let drawn = session.draw(&host, &mut target)?;
        println!(
            "frame {frame}: {drawn} vertices, gui mouse {:?}, scroll {:?}",
            session.gui().mouse_pos,
            session.mouse_scroll(&host)
        );
        host.end_frame();
    }

    if let Some(first) = target.vertices.first() {
        println!("first vertex: {first:?}");
    }
    Ok(())
}
