//! One UI session: a GUI context bound to a host window and a shared atlas.

use std::time::Instant;

use atlasui_core::{
    ui_view_matrix, Action, Atlas, Button, CursorMap, KeyTranslation, Result, TextureId, UiConfig,
};
use atlasui_render::{FrameInput, FrameTranslator, TriangleBuffer, TriangleTarget};
use glam::{Affine2, Vec2};

use crate::gui::{BackendFlags, GuiContext};
use crate::host::HostWindow;
use crate::input;

/// Delta time reported on the first frame, before there is a previous one.
const FIRST_FRAME_DELTA: f32 = 1.0 / 60.0;

/// A GUI context wired to a host.
///
/// The application owns the session and passes the host window into each
/// call. Per frame, call [`UiSession::begin`], issue GUI calls through
/// [`UiSession::gui_mut`], then [`UiSession::draw`]. Dropping the session
/// drops the GUI context.
pub struct UiSession<G: GuiContext> {
    gui: G,
    atlas: Atlas,
    font: Option<TextureId>,
    translator: FrameTranslator,
    cursors: CursorMap,
    view: Affine2,
    last_frame: Option<Instant>,
    config: UiConfig,
}

impl<G: GuiContext> UiSession<G> {
    /// Creates a session and sets up the GUI's IO.
    ///
    /// Loads the GUI's default font into `atlas` unless
    /// [`atlasui_core::UiFlags::NO_DEFAULT_FONT`] is set.
    pub fn new<H: HostWindow + ?Sized>(
        gui: G,
        host: &H,
        atlas: Atlas,
        config: UiConfig,
    ) -> Result<Self> {
        let bounds = host.bounds();
        let mut session = Self {
            gui,
            atlas,
            font: None,
            translator: FrameTranslator::new(),
            cursors: CursorMap::default(),
            view: ui_view_matrix(bounds),
            last_frame: None,
            config,
        };

        session.gui.set_display_size(bounds.size());
        session.gui.set_clipboard_backend(host.clipboard());
        session
            .gui
            .set_backend_flags(BackendFlags::HAS_MOUSE_CURSORS | BackendFlags::HAS_SET_MOUSE_POS);

        if session.config.loads_default_font() {
            session.load_default_font()?;
        }

        log::info!(
            "UI session created ({}x{})",
            bounds.size().x,
            bounds.size().y
        );
        Ok(session)
    }

    /// Adds the GUI's default font and packs its texture into the atlas.
    ///
    /// Returns the atlas id the font was given; draw commands using it are
    /// sampled as alpha-only coverage.
    pub fn load_default_font(&mut self) -> Result<TextureId> {
        self.gui.add_default_font();
        self.load_font_texture()
    }

    /// Packs the GUI's current font texture into the atlas. Call again after
    /// adding fonts to the GUI directly.
    pub fn load_font_texture(&mut self) -> Result<TextureId> {
        let font = self.gui.font_texture();
        let id = self.atlas.add_alpha(font.width, font.height, &font.alpha)?;
        self.gui.set_font_texture_id(id);
        self.font = Some(id);
        log::info!("loaded font texture {}x{} as {id}", font.width, font.height);
        Ok(id)
    }

    /// Starts a frame: updates delta time, forwards input, begins the GUI frame.
    pub fn begin<H: HostWindow + ?Sized>(&mut self, host: &mut H) {
        let now = Instant::now();
        let delta = self
            .last_frame
            .map_or(FIRST_FRAME_DELTA, |last| now.duration_since(last).as_secs_f32());
        self.last_frame = Some(now);
        self.gui.set_delta_time(delta.max(f32::EPSILON));

        self.view = ui_view_matrix(host.bounds());
        input::prepare_io(&mut self.gui, host, &self.view, &self.cursors);
        self.gui.new_frame();
    }

    /// Finishes the GUI frame, translates its draw data, and hands the
    /// triangles to `target`. Returns the number of vertices drawn.
    ///
    /// # Panics
    ///
    /// Panics if the draw data references a texture missing from the atlas.
    pub fn draw<H, T>(&mut self, host: &H, target: &mut T) -> Result<usize>
    where
        H: HostWindow + ?Sized,
        T: TriangleTarget + ?Sized,
    {
        self.view = ui_view_matrix(host.bounds());

        let layout = self.gui.vertex_layout();
        let index_size = self.gui.index_size()?;
        let draw_data = self.gui.render();
        let count = self.translator.translate(&FrameInput {
            draw_data,
            layout,
            index_size,
            atlas: &self.atlas,
            font_texture: self.font,
            view: self.view,
        })?;

        target.draw_triangles(
            self.translator.triangles().vertices(),
            &self.atlas,
            self.view,
            self.config.color_mask,
        )?;
        Ok(count)
    }

    /// Forwards a host key event to the GUI.
    pub fn handle_button(&mut self, button: Button, action: Action) -> Option<KeyTranslation> {
        input::forward_key(&mut self.gui, button, action)
    }

    /// Host scroll, or zero while the GUI has the mouse.
    pub fn mouse_scroll<H: HostWindow + ?Sized>(&self, host: &H) -> Vec2 {
        if self.gui.want_capture_mouse() {
            return Vec2::ZERO;
        }
        host.mouse_scroll()
    }

    /// Whether `button` went down this frame and the GUI did not take it.
    pub fn just_pressed<H: HostWindow + ?Sized>(&self, host: &H, button: Button) -> bool {
        !input::gui_wants(&self.gui, button) && host.just_pressed(button)
    }

    /// Whether `button` went up this frame and the GUI did not take it.
    pub fn just_released<H: HostWindow + ?Sized>(&self, host: &H, button: Button) -> bool {
        !input::gui_wants(&self.gui, button) && host.just_released(button)
    }

    /// Whether `button` is held and the GUI did not take it.
    pub fn pressed<H: HostWindow + ?Sized>(&self, host: &H, button: Button) -> bool {
        !input::gui_wants(&self.gui, button) && host.pressed(button)
    }

    /// Whether `button` repeated this frame and the GUI did not take it.
    pub fn repeated<H: HostWindow + ?Sized>(&self, host: &H, button: Button) -> bool {
        !input::gui_wants(&self.gui, button) && host.repeated(button)
    }

    pub fn key_ctrl<H: HostWindow + ?Sized>(&self, host: &H) -> bool {
        input::modifiers(host).ctrl
    }

    pub fn key_shift<H: HostWindow + ?Sized>(&self, host: &H) -> bool {
        input::modifiers(host).shift
    }

    pub fn key_alt<H: HostWindow + ?Sized>(&self, host: &H) -> bool {
        input::modifiers(host).alt
    }

    pub fn key_super<H: HostWindow + ?Sized>(&self, host: &H) -> bool {
        input::modifiers(host).super_key
    }

    /// The GUI context, for issuing widget calls.
    pub fn gui(&self) -> &G {
        &self.gui
    }

    pub fn gui_mut(&mut self) -> &mut G {
        &mut self.gui
    }

    /// The shared atlas.
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// The shared atlas, for packing application images.
    pub fn atlas_mut(&mut self) -> &mut Atlas {
        &mut self.atlas
    }

    /// Atlas id of the font texture, once loaded.
    pub fn font_texture(&self) -> Option<TextureId> {
        self.font
    }

    /// The GUI-to-host view matrix used by the last frame.
    pub fn view_matrix(&self) -> Affine2 {
        self.view
    }

    /// Triangles produced by the last [`UiSession::draw`].
    pub fn triangles(&self) -> &TriangleBuffer {
        self.translator.triangles()
    }

    /// Cursor table, for adding host cursors.
    pub fn cursors_mut(&mut self) -> &mut CursorMap {
        &mut self.cursors
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }
}
