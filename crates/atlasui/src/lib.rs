//! atlasui: drive an immediate-mode GUI library from a 2D host.
//!
//! The host supplies input and a single textured-triangle draw call; atlasui
//! forwards the input into the GUI and turns the GUI's indexed draw lists
//! into one flat triangle list sampling a shared texture atlas.
//!
//! # Quick Start
//!
//! ```no_run
//! use atlasui::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut host = HeadlessHost::new(800.0, 600.0);
//!     let mut session = UiSession::new(
//!         HeadlessGui::new(),
//!         &host,
//!         Atlas::new(1024, 1024),
//!         UiConfig::default(),
//!     )?;
//!     let mut target = RecordingTarget::new();
//!
//!     session.begin(&mut host);
//!     // widget calls go through session.gui_mut()
//!     let drawn = session.draw(&host, &mut target)?;
//!     println!("{drawn} vertices");
//!     Ok(())
//! }
//! ```
//!
//! # Pieces
//!
//! - [`GuiContext`] wraps the GUI library and [`HostWindow`] the host window
//! - [`UiSession`] owns a GUI context and runs the per-frame flow
//! - [`TriangleTarget`] receives each frame's triangles; [`UiRenderer`]
//!   draws them with wgpu
//! - [`WinitHost`] builds host state from winit events
//! - [`headless`] has in-process stand-ins for all three collaborators

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Window sizes and cursor positions fit comfortably in f32
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod gui;
pub mod headless;
pub mod host;
pub mod input;
pub mod session;
pub mod winit_host;

pub use gui::{BackendFlags, ClipboardBackend, FontTexture, GuiContext, Modifiers};
pub use headless::{HeadlessGui, HeadlessHost, RecordingTarget};
pub use host::{HostWindow, LocalClipboard};
pub use session::UiSession;
pub use winit_host::{cursor_icon, keycode_to_button, mouse_button, WinitHost};

// Re-export core types
pub use atlasui_core::{
    gui_key, project_rect, translate_key, ui_view_matrix, Action, Atlas, Button, CursorMap,
    DrawCmd, DrawData, DrawList, DrawVert, GuiKey, IndexSize, KeyTranslation, MouseCursor, Rect,
    Result, Rgba8, StandardCursor, TextureId, UiConfig, UiError, UiFlags, VertexLayout,
    FALLBACK_KEY_OFFSET,
};

// Re-export render types
pub use atlasui_render::{
    FrameInput, FrameTranslator, RenderError, TriangleBuffer, TriangleTarget, UiRenderer,
    UiVertex, WgpuTarget,
};

pub use glam::{Affine2, Vec2, Vec4};

/// Installs `env_logger` as the log backend, configured by `RUST_LOG`.
///
/// Does nothing if a logger is already installed.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
