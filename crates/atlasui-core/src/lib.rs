//! Core data model for atlasui.
//!
//! This crate holds everything that does not touch a GPU or a window:
//! - [`DrawData`] and the typed [`VertexView`] / [`IndexView`] over its raw buffers
//! - the shared texture [`Atlas`]
//! - color ([`Rgba8`]) and coordinate ([`Rect`], [`ui_view_matrix`]) conversions
//! - host [`Button`] to [`GuiKey`] mapping and cursor tables
//! - session configuration ([`UiConfig`])

// Internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Pixel coordinates fit comfortably in f32
#![allow(clippy::cast_precision_loss)]

pub mod atlas;
pub mod color;
pub mod cursor;
pub mod draw_data;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod options;

pub use atlas::Atlas;
pub use color::Rgba8;
pub use cursor::{CursorMap, MouseCursor, StandardCursor};
pub use draw_data::{
    DrawCmd, DrawData, DrawList, DrawVert, GuiVertex, IndexSize, IndexView, TextureId,
    UserCallback, VertexLayout, VertexView,
};
pub use error::{Result, UiError};
pub use geometry::{project_rect, ui_view_matrix, Rect};
pub use keys::{gui_key, translate_key, Action, Button, GuiKey, KeyTranslation, FALLBACK_KEY_OFFSET};
pub use options::{UiConfig, UiFlags};

// Re-export glam types for convenience
pub use glam::{Affine2, Vec2, Vec4};
