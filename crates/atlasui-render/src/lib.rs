//! Rendering side of atlasui.
//!
//! This crate turns the GUI library's draw data into something a 2D host can
//! draw in one call:
//! - [`FrameTranslator`] expands indexed draw commands into a flat
//!   [`TriangleBuffer`] with atlas-global texture coordinates
//! - [`TriangleTarget`] is the seam where the host takes that buffer
//! - [`UiRenderer`] is a wgpu implementation of the host side

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod renderer;
pub mod target;
pub mod translator;
pub mod triangles;

pub use error::{RenderError, RenderResult};
pub use renderer::{
    affine_to_mat4, host_projection, request_headless_device, UiRenderer, UiUniforms, WgpuTarget,
};
pub use target::TriangleTarget;
pub use translator::{atlas_uv, resolve_clip_rect, FrameInput, FrameTranslator};
pub use triangles::{TriangleBuffer, UiVertex};
