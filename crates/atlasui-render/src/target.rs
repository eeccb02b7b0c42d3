//! The host side of a UI draw.

use atlasui_core::{Atlas, Result};
use glam::{Affine2, Vec4};

use crate::triangles::UiVertex;

/// Something that can draw a finished UI triangle list.
///
/// Called once per frame with the whole list. `vertices` are in GUI screen
/// space and `view` maps them into host space; `atlas` is the single texture
/// every vertex samples from. Every fragment is multiplied by `color_mask`.
pub trait TriangleTarget {
    /// Draws (or queues) the frame's triangles.
    fn draw_triangles(
        &mut self,
        vertices: &[UiVertex],
        atlas: &Atlas,
        view: Affine2,
        color_mask: Vec4,
    ) -> Result<()>;
}
