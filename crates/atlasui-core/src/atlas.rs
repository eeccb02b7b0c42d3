//! A single RGBA texture packing many small images.
//!
//! The GUI library assumes one texture per draw command. Hosts that batch
//! everything into one draw call pack those textures here and remap
//! texture coordinates into the atlas at translation time.

use std::collections::HashMap;

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::draw_data::TextureId;
use crate::error::{Result, UiError};
use crate::geometry::Rect;

/// Pixels left empty between packed images so linear filtering does not
/// bleed neighbours into each other.
const PADDING: u32 = 1;

/// Shelf-packed texture atlas.
#[derive(Debug, Clone)]
pub struct Atlas {
    image: RgbaImage,
    frames: HashMap<TextureId, Rect>,
    next_id: u32,
    cursor_x: u32,
    cursor_y: u32,
    shelf_height: u32,
    revision: u64,
}

impl Atlas {
    /// Creates an empty, fully transparent atlas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            frames: HashMap::new(),
            next_id: 1,
            cursor_x: PADDING,
            cursor_y: PADDING,
            shelf_height: 0,
            revision: 0,
        }
    }

    /// Packs an RGBA image and returns its id.
    pub fn add_image(&mut self, image: &RgbaImage) -> Result<TextureId> {
        let (x, y) = self.allocate(image.width(), image.height())?;
        image::imageops::replace(&mut self.image, image, i64::from(x), i64::from(y));
        Ok(self.register(x, y, image.width(), image.height()))
    }

    /// Packs a single-channel coverage image (such as a font atlas) as white
    /// with the given alpha.
    pub fn add_alpha(&mut self, width: u32, height: u32, alpha: &[u8]) -> Result<TextureId> {
        let expected = width as usize * height as usize;
        if alpha.len() != expected {
            return Err(UiError::InvalidImageData {
                expected,
                actual: alpha.len(),
            });
        }
        let image = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([255, 255, 255, alpha[(y * width + x) as usize]])
        });
        self.add_image(&image)
    }

    /// Pixel rectangle of `id` within the atlas, origin at the top-left.
    pub fn frame(&self, id: TextureId) -> Option<Rect> {
        self.frames.get(&id).copied()
    }

    /// Whether `id` has been packed.
    pub fn contains(&self, id: TextureId) -> bool {
        self.frames.contains_key(&id)
    }

    /// Number of packed images.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been packed yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Atlas dimensions in pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    /// The packed pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Incremented every time the pixels change; renderers compare it to
    /// decide when to re-upload.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn allocate(&mut self, width: u32, height: u32) -> Result<(u32, u32)> {
        let full = || UiError::AtlasFull { width, height };
        let atlas_w = self.image.width();
        let atlas_h = self.image.height();
        let padded_w = width.checked_add(PADDING).ok_or_else(full)?;
        let padded_h = height.checked_add(PADDING).ok_or_else(full)?;
        if padded_w.saturating_add(PADDING) > atlas_w {
            return Err(full());
        }

        if self.cursor_x.saturating_add(padded_w) > atlas_w {
            self.cursor_x = PADDING;
            self.cursor_y += self.shelf_height + PADDING;
            self.shelf_height = 0;
        }
        if self.cursor_y.saturating_add(padded_h) > atlas_h {
            return Err(full());
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += padded_w;
        self.shelf_height = self.shelf_height.max(height);
        Ok(pos)
    }

    fn register(&mut self, x: u32, y: u32, width: u32, height: u32) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        let min = Vec2::new(x as f32, y as f32);
        let frame = Rect::new(min, min + Vec2::new(width as f32, height as f32));
        self.frames.insert(id, frame);
        self.revision += 1;
        log::debug!("packed texture {id} at {frame:?}");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, c: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(c))
    }

    #[test]
    fn test_pack_side_by_side() {
        let mut atlas = Atlas::new(64, 64);
        let a = atlas.add_image(&solid(10, 8, [255, 0, 0, 255])).unwrap();
        let b = atlas.add_image(&solid(4, 4, [0, 255, 0, 255])).unwrap();

        assert_ne!(a, b);
        assert_eq!(atlas.frame(a), Some(Rect::from_array([1.0, 1.0, 11.0, 9.0])));
        assert_eq!(atlas.frame(b), Some(Rect::from_array([12.0, 1.0, 16.0, 5.0])));
        assert_eq!(atlas.image().get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(atlas.image().get_pixel(12, 1).0, [0, 255, 0, 255]);
        assert_eq!(atlas.image().get_pixel(11, 1).0, [0, 0, 0, 0]);
        assert_eq!(atlas.revision(), 2);
    }

    #[test]
    fn test_wraps_to_next_shelf() {
        let mut atlas = Atlas::new(32, 32);
        atlas.add_image(&solid(20, 6, [1, 1, 1, 1])).unwrap();
        let b = atlas.add_image(&solid(20, 4, [2, 2, 2, 2])).unwrap();
        assert_eq!(atlas.frame(b).unwrap().min, Vec2::new(1.0, 8.0));
    }

    #[test]
    fn test_full_atlas() {
        let mut atlas = Atlas::new(16, 16);
        assert!(matches!(
            atlas.add_image(&solid(20, 2, [0; 4])),
            Err(UiError::AtlasFull { width: 20, height: 2 })
        ));
        atlas.add_image(&solid(14, 10, [0; 4])).unwrap();
        assert!(atlas.add_image(&solid(14, 10, [0; 4])).is_err());
        assert_eq!(atlas.len(), 1);
    }

    #[test]
    fn test_huge_sizes_report_full() {
        let mut atlas = Atlas::new(16, 16);
        assert!(matches!(
            atlas.allocate(u32::MAX, 1),
            Err(UiError::AtlasFull { .. })
        ));
        assert!(matches!(
            atlas.allocate(1, u32::MAX),
            Err(UiError::AtlasFull { .. })
        ));
        assert!(matches!(
            atlas.allocate(u32::MAX - 1, u32::MAX - 1),
            Err(UiError::AtlasFull { .. })
        ));
        assert!(atlas.add_image(&solid(4, 4, [0; 4])).is_ok());
    }

    #[test]
    fn test_add_alpha_is_white_with_coverage() {
        let mut atlas = Atlas::new(16, 16);
        let id = atlas.add_alpha(2, 1, &[0, 200]).unwrap();
        let frame = atlas.frame(id).unwrap();
        let x = frame.min.x as u32;
        let y = frame.min.y as u32;
        assert_eq!(atlas.image().get_pixel(x, y).0, [255, 255, 255, 0]);
        assert_eq!(atlas.image().get_pixel(x + 1, y).0, [255, 255, 255, 200]);
    }

    #[test]
    fn test_add_alpha_rejects_wrong_length() {
        let mut atlas = Atlas::new(16, 16);
        assert!(matches!(
            atlas.add_alpha(4, 4, &[0; 3]),
            Err(UiError::InvalidImageData {
                expected: 16,
                actual: 3
            })
        ));
        assert!(atlas.is_empty());
    }
}
