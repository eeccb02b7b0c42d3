//! Rectangles and the UI view transform.
//!
//! The GUI library works in screen space with the origin at the top-left and
//! y pointing down. Hosts draw with the origin at the bottom-left and y
//! pointing up. [`ui_view_matrix`] maps the former into the latter.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Rect {
    /// The all-zero rectangle. As a clip rectangle it means "no clipping".
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Creates a rectangle from two corners without reordering them.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from `[x1, y1, x2, y2]`.
    pub fn from_array(r: [f32; 4]) -> Self {
        Self::new(Vec2::new(r[0], r[1]), Vec2::new(r[2], r[3]))
    }

    /// Returns `[min.x, min.y, max.x, max.y]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Returns the rectangle with `min <= max` on both axes.
    #[must_use]
    pub fn norm(self) -> Self {
        Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        }
    }

    /// Width and height.
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Center point.
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether every coordinate is exactly zero.
    pub fn is_zero(self) -> bool {
        self.min == Vec2::ZERO && self.max == Vec2::ZERO
    }

    /// Whether the point lies inside the rectangle (edges included).
    pub fn contains(self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Builds the matrix that flips GUI space vertically about the center of
/// `bounds`, so that GUI coordinates land in host coordinates.
///
/// The flip is its own inverse; [`Affine2::inverse`] still works for callers
/// composing it with other transforms.
pub fn ui_view_matrix(bounds: Rect) -> Affine2 {
    let center = bounds.center();
    Affine2::from_translation(center)
        * Affine2::from_scale(Vec2::new(1.0, -1.0))
        * Affine2::from_translation(-center)
}

/// Projects `rect` through `matrix` corner by corner and normalizes the result.
pub fn project_rect(matrix: &Affine2, rect: Rect) -> Rect {
    Rect::new(
        matrix.transform_point2(rect.min),
        matrix.transform_point2(rect.max),
    )
    .norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_swaps_inverted_axes() {
        let r = Rect::from_array([10.0, 40.0, 5.0, 20.0]).norm();
        assert_eq!(r.min, Vec2::new(5.0, 20.0));
        assert_eq!(r.max, Vec2::new(10.0, 40.0));
    }

    #[test]
    fn test_view_matrix_flips_about_center() {
        let bounds = Rect::new(Vec2::ZERO, Vec2::new(800.0, 600.0));
        let m = ui_view_matrix(bounds);

        assert_eq!(m.transform_point2(Vec2::new(0.0, 0.0)), Vec2::new(0.0, 600.0));
        assert_eq!(m.transform_point2(Vec2::new(100.0, 150.0)), Vec2::new(100.0, 450.0));
        assert_eq!(m.transform_point2(bounds.center()), bounds.center());
    }

    #[test]
    fn test_view_matrix_inverse_round_trips() {
        let bounds = Rect::new(Vec2::ZERO, Vec2::new(1024.0, 768.0));
        let m = ui_view_matrix(bounds);
        let p = Vec2::new(17.0, 700.0);
        let back = m.inverse().transform_point2(m.transform_point2(p));
        assert!((back - p).length() < 1e-4);
    }

    #[test]
    fn test_project_rect_normalizes_after_flip() {
        let bounds = Rect::new(Vec2::ZERO, Vec2::new(200.0, 100.0));
        let m = ui_view_matrix(bounds);
        let r = project_rect(&m, Rect::from_array([10.0, 10.0, 50.0, 30.0]));
        assert_eq!(r.min, Vec2::new(10.0, 70.0));
        assert_eq!(r.max, Vec2::new(50.0, 90.0));
    }

    #[test]
    fn test_zero_rect() {
        assert!(Rect::ZERO.is_zero());
        assert!(!Rect::from_array([0.0, 0.0, 0.0, 1.0]).is_zero());
    }
}
