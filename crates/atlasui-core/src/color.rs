//! Color conversion between the GUI library's packed format and host RGBA.

use glam::Vec4;

/// An 8-bit-per-channel RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a GUI-library color: alpha in the highest byte, then blue,
    /// green, and red in the lowest byte.
    pub const fn from_packed_abgr(c: u32) -> Self {
        Self {
            a: ((c >> 24) & 0xFF) as u8,
            b: ((c >> 16) & 0xFF) as u8,
            g: ((c >> 8) & 0xFF) as u8,
            r: (c & 0xFF) as u8,
        }
    }

    /// Packs back into the GUI library's ABGR layout.
    pub const fn to_packed_abgr(self) -> u32 {
        (self.a as u32) << 24 | (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }

    /// Normalized floating point channels in `[0, 1]`.
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            f32::from(self.r),
            f32::from(self.g),
            f32::from(self.b),
            f32::from(self.a),
        ) / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unpack_channel_order() {
        let c = Rgba8::from_packed_abgr(0x8040_2010);
        assert_eq!(c, Rgba8::new(0x10, 0x20, 0x40, 0x80));
    }

    #[test]
    fn test_to_vec4() {
        let v = Rgba8::new(255, 0, 51, 255).to_vec4();
        assert_eq!(v, Vec4::new(1.0, 0.0, 0.2, 1.0));
    }

    proptest! {
        #[test]
        fn prop_packed_round_trip(c in any::<u32>()) {
            prop_assert_eq!(Rgba8::from_packed_abgr(c).to_packed_abgr(), c);
        }
    }
}
