//! Session configuration.

use bitflags::bitflags;
use glam::Vec4;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags recognized when a session is created.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct UiFlags: u8 {
        /// Do not load the GUI library's default font during creation.
        const NO_DEFAULT_FONT = 1 << 0;
    }
}

/// Configuration for a UI session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Creation flags.
    pub flags: UiFlags,

    /// Multiplied into every UI fragment.
    pub color_mask: Vec4,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            flags: UiFlags::empty(),
            color_mask: Vec4::ONE,
        }
    }
}

impl UiConfig {
    /// Returns the config with `flags` added.
    #[must_use]
    pub fn with_flags(mut self, flags: UiFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Returns the config with a different color mask.
    #[must_use]
    pub fn with_color_mask(mut self, color_mask: Vec4) -> Self {
        self.color_mask = color_mask;
        self
    }

    /// Whether the default font should be loaded.
    pub fn loads_default_font(&self) -> bool {
        !self.flags.contains(UiFlags::NO_DEFAULT_FONT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loads_font() {
        let config = UiConfig::default();
        assert!(config.loads_default_font());
        assert!(!config
            .with_flags(UiFlags::NO_DEFAULT_FONT)
            .loads_default_font());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: UiConfig = serde_json::from_str(r#"{ "flags": "NO_DEFAULT_FONT" }"#).unwrap();
        assert!(!config.loads_default_font());
        assert_eq!(config.color_mask, Vec4::ONE);
    }
}
