//! Mouse cursor shapes requested by the GUI and the host cursors that show them.

use std::collections::HashMap;

/// Cursor shapes the GUI library can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseCursor {
    /// The GUI wants the cursor hidden.
    None,
    #[default]
    Arrow,
    TextInput,
    ResizeAll,
    ResizeNS,
    ResizeEW,
    ResizeNESW,
    ResizeNWSE,
    Hand,
    NotAllowed,
}

/// Standard cursors a host window can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardCursor {
    #[default]
    Arrow,
    IBeam,
    Crosshair,
    Hand,
    HResize,
    VResize,
}

/// Table from GUI cursor shapes to host cursors.
#[derive(Debug, Clone)]
pub struct CursorMap {
    cursors: HashMap<MouseCursor, StandardCursor>,
}

impl Default for CursorMap {
    fn default() -> Self {
        let cursors = HashMap::from([
            (MouseCursor::Arrow, StandardCursor::Arrow),
            (MouseCursor::TextInput, StandardCursor::IBeam),
            (MouseCursor::Hand, StandardCursor::Hand),
            (MouseCursor::ResizeEW, StandardCursor::HResize),
            (MouseCursor::ResizeNS, StandardCursor::VResize),
        ]);
        Self { cursors }
    }
}

impl CursorMap {
    /// Adds or replaces a mapping.
    pub fn insert(&mut self, cursor: MouseCursor, host: StandardCursor) {
        self.cursors.insert(cursor, host);
    }

    /// Host cursor for `cursor`, or the arrow when none is mapped.
    pub fn resolve(&self, cursor: MouseCursor) -> StandardCursor {
        self.cursors.get(&cursor).copied().unwrap_or_else(|| {
            log::trace!("no host cursor for {cursor:?}, using the arrow");
            StandardCursor::Arrow
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mappings() {
        let map = CursorMap::default();
        assert_eq!(map.resolve(MouseCursor::TextInput), StandardCursor::IBeam);
        assert_eq!(map.resolve(MouseCursor::ResizeEW), StandardCursor::HResize);
        assert_eq!(map.resolve(MouseCursor::ResizeNS), StandardCursor::VResize);
    }

    #[test]
    fn test_unmapped_falls_back_to_arrow() {
        let mut map = CursorMap::default();
        assert_eq!(map.resolve(MouseCursor::ResizeNWSE), StandardCursor::Arrow);
        map.insert(MouseCursor::ResizeAll, StandardCursor::Crosshair);
        assert_eq!(map.resolve(MouseCursor::ResizeAll), StandardCursor::Crosshair);
    }
}
