//! Editor sizing and lifecycle hooks.

use crate::types::Size;

/// Size constraints for the plugin editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiConstraints {
    /// Minimum size.
    pub min: Size,
    /// Maximum size.
    pub max: Size,
    /// Whether the editor is resizable.
    pub resizable: bool,
}

impl Default for GuiConstraints {
    fn default() -> Self {
        Self {
            min: Size::new(400, 300),
            max: Size::new(1600, 1200),
            resizable: true,
        }
    }
}

impl GuiConstraints {
    /// Fixed-size constraints.
    pub const fn fixed(size: Size) -> Self {
        Self {
            min: size,
            max: size,
            resizable: false,
        }
    }

    /// Constrain a requested size.
    pub fn constrain(&self, requested: Size) -> Size {
        requested.clamp(self.min, self.max)
    }
}

/// Editor lifecycle callbacks.
///
/// The editor owns the WebView; this trait only supplies configuration and
/// is told when the editor opens, closes or resizes.
pub trait GuiDelegate: Send {
    /// Initial editor size.
    fn gui_size(&self) -> Size;

    /// Size constraints.
    fn gui_constraints(&self) -> GuiConstraints {
        GuiConstraints::default()
    }

    /// Called when the editor is opened.
    fn gui_opened(&mut self) {}

    /// Called when the editor is closed.
    fn gui_closed(&mut self) {}

    /// Called after a resize. The size has already been constrained.
    fn gui_resized(&mut self, _new_size: Size) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain() {
        let constraints = GuiConstraints::default();
        assert_eq!(constraints.constrain(Size::new(100, 5000)), Size::new(400, 1200));
        assert_eq!(constraints.constrain(Size::new(1200, 800)), Size::new(1200, 800));
    }

    #[test]
    fn test_fixed() {
        let constraints = GuiConstraints::fixed(Size::new(1200, 800));
        assert!(!constraints.resizable);
        assert_eq!(constraints.constrain(Size::new(10, 10)), Size::new(1200, 800));
    }
}
