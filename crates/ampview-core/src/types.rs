//! Shared primitive types.

/// Parameter value type. Normalized values live in `[0.0, 1.0]`,
/// actual values in the parameter's natural range.
pub type ParameterValue = f64;

/// Editor size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamp each dimension into `[min, max]`.
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self {
            width: self.width.clamp(min.width, max.width.max(min.width)),
            height: self.height.clamp(min.height, max.height.max(min.height)),
        }
    }
}
