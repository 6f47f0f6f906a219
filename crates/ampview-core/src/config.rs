//! Plugin metadata.
//!
//! ```ignore
//! use ampview_core::{Category, Config, Subcategory};
//!
//! pub static CONFIG: Config = Config::new("My Amp", Category::Effect)
//!     .with_vendor("My Company")
//!     .with_version(env!("CARGO_PKG_VERSION"))
//!     .with_subcategories(&[Subcategory::Distortion, Subcategory::Guitar]);
//! ```

use crate::types::Size;

/// Top-level host category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Processes audio.
    Effect,
    /// Generates audio.
    Instrument,
}

/// Finer classification shown in host browsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcategory {
    /// Bass amps and bass processing.
    Bass,
    /// Echo and delay lines.
    Delay,
    /// Amp sims, overdrive, fuzz.
    Distortion,
    /// Compressors, gates, limiters.
    Dynamics,
    /// Equalizers and filters.
    Eq,
    /// Guitar-specific tools.
    Guitar,
    /// Reverbs and room simulation.
    Reverb,
    /// Stereo-only processing.
    Stereo,
}

impl Subcategory {
    /// Host-facing label.
    pub const fn label(&self) -> &'static str {
        match self {
            Subcategory::Bass => "Bass",
            Subcategory::Delay => "Delay",
            Subcategory::Distortion => "Distortion",
            Subcategory::Dynamics => "Dynamics",
            Subcategory::Eq => "EQ",
            Subcategory::Guitar => "Guitar",
            Subcategory::Reverb => "Reverb",
            Subcategory::Stereo => "Stereo",
        }
    }
}

/// Plugin configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Plugin name displayed in the DAW.
    pub name: &'static str,
    /// Plugin category.
    pub category: Category,
    /// Vendor/company name.
    pub vendor: &'static str,
    /// Vendor URL.
    pub url: &'static str,
    /// Version string.
    pub version: &'static str,
    /// Subcategories, most specific first.
    pub subcategories: &'static [Subcategory],
    /// Whether the plugin has an editor.
    pub has_editor: bool,
    /// Initial editor size.
    pub editor_size: Size,
}

impl Config {
    /// Create a configuration with required fields.
    pub const fn new(name: &'static str, category: Category) -> Self {
        Self {
            name,
            category,
            vendor: "",
            url: "",
            version: "0.0.0",
            subcategories: &[],
            has_editor: false,
            editor_size: Size::new(800, 600),
        }
    }

    /// Set the vendor name.
    pub const fn with_vendor(mut self, vendor: &'static str) -> Self {
        self.vendor = vendor;
        self
    }

    /// Set the vendor URL.
    pub const fn with_url(mut self, url: &'static str) -> Self {
        self.url = url;
        self
    }

    /// Set the version string.
    pub const fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    /// Set the subcategories.
    pub const fn with_subcategories(mut self, subcategories: &'static [Subcategory]) -> Self {
        self.subcategories = subcategories;
        self
    }

    /// Enable the editor with an initial size.
    pub const fn with_editor_size(mut self, width: u32, height: u32) -> Self {
        self.has_editor = true;
        self.editor_size = Size::new(width, height);
        self
    }

    /// Subcategory labels joined with `|`, the form hosts expect.
    pub fn subcategory_string(&self) -> String {
        self.subcategories
            .iter()
            .map(Subcategory::label)
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CONFIG: Config = Config::new("Test Amp", Category::Effect)
        .with_vendor("Test Vendor")
        .with_version("1.2.3")
        .with_subcategories(&[Subcategory::Distortion, Subcategory::Guitar])
        .with_editor_size(1200, 800);

    #[test]
    fn test_const_builder() {
        assert_eq!(CONFIG.name, "Test Amp");
        assert_eq!(CONFIG.vendor, "Test Vendor");
        assert_eq!(CONFIG.version, "1.2.3");
        assert!(CONFIG.has_editor);
        assert_eq!(CONFIG.editor_size, Size::new(1200, 800));
    }

    #[test]
    fn test_subcategory_string() {
        assert_eq!(CONFIG.subcategory_string(), "Distortion|Guitar");
        assert_eq!(Config::new("Bare", Category::Effect).subcategory_string(), "");
    }
}
