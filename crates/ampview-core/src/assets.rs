//! Web assets embedded into the plugin binary.
//!
//! These types live in the core crate so plugin metadata can reference a
//! bundle without depending on the editor crate.

/// A single file embedded at compile time.
#[derive(Debug)]
pub struct EmbeddedAsset {
    /// Relative path within the bundle (e.g. "index.html", "assets/app.js").
    pub path: &'static str,
    /// File contents.
    pub data: &'static [u8],
}

/// Collection of embedded web assets.
#[derive(Debug)]
pub struct EmbeddedAssets {
    assets: &'static [EmbeddedAsset],
}

impl EmbeddedAssets {
    /// Entry document loaded when the editor opens.
    pub const INDEX: &'static str = "index.html";

    /// Create a new asset collection.
    pub const fn new(assets: &'static [EmbeddedAsset]) -> Self {
        Self { assets }
    }

    /// Look up a file by path. A leading `/` is ignored and an empty path
    /// resolves to the index document.
    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        let path = path.trim_start_matches('/');
        let path = if path.is_empty() { Self::INDEX } else { path };
        self.assets.iter().find(|a| a.path == path).map(|a| a.data)
    }

    /// Whether the bundle contains an index document.
    pub fn has_index(&self) -> bool {
        self.get(Self::INDEX).is_some()
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BUNDLE: EmbeddedAssets = EmbeddedAssets::new(&[
        EmbeddedAsset {
            path: "index.html",
            data: b"<html></html>",
        },
        EmbeddedAsset {
            path: "assets/app.js",
            data: b"console.log(1)",
        },
    ]);

    #[test]
    fn test_lookup() {
        assert_eq!(BUNDLE.get("assets/app.js"), Some(&b"console.log(1)"[..]));
        assert_eq!(BUNDLE.get("/assets/app.js"), Some(&b"console.log(1)"[..]));
        assert_eq!(BUNDLE.get(""), Some(&b"<html></html>"[..]));
        assert!(BUNDLE.get("missing.css").is_none());
        assert!(BUNDLE.has_index());
        assert_eq!(BUNDLE.len(), 2);
    }
}
