//! Resolving a [`WebViewSource`] into something a surface can load.

use ampview_core::EmbeddedAssets;

use crate::error::{Result, WebViewError};
use crate::mime::mime_for_path;
use crate::WebViewSource;

/// Origin under which embedded assets are served.
///
/// Platform adapters register a custom scheme handler for `ampview://` and
/// answer requests with [`serve_asset`].
pub const ASSET_ORIGIN: &str = "ampview://localhost";

const ALLOWED_SCHEMES: &[&str] = &["http://", "https://", "file://", "ampview://"];

/// What a surface should load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Navigate to a URL.
    Url(String),
    /// Load an inline HTML document.
    Html(String),
}

impl Content {
    /// Resolve a source into loadable content.
    ///
    /// Embedded assets resolve to their index document under
    /// [`ASSET_ORIGIN`]. URLs must use `http`, `https`, `file` or `ampview`.
    pub fn resolve(source: &WebViewSource) -> Result<Self> {
        match *source {
            WebViewSource::Assets(assets) => {
                if !assets.has_index() {
                    return Err(WebViewError::MissingIndex);
                }
                Ok(Content::Url(format!("{ASSET_ORIGIN}/{}", EmbeddedAssets::INDEX)))
            }
            WebViewSource::Url(url) => {
                let url = url.trim();
                let scheme_ok = ALLOWED_SCHEMES
                    .iter()
                    .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme));
                if !scheme_ok {
                    return Err(WebViewError::InvalidUrl(url.to_string()));
                }
                Ok(Content::Url(url.to_string()))
            }
            WebViewSource::Html(html) => Ok(Content::Html(html.to_string())),
        }
    }
}

/// Response to a custom-scheme asset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetResponse {
    /// File contents.
    pub data: &'static [u8],
    /// MIME type for the `Content-Type` header.
    pub mime: &'static str,
}

/// Answer a request for `url` from the embedded bundle.
///
/// Accepts full `ampview://localhost/...` URLs or bare paths. Query strings
/// and fragments are ignored. Returns `None` for files not in the bundle.
pub fn serve_asset(assets: &EmbeddedAssets, url: &str) -> Option<AssetResponse> {
    let path = url.strip_prefix(ASSET_ORIGIN).unwrap_or(url);
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let data = assets.get(path)?;
    let path = path.trim_start_matches('/');
    let mime = if path.is_empty() {
        mime_for_path(EmbeddedAssets::INDEX)
    } else {
        mime_for_path(path)
    };
    Some(AssetResponse { data, mime })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampview_core::EmbeddedAsset;

    static BUNDLE: EmbeddedAssets = EmbeddedAssets::new(&[
        EmbeddedAsset {
            path: "index.html",
            data: b"<div id=root></div>",
        },
        EmbeddedAsset {
            path: "assets/app.js",
            data: b"boot()",
        },
    ]);

    static NO_INDEX: EmbeddedAssets = EmbeddedAssets::new(&[EmbeddedAsset {
        path: "app.js",
        data: b"",
    }]);

    #[test]
    fn test_resolve_assets() {
        let content = Content::resolve(&WebViewSource::Assets(&BUNDLE)).unwrap();
        assert_eq!(content, Content::Url("ampview://localhost/index.html".into()));

        let missing = Content::resolve(&WebViewSource::Assets(&NO_INDEX));
        assert_eq!(missing, Err(WebViewError::MissingIndex));
    }

    #[test]
    fn test_resolve_url() {
        let content = Content::resolve(&WebViewSource::Url("https://example.com/amp")).unwrap();
        assert_eq!(content, Content::Url("https://example.com/amp".into()));

        assert!(matches!(
            Content::resolve(&WebViewSource::Url("javascript:alert(1)")),
            Err(WebViewError::InvalidUrl(_))
        ));
        assert!(matches!(
            Content::resolve(&WebViewSource::Url("https://")),
            Err(WebViewError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resolve_html() {
        let content = Content::resolve(&WebViewSource::Html("<p>hi</p>")).unwrap();
        assert_eq!(content, Content::Html("<p>hi</p>".into()));
    }

    #[test]
    fn test_serve_asset() {
        let index = serve_asset(&BUNDLE, "ampview://localhost/").unwrap();
        assert_eq!(index.data, b"<div id=root></div>");
        assert_eq!(index.mime, "text/html; charset=utf-8");

        let script = serve_asset(&BUNDLE, "ampview://localhost/assets/app.js?v=1").unwrap();
        assert_eq!(script.data, b"boot()");
        assert_eq!(script.mime, "text/javascript; charset=utf-8");

        assert!(serve_asset(&BUNDLE, "/assets/missing.css").is_none());
    }
}
