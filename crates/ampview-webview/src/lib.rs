//! WebView editor support for Ampview audio plugins.
//!
//! The editor relays parameter state between a [`ParameterStore`] and a web
//! page rendered by a platform WebView:
//!
//! ```text
//! web page ──postMessage(JSON)──► InboundSender ──► UI task queue
//!                                                        │ pump() on the UI thread
//!                                                        ▼
//!                                  ParameterBridge::handle_inbound_message
//!                                                        │ ParameterStore::set (host notified)
//!                                                        ▼
//! web page ◄──inject_script──── ParameterBridge::sync_to_ui ◄── sync tick (10 Hz)
//! ```
//!
//! The platform WebView itself is abstracted behind [`UiSurface`]; a format
//! wrapper adapts its native view to that trait.
//!
//! [`ParameterStore`]: ampview_core::ParameterStore

pub mod bridge;
pub mod content;
pub mod editor;
mod error;
pub mod message;
pub mod mime;
pub mod script;
pub mod surface;

pub use ampview_core::{EmbeddedAsset, EmbeddedAssets};
pub use bridge::{ParameterBridge, CHANGE_EPSILON};
pub use content::{serve_asset, AssetResponse, Content, ASSET_ORIGIN};
pub use editor::{EditorConfig, InboundSender, StaticGuiDelegate, WebViewEditor};
pub use error::{Result, WebViewError};
pub use message::{InboundMessage, MessageError};
pub use surface::{Recorded, RecordingSurface, UiSurface};

/// Content source for a WebView.
#[derive(Debug, Clone, Copy)]
pub enum WebViewSource {
    /// Serve embedded assets via the custom URL scheme.
    Assets(&'static EmbeddedAssets),
    /// Navigate to a URL (remote deployment or dev server).
    Url(&'static str),
    /// Load an inline HTML document.
    Html(&'static str),
}
