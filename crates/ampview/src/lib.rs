//! # Ampview
//!
//! Audio plugin skeleton with a WebView editor.
//!
//! Ampview pairs a parameter store shared with the audio thread and a web
//! page that edits it. Parameter changes travel both ways through a bridge
//! that polls the store on the UI thread.
//!
//! ## Architecture
//!
//! ```text
//! Your Plugin (Config + ParameterStore + Processor)
//!        ↓
//! WebViewEditor (UI thread: bridge, sync timer, task queue)
//!        ↓
//! UiSurface (platform WebView adapter)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ampview::prelude::*;
//!
//! let store = Arc::new(
//!     ParameterStore::builder()
//!         .float("gain", "Gain", 0.0..=10.0, 5.0)
//!         .build()?,
//! );
//!
//! let config = EditorConfig::new(WebViewSource::Url("http://localhost:5173"));
//! let mut editor = WebViewEditor::new(store.clone(), config)?;
//! editor.open(Box::new(my_platform_surface))?;
//!
//! // From the host's idle callback:
//! editor.pump();
//! ```

pub use ampview_core as core;

#[cfg(feature = "webview")]
pub use ampview_webview as webview;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use ampview::prelude::*;
/// ```
pub mod prelude {
    pub use ampview_core::{
        // Plugin metadata
        Category, Config, Subcategory,
        // Parameters
        AutomationListener, Formatter, Parameter, ParameterFlags, ParameterInfo, ParameterKind,
        ParameterStore, ParameterStoreBuilder, ParameterUnit, ParameterValue,
        // Audio
        PassThrough, ProcessContext, Processor, StereoBuffer,
        // Editor sizing
        GuiConstraints, GuiDelegate, Size,
        // Assets
        EmbeddedAsset, EmbeddedAssets,
        // Errors
        ParameterError,
    };

    #[cfg(feature = "webview")]
    pub use ampview_webview::{
        EditorConfig, InboundSender, ParameterBridge, StaticGuiDelegate, UiSurface,
        WebViewEditor, WebViewError, WebViewSource,
    };
}
