//! Error types for WebView operations.

use thiserror::Error;

/// Errors that can occur while setting up or driving the editor.
///
/// Protocol traffic (inbound messages, outbound scripts) never produces
/// these; it is dropped and logged instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebViewError {
    /// The embedded asset bundle has no `index.html`.
    #[error("embedded assets have no index.html")]
    MissingIndex,
    /// The configured URL is empty or uses an unsupported scheme.
    #[error("invalid content url: {0}")]
    InvalidUrl(String),
    /// The handler namespace is not a valid JavaScript identifier.
    #[error("invalid handler namespace: {0:?}")]
    InvalidNamespace(String),
    /// A surface is already attached.
    #[error("webview already attached")]
    AlreadyAttached,
    /// No surface is currently attached.
    #[error("no webview attached")]
    NotAttached,
}

/// Result type for WebView operations.
pub type Result<T> = std::result::Result<T, WebViewError>;
