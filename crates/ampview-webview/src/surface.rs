//! The seam between the editor and a platform WebView.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::content::Content;

/// A rendered web page the editor can drive.
///
/// Format wrappers implement this over their platform WebView (WKWebView,
/// WebView2, ...). All methods are called on the UI thread.
///
/// Script injection is fire-and-forget: implementations evaluate the script
/// asynchronously and never report failure back to the caller.
pub trait UiSurface {
    /// Navigate to or render `content`.
    fn load_content(&mut self, content: &Content);

    /// Register a script to run at document start on every navigation.
    fn add_user_script(&mut self, script: &str);

    /// Evaluate `script` in the current page.
    fn inject_script(&self, script: &str);
}

/// What a [`RecordingSurface`] has seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorded {
    /// Content passed to `load_content`, in order.
    pub loads: Vec<Content>,
    /// Scripts passed to `add_user_script`.
    pub user_scripts: Vec<String>,
    /// Scripts passed to `inject_script`, in order.
    pub scripts: Vec<String>,
}

/// A headless surface that records every call.
///
/// Clones share the same record, so a test can keep one handle while the
/// editor owns another.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    record: Arc<Mutex<Recorded>>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn recorded(&self) -> Recorded {
        self.record.lock().clone()
    }

    /// Injected scripts recorded so far.
    pub fn scripts(&self) -> Vec<String> {
        self.record.lock().scripts.clone()
    }

    /// Remove and return injected scripts recorded so far.
    pub fn take_scripts(&self) -> Vec<String> {
        std::mem::take(&mut self.record.lock().scripts)
    }
}

impl UiSurface for RecordingSurface {
    fn load_content(&mut self, content: &Content) {
        self.record.lock().loads.push(content.clone());
    }

    fn add_user_script(&mut self, script: &str) {
        self.record.lock().user_scripts.push(script.to_string());
    }

    fn inject_script(&self, script: &str) {
        self.record.lock().scripts.push(script.to_string());
    }
}
