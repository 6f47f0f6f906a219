//! The WebView editor: owns the surface, the bridge and the sync timer.
//!
//! Everything here runs on the UI thread. Other threads talk to the editor
//! only through an [`InboundSender`], whose messages are applied on the next
//! [`WebViewEditor::pump`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use ampview_core::{GuiConstraints, GuiDelegate, ParameterStore, Size};
use crossbeam_channel::{select, Receiver, Sender};
use serde_json::Value;

use crate::bridge::ParameterBridge;
use crate::content::Content;
use crate::error::{Result, WebViewError};
use crate::script;
use crate::surface::UiSurface;
use crate::WebViewSource;

/// Default interval between parameter syncs (10 Hz).
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_millis(100);

/// Default editor size.
pub const DEFAULT_SIZE: Size = Size::new(1200, 800);

const PLACEHOLDER_HTML: &str = "<!doctype html><html><body></body></html>";

/// Configuration for a [`WebViewEditor`].
#[derive(Debug, Clone, Copy)]
pub struct EditorConfig {
    /// Content source.
    pub source: WebViewSource,
    /// Initial editor size.
    pub size: Size,
    /// Size constraints.
    pub constraints: GuiConstraints,
    /// Interval between parameter syncs.
    pub sync_interval: Duration,
    /// Page-side handler object, `window.<namespace>`.
    pub namespace: &'static str,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new(WebViewSource::Html(PLACEHOLDER_HTML))
    }
}

impl EditorConfig {
    /// Create a config for `source` with a fixed 1200×800 editor and 10 Hz sync.
    pub const fn new(source: WebViewSource) -> Self {
        Self {
            source,
            size: DEFAULT_SIZE,
            constraints: GuiConstraints::fixed(DEFAULT_SIZE),
            sync_interval: DEFAULT_SYNC_INTERVAL,
            namespace: script::DEFAULT_NAMESPACE,
        }
    }

    /// Set a fixed editor size.
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Size::new(width, height);
        self.constraints = GuiConstraints::fixed(self.size);
        self
    }

    /// Set size constraints. The initial size is not adjusted.
    pub const fn with_constraints(mut self, constraints: GuiConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the sync interval.
    pub const fn with_sync_interval(mut self, interval: Duration) -> Self {
        self.sync_interval = interval;
        self
    }

    /// Set the page-side handler namespace.
    pub const fn with_namespace(mut self, namespace: &'static str) -> Self {
        self.namespace = namespace;
        self
    }
}

/// Simple `GuiDelegate` backed by fixed size and constraints.
#[derive(Debug, Clone, Copy)]
pub struct StaticGuiDelegate {
    size: Size,
    constraints: GuiConstraints,
}

impl StaticGuiDelegate {
    /// Create a delegate with a fixed initial size and constraints.
    pub fn new(size: Size, constraints: GuiConstraints) -> Self {
        Self { size, constraints }
    }
}

impl GuiDelegate for StaticGuiDelegate {
    fn gui_size(&self) -> Size {
        self.size
    }

    fn gui_constraints(&self) -> GuiConstraints {
        self.constraints
    }
}

/// Work queued for the UI thread.
#[derive(Debug)]
enum UiTask {
    Inbound(String),
    PageLoaded,
}

/// Posts page events to an editor from any thread.
///
/// Platform adapters hand one of these to their native message handler.
/// Posting after the editor is gone is a silent no-op.
#[derive(Debug, Clone)]
pub struct InboundSender {
    tx: Sender<UiTask>,
}

impl InboundSender {
    /// Queue a raw JSON message from the page.
    ///
    /// Returns `false` if the editor has been dropped.
    pub fn post(&self, raw: impl Into<String>) -> bool {
        self.tx.send(UiTask::Inbound(raw.into())).is_ok()
    }

    /// Signal that the page finished loading.
    pub fn page_loaded(&self) -> bool {
        self.tx.send(UiTask::PageLoaded).is_ok()
    }
}

/// A WebView editor bound to a parameter store.
pub struct WebViewEditor {
    bridge: ParameterBridge,
    config: EditorConfig,
    content: Content,
    delegate: Box<dyn GuiDelegate>,
    size: Size,
    surface: Option<Box<dyn UiSurface>>,
    ticker: Option<Receiver<Instant>>,
    tasks_tx: Sender<UiTask>,
    tasks_rx: Receiver<UiTask>,
    page_loaded: bool,
}

impl std::fmt::Debug for WebViewEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebViewEditor")
            .field("content", &self.content)
            .field("size", &self.size)
            .field("open", &self.is_open())
            .field("page_loaded", &self.page_loaded)
            .finish_non_exhaustive()
    }
}

impl WebViewEditor {
    /// Create an editor. Content and namespace are validated here so a bad
    /// config fails at construction rather than when the host opens the view.
    pub fn new(store: Arc<ParameterStore>, config: EditorConfig) -> Result<Self> {
        let delegate = StaticGuiDelegate::new(config.size, config.constraints);
        Self::with_delegate(store, config, Box::new(delegate))
    }

    /// Create an editor whose sizing and lifecycle hooks come from `delegate`.
    pub fn with_delegate(
        store: Arc<ParameterStore>,
        config: EditorConfig,
        delegate: Box<dyn GuiDelegate>,
    ) -> Result<Self> {
        let content = Content::resolve(&config.source).inspect_err(|e| {
            log::error!("Failed to resolve editor content: {e}");
        })?;
        let bridge = ParameterBridge::new(store).with_namespace(config.namespace)?;
        let size = delegate.gui_constraints().constrain(delegate.gui_size());
        let (tasks_tx, tasks_rx) = crossbeam_channel::unbounded();

        Ok(Self {
            bridge,
            config,
            content,
            delegate,
            size,
            surface: None,
            ticker: None,
            tasks_tx,
            tasks_rx,
            page_loaded: false,
        })
    }

    /// The editor configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// What the surface is asked to load.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The parameter bridge.
    pub fn bridge(&self) -> &ParameterBridge {
        &self.bridge
    }

    /// A handle for posting page events from any thread.
    pub fn sender(&self) -> InboundSender {
        InboundSender {
            tx: self.tasks_tx.clone(),
        }
    }

    /// Current editor size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether a surface is attached.
    pub fn is_open(&self) -> bool {
        self.surface.is_some()
    }

    /// Whether the page has reported that it finished loading.
    pub fn is_page_loaded(&self) -> bool {
        self.page_loaded
    }

    /// Attach a surface, load the content and start the sync timer.
    pub fn open(&mut self, mut surface: Box<dyn UiSurface>) -> Result<()> {
        if self.surface.is_some() {
            return Err(WebViewError::AlreadyAttached);
        }

        // Anything queued against a previous page is stale.
        self.discard_tasks();

        surface.add_user_script(&script::bootstrap(self.bridge.namespace()));
        surface.load_content(&self.content);
        self.surface = Some(surface);

        self.bridge.ui_ready();
        self.page_loaded = false;
        self.ticker = Some(crossbeam_channel::tick(self.config.sync_interval));

        self.delegate.gui_opened();
        log::info!(
            "Editor opened ({}x{}, sync every {:?})",
            self.size.width,
            self.size.height,
            self.config.sync_interval
        );
        Ok(())
    }

    /// Apply queued page events and run a sync if the timer fired.
    ///
    /// Never blocks. Missed ticks are coalesced into a single sync. Returns
    /// the number of page events applied, plus one if a sync sent updates;
    /// always `0` while closed.
    pub fn pump(&mut self) -> usize {
        if self.surface.is_none() {
            return 0;
        }

        let mut handled = 0;
        while let Ok(task) = self.tasks_rx.try_recv() {
            self.run_task(task);
            handled += 1;
        }

        let fired = self
            .ticker
            .as_ref()
            .map_or(0, |ticker| ticker.try_iter().count());
        if fired > 0 && self.sync() > 0 {
            handled += 1;
        }
        handled
    }

    /// Wait up to `timeout` for a page event or sync tick, then [`pump`].
    ///
    /// For hosts that drive the editor from their own idle loop.
    ///
    /// [`pump`]: Self::pump
    pub fn pump_timeout(&mut self, timeout: Duration) -> usize {
        let Some(ticker) = self.ticker.clone() else {
            return 0;
        };
        let tasks = self.tasks_rx.clone();
        let deadline = crossbeam_channel::after(timeout);

        let mut handled = 0;
        select! {
            recv(tasks) -> task => {
                if let Ok(task) = task {
                    self.run_task(task);
                    handled += 1;
                }
            }
            recv(ticker) -> _ => {
                if self.sync() > 0 {
                    handled += 1;
                }
            }
            recv(deadline) -> _ => {}
        }
        handled + self.pump()
    }

    /// Sync immediately instead of waiting for the next tick.
    ///
    /// Returns the number of parameter updates sent; `0` until the page has
    /// loaded.
    pub fn sync_now(&mut self) -> usize {
        self.sync()
    }

    /// Hand preset data to the page.
    pub fn emit_preset(&self, preset: &Value) -> Result<()> {
        let surface = self.surface.as_deref().ok_or(WebViewError::NotAttached)?;
        self.bridge.emit_preset_to_ui(surface, preset);
        Ok(())
    }

    /// Apply a host resize request. Returns the constrained size.
    pub fn resize(&mut self, requested: Size) -> Size {
        let size = self.delegate.gui_constraints().constrain(requested);
        self.size = size;
        self.delegate.gui_resized(size);
        size
    }

    /// Stop the sync timer and release the surface.
    ///
    /// Queued page events are discarded. Safe to call more than once.
    pub fn close(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.ticker = None;
        self.surface = None;
        self.page_loaded = false;
        self.discard_tasks();
        self.delegate.gui_closed();
        log::info!("Editor closed");
    }

    fn run_task(&mut self, task: UiTask) {
        match task {
            UiTask::Inbound(raw) => {
                self.bridge.handle_inbound_message(&raw);
            }
            UiTask::PageLoaded => {
                log::debug!("Page loaded, resending all parameters");
                self.page_loaded = true;
                self.bridge.ui_ready();
                self.sync();
            }
        }
    }

    fn sync(&mut self) -> usize {
        if !self.page_loaded {
            return 0;
        }
        match self.surface.as_deref() {
            Some(surface) => self.bridge.sync_to_ui(surface),
            None => 0,
        }
    }

    fn discard_tasks(&self) {
        let dropped = self.tasks_rx.try_iter().count();
        if dropped > 0 {
            log::debug!("Discarded {dropped} queued ui task(s)");
        }
    }
}

impl Drop for WebViewEditor {
    fn drop(&mut self) {
        self.close();
    }
}
