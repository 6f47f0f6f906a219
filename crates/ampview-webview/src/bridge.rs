//! Two-way parameter relay between a [`ParameterStore`] and the page.
//!
//! Outbound, the bridge polls the store and pushes values that moved by more
//! than [`CHANGE_EPSILON`] since they were last sent. Inbound, it applies
//! `parameterChange` messages to the store so the host sees the edit.

use std::sync::Arc;

use ampview_core::{ParameterStore, ParameterValue};
use serde_json::Value;

use crate::error::{Result, WebViewError};
use crate::message::{InboundMessage, MessageError};
use crate::script;
use crate::surface::UiSurface;

/// Minimum change, in actual units, that is pushed to the page.
pub const CHANGE_EPSILON: f64 = 0.001;

/// Relays parameter state between the store and a [`UiSurface`].
///
/// Owned by the editor on the UI thread; the change snapshot is never shared.
#[derive(Debug)]
pub struct ParameterBridge {
    store: Arc<ParameterStore>,
    namespace: String,
    /// Last value sent per parameter, by declaration index.
    /// NaN means "never sent", so the first sync sends everything.
    last_sent: Vec<f64>,
}

impl ParameterBridge {
    /// Create a bridge using the default handler namespace.
    pub fn new(store: Arc<ParameterStore>) -> Self {
        let last_sent = vec![f64::NAN; store.count()];
        Self {
            store,
            namespace: script::DEFAULT_NAMESPACE.to_string(),
            last_sent,
        }
    }

    /// Use `window.<namespace>` as the page-side handler object.
    pub fn with_namespace(mut self, namespace: &str) -> Result<Self> {
        if !script::is_valid_namespace(namespace) {
            return Err(WebViewError::InvalidNamespace(namespace.to_string()));
        }
        self.namespace = namespace.to_string();
        Ok(self)
    }

    /// The store this bridge relays.
    pub fn store(&self) -> &Arc<ParameterStore> {
        &self.store
    }

    /// The page-side handler namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Last value sent for `id`, or `None` if unknown or never sent.
    pub fn last_sent(&self, id: &str) -> Option<ParameterValue> {
        let index = self.store.ids().position(|p| p == id)?;
        let value = self.last_sent[index];
        (!value.is_nan()).then_some(value)
    }

    /// Push every parameter that changed since it was last sent.
    ///
    /// Parameters are visited in declaration order and each produces at most
    /// one update. Returns the number of updates emitted.
    pub fn sync_to_ui(&mut self, surface: &dyn UiSurface) -> usize {
        let mut emitted = 0;
        for (parameter, last) in self.store.iter().zip(self.last_sent.iter_mut()) {
            let current = parameter.get();
            // NaN never compares greater, so test for it explicitly.
            if last.is_nan() || (current - *last).abs() > CHANGE_EPSILON {
                *last = current;
                surface.inject_script(&script::parameter_update(
                    &self.namespace,
                    parameter.id(),
                    current,
                ));
                emitted += 1;
            }
        }
        if emitted > 0 {
            log::trace!("synced {emitted} parameter(s) to ui");
        }
        emitted
    }

    /// Apply a raw message from the page.
    ///
    /// Malformed or unknown messages are logged and dropped. Returns `true`
    /// only when a parameter in the store was updated.
    ///
    /// The snapshot is left alone, so the applied value is echoed back on
    /// the next sync.
    pub fn handle_inbound_message(&self, raw: &str) -> bool {
        let message = match InboundMessage::parse(raw) {
            Ok(message) => message,
            Err(MessageError::UnknownType(kind)) => {
                log::debug!("ignoring ui message of unknown type {kind:?}");
                return false;
            }
            Err(err) => {
                log::warn!("dropping ui message: {err}");
                return false;
            }
        };

        match message {
            InboundMessage::ParameterChange { param_id, value } => {
                let applied = self.store.set(&param_id, value);
                if !applied {
                    log::debug!("ui change to {param_id:?} rejected (unknown or read-only)");
                }
                applied
            }
            InboundMessage::PresetLoad { preset_name } => {
                log::debug!("presetLoad not supported (preset {preset_name:?})");
                false
            }
            InboundMessage::PresetSave { preset_name, .. } => {
                log::debug!("presetSave not supported (preset {preset_name:?})");
                false
            }
        }
    }

    /// Push a single value to the page regardless of the snapshot.
    pub fn emit_to_ui(&self, surface: &dyn UiSurface, param_id: &str, value: ParameterValue) {
        surface.inject_script(&script::parameter_update(&self.namespace, param_id, value));
    }

    /// Hand preset data to the page's `onPresetLoad` handler.
    pub fn emit_preset_to_ui(&self, surface: &dyn UiSurface, preset: &Value) {
        surface.inject_script(&script::preset_load(&self.namespace, preset));
    }

    /// Forget what was sent so the next sync resends every parameter.
    ///
    /// Call when the page (re)loads; anything sent before its handlers were
    /// registered was lost.
    pub fn ui_ready(&mut self) {
        self.last_sent.fill(f64::NAN);
    }
}
