//! The ordered parameter collection shared by the audio engine and the editor.
//!
//! A [`ParameterStore`] is built once with [`ParameterStoreBuilder`], wrapped
//! in an `Arc`, and then shared:
//!
//! - the audio thread reads values lock-free via [`Parameter::get`]
//! - the host writes automation via [`set_normalized`](ParameterStore::set_normalized)
//! - the editor writes UI edits via [`set`](ParameterStore::set), which also
//!   reports the edit to the [`AutomationListener`] so the host records it
//!
//! Enumeration order is declaration order and never changes.
//!
//! ```ignore
//! let store = ParameterStore::builder()
//!     .float("bass", "Bass", 0.0..=10.0, 5.0)
//!     .boolean("punish", "Punish", false)
//!     .integer("irIndex", "IR Index", 0..=9, 0)
//!     .build()?;
//!
//! store.set("bass", 7.5);
//! assert_eq!(store.value("bass"), Some(7.5));
//! ```

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{ParameterError, Result};
use crate::parameter::Parameter;
use crate::parameter_info::ParameterInfo;
use crate::parameter_kind::ParameterKind;
use crate::types::ParameterValue;

/// Receives edits that must be visible to the host.
///
/// A format wrapper implements this on top of the host's component handler
/// (VST3 `IComponentHandler`, AU parameter events). Every UI-originated
/// change arrives as a complete `begin_edit` / `perform_edit` / `end_edit`
/// gesture carrying the new normalized value.
///
/// Called on the UI thread.
pub trait AutomationListener: Send + Sync {
    /// A gesture on `id` starts.
    fn begin_edit(&self, _id: &str) {}

    /// `id` changed to `normalized`.
    fn perform_edit(&self, id: &str, normalized: ParameterValue);

    /// The gesture on `id` ends.
    fn end_edit(&self, _id: &str) {}
}

/// Ordered collection of parameters keyed by string ID.
pub struct ParameterStore {
    parameters: Vec<Parameter>,
    index: HashMap<&'static str, usize>,
    listener: Mutex<Option<Arc<dyn AutomationListener>>>,
}

impl std::fmt::Debug for ParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterStore")
            .field("parameters", &self.parameters)
            .field("has_listener", &self.listener.lock().is_some())
            .finish()
    }
}

impl ParameterStore {
    /// Start declaring parameters.
    pub fn builder() -> ParameterStoreBuilder {
        ParameterStoreBuilder::default()
    }

    /// Number of parameters.
    pub fn count(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the store has no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Look up a parameter by ID.
    pub fn get(&self, id: &str) -> Option<&Parameter> {
        self.index.get(id).map(|&i| &self.parameters[i])
    }

    /// Parameter at a declaration index.
    pub fn at(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    /// Current actual value of a parameter.
    pub fn value(&self, id: &str) -> Option<ParameterValue> {
        self.get(id).map(Parameter::get)
    }

    /// Iterate over all parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.parameters.iter()
    }

    /// Parameter IDs in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parameters.iter().map(Parameter::id)
    }

    /// Set a parameter from an actual value and notify the host.
    ///
    /// The value is clamped into the parameter's domain. The change is
    /// reported to the installed [`AutomationListener`] as a full gesture,
    /// so it is observable by host automation rather than being a silent
    /// field write.
    ///
    /// Parameters flagged non-automatable are written without a gesture.
    ///
    /// Returns `false` if `id` is unknown or the parameter is read-only.
    pub fn set(&self, id: &str, actual: ParameterValue) -> bool {
        let Some(parameter) = self.writable(id) else {
            return false;
        };

        parameter.set(actual);
        if !parameter.info().flags.can_automate {
            return true;
        }
        let normalized = parameter.get_normalized();

        // Clone out of the lock so listener callbacks can re-enter the store.
        let listener = self.listener.lock().clone();
        if let Some(listener) = listener {
            let id = parameter.id();
            listener.begin_edit(id);
            listener.perform_edit(id, normalized);
            listener.end_edit(id);
        }
        true
    }

    /// Set a parameter from a normalized value without notifying the host.
    ///
    /// This is the host automation path: the host is the source of the
    /// change, so echoing it back would be redundant.
    ///
    /// Returns `false` if `id` is unknown or the parameter is read-only.
    pub fn set_normalized(&self, id: &str, normalized: ParameterValue) -> bool {
        match self.writable(id) {
            Some(parameter) => {
                parameter.set_normalized(normalized);
                true
            }
            None => false,
        }
    }

    /// Look up a parameter that accepts external edits.
    ///
    /// Read-only parameters are written by the plugin itself through
    /// [`Parameter::set`].
    fn writable(&self, id: &str) -> Option<&Parameter> {
        let parameter = self.get(id)?;
        if parameter.info().flags.is_readonly {
            log::debug!("refusing edit of read-only parameter {id:?}");
            return None;
        }
        Some(parameter)
    }

    /// Restore every parameter to its default without notifying the host.
    pub fn reset_to_defaults(&self) {
        for parameter in &self.parameters {
            parameter.reset();
        }
    }

    /// Install the listener that receives UI-originated edits.
    ///
    /// Replaces any previous listener.
    pub fn set_listener(&self, listener: Arc<dyn AutomationListener>) {
        *self.listener.lock() = Some(listener);
    }

    /// Remove the installed listener.
    pub fn clear_listener(&self) {
        *self.listener.lock() = None;
    }
}

/// Builder for [`ParameterStore`].
///
/// Declaration order becomes enumeration order.
#[derive(Default)]
pub struct ParameterStoreBuilder {
    parameters: Vec<Parameter>,
}

impl ParameterStoreBuilder {
    /// Add a fully configured parameter.
    pub fn add(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a continuous parameter with linear mapping.
    pub fn float(
        self,
        id: &'static str,
        name: &'static str,
        range: RangeInclusive<f64>,
        default: f64,
    ) -> Self {
        let kind = ParameterKind::Continuous {
            min: *range.start(),
            max: *range.end(),
            default,
        };
        self.add(Parameter::new(ParameterInfo::new(id, name), kind))
    }

    /// Add an on/off parameter.
    pub fn boolean(self, id: &'static str, name: &'static str, default: bool) -> Self {
        self.add(Parameter::new(
            ParameterInfo::new(id, name),
            ParameterKind::Boolean { default },
        ))
    }

    /// Add an integer parameter.
    pub fn integer(
        self,
        id: &'static str,
        name: &'static str,
        range: RangeInclusive<i64>,
        default: i64,
    ) -> Self {
        let kind = ParameterKind::Integer {
            min: *range.start(),
            max: *range.end(),
            default,
        };
        self.add(Parameter::new(ParameterInfo::new(id, name), kind))
    }

    /// Validate the declarations and build the store.
    ///
    /// Fails on empty or duplicate IDs, inverted ranges, and defaults
    /// outside their range.
    pub fn build(self) -> Result<ParameterStore> {
        let mut index = HashMap::with_capacity(self.parameters.len());

        for (i, parameter) in self.parameters.iter().enumerate() {
            let id = parameter.id();
            if id.is_empty() {
                return Err(ParameterError::EmptyId);
            }
            parameter.kind().validate(id)?;
            if index.insert(id, i).is_some() {
                return Err(ParameterError::DuplicateId(id.to_string()));
            }
        }

        log::debug!("Built parameter store with {} parameters", self.parameters.len());

        Ok(ParameterStore {
            parameters: self.parameters,
            index,
            listener: Mutex::new(None),
        })
    }
}
