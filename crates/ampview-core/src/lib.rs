//! Core abstractions for Ampview audio plugins.
//!
//! This crate holds everything that is independent of the editor surface:
//!
//! - [`ParameterKind`], [`Parameter`] and [`ParameterStore`] - typed, bounded
//!   parameters with lock-free atomic storage, shared between the audio
//!   thread and the UI thread
//! - [`AutomationListener`] - the hook through which UI-originated edits
//!   become visible to the host
//! - [`Processor`] and [`StereoBuffer`] - the audio engine boundary
//! - [`Config`] and [`GuiConstraints`] - plugin metadata and editor sizing
//! - [`EmbeddedAssets`] - web assets bundled into the plugin binary

pub mod assets;
pub mod config;
pub mod error;
pub mod gui;
pub mod parameter;
pub mod parameter_format;
pub mod parameter_info;
pub mod parameter_kind;
pub mod parameter_store;
pub mod processor;
pub mod types;

pub use assets::{EmbeddedAsset, EmbeddedAssets};
pub use config::{Category, Config, Subcategory};
pub use error::{ParameterError, Result};
pub use gui::{GuiConstraints, GuiDelegate};
pub use parameter::Parameter;
pub use parameter_format::Formatter;
pub use parameter_info::{ParameterFlags, ParameterInfo, ParameterUnit};
pub use parameter_kind::ParameterKind;
pub use parameter_store::{AutomationListener, ParameterStore, ParameterStoreBuilder};
pub use processor::{PassThrough, ProcessContext, Processor, StereoBuffer};
pub use types::{ParameterValue, Size};
