//! Parameter metadata types.
//!
//! - [`ParameterInfo`] - identity and display metadata (id, name, units, flags)
//! - [`ParameterFlags`] - edit flags honored by the store (automation, read-only)
//! - [`ParameterUnit`] - unit hint telling hosts which control to render

/// Unit hint for host-rendered controls.
///
/// The discriminants match Apple's `AudioUnitParameterUnit` values so a
/// format wrapper can forward them without a lookup table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ParameterUnit {
    /// Generic parameter (default slider)
    #[default]
    Generic = 0,
    /// Indexed parameter (dropdown menu)
    Indexed = 1,
    /// Boolean parameter (checkbox)
    Boolean = 2,
    /// Percentage (0-100%)
    Percent = 3,
    /// Frequency in Hertz
    Hertz = 8,
    /// Level in decibels
    Decibels = 13,
    /// Time in milliseconds
    Milliseconds = 24,
}

/// Flags controlling parameter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterFlags {
    /// Store edits are reported to the automation listener.
    pub can_automate: bool,
    /// Store edits are refused; the plugin writes the value itself.
    pub is_readonly: bool,
}

impl Default for ParameterFlags {
    fn default() -> Self {
        Self {
            can_automate: true,
            is_readonly: false,
        }
    }
}

/// Metadata describing a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Stable string identifier, unique within a store (e.g. `"bass"`).
    ///
    /// This is the key used on the wire between the editor and the web UI.
    pub id: &'static str,
    /// Full parameter name (e.g., "Master Volume").
    pub name: &'static str,
    /// Short parameter name for constrained UIs (e.g., "Vol").
    pub short_name: &'static str,
    /// Unit label (e.g., "dB", "%", "Hz").
    pub units: &'static str,
    /// Unit type hint for hosts.
    pub unit: ParameterUnit,
    /// Behavioral flags.
    pub flags: ParameterFlags,
}

impl ParameterInfo {
    /// Create metadata with default flags and no units.
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            short_name: name,
            units: "",
            unit: ParameterUnit::Generic,
            flags: ParameterFlags {
                can_automate: true,
                is_readonly: false,
            },
        }
    }

    /// Set the short name.
    pub const fn with_short_name(mut self, short_name: &'static str) -> Self {
        self.short_name = short_name;
        self
    }

    /// Set the unit label.
    pub const fn with_units(mut self, units: &'static str) -> Self {
        self.units = units;
        self
    }

    /// Set the unit type hint.
    pub const fn with_unit(mut self, unit: ParameterUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set parameter flags.
    pub const fn with_flags(mut self, flags: ParameterFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mark the parameter as read-only.
    pub const fn readonly(mut self) -> Self {
        self.flags.is_readonly = true;
        self
    }

    /// Mark the parameter as not automatable.
    pub const fn non_automatable(mut self) -> Self {
        self.flags.can_automate = false;
        self
    }
}
