//! A single typed parameter with lock-free storage.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::parameter_format::Formatter;
use crate::parameter_info::{ParameterInfo, ParameterUnit};
use crate::parameter_kind::ParameterKind;
use crate::types::ParameterValue;

/// A parameter: metadata, domain and current value.
///
/// The current value is stored as the **actual** value (natural units) in
/// an `AtomicU64`, so a value written with [`set`](Self::set) reads back
/// bit-identical. The normalized view is computed on demand.
///
/// Reads and writes are lock-free and safe from any thread, including the
/// audio thread.
#[derive(Debug)]
pub struct Parameter {
    info: ParameterInfo,
    kind: ParameterKind,
    formatter: Formatter,
    value: AtomicU64,
}

impl Parameter {
    /// Create a parameter initialized to its default.
    ///
    /// The formatter and unit hint are derived from the kind; override them
    /// with [`with_formatter`](Self::with_formatter).
    pub fn new(info: ParameterInfo, kind: ParameterKind) -> Self {
        let (formatter, unit) = match kind {
            ParameterKind::Continuous { .. } => (Formatter::Float { precision: 2 }, info.unit),
            ParameterKind::Boolean { .. } => (Formatter::Boolean, ParameterUnit::Boolean),
            ParameterKind::Integer { .. } => (Formatter::Integer, info.unit),
        };
        let default = kind.clamp(kind.default_actual());

        Self {
            info: info.with_unit(unit),
            kind,
            formatter,
            value: AtomicU64::new(default.to_bits()),
        }
    }

    /// Replace the display formatter.
    ///
    /// A [`Formatter::Choice`] also switches the unit hint to
    /// [`ParameterUnit::Indexed`] so hosts render a dropdown.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        if matches!(formatter, Formatter::Choice(_)) {
            self.info.unit = ParameterUnit::Indexed;
        }
        self.formatter = formatter;
        self
    }

    /// Stable string identifier.
    #[inline]
    pub fn id(&self) -> &'static str {
        self.info.id
    }

    /// Parameter metadata.
    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    /// Parameter domain.
    pub fn kind(&self) -> &ParameterKind {
        &self.kind
    }

    /// Display formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    // === Value access ===

    /// Current actual value in natural units.
    #[inline]
    pub fn get(&self) -> ParameterValue {
        f64::from_bits(self.value.load(Ordering::Relaxed))
    }

    /// Set the actual value, clamped into the kind's domain.
    ///
    /// Returns the value that was stored.
    #[inline]
    pub fn set(&self, actual: ParameterValue) -> ParameterValue {
        let clamped = self.kind.clamp(actual);
        self.value.store(clamped.to_bits(), Ordering::Relaxed);
        clamped
    }

    /// Current value in normalized form (`0.0..=1.0`).
    #[inline]
    pub fn get_normalized(&self) -> ParameterValue {
        self.kind.normalize(self.get())
    }

    /// Set the value from normalized form. Input is clamped to `0.0..=1.0`.
    #[inline]
    pub fn set_normalized(&self, normalized: ParameterValue) -> ParameterValue {
        self.set(self.kind.denormalize(normalized))
    }

    /// Restore the default value.
    pub fn reset(&self) {
        self.set(self.kind.default_actual());
    }

    /// Current value as a boolean (`> 0.5`).
    #[inline]
    pub fn as_bool(&self) -> bool {
        self.get() > 0.5
    }

    // === Display ===

    /// Format the current value for display (without units).
    pub fn display(&self) -> String {
        self.formatter.text(self.get())
    }

    /// Parse a display string into a clamped actual value.
    pub fn parse(&self, s: &str) -> Option<ParameterValue> {
        self.formatter.parse(s).map(|v| self.kind.clamp(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knob() -> Parameter {
        Parameter::new(
            ParameterInfo::new("bass", "Bass"),
            ParameterKind::Continuous {
                min: 0.0,
                max: 10.0,
                default: 5.0,
            },
        )
    }

    #[test]
    fn test_starts_at_default() {
        let bass = knob();
        assert_eq!(bass.get(), 5.0);
        assert_eq!(bass.get_normalized(), 0.5);
        assert_eq!(bass.display(), "5.00");
    }

    #[test]
    fn test_set_reads_back_exactly() {
        let bass = knob();
        for v in [0.0, 0.1, 3.3333, 7.5, 9.999, 10.0] {
            assert_eq!(bass.set(v), v);
            assert_eq!(bass.get(), v);
        }
    }

    #[test]
    fn test_set_clamps() {
        let bass = knob();
        assert_eq!(bass.set(11.0), 10.0);
        assert_eq!(bass.get(), 10.0);
        bass.set(-1.0);
        assert_eq!(bass.get(), 0.0);
    }

    #[test]
    fn test_normalized_round_trip() {
        let bass = knob();
        bass.set_normalized(0.25);
        assert!((bass.get() - 2.5).abs() < 1e-12);
        bass.set_normalized(2.0);
        assert_eq!(bass.get(), 10.0);
    }

    #[test]
    fn test_boolean_parameter() {
        let punish = Parameter::new(
            ParameterInfo::new("punish", "Punish"),
            ParameterKind::Boolean { default: false },
        );
        assert_eq!(punish.info().unit, ParameterUnit::Boolean);
        assert!(!punish.as_bool());
        punish.set(1.0);
        assert!(punish.as_bool());
        assert_eq!(punish.display(), "On");
        assert_eq!(punish.parse("off"), Some(0.0));
    }

    #[test]
    fn test_choice_formatter_sets_indexed_unit() {
        let ir = Parameter::new(
            ParameterInfo::new("irIndex", "IR Index"),
            ParameterKind::Integer {
                min: 0,
                max: 2,
                default: 0,
            },
        )
        .with_formatter(Formatter::Choice(&["A", "B", "C"]));

        assert_eq!(ir.info().unit, ParameterUnit::Indexed);
        ir.set(1.7);
        assert_eq!(ir.get(), 2.0);
        assert_eq!(ir.display(), "C");
        assert_eq!(ir.parse("b"), Some(1.0));
    }

    #[test]
    fn test_reset() {
        let bass = knob();
        bass.set(9.0);
        bass.reset();
        assert_eq!(bass.get(), 5.0);
    }
}
