//! Parameter value formatting and parsing.
//!
//! [`Formatter`] converts actual parameter values to display strings and
//! parses user input back. Units are kept separate from the text: hosts and
//! UIs append [`ParameterInfo::units`](crate::ParameterInfo::units) themselves.
//!
//! ```ignore
//! use ampview_core::Formatter;
//!
//! assert_eq!(Formatter::Float { precision: 1 }.text(7.25), "7.2");
//! assert_eq!(Formatter::Boolean.text(1.0), "On");
//! assert_eq!(Formatter::Choice(&["Direct", "FX Loop"]).text(1.0), "FX Loop");
//! ```

/// Parameter value formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formatter {
    /// Generic float with configurable precision (e.g., "1.23").
    Float {
        /// Number of decimal places.
        precision: usize,
    },

    /// Whole number (e.g., "7").
    Integer,

    /// Display: "On", "Off"
    Boolean,

    /// Named choices indexed by the integer value.
    ///
    /// Values outside the list fall back to the bare index.
    Choice(&'static [&'static str]),
}

impl Formatter {
    /// Convert an actual value to a display string (without unit).
    pub fn text(&self, value: f64) -> String {
        match self {
            Formatter::Float { precision } => {
                format!("{:.prec$}", value, prec = *precision)
            }

            Formatter::Integer => format!("{}", value.round() as i64),

            Formatter::Boolean => {
                if value > 0.5 {
                    "On".to_string()
                } else {
                    "Off".to_string()
                }
            }

            Formatter::Choice(names) => {
                let index = value.round();
                if index >= 0.0 {
                    if let Some(name) = names.get(index as usize) {
                        return (*name).to_string();
                    }
                }
                format!("{}", index as i64)
            }
        }
    }

    /// Parse a display string to an actual value.
    ///
    /// Returns `None` if the string cannot be parsed.
    pub fn parse(&self, s: &str) -> Option<f64> {
        let s = s.trim();

        match self {
            Formatter::Float { .. } => s.parse().ok(),

            Formatter::Integer => s.parse::<f64>().ok().map(f64::round),

            Formatter::Boolean => match s.to_lowercase().as_str() {
                "on" | "true" | "yes" | "1" | "enabled" => Some(1.0),
                "off" | "false" | "no" | "0" | "disabled" => Some(0.0),
                _ => None,
            },

            Formatter::Choice(names) => names
                .iter()
                .position(|name| name.eq_ignore_ascii_case(s))
                .map(|index| index as f64)
                .or_else(|| s.parse::<f64>().ok().map(f64::round)),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::Float { precision: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTING: &[&str] = &["Direct", "FX Loop", "Live"];

    #[test]
    fn test_float_precision() {
        let formatter = Formatter::Float { precision: 1 };
        assert_eq!(formatter.text(5.0), "5.0");
        assert_eq!(formatter.parse(" 7.5 "), Some(7.5));
        assert_eq!(formatter.parse("loud"), None);
    }

    #[test]
    fn test_integer() {
        assert_eq!(Formatter::Integer.text(3.6), "4");
        assert_eq!(Formatter::Integer.parse("2.2"), Some(2.0));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(Formatter::Boolean.text(1.0), "On");
        assert_eq!(Formatter::Boolean.text(0.0), "Off");
        assert_eq!(Formatter::Boolean.parse("ON"), Some(1.0));
        assert_eq!(Formatter::Boolean.parse("disabled"), Some(0.0));
        assert_eq!(Formatter::Boolean.parse("maybe"), None);
    }

    #[test]
    fn test_choice() {
        let formatter = Formatter::Choice(ROUTING);
        assert_eq!(formatter.text(1.0), "FX Loop");
        assert_eq!(formatter.text(7.0), "7");
        assert_eq!(formatter.parse("live"), Some(2.0));
        assert_eq!(formatter.parse("1"), Some(1.0));
        assert_eq!(formatter.parse("Cab"), None);
    }
}
