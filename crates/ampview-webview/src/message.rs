//! Messages posted from the web page to the native side.
//!
//! Wire format is a JSON object tagged by `type`:
//!
//! | type | fields |
//! |------|--------|
//! | `parameterChange` | `paramId: string`, `value: number` |
//! | `presetLoad` | `presetName?: string` |
//! | `presetSave` | `presetName?: string`, `presetData?: any` |
//!
//! The page is not a trusted or versioned peer, so parsing reports *why* a
//! message was rejected but callers are expected to drop it, not fail.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// A parsed inbound message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    /// The user moved a control.
    #[serde(rename = "parameterChange")]
    ParameterChange {
        /// Parameter string ID.
        #[serde(rename = "paramId")]
        param_id: String,
        /// New value in the parameter's actual domain (not normalized).
        #[serde(deserialize_with = "number_or_bool")]
        value: f64,
    },
    /// Reserved: request to load a preset.
    #[serde(rename = "presetLoad")]
    PresetLoad {
        /// Preset name, if provided.
        #[serde(rename = "presetName", default)]
        preset_name: Option<String>,
    },
    /// Reserved: request to save a preset.
    #[serde(rename = "presetSave")]
    PresetSave {
        /// Preset name, if provided.
        #[serde(rename = "presetName", default)]
        preset_name: Option<String>,
        /// Opaque preset payload, if provided.
        #[serde(rename = "presetData", default)]
        preset_data: Option<Value>,
    },
}

/// Why an inbound message was rejected.
#[derive(Error, Debug)]
pub enum MessageError {
    /// Not valid JSON.
    #[error("malformed json: {0}")]
    Malformed(#[source] serde_json::Error),
    /// Valid JSON, but not an object.
    #[error("message is not an object")]
    NotAnObject,
    /// No string `type` field.
    #[error("message has no type")]
    MissingType,
    /// A `type` this version does not know.
    #[error("unknown message type: {0}")]
    UnknownType(String),
    /// Known `type`, but its fields do not match.
    #[error("invalid {kind} message: {source}")]
    InvalidFields {
        /// The message type.
        kind: String,
        /// Field-level error.
        #[source]
        source: serde_json::Error,
    },
}

const KNOWN_TYPES: &[&str] = &["parameterChange", "presetLoad", "presetSave"];

impl InboundMessage {
    /// Parse a raw message string.
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        let value: Value = serde_json::from_str(raw).map_err(MessageError::Malformed)?;
        let Some(object) = value.as_object() else {
            return Err(MessageError::NotAnObject);
        };
        let kind = match object.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => return Err(MessageError::MissingType),
        };
        if !KNOWN_TYPES.contains(&kind.as_str()) {
            return Err(MessageError::UnknownType(kind));
        }
        serde_json::from_value(value).map_err(|source| MessageError::InvalidFields { kind, source })
    }
}

/// Accept a JSON number, or a boolean as `1.0` / `0.0` for toggles.
fn number_or_bool<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Bool(bool),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Bool(true) => 1.0,
        Raw::Bool(false) => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_change() {
        let message =
            InboundMessage::parse(r#"{"type":"parameterChange","paramId":"bass","value":7.5}"#)
                .unwrap();
        assert_eq!(
            message,
            InboundMessage::ParameterChange {
                param_id: "bass".into(),
                value: 7.5
            }
        );
    }

    #[test]
    fn test_parameter_change_integer_and_bool_values() {
        let message =
            InboundMessage::parse(r#"{"type":"parameterChange","paramId":"irIndex","value":3}"#)
                .unwrap();
        assert!(matches!(message, InboundMessage::ParameterChange { value, .. } if value == 3.0));

        let message =
            InboundMessage::parse(r#"{"type":"parameterChange","paramId":"punish","value":true}"#)
                .unwrap();
        assert!(matches!(message, InboundMessage::ParameterChange { value, .. } if value == 1.0));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let message = InboundMessage::parse(
            r#"{"type":"parameterChange","paramId":"mid","value":1,"source":"knob"}"#,
        );
        assert!(message.is_ok());
    }

    #[test]
    fn test_reserved_preset_messages() {
        let load = InboundMessage::parse(r#"{"type":"presetLoad","presetName":"Djent"}"#).unwrap();
        assert_eq!(
            load,
            InboundMessage::PresetLoad {
                preset_name: Some("Djent".into())
            }
        );

        let save = InboundMessage::parse(r#"{"type":"presetSave"}"#).unwrap();
        assert_eq!(
            save,
            InboundMessage::PresetSave {
                preset_name: None,
                preset_data: None
            }
        );
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            InboundMessage::parse("not json"),
            Err(MessageError::Malformed(_))
        ));
        assert!(matches!(
            InboundMessage::parse("[1,2]"),
            Err(MessageError::NotAnObject)
        ));
        assert!(matches!(
            InboundMessage::parse(r#"{"paramId":"bass"}"#),
            Err(MessageError::MissingType)
        ));
        assert!(matches!(
            InboundMessage::parse(r#"{"type":"unknown"}"#),
            Err(MessageError::UnknownType(kind)) if kind == "unknown"
        ));
        assert!(matches!(
            InboundMessage::parse(r#"{"type":"parameterChange","paramId":"bass","value":"loud"}"#),
            Err(MessageError::InvalidFields { .. })
        ));
        assert!(matches!(
            InboundMessage::parse(r#"{"type":"parameterChange","value":1}"#),
            Err(MessageError::InvalidFields { .. })
        ));
    }
}
