//! JavaScript snippets injected into the page.
//!
//! Every native→web call is guarded by an existence check on the receiving
//! handler, so injecting before the page has registered its handlers is a
//! no-op on the web side instead of a script error.

use serde_json::Value;

/// Default name of the page-side handler object (`window.__AMPS__`).
pub const DEFAULT_NAMESPACE: &str = "__AMPS__";

/// Name of the native message channel registered with the WebView.
pub const MESSAGE_CHANNEL: &str = "ampview";

/// Fixed decimal places for values on the wire.
pub const VALUE_PRECISION: usize = 6;

/// Whether `namespace` can be used as `window.<namespace>`.
pub fn is_valid_namespace(namespace: &str) -> bool {
    let mut chars = namespace.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// `if (window.ns && window.ns.handler) { window.ns.handler(args); }`
fn guarded_call(namespace: &str, handler: &str, args: &str) -> String {
    format!(
        "if (window.{namespace} && window.{namespace}.{handler}) {{ \
         window.{namespace}.{handler}({args}); }}"
    )
}

/// Script delivering one parameter update:
/// `onParameterUpdate("<id>", <value>)`.
///
/// The ID is JSON-escaped; the value is the actual (denormalized) value
/// with [`VALUE_PRECISION`] decimal places.
pub fn parameter_update(namespace: &str, param_id: &str, value: f64) -> String {
    let id = serde_json::to_string(param_id).unwrap_or_else(|_| "\"\"".into());
    let args = format!("{id}, {}", format_value(value));
    guarded_call(namespace, "onParameterUpdate", &args)
}

/// Script delivering preset data: `onPresetLoad(<json>)`.
pub fn preset_load(namespace: &str, preset: &Value) -> String {
    let json = serde_json::to_string(preset).unwrap_or_else(|_| "null".into());
    guarded_call(namespace, "onPresetLoad", &json)
}

/// Script installed at document start.
///
/// Creates the handler object if the page has not, and adds
/// `postMessage(msg)`, which stringifies `msg` and forwards it through
/// whichever native channel the platform WebView exposes.
pub fn bootstrap(namespace: &str) -> String {
    format!(
        "(function () {{\n\
         \x20 var ns = window.{namespace} = window.{namespace} || {{}};\n\
         \x20 ns.postMessage = function (msg) {{\n\
         \x20   var text = typeof msg === 'string' ? msg : JSON.stringify(msg);\n\
         \x20   var wk = window.webkit && window.webkit.messageHandlers;\n\
         \x20   if (wk && wk.{MESSAGE_CHANNEL}) {{ wk.{MESSAGE_CHANNEL}.postMessage(text); }}\n\
         \x20   else if (window.chrome && window.chrome.webview) {{ window.chrome.webview.postMessage(text); }}\n\
         \x20   else if (window.ipc) {{ window.ipc.postMessage(text); }}\n\
         \x20 }};\n\
         }})();"
    )
}

/// Format a value for the wire with fixed precision.
pub fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.prec$}", prec = VALUE_PRECISION)
    } else {
        // Not representable as a JS number literal.
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_update_script() {
        assert_eq!(
            parameter_update("__AMPS__", "bass", 7.5),
            "if (window.__AMPS__ && window.__AMPS__.onParameterUpdate) { \
             window.__AMPS__.onParameterUpdate(\"bass\", 7.500000); }"
        );
    }

    #[test]
    fn test_param_id_is_escaped() {
        let script = parameter_update("__AMPS__", "a\"); alert(1); (\"", 1.0);
        assert!(script.contains(r#"onParameterUpdate("a\"); alert(1); (\"", 1.000000)"#));
    }

    #[test]
    fn test_preset_load_script() {
        let preset = serde_json::json!({ "name": "Djent", "bass": 6 });
        let script = preset_load("Amp", &preset);
        assert!(script.starts_with("if (window.Amp && window.Amp.onPresetLoad) {"));
        assert!(script.contains(r#"window.Amp.onPresetLoad({"bass":6,"name":"Djent"});"#));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0.000000");
        assert_eq!(format_value(-2.5), "-2.500000");
        assert_eq!(format_value(1.0 / 3.0), "0.333333");
        assert_eq!(format_value(f64::NAN), "0");
        // Round trip through the wire stays within display precision.
        let parsed: f64 = format_value(7.123_456_7).parse().unwrap();
        assert!((parsed - 7.123_456_7).abs() < 1e-6);
    }

    #[test]
    fn test_bootstrap_installs_post_message() {
        let script = bootstrap("__AMPS__");
        assert!(script.contains("window.__AMPS__ = window.__AMPS__ || {}"));
        assert!(script.contains("ns.postMessage = function (msg)"));
        assert!(script.contains("wk.ampview.postMessage(text)"));
    }

    #[test]
    fn test_namespace_validation() {
        assert!(is_valid_namespace("__AMPS__"));
        assert!(is_valid_namespace("JUCE"));
        assert!(is_valid_namespace("$amp2"));
        assert!(!is_valid_namespace(""));
        assert!(!is_valid_namespace("2amp"));
        assert!(!is_valid_namespace("amp.bridge"));
        assert!(!is_valid_namespace("a b"));
    }
}
