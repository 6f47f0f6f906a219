//! Amp parameter layout.
//!
//! IDs are shared with the web UI and must not change between releases.
//! Declaration order is the order hosts list the parameters in.

use ampview::prelude::*;

/// Cabinet impulse responses selectable through `irIndex`.
pub const IR_NAMES: &[&str] = &[
    "DJENT CRUSH 4x12",
    "MESA OVERSIZED",
    "EVH 5150 III",
    "ORANGE PPC412",
    "FRAMUS DRAGON",
    "DIEZEL FRONTLOAD",
    "ENGL PRO 4x12",
    "PEAVEY 5150",
    "BOGNER UBERCAB",
    "SOLDANO 4x12",
];

/// Range shared by every knob on the amp face.
const KNOB: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Build the parameter store for one plugin instance.
pub fn amp_parameters() -> Result<ParameterStore, ParameterError> {
    let ir_max = IR_NAMES.len() as i64 - 1;

    ParameterStore::builder()
        // Front panel
        .float("inputLevel", "Input Level", KNOB, 5.0)
        .float("inputGain", "Input Gain", KNOB, 5.0)
        .float("bass", "Bass", KNOB, 5.0)
        .float("mid", "Mid", KNOB, 5.0)
        .float("treble", "Treble", KNOB, 5.0)
        .float("presence", "Presence", KNOB, 5.0)
        .float("drive", "Drive", KNOB, 5.0)
        // Voicing switches
        .boolean("punish", "Punish", false)
        .boolean("plus10db", "+10dB", false)
        .boolean("plusLow", "+LOW", false)
        // Enhancers
        .float("thicken", "Thicken", KNOB, 0.0)
        .boolean("thickenEnabled", "Thicken Enabled", false)
        .float("chugEnhance", "Chug Enhance", KNOB, 0.0)
        .boolean("chugEnabled", "Chug Enabled", false)
        .boolean("lofi", "Lo-Fi", false)
        .boolean("cleanse", "Cleanse", false)
        // Output
        .float("masterVolume", "Master Volume", KNOB, 5.0)
        .float("outputLevel", "Output Level", KNOB, 5.0)
        // Cabinet
        .add(
            Parameter::new(
                ParameterInfo::new("irIndex", "IR Selection").with_short_name("IR"),
                ParameterKind::Integer {
                    min: 0,
                    max: ir_max,
                    default: 0,
                },
            )
            .with_formatter(Formatter::Choice(IR_NAMES)),
        )
        .boolean("irBypass", "IR Bypass", false)
        .build()
}
