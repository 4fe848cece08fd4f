//! Enum Formatting APIs
//!
//! `formatEnum` takes the host's enum object directly (for example
//! `ts.SyntaxKind`), so the definition always matches the TypeScript version
//! the host is running. The per-enum helpers use the built-in definitions.

use js_sys::{Array, Object};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use scanview_enums::EnumDefinition;
use scanview_enums::known::{self, ModifierFlags, NodeFlags, TokenFlags};

// ============================================================================
// Host Enum Objects
// ============================================================================

/// Format a value using a JavaScript enum object.
///
/// Only own entries whose value is an integral number are members; reverse
/// mappings and helper functions on the object are ignored. `value` defaults
/// to 0 and `isFlags` to false.
#[wasm_bindgen(js_name = formatEnum)]
pub fn format_enum(value: Option<f64>, enum_object: &JsValue, is_flags: Option<bool>) -> String {
    let definition = definition_from_object(enum_object);
    scanview_enums::format_enum(
        number_to_i64(value.unwrap_or(0.0)),
        &definition,
        is_flags.unwrap_or(false),
    )
}

/// Format a value using an enum definition serialized as a JSON object.
///
/// Malformed JSON is treated as an empty definition.
#[wasm_bindgen(js_name = formatEnumJson)]
pub fn format_enum_json(value: f64, enum_json: &str, is_flags: bool) -> String {
    let definition = EnumDefinition::from_json_str(enum_json).unwrap_or_default();
    scanview_enums::format_enum(number_to_i64(value), &definition, is_flags)
}

fn definition_from_object(enum_object: &JsValue) -> EnumDefinition {
    let Some(object) = enum_object.dyn_ref::<Object>() else {
        return EnumDefinition::new();
    };

    Object::entries(object)
        .iter()
        .filter_map(|entry| {
            let entry: Array = entry.unchecked_into();
            let name = entry.get(0).as_string()?;
            let value = entry.get(1).as_f64()?;
            integral(value).map(|value| (name, value))
        })
        .collect()
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

/// JavaScript numbers are doubles; fractions truncate and out-of-range
/// values saturate.
fn number_to_i64(value: f64) -> i64 {
    value.trunc() as i64
}

// ============================================================================
// Built-in Enums
// ============================================================================

/// Get the name of a SyntaxKind token kind
#[wasm_bindgen(js_name = formatSyntaxKind)]
pub fn format_syntax_kind(kind: u16) -> String {
    known::format_syntax_kind(kind)
}

#[wasm_bindgen(js_name = formatTokenFlags)]
pub fn format_token_flags(flags: u32) -> String {
    known::format_token_flags(TokenFlags::from_bits_retain(flags))
}

#[wasm_bindgen(js_name = formatModifierFlags)]
pub fn format_modifier_flags(flags: u32) -> String {
    known::format_modifier_flags(ModifierFlags::from_bits_retain(flags))
}

#[wasm_bindgen(js_name = formatNodeFlags)]
pub fn format_node_flags(flags: u32) -> String {
    known::format_node_flags(NodeFlags::from_bits_retain(flags))
}
