use crate::WireValue;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use burrow_core::stmt::Target;

pub(super) fn decode(target: Target<'_>, wire: &WireValue) -> bool {
    let Target::String(slot) = target else {
        return false;
    };

    match render(wire) {
        Some(text) => slot.set(text),
        None => false,
    }
}

/// Canonical text form of a wire value.
fn render(wire: &WireValue) -> Option<String> {
    Some(match wire {
        WireValue::Null => return None,
        WireValue::Bool(value) => value.to_string(),
        WireValue::Integer(value) => value.to_string(),
        WireValue::Unsigned(value) => value.to_string(),
        WireValue::Float(value) => value.to_string(),
        WireValue::Text(text) => text.clone(),
        WireValue::Bytes(bytes) => STANDARD.encode(bytes),
        WireValue::Json(serde_json::Value::String(text)) => text.clone(),
        WireValue::Json(node) => node.to_string(),
    })
}
