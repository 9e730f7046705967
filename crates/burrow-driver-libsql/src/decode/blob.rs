use crate::WireValue;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use burrow_core::stmt::Target;

pub(super) fn decode(target: Target<'_>, wire: &WireValue) -> bool {
    let Some(bytes) = read_bytes(wire) else {
        return false;
    };

    match target {
        Target::Bytes(slot) => slot.set(bytes),
        Target::String(slot) => slot.set(STANDARD.encode(bytes)),
        _ => false,
    }
}

/// Reads a binary payload, either raw or as base64 text.
pub(super) fn read_bytes(wire: &WireValue) -> Option<Vec<u8>> {
    match wire {
        WireValue::Bytes(bytes) => Some(bytes.clone()),
        WireValue::Text(text) | WireValue::Json(serde_json::Value::String(text)) => {
            STANDARD.decode(text.trim()).ok()
        }
        _ => None,
    }
}
