use crate::WireValue;

use burrow_core::stmt::{Slot, Target};

/// Largest float magnitude that still converts to `i64` exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

pub(super) fn decode(target: Target<'_>, wire: &WireValue) -> bool {
    let Some(value) = read_i64(wire) else {
        return false;
    };

    match target {
        Target::Bool(slot) => slot.set(value != 0),
        Target::I8(slot) => narrow(slot, value),
        Target::I16(slot) => narrow(slot, value),
        Target::I32(slot) => narrow(slot, value),
        Target::I64(slot) => slot.set(value),
        Target::U8(slot) => narrow(slot, value),
        Target::U16(slot) => narrow(slot, value),
        Target::U32(slot) => narrow(slot, value),
        Target::U64(slot) => narrow(slot, value),
        Target::Timestamp(slot) => match jiff::Timestamp::from_second(value) {
            Ok(timestamp) => slot.set(timestamp),
            Err(_) => false,
        },
        Target::F32(_)
        | Target::F64(_)
        | Target::String(_)
        | Target::Bytes(_)
        | Target::Vector(_) => false,
    }
}

fn narrow<T: TryFrom<i64>>(slot: Slot<'_, T>, value: i64) -> bool {
    match T::try_from(value) {
        Ok(value) => slot.set(value),
        Err(_) => false,
    }
}

/// Normalizes any integral wire representation to `i64`.
fn read_i64(wire: &WireValue) -> Option<i64> {
    match wire {
        WireValue::Integer(value) => Some(*value),
        WireValue::Unsigned(value) => i64::try_from(*value).ok(),
        WireValue::Float(value) => float_to_i64(*value),
        WireValue::Text(text) => text.trim().parse().ok(),
        WireValue::Json(serde_json::Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_u64().and_then(|value| i64::try_from(value).ok()))
            .or_else(|| number.as_f64().and_then(float_to_i64)),
        WireValue::Json(serde_json::Value::String(text)) => text.trim().parse().ok(),
        // Booleans are not integers on the wire
        WireValue::Bool(_) | WireValue::Bytes(_) | WireValue::Json(_) | WireValue::Null => None,
    }
}

fn float_to_i64(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}
