use crate::WireValue;

use burrow_core::stmt::Target;

pub(super) fn decode(target: Target<'_>, wire: &WireValue) -> bool {
    let Some(value) = read_f64(wire) else {
        return false;
    };

    match target {
        Target::F64(slot) => slot.set(value),
        Target::F32(slot) => match narrow(value) {
            Some(value) => slot.set(value),
            None => false,
        },
        _ => false,
    }
}

fn read_f64(wire: &WireValue) -> Option<f64> {
    match wire {
        WireValue::Integer(value) => Some(*value as f64),
        WireValue::Unsigned(value) => Some(*value as f64),
        WireValue::Float(value) => Some(*value),
        WireValue::Text(text) => text.trim().parse().ok(),
        WireValue::Json(serde_json::Value::Number(number)) => number.as_f64(),
        WireValue::Json(serde_json::Value::String(text)) => text.trim().parse().ok(),
        WireValue::Bool(_) | WireValue::Bytes(_) | WireValue::Json(_) | WireValue::Null => None,
    }
}

/// Narrows to `f32`, refusing overflow, non-finite input and underflow to
/// zero.
fn narrow(value: f64) -> Option<f32> {
    if !value.is_finite() {
        return None;
    }

    let narrowed = value as f32;

    if !narrowed.is_finite() || (narrowed == 0.0 && value != 0.0) {
        return None;
    }

    Some(narrowed)
}

#[cfg(test)]
mod tests {
    use super::narrow;

    #[test]
    fn narrowing_bounds() {
        assert_eq!(narrow(1.5), Some(1.5));
        assert_eq!(narrow(-0.0), Some(-0.0));
        assert_eq!(narrow(f64::from(f32::MAX)), Some(f32::MAX));
        assert_eq!(narrow(f64::MAX), None);
        assert_eq!(narrow(1e-50), None);
        assert_eq!(narrow(f64::NAN), None);
        assert_eq!(narrow(f64::INFINITY), None);
    }
}
