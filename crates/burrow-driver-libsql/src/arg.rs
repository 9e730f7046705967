use crate::WireValue;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use burrow_core::{stmt::Value, Error, Result};
use serde::{Deserialize, Serialize};

/// A typed value as it travels in a pipeline request or a result row.
///
/// ```text
/// {"type": "integer", "value": "42"}
/// {"type": "blob", "base64": "AAE="}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WireArg {
    Null,

    /// Integers travel as decimal strings to survive JSON number precision.
    Integer {
        value: String,
    },

    Float {
        value: f64,
    },

    Text {
        value: String,
    },

    Blob {
        base64: String,
    },
}

impl WireArg {
    fn integer(value: impl ToString) -> WireArg {
        WireArg::Integer {
            value: value.to_string(),
        }
    }

    fn blob(bytes: &[u8]) -> WireArg {
        WireArg::Blob {
            base64: STANDARD.encode(bytes),
        }
    }
}

impl TryFrom<&Value> for WireArg {
    type Error = Error;

    fn try_from(value: &Value) -> Result<WireArg> {
        Ok(match value {
            Value::Null => WireArg::Null,
            Value::Bool(value) => WireArg::integer(if *value { "1" } else { "0" }),
            Value::I64(value) => WireArg::integer(value),
            Value::U64(value) => WireArg::integer(value),
            Value::F32(value) => WireArg::Float {
                value: f64::from(*value),
            },
            Value::F64(value) => WireArg::Float { value: *value },
            Value::String(value) => WireArg::Text {
                value: value.clone(),
            },
            Value::Timestamp(value) => WireArg::integer(value.as_second()),
            Value::Bytes(value) => WireArg::blob(value),
            Value::Vector(value) => WireArg::blob(&value.to_bytes()),
            Value::List(_) => {
                return Err(Error::invalid_argument(
                    "a list cannot be bound as a single parameter",
                ))
            }
        })
    }
}

/// Result cells decode into the loosest matching wire shape.
impl From<WireArg> for WireValue {
    fn from(arg: WireArg) -> WireValue {
        match arg {
            WireArg::Null => WireValue::Null,
            WireArg::Integer { value } => {
                if let Ok(signed) = value.parse::<i64>() {
                    WireValue::Integer(signed)
                } else if let Ok(unsigned) = value.parse::<u64>() {
                    WireValue::Unsigned(unsigned)
                } else {
                    WireValue::Text(value)
                }
            }
            WireArg::Float { value } => WireValue::Float(value),
            WireArg::Text { value } => WireValue::Text(value),
            // Left encoded; the blob decoder accepts base64 text
            WireArg::Blob { base64 } => match STANDARD.decode(&base64) {
                Ok(bytes) => WireValue::Bytes(bytes),
                Err(_) => WireValue::Text(base64),
            },
        }
    }
}
