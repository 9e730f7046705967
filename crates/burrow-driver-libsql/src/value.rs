/// A value as it arrives from the store, before it is decoded into a field.
///
/// The wire format is loosely typed: an integer column may come back as a
/// number, as a decimal string or as a JSON node, depending on the path it
/// took through the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),

    /// A structured text node, left undecoded by the transport.
    Json(serde_json::Value),
}

impl WireValue {
    /// True for `Null` and for a JSON `null` node.
    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null | WireValue::Json(serde_json::Value::Null))
    }

    /// Name of the wire shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            WireValue::Null => "null",
            WireValue::Bool(_) => "bool",
            WireValue::Integer(_) => "integer",
            WireValue::Unsigned(_) => "unsigned",
            WireValue::Float(_) => "float",
            WireValue::Text(_) => "text",
            WireValue::Bytes(_) => "bytes",
            WireValue::Json(_) => "json",
        }
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        WireValue::Bool(value)
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        WireValue::Integer(value)
    }
}

impl From<u64> for WireValue {
    fn from(value: u64) -> Self {
        WireValue::Unsigned(value)
    }
}

impl From<f64> for WireValue {
    fn from(value: f64) -> Self {
        WireValue::Float(value)
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::Text(value.to_string())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::Text(value)
    }
}

impl From<Vec<u8>> for WireValue {
    fn from(value: Vec<u8>) -> Self {
        WireValue::Bytes(value)
    }
}

impl From<serde_json::Value> for WireValue {
    fn from(value: serde_json::Value) -> Self {
        WireValue::Json(value)
    }
}

impl<T: Into<WireValue>> From<Option<T>> for WireValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(WireValue::Null, Into::into)
    }
}
