use super::Error;

/// Error when a query cannot be tied back to the mapped schema.
///
/// This occurs when the root record has no table, when a referenced field is
/// not mapped to a column, or when a join target's mapping cannot be built.
#[derive(Debug)]
pub(super) struct SchemaResolution {
    message: Box<str>,
}

impl std::error::Error for SchemaResolution {}

impl core::fmt::Display for SchemaResolution {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema resolution failed: {}", self.message)
    }
}

impl Error {
    /// Creates a schema resolution error.
    pub fn schema_resolution(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaResolution(SchemaResolution {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema resolution error.
    pub fn is_schema_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaResolution(_))
    }
}
