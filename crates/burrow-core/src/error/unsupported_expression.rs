use super::Error;

/// Error when a query contains an expression the compiler cannot translate.
///
/// This occurs when:
/// - A method call or function has no SQL counterpart (`to_upper`, `len`, ...)
/// - An operator is outside the supported set (modulo, for instance)
/// - A construct appears in a position that does not accept it (ordering by
///   an arithmetic expression, a pattern match on a non-field receiver)
///
/// The message names the offending construct. These errors are never
/// approximated: the whole query fails.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    construct: Box<str>,
}

impl std::error::Error for UnsupportedExpression {}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported expression: {}", self.construct)
    }
}

impl Error {
    /// Creates an unsupported expression error naming `construct`.
    pub fn unsupported_expression(construct: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression {
                construct: construct.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedExpression(_))
    }
}
