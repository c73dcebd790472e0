//! Error types for address enumeration.

use thiserror::Error;

/// Error returned by enumeration operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumerationError {
    /// The initial address literal is not a valid dotted quad.
    ///
    /// Raised by [`Sequential::new`](crate::Sequential::new) and
    /// [`Staggered::new`](crate::Staggered::new) before any address is
    /// produced: a malformed literal is a caller-input defect and is
    /// surfaced immediately rather than lazily.
    #[error("invalid IPv4 address literal `{literal}`: {message}")]
    Format {
        /// The literal as supplied by the caller.
        literal: String,
        /// Description of what is wrong with it.
        message: String,
    },

    /// The enumeration observed its cancellation token.
    ///
    /// Yielded in-stream exactly once, after which the iterator ends. This
    /// is distinct from natural exhaustion of the address space, which ends
    /// the iterator without an item.
    #[error("enumeration cancelled")]
    Cancelled,
}

impl EnumerationError {
    /// Creates a `Format` error for the given literal.
    pub(crate) fn format(literal: impl Into<String>, message: impl Into<String>) -> Self {
        EnumerationError::Format {
            literal: literal.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!(
                "{}",
                EnumerationError::format("256.0.0.0", "component `256` is out of range")
            ),
            "invalid IPv4 address literal `256.0.0.0`: component `256` is out of range"
                .to_owned(),
        );
        assert_eq!(
            format!("{}", EnumerationError::Cancelled),
            "enumeration cancelled".to_owned(),
        );
    }
}
