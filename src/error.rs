//! Error types for composite literal parsing and serialization.
//!
//! ## Error Categories
//!
//! - **Format Errors**: Malformed literal text, with the byte offset of the offending construct
//! - **Type Mismatches**: Input that is not text at all (e.g. bytes that are not UTF-8)
//! - **Empty Input**: Strict serialization of a sequence with no fields
//! - **I/O Errors**: Writer failures
//!
//! ## Examples
//!
//! ```rust
//! use pg_composite::{parse, Error, FormatErrorKind};
//!
//! let result: Result<Vec<_>, Error> = parse("(1,2").collect();
//! let err = result.unwrap_err();
//! assert_eq!(err.format_kind(), Some(FormatErrorKind::UnexpectedEnd));
//! assert!(err.to_string().contains("byte 4"));
//! ```

use std::fmt;
use thiserror::Error;

/// The specific way a literal violated the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The literal does not start with `(`.
    MissingOpen,
    /// A quoted field has no closing `"`.
    UnterminatedQuote,
    /// A closing `"` is followed by something other than `,` or `)`.
    ///
    /// Unquoted and empty fields end at the first `,` or `)`, so this is the
    /// only place a stray character can stand where a delimiter belongs.
    ExpectedDelimiterAfterQuote,
    /// Input ended where a field or delimiter was expected.
    UnexpectedEnd,
    /// Something follows the closing `)`.
    TrailingContent,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FormatErrorKind::MissingOpen => "expected '(' at start of composite literal",
            FormatErrorKind::UnterminatedQuote => "couldn't find closing double quote",
            FormatErrorKind::ExpectedDelimiterAfterQuote => {
                "',' or ')' expected after closing double quote"
            }
            FormatErrorKind::UnexpectedEnd => "unexpected end of input",
            FormatErrorKind::TrailingContent => "end of input expected after ')'",
        };
        f.write_str(msg)
    }
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed composite literal
    #[error("Invalid composite literal at byte {position}: {kind}")]
    Format {
        position: usize,
        kind: FormatErrorKind,
    },

    /// Input was not text
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Strict serialization of zero fields
    #[error("expected at least one attribute")]
    EmptyInput,

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a format error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_composite::{Error, FormatErrorKind};
    ///
    /// let err = Error::format(3, FormatErrorKind::TrailingContent);
    /// assert!(err.to_string().contains("byte 3"));
    /// ```
    pub fn format(position: usize, kind: FormatErrorKind) -> Self {
        Error::Format { position, kind }
    }

    /// Creates a type mismatch error for non-text input.
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this is a grammar violation.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }

    /// Returns the grammar violation kind, if this is a format error.
    #[must_use]
    pub fn format_kind(&self) -> Option<FormatErrorKind> {
        match self {
            Error::Format { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the byte offset of a format error.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Format { position, .. } => Some(*position),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = Error::format(5, FormatErrorKind::UnterminatedQuote);
        assert_eq!(
            err.to_string(),
            "Invalid composite literal at byte 5: couldn't find closing double quote"
        );
        assert!(err.is_format());
        assert_eq!(err.position(), Some(5));
    }

    #[test]
    fn test_non_format_errors() {
        assert_eq!(Error::EmptyInput.format_kind(), None);
        assert!(!Error::io("broken pipe").is_format());
        assert!(Error::type_mismatch("UTF-8 text", "invalid byte")
            .to_string()
            .contains("expected UTF-8 text"));
    }

    #[test]
    fn test_every_error_has_a_source() {
        // Each variant is produced by exactly one entry point.
        fn origin(err: &Error) -> &'static str {
            match err {
                Error::Format { .. } => "parse",
                Error::TypeMismatch { .. } => "from_slice",
                Error::EmptyInput => "serialize",
                Error::Io(_) => "serialize_to_writer",
            }
        }

        let format_err = crate::parse("(").find_map(|item| item.err()).unwrap();
        let mismatch = crate::from_slice(&[0xff]).unwrap_err();
        let empty = crate::serialize(Vec::<crate::Field>::new()).unwrap_err();

        assert_eq!(origin(&format_err), "parse");
        assert_eq!(origin(&mismatch), "from_slice");
        assert_eq!(origin(&empty), "serialize");
        assert_eq!(origin(&Error::io("closed")), "serialize_to_writer");
    }
}
