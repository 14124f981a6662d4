//! # pg_composite
//!
//! Parser, serializer and validator for the text form of PostgreSQL composite
//! (row) values, such as the output of `SELECT ROW(1, NULL, 'a b')`:
//!
//! ```text
//! (1,,"a b")
//! ```
//!
//! Every field is either SQL `NULL` or an opaque string. Converting field
//! text into integers, timestamps and so on is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_composite::{parse, serialize, validate, Field};
//!
//! let fields: Vec<Field> = parse(r#"(1,,"a b","")"#)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(
//!     fields,
//!     vec![
//!         Field::from("1"),
//!         Field::Null,
//!         Field::from("a b"),
//!         Field::from(""),
//!     ]
//! );
//!
//! assert_eq!(serialize(&fields).unwrap(), r#"(1,,"a b","")"#);
//! assert!(validate(r#"(1,,"a b","")"#));
//! ```
//!
//! ## NULL versus empty string
//!
//! An empty unquoted field is `NULL`; an empty string is written `""`. As a
//! consequence `()` holds one `NULL` field, and a sequence with no fields has
//! no text form at all: [`serialize`] rejects it with [`Error::EmptyInput`].
//! [`serialize_with_options`] with [`EmptyPolicy::Null`] returns `None`
//! instead.
//!
//! ## Nested composites
//!
//! A composite inside a composite is a text field holding another literal.
//! Decode it with a second parse:
//!
//! ```rust
//! use pg_composite::{Field, Record};
//!
//! let outer: Record = r#"("(1,2)")"#.parse().unwrap();
//! let inner: Record = outer[0].as_str().unwrap().parse().unwrap();
//! assert_eq!(inner, Record::from(vec![Field::from("1"), Field::from("2")]));
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Malformed input is reported as an error, never a panic
//! - Parsing is lazy; errors carry the byte offset of the offending construct
//!
//! ## Format Specification
//!
//! See the [`grammar`] module and
//! <https://www.postgresql.org/docs/current/rowtypes.html#ROWTYPES-IO-SYNTAX>.

pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod options;
pub mod record;
pub mod ser;
pub mod validate;
pub mod value;

pub use de::Parser;
pub use error::{Error, FormatErrorKind, Result};
pub use options::{CompositeOptions, EmptyPolicy};
pub use record::Record;
pub use ser::Serializer;
pub use validate::validate;
pub use value::Field;

use std::io;

/// Parses a composite literal into a lazy sequence of fields.
///
/// # Examples
///
/// ```rust
/// use pg_composite::{parse, Field};
///
/// let fields: Vec<Field> = parse("()").collect::<Result<_, _>>().unwrap();
/// assert_eq!(fields, vec![Field::Null]);
/// ```
///
/// # Errors
///
/// Each item is an error if iteration reaches malformed input. See
/// [`FormatErrorKind`] for the possible causes.
#[must_use = "the parser is lazy and does nothing unless iterated"]
pub fn parse(text: &str) -> Parser<'_> {
    Parser::new(text)
}

/// Parses a composite that may itself be SQL `NULL`.
///
/// `None` yields no fields at all.
///
/// # Examples
///
/// ```rust
/// use pg_composite::parse_nullable;
///
/// assert_eq!(parse_nullable(None).count(), 0);
/// assert_eq!(parse_nullable(Some("(a,b)")).count(), 2);
/// ```
#[must_use = "the parser is lazy and does nothing unless iterated"]
pub fn parse_nullable(text: Option<&str>) -> Parser<'_> {
    text.map_or_else(Parser::empty, Parser::new)
}

/// Parses a composite literal from raw bytes.
///
/// # Examples
///
/// ```rust
/// use pg_composite::from_slice;
///
/// assert_eq!(from_slice(b"(1,2)").unwrap().count(), 2);
/// assert!(from_slice(&[b'(', 0xff, b')']).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if the bytes are not UTF-8 text. The check
/// happens before any scanning.
pub fn from_slice(bytes: &[u8]) -> Result<Parser<'_>> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        tracing::debug!(valid_up_to = e.valid_up_to(), "composite literal is not UTF-8");
        Error::type_mismatch("UTF-8 text", &e.to_string())
    })?;
    Ok(Parser::new(text))
}

/// Serializes fields into a composite literal.
///
/// Accepts anything that iterates over values convertible to [`Field`]:
/// `Field`s, `&Field`s, strings or `Option`s of strings.
///
/// # Examples
///
/// ```rust
/// use pg_composite::serialize;
///
/// assert_eq!(serialize([Some("1"), None, Some("3")]).unwrap(), "(1,,3)");
/// assert_eq!(serialize(["\"", "\\"]).unwrap(), r#"("""","\\")"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `fields` yields nothing.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize<I>(fields: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Field>,
{
    serialize_with_options(fields, CompositeOptions::default())?.ok_or(Error::EmptyInput)
}

/// Serializes fields into a composite literal with custom options.
///
/// `Ok(None)` is the NULL sentinel, produced only for an empty sequence under
/// [`EmptyPolicy::Null`].
///
/// # Examples
///
/// ```rust
/// use pg_composite::{serialize_with_options, CompositeOptions};
///
/// let options = CompositeOptions::legacy();
/// assert_eq!(serialize_with_options(Vec::<&str>::new(), options.clone()).unwrap(), None);
/// assert_eq!(
///     serialize_with_options(["a"], options).unwrap(),
///     Some("(a)".to_string())
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `fields` yields nothing under [`EmptyPolicy::Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_with_options<I>(fields: I, options: CompositeOptions) -> Result<Option<String>>
where
    I: IntoIterator,
    I::Item: Into<Field>,
{
    let mut serializer = Serializer::new(options);
    serializer.extend(fields);
    serializer.finish()
}

/// Serializes fields into a writer.
///
/// # Examples
///
/// ```rust
/// use pg_composite::serialize_to_writer;
///
/// let mut buffer = Vec::new();
/// serialize_to_writer(&mut buffer, ["x", "y z"]).unwrap();
/// assert_eq!(buffer, br#"(x,"y z")"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `fields` yields nothing, or [`Error::Io`]
/// if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_to_writer<W, I>(mut writer: W, fields: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator,
    I::Item: Into<Field>,
{
    let literal = serialize(fields)?;
    writer
        .write_all(literal.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
