//! Composite Literal Grammar
//!
//! This module documents the text representation of a PostgreSQL composite
//! (row) value and holds the character classes and escaping rules shared by
//! the parser, serializer and validator.
//!
//! # Syntax
//!
//! ```text
//! L        := "(" field ("," field)* ")"
//! field    := "" | quoted | unquoted
//! quoted   := '"' ( [^"\\] | '""' | '\\\\' )* '"'
//! unquoted := [^,()"\\\s]*
//! ```
//!
//! ## Fields
//!
//! | Text between delimiters | Field |
//! |-------------------------|-------|
//! | *(nothing)* | `NULL` |
//! | `""` | empty string |
//! | `abc` | `abc` (no unescaping) |
//! | `"a,b"` | `a,b` |
//! | `"say ""hi"""` | `say "hi"` |
//! | `"C:\\tmp"` | `C:\tmp` |
//!
//! A completely empty field means NULL, so `()` is a literal with one NULL
//! field, never a literal with no fields.
//!
//! ## Quoting
//!
//! The serializer quotes a value when it is empty or contains a comma,
//! parenthesis, double quote, backslash or white space. Inside quotes every
//! `"` and `\` is doubled.
//!
//! White space means the Unicode `White_Space` property, the class behind
//! [`char::is_whitespace`] and the validator's `\s`. It includes U+0085
//! (next line) and excludes U+FEFF (byte order mark), so a value holding only
//! a BOM is written unquoted. Both still round-trip.
//!
//! # Nesting
//!
//! A composite nested inside another is just a text field whose content is
//! itself a literal. Each level doubles the quotes and backslashes of the
//! level below:
//!
//! ```text
//! ("(""(,)"")")   ->  ("(,)")   ->  (,)   ->  NULL, NULL
//! ```
//!
//! # Limitations
//!
//! - Double quotes escaped by backslash (`\"`) are not recognised
//! - Backslashes outside of quotes are taken literally
//! - No escape other than doubled quotes and doubled backslashes is decoded
//!
//! Such input may be silently misread. Server output never contains it.
//!
//! # Reference
//!
//! <https://www.postgresql.org/docs/current/rowtypes.html#ROWTYPES-IO-SYNTAX>

pub const OPEN: u8 = b'(';
pub const CLOSE: u8 = b')';
pub const DELIMITER: u8 = b',';
pub const QUOTE: u8 = b'"';
pub const BACKSLASH: u8 = b'\\';

/// Returns `true` if `s` must be quoted to read back as the same text.
///
/// # Examples
///
/// ```rust
/// use pg_composite::grammar::needs_quoting;
///
/// assert!(needs_quoting(""));
/// assert!(needs_quoting("a b"));
/// assert!(needs_quoting("(1,2)"));
/// assert!(!needs_quoting("plain"));
/// ```
#[inline]
pub fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.chars()
            .any(|ch| matches!(ch, ',' | '(' | ')' | '"' | '\\') || ch.is_whitespace())
}

/// Writes `s` as a quoted field, doubling every `"` and `\`.
#[inline]
pub fn write_quoted(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' || ch == '\\' {
            out.push(ch);
        }
        out.push(ch);
    }
    out.push('"');
}

/// Decodes the raw content between the quotes of a quoted field.
///
/// Doubled quotes collapse first, then doubled backslashes.
pub fn unescape(raw: &str) -> String {
    if !raw.contains('"') && !raw.contains('\\') {
        return raw.to_string();
    }
    raw.replace("\"\"", "\"").replace("\\\\", "\\")
}
