//! Structural validation of composite literals.
//!
//! [`validate`] answers whether a string has the shape of a canonical
//! composite literal without decoding any field. It matches the whole string
//! against one compiled pattern built from the field shapes in
//! [`grammar`](crate::grammar).
//!
//! The validator and the [`Parser`](crate::Parser) are independent acceptance
//! mechanisms and disagree on some malformed input. The validator rejects
//! unquoted white space and lone backslashes inside quotes, both of which the
//! parser reads leniently:
//!
//! ```rust
//! use pg_composite::{parse, validate};
//!
//! assert!(!validate("(a b)"));
//! assert!(parse("(a b)").all(|field| field.is_ok()));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

const QUOTED_FIELD: &str = r#""(?:[^"\\]|""|\\\\)*""#;
const UNQUOTED_FIELD: &str = r#"[^,()"\\\s]*"#;

static LITERAL: Lazy<Regex> = Lazy::new(|| {
    let field = format!("(?:{QUOTED_FIELD}|{UNQUOTED_FIELD})");
    Regex::new(&format!(r"\A\({field}(?:,{field})*\)\z"))
        .expect("composite literal pattern is valid")
});

/// Returns `true` if `text` is structurally a composite literal.
///
/// # Examples
///
/// ```rust
/// use pg_composite::validate;
///
/// assert!(validate("()"));
/// assert!(validate(r#"(1,,"a,b","")"#));
/// assert!(!validate("(1,2"));
/// assert!(!validate("(1)x"));
/// ```
#[must_use]
pub fn validate(text: &str) -> bool {
    LITERAL.is_match(text)
}
