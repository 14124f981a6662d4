//! Composite literal serialization.
//!
//! This module provides the [`Serializer`], which writes fields into the
//! canonical text form: values are quoted only when they would otherwise be
//! misread.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use pg_composite::{serialize, Field};
//!
//! let literal = serialize([Field::from("1"), Field::Null, Field::from("a b")]).unwrap();
//! assert_eq!(literal, r#"(1,,"a b")"#);
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use pg_composite::{CompositeOptions, Field, Serializer};
//!
//! let mut serializer = Serializer::new(CompositeOptions::new());
//! serializer.serialize_field(&Field::from("x"));
//! serializer.serialize_field(&Field::from(""));
//!
//! assert_eq!(serializer.finish().unwrap(), Some(r#"(x,"")"#.to_string()));
//! ```

use crate::options::EmptyPolicy;
use crate::{grammar, CompositeOptions, Error, Field, Result};

/// The composite literal serializer.
///
/// Fields are appended one at a time with [`Serializer::serialize_field`];
/// [`Serializer::finish`] closes the literal and applies the empty policy.
pub struct Serializer {
    output: String,
    options: CompositeOptions,
    count: usize,
}

impl Serializer {
    pub fn new(options: CompositeOptions) -> Self {
        let mut output = String::with_capacity(64);
        output.push('(');
        Serializer {
            output,
            options,
            count: 0,
        }
    }

    /// Number of fields written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends one field.
    pub fn serialize_field(&mut self, field: &Field) {
        if self.count > 0 {
            self.output.push(',');
        }
        self.count += 1;

        match field {
            Field::Null => {}
            Field::Text(s) if grammar::needs_quoting(s) => {
                grammar::write_quoted(&mut self.output, s)
            }
            Field::Text(s) => self.output.push_str(s),
        }
    }

    /// Closes the literal.
    ///
    /// With no fields written, returns [`Error::EmptyInput`] or `Ok(None)`
    /// depending on [`CompositeOptions::empty`].
    pub fn finish(mut self) -> Result<Option<String>> {
        if self.count == 0 {
            tracing::debug!(policy = ?self.options.empty, "serializing empty field sequence");
            return match self.options.empty {
                EmptyPolicy::Error => Err(Error::EmptyInput),
                EmptyPolicy::Null => Ok(None),
            };
        }
        self.output.push(')');
        Ok(Some(self.output))
    }
}

impl<F: Into<Field>> Extend<F> for Serializer {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for field in iter {
            self.serialize_field(&field.into());
        }
    }
}
