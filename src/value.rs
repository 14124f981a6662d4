//! Field values of a composite literal.
//!
//! Every attribute of a composite literal is either SQL `NULL` or an opaque
//! text value. [`Field`] keeps the two apart: `Field::Text(String::new())` is
//! written as `""` while `Field::Null` is written as nothing at all.
//!
//! ## Creating Fields
//!
//! ```rust
//! use pg_composite::Field;
//!
//! let null = Field::Null;
//! let text = Field::from("hello");
//! let maybe: Field = Some("x").into();
//! let none: Field = Option::<String>::None.into();
//!
//! assert!(null.is_null());
//! assert_eq!(text.as_str(), Some("hello"));
//! assert_eq!(maybe, Field::from("x"));
//! assert_eq!(none, Field::Null);
//! ```

use crate::de::Parser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One attribute of a composite literal.
///
/// # Examples
///
/// ```rust
/// use pg_composite::{parse, Field};
///
/// let fields: Vec<Field> = parse(r#"(,"")"#).collect::<Result<_, _>>().unwrap();
/// assert_eq!(fields, vec![Field::Null, Field::Text(String::new())]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Null,
    Text(String),
}

impl Field {
    /// Returns `true` if this field is SQL `NULL`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Returns the text of this field, or `None` for `NULL`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::Null => None,
            Field::Text(s) => Some(s),
        }
    }

    /// Converts this field into an `Option<String>`.
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            Field::Null => None,
            Field::Text(s) => Some(s),
        }
    }

    /// Parses the text of this field as a nested composite literal.
    ///
    /// Returns `None` for `NULL`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_composite::{parse, Field};
    ///
    /// let outer: Vec<Field> = parse(r#"("(1,2)")"#).collect::<Result<_, _>>().unwrap();
    /// let inner: Vec<Field> = outer[0]
    ///     .parse_nested()
    ///     .unwrap()
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(inner, vec![Field::from("1"), Field::from("2")]);
    /// ```
    #[must_use]
    pub fn parse_nested(&self) -> Option<Parser<'_>> {
        self.as_str().map(Parser::new)
    }
}

impl fmt::Display for Field {
    /// Formats the field content; `NULL` renders as `NULL`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => f.write_str("NULL"),
            Field::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<&String> for Field {
    fn from(s: &String) -> Self {
        Field::Text(s.clone())
    }
}

impl From<&Field> for Field {
    fn from(field: &Field) -> Self {
        field.clone()
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Field::Null, Into::into)
    }
}

impl From<Field> for Option<String> {
    fn from(field: Field) -> Self {
        field.into_option()
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Null => serializer.serialize_none(),
            Field::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or null")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Field::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Field::Text(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Field::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Field::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(FieldVisitor)
            }
        }

        deserializer.deserialize_option(FieldVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_not_null() {
        let empty = Field::from("");
        assert!(!empty.is_null());
        assert_ne!(empty, Field::Null);
        assert_eq!(empty.as_str(), Some(""));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Field::from(Some(String::from("a"))), Field::from("a"));
        assert_eq!(Field::from(None::<&str>), Field::Null);
        assert_eq!(Option::<String>::from(Field::from("b")), Some("b".to_string()));
        assert_eq!(Field::Null.into_option(), None);
    }

    #[test]
    fn test_parse_nested_null() {
        assert!(Field::Null.parse_nested().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Field::Null.to_string(), "NULL");
        assert_eq!(Field::from("x y").to_string(), "x y");
    }
}
