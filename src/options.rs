//! Configuration options for composite literal serialization.
//!
//! - [`CompositeOptions`]: Main configuration struct
//! - [`EmptyPolicy`]: What serializing a sequence with no fields produces
//!
//! ## Examples
//!
//! ```rust
//! use pg_composite::{serialize_with_options, CompositeOptions, EmptyPolicy, Field};
//!
//! let options = CompositeOptions::new().with_empty_policy(EmptyPolicy::Null);
//! let literal = serialize_with_options(Vec::<Field>::new(), options).unwrap();
//! assert_eq!(literal, None);
//! ```

use serde::{Deserialize, Serialize};

/// Outcome of serializing a sequence that yields zero fields.
///
/// A zero-field literal cannot be written unambiguously: `()` reads back as a
/// single NULL field.
///
/// - **Error**: Default, fail with [`Error::EmptyInput`](crate::Error::EmptyInput)
/// - **Null**: Return no literal at all (a SQL NULL), for callers that bind the
///   result straight into a nullable column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPolicy {
    #[default]
    Error,
    Null,
}

/// Configuration options for composite literal serialization.
///
/// # Examples
///
/// ```rust
/// use pg_composite::{CompositeOptions, EmptyPolicy};
///
/// let options = CompositeOptions::new();
/// assert_eq!(options.empty, EmptyPolicy::Error);
///
/// let options = CompositeOptions::legacy();
/// assert_eq!(options.empty, EmptyPolicy::Null);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeOptions {
    #[serde(default)]
    pub empty: EmptyPolicy,
}

impl CompositeOptions {
    /// Creates default options (strict empty policy).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that return a NULL sentinel instead of failing on empty input.
    #[must_use]
    pub fn legacy() -> Self {
        CompositeOptions {
            empty: EmptyPolicy::Null,
        }
    }

    /// Sets the policy for sequences with no fields.
    #[must_use]
    pub fn with_empty_policy(mut self, empty: EmptyPolicy) -> Self {
        self.empty = empty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = CompositeOptions::legacy().with_empty_policy(EmptyPolicy::Error);
        assert_eq!(options, CompositeOptions::new());
    }
}
